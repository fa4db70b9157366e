//! Color families and the color system
//!
//! A [`ColorSystem`] maps family names to ten-step shade ramps
//! (index 0 = lightest, 9 = darkest) plus a set of semantic aliases.
//! Systems are validated once when built and are immutable afterwards.

use crate::error::{LookupError, ValidationError};
use polygon_core::is_hex_color;
use std::collections::{BTreeMap, BTreeSet};

/// Number of shades in every family ramp
pub const SHADE_COUNT: usize = 10;

/// Shade used when a color is named without one (`"blue"` means `"blue.6"`)
pub const DEFAULT_SHADE: usize = 6;

/// The neutral family every system must carry
pub const NEUTRAL_FAMILY: &str = "gray";

/// Minimum number of families in a color system
pub const MIN_FAMILIES: usize = 15;

/// A named, ordered ramp of `#rrggbb` shades.
///
/// Always holds exactly [`SHADE_COUNT`] well-formed shades.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorFamily {
    name: String,
    shades: Vec<String>,
}

impl ColorFamily {
    /// Create a family, rejecting ramps of the wrong length or with
    /// malformed colors.
    pub fn new<I, S>(name: impl Into<String>, shades: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let shades: Vec<String> = shades.into_iter().map(Into::into).collect();
        if shades.len() != SHADE_COUNT {
            return Err(ValidationError::ShadeCountError {
                family: name,
                found: shades.len(),
            });
        }
        if let Some((shade, value)) = shades.iter().enumerate().find(|(_, v)| !is_hex_color(v)) {
            return Err(ValidationError::MalformedColor {
                family: name,
                shade,
                value: value.clone(),
            });
        }
        Ok(Self { name, shades })
    }

    fn from_palette(name: &str, shades: &[&str; SHADE_COUNT]) -> Self {
        Self {
            name: name.to_string(),
            shades: shades.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shades(&self) -> &[String] {
        &self.shades
    }

    pub fn shade(&self, index: usize) -> Option<&str> {
        self.shades.get(index).map(String::as_str)
    }

    pub fn lightest(&self) -> &str {
        &self.shades[0]
    }

    pub fn darkest(&self) -> &str {
        &self.shades[SHADE_COUNT - 1]
    }
}

/// Registered color families plus semantic aliases
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorSystem {
    families: BTreeMap<String, ColorFamily>,
    aliases: BTreeMap<String, String>,
}

impl ColorSystem {
    /// Start an empty builder
    pub fn builder() -> ColorSystemBuilder {
        ColorSystemBuilder::default()
    }

    /// Start a builder seeded with the built-in palette and aliases
    pub fn builder_with_defaults() -> ColorSystemBuilder {
        let defaults = Self::default();
        ColorSystemBuilder {
            families: defaults.families.into_values().collect(),
            aliases: defaults.aliases.into_iter().collect(),
        }
    }

    /// Look up a shade. Aliases are followed.
    pub fn get_color(&self, family: &str, shade: usize) -> Result<&str, LookupError> {
        let ramp = self
            .family(family)
            .ok_or_else(|| LookupError::UnknownFamily(family.to_string()))?;
        ramp.shade(shade)
            .ok_or(LookupError::InvalidShadeIndex(shade))
    }

    /// Resolve a family by name or alias
    pub fn family(&self, name: &str) -> Option<&ColorFamily> {
        self.families.get(name).or_else(|| {
            self.aliases
                .get(name)
                .and_then(|target| self.families.get(target))
        })
    }

    /// Canonical family name for a name or alias
    pub fn canonical_name<'a>(&'a self, name: &'a str) -> Option<&'a str> {
        self.family(name).map(ColorFamily::name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.family(name).is_some()
    }

    /// Registered family names, sorted
    pub fn list_families(&self) -> Vec<&str> {
        self.families.keys().map(String::as_str).collect()
    }

    /// Families in name order
    pub fn families(&self) -> impl Iterator<Item = &ColorFamily> {
        self.families.values()
    }

    /// `(alias, target)` pairs in alias order
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(a, t)| (a.as_str(), t.as_str()))
    }

    /// Re-check every invariant of the system.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_families(self.families.values())?;
        check_aliases(&self.aliases, |name| self.families.contains_key(name))
    }
}

fn check_families<'a>(
    families: impl IntoIterator<Item = &'a ColorFamily>,
) -> Result<(), ValidationError> {
    let mut seen = BTreeSet::new();
    for family in families {
        if !seen.insert(family.name()) {
            return Err(ValidationError::DuplicateFamily(family.name().to_string()));
        }
    }
    if seen.len() < MIN_FAMILIES {
        return Err(ValidationError::TooFewFamilies {
            found: seen.len(),
            min: MIN_FAMILIES,
        });
    }
    if !seen.contains(NEUTRAL_FAMILY) {
        return Err(ValidationError::MissingNeutralFamily(NEUTRAL_FAMILY));
    }
    Ok(())
}

fn check_aliases(
    aliases: &BTreeMap<String, String>,
    exists: impl Fn(&str) -> bool,
) -> Result<(), ValidationError> {
    for (alias, target) in aliases {
        if !exists(target) {
            return Err(ValidationError::DanglingAlias {
                alias: alias.clone(),
                target: target.clone(),
            });
        }
    }
    Ok(())
}

/// Collects families and aliases, then validates them as a whole.
#[derive(Clone, Debug, Default)]
pub struct ColorSystemBuilder {
    families: Vec<ColorFamily>,
    aliases: Vec<(String, String)>,
}

impl ColorSystemBuilder {
    pub fn family(mut self, family: ColorFamily) -> Self {
        self.families.push(family);
        self
    }

    /// Replace an already-added family of the same name, or add it.
    pub fn replace_family(mut self, family: ColorFamily) -> Self {
        self.families.retain(|f| f.name() != family.name());
        self.families.push(family);
        self
    }

    pub fn alias(mut self, alias: impl Into<String>, target: impl Into<String>) -> Self {
        let alias = alias.into();
        self.aliases.retain(|(a, _)| *a != alias);
        self.aliases.push((alias, target.into()));
        self
    }

    /// Validate and freeze. Nothing is returned on failure.
    pub fn build(self) -> Result<ColorSystem, ValidationError> {
        check_families(&self.families)?;
        let families: BTreeMap<String, ColorFamily> = self
            .families
            .into_iter()
            .map(|f| (f.name.clone(), f))
            .collect();
        let aliases: BTreeMap<String, String> = self.aliases.into_iter().collect();
        check_aliases(&aliases, |name| families.contains_key(name))?;

        tracing::debug!(
            families = families.len(),
            aliases = aliases.len(),
            "built color system"
        );
        Ok(ColorSystem { families, aliases })
    }
}

/// Built-in palette (open-color ramps plus a slate neutral)
const PALETTE: [(&str, [&str; SHADE_COUNT]); 15] = [
    ("dark", ["#c9c9c9", "#b8b8b8", "#828282", "#696969", "#424242", "#3b3b3b", "#2e2e2e", "#242424", "#1f1f1f", "#141414"]),
    ("gray", ["#f8f9fa", "#f1f3f5", "#e9ecef", "#dee2e6", "#ced4da", "#adb5bd", "#868e96", "#495057", "#343a40", "#212529"]),
    ("red", ["#fff5f5", "#ffe3e3", "#ffc9c9", "#ffa8a8", "#ff8787", "#ff6b6b", "#fa5252", "#f03e3e", "#e03131", "#c92a2a"]),
    ("pink", ["#fff0f6", "#ffdeeb", "#fcc2d7", "#faa2c1", "#f783ac", "#f06595", "#e64980", "#d6336c", "#c2255c", "#a61e4d"]),
    ("grape", ["#f8f0fc", "#f3d9fa", "#eebefa", "#e599f7", "#da77f2", "#cc5de8", "#be4bdb", "#ae3ec9", "#9c36b5", "#862e9c"]),
    ("violet", ["#f3f0ff", "#e5dbff", "#d0bfff", "#b197fc", "#9775fa", "#845ef7", "#7950f2", "#7048e8", "#6741d9", "#5f3dc4"]),
    ("indigo", ["#edf2ff", "#dbe4ff", "#bac8ff", "#91a7ff", "#748ffc", "#5c7cfa", "#4c6ef5", "#4263eb", "#3b5bdb", "#364fc7"]),
    ("blue", ["#e7f5ff", "#d0ebff", "#a5d8ff", "#74c0fc", "#4dabf7", "#339af0", "#228be6", "#1c7ed6", "#1971c2", "#1864ab"]),
    ("cyan", ["#e3fafc", "#c5f6fa", "#99e9f2", "#66d9e8", "#3bc9db", "#22b8cf", "#15aabf", "#1098ad", "#0c8599", "#0b7285"]),
    ("teal", ["#e6fcf5", "#c3fae8", "#96f2d7", "#63e6be", "#38d9a9", "#20c997", "#12b886", "#0ca678", "#099268", "#087f5b"]),
    ("green", ["#ebfbee", "#d3f9d8", "#b2f2bb", "#8ce99a", "#69db7c", "#51cf66", "#40c057", "#37b24d", "#2f9e44", "#2b8a3e"]),
    ("lime", ["#f4fce3", "#e9fac8", "#d8f5a2", "#c0eb75", "#a9e34b", "#94d82d", "#82c91e", "#74b816", "#66a80f", "#5c940d"]),
    ("yellow", ["#fff9db", "#fff3bf", "#ffec99", "#ffe066", "#ffd43b", "#fcc419", "#fab005", "#f59f00", "#f08c00", "#e67700"]),
    ("orange", ["#fff4e6", "#ffe8cc", "#ffd8a8", "#ffc078", "#ffa94d", "#ff922b", "#fd7e14", "#f76707", "#e8590c", "#d9480f"]),
    ("slate", ["#f8fafc", "#f1f5f9", "#e2e8f0", "#cbd5e1", "#94a3b8", "#64748b", "#475569", "#334155", "#1e293b", "#0f172a"]),
];

const ALIASES: [(&str, &str); 7] = [
    ("primary", "blue"),
    ("secondary", "violet"),
    ("success", "green"),
    ("warning", "yellow"),
    ("error", "red"),
    ("info", "cyan"),
    ("neutral", "gray"),
];

impl Default for ColorSystem {
    fn default() -> Self {
        Self {
            families: PALETTE
                .iter()
                .map(|(name, shades)| (name.to_string(), ColorFamily::from_palette(name, shades)))
                .collect(),
            aliases: ALIASES
                .iter()
                .map(|(a, t)| (a.to_string(), t.to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_is_valid() {
        let system = ColorSystem::default();
        system.validate().unwrap();
        assert_eq!(system.list_families().len(), 15);
        assert!(system.contains(NEUTRAL_FAMILY));
    }

    #[test]
    fn list_families_is_sorted() {
        let system = ColorSystem::default();
        let names = system.list_families();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert_eq!(names.first(), Some(&"blue"));
    }

    #[test]
    fn every_shade_is_hex() {
        let system = ColorSystem::default();
        for name in system.list_families() {
            for shade in 0..SHADE_COUNT {
                let hex = system.get_color(name, shade).unwrap();
                assert!(is_hex_color(hex), "{name}.{shade} = {hex}");
            }
        }
    }

    #[test]
    fn aliases_resolve_to_families() {
        let system = ColorSystem::default();
        assert_eq!(
            system.get_color("primary", 6).unwrap(),
            system.get_color("blue", 6).unwrap()
        );
        assert_eq!(system.canonical_name("neutral"), Some("gray"));
    }

    #[test]
    fn lookup_errors() {
        let system = ColorSystem::default();
        assert_eq!(
            system.get_color("chartreuse", 1),
            Err(LookupError::UnknownFamily("chartreuse".into()))
        );
        assert_eq!(
            system.get_color("accent", 1),
            Err(LookupError::UnknownFamily("accent".into()))
        );
        assert_eq!(
            system.get_color("blue", 10),
            Err(LookupError::InvalidShadeIndex(10))
        );
    }

    #[test]
    fn family_rejects_malformed_shade() {
        let mut shades = PALETTE[7].1.map(str::to_string);
        shades[3] = "#74c0f".into();
        assert_eq!(
            ColorFamily::new("blue", shades),
            Err(ValidationError::MalformedColor {
                family: "blue".into(),
                shade: 3,
                value: "#74c0f".into(),
            })
        );
    }

    #[test]
    fn family_rejects_short_ramp() {
        assert_eq!(
            ColorFamily::new("red", PALETTE[2].1[..9].iter().copied()),
            Err(ValidationError::ShadeCountError {
                family: "red".into(),
                found: 9,
            })
        );
        assert!(ColorFamily::new("red", Vec::<String>::new()).is_err());

        let red = ColorFamily::new("red", PALETTE[2].1).unwrap();
        assert_eq!(red.lightest(), "#fff5f5");
        assert_eq!(red.darkest(), "#c92a2a");
    }

    #[test]
    fn builder_rejects_duplicates() {
        let err = ColorSystem::builder_with_defaults()
            .family(ColorFamily::new("red", PALETTE[2].1).unwrap())
            .build()
            .unwrap_err();
        assert_eq!(err, ValidationError::DuplicateFamily("red".into()));
    }

    #[test]
    fn builder_requires_neutral_and_enough_families() {
        let err = ColorSystem::builder()
            .family(ColorFamily::new("blue", PALETTE[7].1).unwrap())
            .build()
            .unwrap_err();
        assert_eq!(err, ValidationError::TooFewFamilies { found: 1, min: 15 });

        let mut builder = ColorSystem::builder();
        for (name, shades) in PALETTE.iter().filter(|(n, _)| *n != "gray") {
            builder = builder.family(ColorFamily::new(*name, *shades).unwrap());
        }
        let err = builder
            .family(ColorFamily::new("sand", PALETTE[1].1).unwrap())
            .build()
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingNeutralFamily("gray"));
    }

    #[test]
    fn builder_rejects_dangling_alias() {
        let err = ColorSystem::builder_with_defaults()
            .alias("brand", "magenta")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::DanglingAlias {
                alias: "brand".into(),
                target: "magenta".into(),
            }
        );
    }
}
