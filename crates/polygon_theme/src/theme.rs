//! Immutable theme snapshots
//!
//! A [`Theme`] is validated once when it is built and never mutated. Every
//! settings change produces a new `Theme` through one of the `with_*`
//! methods; the token sets it references (colors, spacing, typography) are
//! shared through `Arc`, so deriving a theme is cheap and readers holding an
//! older snapshot keep seeing exactly what they had.

use crate::error::{LookupError, ValidationError};
use crate::settings::ThemeSettings;
use crate::tokens::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

/// Default primary family
pub const DEFAULT_PRIMARY_COLOR: &str = "blue";

/// Family name that always refers to the theme's own primary color
pub const PRIMARY_ALIAS: &str = "primary";

const FALLBACK_BACKGROUND: &str = "#ffffff";
const FALLBACK_TEXT: &str = "#000000";

/// Light or dark mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// Toggle between light and dark
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl Display for ColorScheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown color scheme {other:?}")),
        }
    }
}

/// A validated, immutable theme snapshot
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    scheme: ColorScheme,
    primary_color: String,
    primary_shade: usize,
    radius_overrides: BTreeMap<String, i32>,
    radius: RadiusScale,
    opacity: OpacityTokens,
    colors: Arc<ColorSystem>,
    spacing: Arc<SpacingScale>,
    typography: Arc<TypographyScale>,
}

impl Theme {
    /// Built-in tokens with the given scheme
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme,
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            primary_shade: DEFAULT_SHADE,
            radius_overrides: BTreeMap::new(),
            radius: RadiusScale::default(),
            opacity: OpacityTokens::default(),
            colors: Arc::new(ColorSystem::default()),
            spacing: Arc::new(SpacingScale::default()),
            typography: Arc::new(TypographyScale::default()),
        }
    }

    pub fn light() -> Self {
        Self::new(ColorScheme::Light)
    }

    pub fn dark() -> Self {
        Self::new(ColorScheme::Dark)
    }

    pub fn builder() -> ThemeBuilder {
        ThemeBuilder::default()
    }

    /// Build a theme from a settings record using the built-in tokens.
    pub fn from_settings(settings: &ThemeSettings) -> Result<Self, ValidationError> {
        Self::builder().settings(settings).build()
    }

    /// Derive a theme from a settings record, keeping this theme's token sets.
    pub fn with_settings(&self, settings: &ThemeSettings) -> Result<Self, ValidationError> {
        self.to_builder().settings(settings).build()
    }

    pub fn with_scheme(&self, scheme: ColorScheme) -> Self {
        Self {
            scheme,
            ..self.clone()
        }
    }

    pub fn with_primary(
        &self,
        color: impl Into<String>,
        shade: usize,
    ) -> Result<Self, ValidationError> {
        self.to_builder().primary_color(color).primary_shade(shade).build()
    }

    pub fn with_primary_shade(&self, shade: usize) -> Result<Self, ValidationError> {
        self.to_builder().primary_shade(shade).build()
    }

    pub fn with_radius_override(
        &self,
        key: impl Into<String>,
        value: i32,
    ) -> Result<Self, ValidationError> {
        self.to_builder().radius_override(key, value).build()
    }

    /// The settings record that reproduces this theme.
    pub fn to_settings(&self) -> ThemeSettings {
        ThemeSettings {
            color_scheme: self.scheme,
            primary_color: self.primary_color.clone(),
            primary_shade: self.primary_shade,
            radius: self.radius_overrides.clone(),
        }
    }

    fn to_builder(&self) -> ThemeBuilder {
        ThemeBuilder {
            scheme: self.scheme,
            primary_color: self.primary_color.clone(),
            primary_shade: self.primary_shade,
            radius_overrides: self.radius_overrides.clone(),
            opacity: self.opacity.clone(),
            colors: Some(Arc::clone(&self.colors)),
            spacing: Some(Arc::clone(&self.spacing)),
            typography: Some(Arc::clone(&self.typography)),
        }
    }

    /// Re-check the theme invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.radius.validate()?;
        if self.primary_shade >= SHADE_COUNT {
            return Err(ValidationError::InvalidShade(self.primary_shade));
        }
        if !self.colors.contains(&self.primary_color) {
            return Err(ValidationError::UnknownPrimaryColor(
                self.primary_color.clone(),
            ));
        }
        Ok(())
    }

    // ========== Accessors ==========

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn primary_color(&self) -> &str {
        &self.primary_color
    }

    pub fn primary_shade(&self) -> usize {
        self.primary_shade
    }

    pub fn colors(&self) -> &ColorSystem {
        &self.colors
    }

    pub fn spacing(&self) -> &SpacingScale {
        &self.spacing
    }

    pub fn typography(&self) -> &TypographyScale {
        &self.typography
    }

    pub fn radius(&self) -> &RadiusScale {
        &self.radius
    }

    pub fn opacity(&self) -> &OpacityTokens {
        &self.opacity
    }

    // ========== Color Access ==========

    /// Look up a shade for this theme.
    ///
    /// `"primary"` means the theme's primary family. In the dark scheme the
    /// neutral family is inverted (`shade` becomes `9 - shade`); every other
    /// family is unaffected by the scheme.
    pub fn get_color(&self, family: &str, shade: usize) -> Result<&str, LookupError> {
        let (ramp, index) = self.physical_shade(family, shade)?;
        ramp.shade(index).ok_or(LookupError::InvalidShadeIndex(shade))
    }

    pub fn get_primary_color(&self) -> Result<&str, LookupError> {
        self.get_color(&self.primary_color, self.primary_shade)
    }

    /// Step `steps` shades toward the scheme's contrast direction: darker in
    /// the light scheme, lighter in the dark scheme. Clamped to the ramp.
    pub fn shift_toward_contrast(
        &self,
        family: &str,
        shade: usize,
        steps: usize,
    ) -> Result<&str, LookupError> {
        let (ramp, index) = self.physical_shade(family, shade)?;
        let shifted = match self.scheme {
            ColorScheme::Light => (index + steps).min(SHADE_COUNT - 1),
            ColorScheme::Dark => index.saturating_sub(steps),
        };
        ramp.shade(shifted)
            .ok_or(LookupError::InvalidShadeIndex(shifted))
    }

    /// Resolve a family and a logical shade to the ramp and the index that is
    /// actually read.
    fn physical_shade(
        &self,
        family: &str,
        shade: usize,
    ) -> Result<(&ColorFamily, usize), LookupError> {
        let family = if family == PRIMARY_ALIAS {
            self.primary_color.as_str()
        } else {
            family
        };
        let ramp = self
            .colors
            .family(family)
            .ok_or_else(|| LookupError::UnknownFamily(family.to_string()))?;
        if shade >= SHADE_COUNT {
            return Err(LookupError::InvalidShadeIndex(shade));
        }
        let index = if self.scheme.is_dark() && ramp.name() == NEUTRAL_FAMILY {
            SHADE_COUNT - 1 - shade
        } else {
            shade
        };
        Ok((ramp, index))
    }

    /// Base surface color for the scheme (`gray.0`, inverted in dark mode)
    pub fn default_background(&self) -> &str {
        self.get_color(NEUTRAL_FAMILY, 0)
            .unwrap_or(FALLBACK_BACKGROUND)
    }

    /// Base text color for the scheme (`gray.9`, inverted in dark mode)
    pub fn default_text(&self) -> &str {
        self.get_color(NEUTRAL_FAMILY, SHADE_COUNT - 1)
            .unwrap_or(FALLBACK_TEXT)
    }

    /// Dimmed text used for disabled content
    pub fn muted_text(&self) -> &str {
        self.get_color(NEUTRAL_FAMILY, 5).unwrap_or(FALLBACK_TEXT)
    }

    /// Border color for inputs and cards
    pub fn default_border(&self) -> &str {
        self.get_color(NEUTRAL_FAMILY, 3).unwrap_or(FALLBACK_TEXT)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Collects theme options and validates them in [`ThemeBuilder::build`].
#[derive(Clone, Debug)]
pub struct ThemeBuilder {
    scheme: ColorScheme,
    primary_color: String,
    primary_shade: usize,
    radius_overrides: BTreeMap<String, i32>,
    opacity: OpacityTokens,
    colors: Option<Arc<ColorSystem>>,
    spacing: Option<Arc<SpacingScale>>,
    typography: Option<Arc<TypographyScale>>,
}

impl Default for ThemeBuilder {
    fn default() -> Self {
        Self {
            scheme: ColorScheme::Light,
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            primary_shade: DEFAULT_SHADE,
            radius_overrides: BTreeMap::new(),
            opacity: OpacityTokens::default(),
            colors: None,
            spacing: None,
            typography: None,
        }
    }
}

impl ThemeBuilder {
    pub fn scheme(mut self, scheme: ColorScheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn primary_color(mut self, color: impl Into<String>) -> Self {
        self.primary_color = color.into();
        self
    }

    pub fn primary_shade(mut self, shade: usize) -> Self {
        self.primary_shade = shade;
        self
    }

    pub fn radius_override(mut self, key: impl Into<String>, value: i32) -> Self {
        self.radius_overrides.insert(key.into(), value);
        self
    }

    pub fn opacity(mut self, opacity: OpacityTokens) -> Self {
        self.opacity = opacity;
        self
    }

    /// Apply every field of a settings record. Radius overrides replace any
    /// set earlier.
    pub fn settings(mut self, settings: &ThemeSettings) -> Self {
        self.scheme = settings.color_scheme;
        self.primary_color = settings.primary_color.clone();
        self.primary_shade = settings.primary_shade;
        self.radius_overrides = settings.radius.clone();
        self
    }

    pub fn colors(mut self, colors: Arc<ColorSystem>) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn spacing(mut self, spacing: Arc<SpacingScale>) -> Self {
        self.spacing = Some(spacing);
        self
    }

    pub fn typography(mut self, typography: Arc<TypographyScale>) -> Self {
        self.typography = Some(typography);
        self
    }

    pub fn build(self) -> Result<Theme, ValidationError> {
        let radius = RadiusScale::with_overrides(&self.radius_overrides)?;
        let theme = Theme {
            scheme: self.scheme,
            primary_color: self.primary_color,
            primary_shade: self.primary_shade,
            radius_overrides: self.radius_overrides,
            radius,
            opacity: self.opacity,
            colors: self.colors.unwrap_or_default(),
            spacing: self.spacing.unwrap_or_default(),
            typography: self.typography.unwrap_or_default(),
        };
        theme.validate()?;

        tracing::debug!(
            scheme = %theme.scheme,
            primary = %theme.primary_color,
            shade = theme.primary_shade,
            "built theme"
        );
        Ok(theme)
    }
}
