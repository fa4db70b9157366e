//! PolyBook command implementations
//!
//! Each command renders its report to a `String`; `main` prints it.

use crate::catalog::{self, CatalogEntry, CATALOG};
use crate::store::JsonFileStore;
use anyhow::{bail, Context, Result};
use polygon_layout::ResponsiveValue;
use polygon_style::generate_theme_qss;
use polygon_theme::{
    contrast_ratio, ColorScheme, DesignTokenValidator, SettingsStore, Theme, ThemeHolder,
    ThemeSettings, SHADE_COUNT,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// File name of the global sheet written by `export`
pub const THEME_SHEET: &str = "theme.qss";

/// The theme every command works on: saved settings if a file is given,
/// then the scheme override.
pub fn load_theme(settings: Option<&Path>, scheme: Option<ColorScheme>) -> Result<Arc<Theme>> {
    let holder = match settings {
        Some(path) => {
            let holder =
                ThemeHolder::with_store(Theme::default(), Box::new(JsonFileStore::new(path)));
            let restored = holder
                .restore()
                .with_context(|| format!("Invalid theme settings in {}", path.display()))?;
            if !restored {
                bail!(
                    "No theme settings at {}. Run `polybook settings init {}` to create one.",
                    path.display(),
                    path.display()
                );
            }
            holder
        }
        None => ThemeHolder::default(),
    };

    let theme = holder.current();
    Ok(match scheme {
        Some(scheme) if scheme != theme.scheme() => Arc::new(theme.with_scheme(scheme)),
        _ => theme,
    })
}

/// `families`: family names and aliases, or every shade with `swatches`.
pub fn families(theme: &Theme, swatches: bool) -> String {
    let mut out = String::new();
    let colors = theme.colors();
    let width = colors
        .list_families()
        .iter()
        .map(|name| name.len())
        .max()
        .unwrap_or(0);

    for family in colors.list_families() {
        if !swatches {
            out.push_str(&format!("{family}\n"));
            continue;
        }
        out.push_str(&format!("{family:<width$}"));
        for shade in 0..SHADE_COUNT {
            if let Ok(hex) = theme.get_color(family, shade) {
                out.push_str(&format!("  {shade}:{hex}"));
            }
        }
        out.push('\n');
    }

    if !swatches {
        out.push('\n');
        for (alias, target) in colors.aliases() {
            out.push_str(&format!("{alias} -> {target}\n"));
        }
    }
    out
}

/// `color`: one shade and its contrast against the scheme background.
pub fn color(theme: &Theme, family: &str, shade: usize) -> Result<String> {
    let hex = theme
        .get_color(family, shade)
        .with_context(|| format!("Cannot look up {family}.{shade}"))?;
    let background = theme.default_background();
    let ratio = contrast_ratio(hex, background)
        .with_context(|| format!("Cannot parse {hex} or {background}"))?;
    Ok(format!(
        "{family}.{shade} {hex} ({} scheme)\ncontrast on {background}: {ratio:.2}:1\n",
        theme.scheme()
    ))
}

/// Result of the `contrast` command
pub struct ContrastReport {
    pub text: String,
    pub issues: usize,
}

/// `contrast`: every required pair below the WCAG AA threshold.
pub fn contrast(theme: &Theme) -> ContrastReport {
    let validator = DesignTokenValidator::new(theme.colors());
    let total = validator.required_pairs().count();

    let mut text = String::new();
    let mut issues = 0;
    for issue in validator.validate_color_contrasts() {
        issues += 1;
        text.push_str(&format!(
            "{:<10} {} on {}: {:.2}:1 (needs {:.1}:1)\n",
            issue.pair.token,
            issue.pair.foreground,
            issue.pair.background,
            issue.ratio,
            issue.threshold
        ));
    }
    text.push_str(&format!("{issues} of {total} pairs below threshold\n"));
    ContrastReport { text, issues }
}

fn describe_value(value: &ResponsiveValue<polygon_style::PropValue>) -> String {
    match value {
        ResponsiveValue::Literal(value) => value.to_string(),
        ResponsiveValue::Responsive(map) => map
            .iter()
            .map(|(bp, value)| format!("{bp}={value}"))
            .collect::<Vec<_>>()
            .join(" "),
    }
}

/// `components`: the catalog with default props.
pub fn components() -> Result<String> {
    let mut out = String::new();
    for entry in CATALOG {
        out.push_str(&format!("{} ({}): {}\n", entry.id, entry.name, entry.description));
        for (name, value) in entry.props()? {
            out.push_str(&format!("    {name}: {}\n", describe_value(&value)));
        }
    }
    Ok(out)
}

/// `theme`: the global stylesheet.
pub fn theme_sheet(theme: &Theme) -> String {
    generate_theme_qss(theme)
}

/// `export`: write the global sheet plus one sheet per component into `out`.
pub fn export(theme: &Theme, component: Option<&str>, width: u32, out: &Path) -> Result<Vec<PathBuf>> {
    let entries: Vec<&CatalogEntry> = match component {
        Some(id) => match catalog::find(id) {
            Some(entry) => vec![entry],
            None => {
                let known: Vec<_> = CATALOG.iter().map(|e| e.id).collect();
                bail!("Unknown component {id:?}; expected one of {}", known.join(", "));
            }
        },
        None => CATALOG.iter().collect(),
    };

    fs::create_dir_all(out).with_context(|| format!("Failed to create {}", out.display()))?;

    let mut written = Vec::with_capacity(entries.len() + 1);
    let theme_path = out.join(THEME_SHEET);
    fs::write(&theme_path, generate_theme_qss(theme))
        .with_context(|| format!("Failed to write {}", theme_path.display()))?;
    written.push(theme_path);

    for entry in entries {
        let qss = entry.component(width)?.style(theme)?;
        let path = out.join(format!("{}.qss", entry.id));
        fs::write(&path, qss).with_context(|| format!("Failed to write {}", path.display()))?;
        written.push(path);
    }

    tracing::info!(files = written.len(), width, dir = %out.display(), "exported stylesheets");
    Ok(written)
}

/// `settings init`: write the default settings record.
pub fn settings_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    JsonFileStore::new(path)
        .save(&ThemeSettings::default())
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// `settings check`: validate a settings record by building a theme from it.
pub fn settings_check(path: &Path) -> Result<String> {
    let settings = JsonFileStore::new(path)
        .load()
        .with_context(|| format!("Invalid theme settings in {}", path.display()))?
        .with_context(|| format!("{} does not exist", path.display()))?;
    let theme = Theme::from_settings(&settings)
        .with_context(|| format!("Invalid theme settings in {}", path.display()))?;
    let primary = theme.get_primary_color()?;
    Ok(format!(
        "{}: ok ({} scheme, primary {}.{} {primary})\n",
        path.display(),
        theme.scheme(),
        theme.primary_color(),
        theme.primary_shade()
    ))
}
