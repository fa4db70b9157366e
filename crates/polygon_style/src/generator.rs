//! Stylesheet generation
//!
//! Output is Qt stylesheet text. Declarations are written in the order of
//! [`PROPERTIES`](crate::property::PROPERTIES), never in the order props were
//! supplied, so equal inputs always produce byte-identical text.

use crate::error::StyleError;
use crate::property::{lookup, Property};
use crate::symbolic::{resolve_value, ColorValue, PropValue, Resolved};
use polygon_core::Color;
use polygon_theme::{ColorScheme, OpacityToken, SizeKey, Theme, NEUTRAL_FAMILY};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Outline width of the `:focus` state
pub const FOCUS_OUTLINE_PX: i32 = 2;

/// Interaction states appended after the base block, in emission order
pub const STATES: [&str; 4] = [":hover", ":pressed", ":disabled", ":focus"];

const INDENT: &str = "    ";

/// One `selector { ... }` block
#[derive(Clone, Debug, PartialEq)]
struct RuleBlock {
    selector: String,
    declarations: Vec<(&'static str, String)>,
}

impl RuleBlock {
    fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    fn decl(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.declarations.push((property, value.into()));
        self
    }
}

impl Display for RuleBlock {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} {{", self.selector)?;
        for (property, value) in &self.declarations {
            writeln!(f, "{INDENT}{property}: {value};")?;
        }
        writeln!(f, "}}")
    }
}

fn render(header: &[String], blocks: &[RuleBlock]) -> String {
    let mut out = String::new();
    for line in header {
        out.push_str("/* ");
        out.push_str(line);
        out.push_str(" */\n");
    }
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 || !header.is_empty() {
            out.push('\n');
        }
        out.push_str(&block.to_string());
    }
    out
}

/// Resolve props into canonical order, dropping unknown keys.
///
/// When a property is given under both its short key and its stylesheet
/// name, the first in key order wins.
fn resolve_props(
    props: &BTreeMap<String, PropValue>,
    theme: &Theme,
) -> BTreeMap<usize, (&'static Property, Resolved)> {
    let mut resolved = BTreeMap::new();
    for (name, value) in props {
        let Some((index, property)) = lookup(name) else {
            tracing::warn!(property = %name, "unknown style property, skipped");
            continue;
        };
        if resolved.contains_key(&index) {
            tracing::warn!(property = %name, "duplicate style property, skipped");
            continue;
        }
        resolved.insert(index, (property, resolve_value(property, value, theme)));
    }
    resolved
}

/// Mix `hex` toward black (light scheme) or white (dark scheme).
fn blend_toward_contrast(theme: &Theme, hex: &str, amount: f32) -> String {
    let target = match theme.scheme() {
        ColorScheme::Light => Color::BLACK,
        ColorScheme::Dark => Color::WHITE,
    };
    Color::parse_hex(hex)
        .map(|color| Color::lerp(&color, &target, amount).to_hex())
        .unwrap_or_else(|_| hex.to_string())
}

/// Background for the hover or pressed state: one or two shades toward
/// the scheme's contrast direction.
///
/// Ramp colors step along their family; literal colors are blended by the
/// state's opacity.
fn state_background(theme: &Theme, background: &ColorValue, state: OpacityToken) -> String {
    let steps = match state {
        OpacityToken::Pressed => 2,
        _ => 1,
    };
    match background {
        ColorValue::Shade { family, shade, hex } => theme
            .shift_toward_contrast(family, *shade, steps)
            .map(str::to_string)
            .unwrap_or_else(|_| hex.clone()),
        ColorValue::Raw(hex) => blend_toward_contrast(theme, hex, theme.opacity().get(state)),
    }
}

/// Disabled background: the component background faded into the scheme's
/// base surface by the disabled opacity.
fn disabled_background(theme: &Theme, background: &ColorValue) -> String {
    let surface = theme.default_background();
    match (Color::parse_hex(surface), Color::parse_hex(background.hex())) {
        (Ok(surface), Ok(background)) => {
            Color::lerp(&surface, &background, theme.opacity().get(OpacityToken::Disabled)).to_hex()
        }
        _ => surface.to_string(),
    }
}

fn primary_or_text(theme: &Theme) -> &str {
    theme
        .get_primary_color()
        .unwrap_or_else(|_| theme.default_text())
}

/// Compile a component's resolved props into a stylesheet block scoped to
/// `#component_id`, followed by `:hover`, `:pressed`, `:disabled` and
/// `:focus` blocks derived from the background.
///
/// Values that do not resolve fall back to theme defaults; the only error is
/// an empty id.
pub fn generate_component_qss(
    component_id: &str,
    props: &BTreeMap<String, PropValue>,
    theme: &Theme,
) -> Result<String, StyleError> {
    if component_id.is_empty() {
        return Err(StyleError::InvalidComponentId);
    }

    let resolved = resolve_props(props, theme);
    let selector = format!("#{component_id}");

    let base = resolved
        .values()
        .fold(RuleBlock::new(&selector), |block, (property, value)| {
            block.decl(property.css, value.css_value())
        });

    let background = resolved
        .values()
        .find(|(property, _)| property.key == "bg")
        .and_then(|(_, value)| value.as_color().cloned())
        .unwrap_or_else(|| ColorValue::Shade {
            family: NEUTRAL_FAMILY.to_string(),
            shade: 0,
            hex: theme.default_background().to_string(),
        });

    let [hover, pressed, disabled, focus] = STATES;
    let blocks = [
        base,
        RuleBlock::new(format!("{selector}{hover}"))
            .decl("background-color", state_background(theme, &background, OpacityToken::Hover)),
        RuleBlock::new(format!("{selector}{pressed}"))
            .decl("background-color", state_background(theme, &background, OpacityToken::Pressed)),
        RuleBlock::new(format!("{selector}{disabled}"))
            .decl("background-color", disabled_background(theme, &background))
            .decl("color", theme.muted_text()),
        RuleBlock::new(format!("{selector}{focus}")).decl(
            "outline",
            format!("{FOCUS_OUTLINE_PX}px solid {}", primary_or_text(theme)),
        ),
    ];

    tracing::trace!(
        component = component_id,
        declarations = resolved.len(),
        "generated component style"
    );
    Ok(render(&[format!("{component_id} ({})", theme.scheme())], &blocks))
}

/// Global stylesheet for the theme: widget defaults for the scheme plus a
/// comment header listing the theme's variables.
pub fn generate_theme_qss(theme: &Theme) -> String {
    let px = |v: i32| format!("{v}px");
    let scale = |values: Vec<(String, i32)>| {
        values
            .into_iter()
            .map(|(key, value)| format!("{key} {value}px"))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let primary = primary_or_text(theme);
    let spacing = theme.spacing();
    let font_md = theme.typography().font_size(SizeKey::Md);
    let radius_md = theme.radius().get("md").unwrap_or(0);

    let header = vec![
        "Polygon UI theme".to_string(),
        format!("color-scheme: {}", theme.scheme()),
        format!(
            "primary: {}.{} {primary}",
            theme.primary_color(),
            theme.primary_shade()
        ),
        format!(
            "spacing: {}",
            scale(spacing.iter().map(|(k, v)| (k.to_string(), v)).collect())
        ),
        format!(
            "font-size: {}",
            scale(
                theme
                    .typography()
                    .font_sizes()
                    .map(|(k, v)| (k.to_string(), v))
                    .collect()
            )
        ),
        format!(
            "radius: {}",
            scale(theme.radius().iter().map(|(k, v)| (k.to_string(), v)).collect())
        ),
        format!(
            "opacity: {}",
            theme
                .opacity()
                .iter()
                .map(|(token, value)| format!("{} {value}", token.as_str()))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    ];

    let on_primary = Color::parse_hex(primary)
        .map(|p| {
            if Color::contrast_ratio(p, Color::WHITE) >= Color::contrast_ratio(p, Color::BLACK) {
                Color::WHITE.to_hex()
            } else {
                Color::BLACK.to_hex()
            }
        })
        .unwrap_or_else(|_| theme.default_background().to_string());

    let primary_step = |steps: usize| {
        theme
            .shift_toward_contrast(theme.primary_color(), theme.primary_shade(), steps)
            .unwrap_or(primary)
            .to_string()
    };

    let blocks = [
        RuleBlock::new("QWidget")
            .decl("background-color", theme.default_background())
            .decl("color", theme.default_text())
            .decl("font-size", px(font_md)),
        RuleBlock::new("QPushButton")
            .decl("background-color", primary)
            .decl("color", on_primary)
            .decl("border", "none")
            .decl("border-radius", px(radius_md))
            .decl(
                "padding",
                format!("{} {}", px(spacing.get(SizeKey::Xs)), px(spacing.get(SizeKey::Md))),
            ),
        RuleBlock::new("QPushButton:hover").decl("background-color", primary_step(1)),
        RuleBlock::new("QPushButton:pressed").decl("background-color", primary_step(2)),
        RuleBlock::new("QLineEdit")
            .decl("background-color", theme.default_background())
            .decl("color", theme.default_text())
            .decl("border", format!("1px solid {}", theme.default_border()))
            .decl("border-radius", px(radius_md))
            .decl("padding", px(spacing.get(SizeKey::Xs))),
        RuleBlock::new("QLineEdit:focus")
            .decl("outline", format!("{FOCUS_OUTLINE_PX}px solid {primary}")),
        RuleBlock::new("QToolTip")
            .decl("background-color", theme.default_text())
            .decl("color", theme.default_background())
            .decl("border", format!("1px solid {}", theme.default_border())),
        RuleBlock::new("*:disabled").decl("color", theme.muted_text()),
    ];

    render(&header, &blocks)
}
