//! Symbolic property values
//!
//! A component prop is either a number (direct pixels, used as-is) or a
//! string token interpreted by the property's [`PropertyKind`]:
//!
//! | token         | meaning                                  |
//! |---------------|------------------------------------------|
//! | `blue.5`      | `theme.get_color("blue", 5)`             |
//! | `blue`        | the same family at shade 6               |
//! | `primary`     | the theme's primary color and shade      |
//! | `#1c7ed6`     | a literal color                          |
//! | `md`          | spacing / font-size / radius scale key   |
//! | `bold`, `600` | font weight                              |
//! | `12`, `12px`  | direct pixels                            |
//!
//! Anything that does not resolve falls back to a theme default through
//! [`fallback`]; [`resolve_value`] logs each fallback at `warn`.

use crate::property::{Property, PropertyKind};
use polygon_core::Color;
use polygon_theme::{Theme, DEFAULT_SHADE, NEUTRAL_FAMILY, PRIMARY_ALIAS, SHADE_COUNT};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Pixel fallback for spacing-like properties
pub const FALLBACK_SPACING_PX: i32 = 16;

/// Fallback for `font-weight`
pub const FALLBACK_FONT_WEIGHT: i32 = 400;

const FALLBACK_RADIUS_KEY: &str = "md";
const FALLBACK_RADIUS_PX: i32 = 4;

/// A raw component property value
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Px(i32),
    Token(String),
}

impl PropValue {
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token(token.into())
    }
}

impl From<i32> for PropValue {
    fn from(px: i32) -> Self {
        Self::Px(px)
    }
}

impl From<&str> for PropValue {
    fn from(token: &str) -> Self {
        Self::Token(token.to_string())
    }
}

impl From<String> for PropValue {
    fn from(token: String) -> Self {
        Self::Token(token)
    }
}

impl Display for PropValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Px(px) => write!(f, "{px}"),
            Self::Token(token) => f.write_str(token),
        }
    }
}

/// A resolved color, remembering the ramp position when it came from one so
/// interaction states can step along the ramp.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorValue {
    Shade {
        family: String,
        shade: usize,
        hex: String,
    },
    Raw(String),
}

impl ColorValue {
    pub fn hex(&self) -> &str {
        match self {
            Self::Shade { hex, .. } => hex,
            Self::Raw(hex) => hex,
        }
    }

    /// The theme's neutral family at a logical shade
    fn neutral(theme: &Theme, shade: usize) -> Self {
        let hex = match shade {
            0 => theme.default_background(),
            _ => theme.default_text(),
        };
        Self::Shade {
            family: NEUTRAL_FAMILY.to_string(),
            shade,
            hex: hex.to_string(),
        }
    }
}

/// A value ready to be written as a declaration
#[derive(Clone, Debug, PartialEq)]
pub enum Resolved {
    Color(ColorValue),
    Px(i32),
    Weight(i32),
}

impl Resolved {
    /// Stylesheet text for the value
    pub fn css_value(&self) -> String {
        match self {
            Self::Color(color) => color.hex().to_string(),
            Self::Px(px) => format!("{px}px"),
            Self::Weight(weight) => weight.to_string(),
        }
    }

    pub fn as_color(&self) -> Option<&ColorValue> {
        match self {
            Self::Color(color) => Some(color),
            _ => None,
        }
    }
}

/// Resolve a value for `property`, or `None` if it does not resolve.
pub fn try_resolve(property: &Property, value: &PropValue, theme: &Theme) -> Option<Resolved> {
    match property.kind {
        PropertyKind::Color => match value {
            PropValue::Token(token) => resolve_color(token.trim(), theme).map(Resolved::Color),
            PropValue::Px(_) => None,
        },
        PropertyKind::FontWeight => resolve_weight(value, theme).map(Resolved::Weight),
        kind => resolve_length(kind, value, theme).map(Resolved::Px),
    }
}

/// Theme default used when a value for `property` does not resolve.
///
/// Text color falls back to the scheme's default text, other colors to the
/// default background, lengths to 16px, radius to the theme's `md` radius
/// and weight to 400.
pub fn fallback(property: &Property, theme: &Theme) -> Resolved {
    match property.kind {
        PropertyKind::Color if property.key == "c" => {
            Resolved::Color(ColorValue::neutral(theme, SHADE_COUNT - 1))
        }
        PropertyKind::Color => Resolved::Color(ColorValue::neutral(theme, 0)),
        PropertyKind::Spacing | PropertyKind::FontSize => Resolved::Px(FALLBACK_SPACING_PX),
        PropertyKind::Radius => Resolved::Px(
            theme
                .radius()
                .get(FALLBACK_RADIUS_KEY)
                .unwrap_or(FALLBACK_RADIUS_PX),
        ),
        PropertyKind::FontWeight => Resolved::Weight(FALLBACK_FONT_WEIGHT),
    }
}

/// Resolve a value, falling back to the theme default. Never fails.
pub fn resolve_value(property: &Property, value: &PropValue, theme: &Theme) -> Resolved {
    try_resolve(property, value, theme).unwrap_or_else(|| {
        let fallback = fallback(property, theme);
        tracing::warn!(
            property = property.key,
            value = %value,
            fallback = %fallback.css_value(),
            "unresolvable style value, using fallback"
        );
        fallback
    })
}

fn resolve_color(token: &str, theme: &Theme) -> Option<ColorValue> {
    if token.starts_with('#') {
        return Color::parse_hex(token)
            .ok()
            .map(|color| ColorValue::Raw(color.to_hex()));
    }

    let (family, shade) = match token.split_once('.') {
        Some((family, shade)) => (family, shade.parse::<usize>().ok()?),
        None if token == PRIMARY_ALIAS => (token, theme.primary_shade()),
        None => (token, DEFAULT_SHADE),
    };
    let hex = theme.get_color(family, shade).ok()?;
    Some(ColorValue::Shade {
        family: family.to_string(),
        shade,
        hex: hex.to_string(),
    })
}

fn parse_px(token: &str) -> Option<i32> {
    let token = token.trim();
    token.strip_suffix("px").unwrap_or(token).parse().ok()
}

fn resolve_length(kind: PropertyKind, value: &PropValue, theme: &Theme) -> Option<i32> {
    let token = match value {
        PropValue::Px(px) => return Some(*px),
        PropValue::Token(token) => token.trim(),
    };
    if let Some(px) = parse_px(token) {
        return Some(px);
    }
    match kind {
        PropertyKind::Spacing => theme.spacing().lookup(token).ok(),
        PropertyKind::FontSize => theme.typography().lookup_font_size(token).ok(),
        PropertyKind::Radius => theme.radius().get(token).ok(),
        PropertyKind::Color | PropertyKind::FontWeight => None,
    }
}

fn resolve_weight(value: &PropValue, theme: &Theme) -> Option<i32> {
    let weight = match value {
        PropValue::Px(weight) => *weight,
        PropValue::Token(token) => match token.trim().parse::<i32>() {
            Ok(weight) => weight,
            Err(_) => return theme.typography().font_weight(token.trim()).ok(),
        },
    };
    (100..=900).contains(&weight).then_some(weight)
}
