use thiserror::Error;

/// A design-token set that refuses to exist.
///
/// Raised at construction time by [`ColorSystem`](crate::ColorSystem), the
/// scales, and [`Theme`](crate::Theme).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("malformed color {value:?} in family {family:?} at shade {shade}")]
    MalformedColor {
        family: String,
        shade: usize,
        value: String,
    },

    #[error("duplicate color family {0:?}")]
    DuplicateFamily(String),

    #[error("color family {family:?} has {found} shades, expected 10")]
    ShadeCountError { family: String, found: usize },

    #[error("color system has {found} families, at least {min} required")]
    TooFewFamilies { found: usize, min: usize },

    #[error("color system is missing the neutral {0:?} family")]
    MissingNeutralFamily(&'static str),

    #[error("alias {alias:?} points at unknown family {target:?}")]
    DanglingAlias { alias: String, target: String },

    #[error("{scale} scale must be strictly increasing ({key} = {value})")]
    NonIncreasingScale {
        scale: &'static str,
        key: String,
        value: i32,
    },

    #[error("font weight {key:?} = {value} is outside 100..=900")]
    InvalidFontWeight { key: String, value: i32 },

    #[error("line height {key:?} = {value} is below 1.0")]
    InvalidLineHeight { key: String, value: f32 },

    #[error("radius {key:?} = {value} is negative")]
    InvalidRadius { key: String, value: i32 },

    #[error("primary shade {0} is outside 0..=9")]
    InvalidShade(usize),

    #[error("primary color {0:?} is not a registered family or alias")]
    UnknownPrimaryColor(String),
}

/// A direct accessor call asked for something that is not there.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("unknown color family {0:?}")]
    UnknownFamily(String),

    #[error("shade index {0} is outside 0..=9")]
    InvalidShadeIndex(usize),

    #[error("unknown {scale} key {key:?}")]
    UnknownScaleKey { scale: &'static str, key: String },
}

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("theme settings error: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("settings store error: {0}")]
    Store(String),
}
