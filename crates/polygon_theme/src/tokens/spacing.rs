//! Spacing tokens for theming

use crate::error::{LookupError, ValidationError};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Size keys shared by the spacing, font-size, and radius scales
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum SizeKey {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl SizeKey {
    pub const ALL: [SizeKey; 5] = [
        SizeKey::Xs,
        SizeKey::Sm,
        SizeKey::Md,
        SizeKey::Lg,
        SizeKey::Xl,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl Display for SizeKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizeKey {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SizeKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| LookupError::UnknownScaleKey {
                scale: "size",
                key: s.to_string(),
            })
    }
}

/// A scale lookup or a direct pixel value that bypasses the scale
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScaleValue {
    Key(SizeKey),
    Px(i32),
}

impl From<SizeKey> for ScaleValue {
    fn from(key: SizeKey) -> Self {
        Self::Key(key)
    }
}

impl From<i32> for ScaleValue {
    fn from(px: i32) -> Self {
        Self::Px(px)
    }
}

/// Five-step strictly increasing pixel scale keyed by [`SizeKey`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct PixelScale {
    values: [i32; 5],
}

impl PixelScale {
    pub(crate) fn new(scale: &'static str, values: [i32; 5]) -> Result<Self, ValidationError> {
        for pair in SizeKey::ALL.windows(2) {
            let (lo, hi) = (values[pair[0].index()], values[pair[1].index()]);
            if hi <= lo {
                return Err(ValidationError::NonIncreasingScale {
                    scale,
                    key: pair[1].as_str().to_string(),
                    value: hi,
                });
            }
        }
        Ok(Self { values })
    }

    pub(crate) const fn new_unchecked(values: [i32; 5]) -> Self {
        Self { values }
    }

    pub(crate) fn get(&self, key: SizeKey) -> i32 {
        self.values[key.index()]
    }

    pub(crate) fn resolve(&self, value: ScaleValue) -> i32 {
        match value {
            ScaleValue::Key(key) => self.get(key),
            ScaleValue::Px(px) => px,
        }
    }

    pub(crate) fn lookup(&self, scale: &'static str, key: &str) -> Result<i32, LookupError> {
        key.parse::<SizeKey>()
            .map(|k| self.get(k))
            .map_err(|_| LookupError::UnknownScaleKey {
                scale,
                key: key.to_string(),
            })
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (SizeKey, i32)> + '_ {
        SizeKey::ALL.into_iter().map(move |k| (k, self.get(k)))
    }
}

/// Spacing scale (padding, margin, gaps)
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SpacingScale {
    scale: PixelScale,
}

impl SpacingScale {
    /// Build a scale; values must be strictly increasing from `xs` to `xl`.
    pub fn new(values: [i32; 5]) -> Result<Self, ValidationError> {
        Ok(Self {
            scale: PixelScale::new("spacing", values)?,
        })
    }

    pub fn get(&self, key: SizeKey) -> i32 {
        self.scale.get(key)
    }

    /// Scale keys are looked up; direct pixels pass through untouched.
    pub fn resolve(&self, value: impl Into<ScaleValue>) -> i32 {
        self.scale.resolve(value.into())
    }

    pub fn lookup(&self, key: &str) -> Result<i32, LookupError> {
        self.scale.lookup("spacing", key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SizeKey, i32)> + '_ {
        self.scale.iter()
    }
}

impl Default for SpacingScale {
    fn default() -> Self {
        Self {
            scale: PixelScale::new_unchecked([10, 12, 16, 20, 32]),
        }
    }
}
