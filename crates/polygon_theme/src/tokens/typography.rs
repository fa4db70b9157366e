//! Typography tokens for theming

use super::spacing::{PixelScale, ScaleValue, SizeKey};
use crate::error::{LookupError, ValidationError};
use std::collections::BTreeMap;

/// Font sizes, weights, and line heights
#[derive(Clone, Debug, PartialEq)]
pub struct TypographyScale {
    font_sizes: PixelScale,
    font_weights: BTreeMap<String, i32>,
    line_heights: BTreeMap<SizeKey, f32>,
}

impl TypographyScale {
    pub fn new(
        font_sizes: [i32; 5],
        font_weights: BTreeMap<String, i32>,
        line_heights: BTreeMap<SizeKey, f32>,
    ) -> Result<Self, ValidationError> {
        let font_sizes = PixelScale::new("font-size", font_sizes)?;
        for (key, &value) in &font_weights {
            if !(100..=900).contains(&value) {
                return Err(ValidationError::InvalidFontWeight {
                    key: key.clone(),
                    value,
                });
            }
        }
        for (key, &value) in &line_heights {
            // NaN fails this comparison too
            if !(value >= 1.0) {
                return Err(ValidationError::InvalidLineHeight {
                    key: key.as_str().to_string(),
                    value,
                });
            }
        }
        Ok(Self {
            font_sizes,
            font_weights,
            line_heights,
        })
    }

    pub fn font_size(&self, key: SizeKey) -> i32 {
        self.font_sizes.get(key)
    }

    /// Scale keys are looked up; direct pixels pass through untouched.
    pub fn resolve_font_size(&self, value: impl Into<ScaleValue>) -> i32 {
        self.font_sizes.resolve(value.into())
    }

    pub fn lookup_font_size(&self, key: &str) -> Result<i32, LookupError> {
        self.font_sizes.lookup("font-size", key)
    }

    pub fn font_sizes(&self) -> impl Iterator<Item = (SizeKey, i32)> + '_ {
        self.font_sizes.iter()
    }

    pub fn font_weight(&self, name: &str) -> Result<i32, LookupError> {
        self.font_weights
            .get(name)
            .copied()
            .ok_or_else(|| LookupError::UnknownScaleKey {
                scale: "font-weight",
                key: name.to_string(),
            })
    }

    pub fn font_weights(&self) -> impl Iterator<Item = (&str, i32)> {
        self.font_weights.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn line_height(&self, key: SizeKey) -> Option<f32> {
        self.line_heights.get(&key).copied()
    }

    pub fn line_heights(&self) -> impl Iterator<Item = (SizeKey, f32)> + '_ {
        self.line_heights.iter().map(|(k, v)| (*k, *v))
    }
}

impl Default for TypographyScale {
    fn default() -> Self {
        let font_weights = [
            ("thin", 100),
            ("extralight", 200),
            ("light", 300),
            ("normal", 400),
            ("medium", 500),
            ("semibold", 600),
            ("bold", 700),
            ("extrabold", 800),
            ("black", 900),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        let line_heights = SizeKey::ALL
            .into_iter()
            .zip([1.4, 1.45, 1.55, 1.6, 1.65])
            .collect();

        Self {
            font_sizes: PixelScale::new_unchecked([12, 14, 16, 18, 20]),
            font_weights,
            line_heights,
        }
    }
}
