//! WCAG contrast checks over a color system

use crate::tokens::ColorSystem;
use polygon_core::{Color, ColorParseError};

/// Minimum contrast for normal text (WCAG AA)
pub const WCAG_AA_CONTRAST: f64 = 4.5;

const WHITE: &str = "#ffffff";
const BLACK: &str = "#000000";

/// One foreground/background pair that is checked for contrast
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContrastPair {
    /// `family.shade` of the ramp color
    pub token: String,
    pub foreground: String,
    pub background: String,
}

/// A pair that falls below the required threshold
#[derive(Clone, Debug, PartialEq)]
pub struct ContrastIssue {
    pub pair: ContrastPair,
    pub ratio: f64,
    pub threshold: f64,
}

/// WCAG contrast ratio between two `#rrggbb` strings.
///
/// The lighter of the two is picked explicitly, so the ratio is the same
/// for either argument order.
pub fn contrast_ratio(a: &str, b: &str) -> Result<f64, ColorParseError> {
    Ok(Color::contrast_ratio(Color::parse_hex(a)?, Color::parse_hex(b)?))
}

/// Checks the required contrast pairs of a [`ColorSystem`]
pub struct DesignTokenValidator<'a> {
    colors: &'a ColorSystem,
    threshold: f64,
}

impl<'a> DesignTokenValidator<'a> {
    pub fn new(colors: &'a ColorSystem) -> Self {
        Self {
            colors,
            threshold: WCAG_AA_CONTRAST,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// The pairs every system must satisfy: each family's darkest shade as
    /// text on white, and its lightest shade as text on black.
    pub fn required_pairs(&self) -> impl Iterator<Item = ContrastPair> + 'a {
        let colors = self.colors;
        colors.families().flat_map(|family| {
            let last = family.shades().len().saturating_sub(1);
            [
                ContrastPair {
                    token: format!("{}.{}", family.name(), last),
                    foreground: family.darkest().to_string(),
                    background: WHITE.to_string(),
                },
                ContrastPair {
                    token: format!("{}.0", family.name()),
                    foreground: family.lightest().to_string(),
                    background: BLACK.to_string(),
                },
            ]
        })
    }

    /// Lazily yields every required pair below the threshold.
    ///
    /// Shades that fail to parse are reported with a ratio of 1.0.
    pub fn validate_color_contrasts(&self) -> impl Iterator<Item = ContrastIssue> + 'a {
        let threshold = self.threshold;
        self.required_pairs().filter_map(move |pair| {
            let ratio = contrast_ratio(&pair.foreground, &pair.background).unwrap_or(1.0);
            (ratio < threshold).then(|| ContrastIssue {
                pair,
                ratio,
                threshold,
            })
        })
    }

    /// `true` when no required pair falls below the threshold.
    pub fn validate(&self) -> bool {
        let mut issues = self.validate_color_contrasts().peekable();
        match issues.peek() {
            None => true,
            Some(first) => {
                tracing::debug!(
                    token = %first.pair.token,
                    ratio = first.ratio,
                    "contrast check failed"
                );
                false
            }
        }
    }
}
