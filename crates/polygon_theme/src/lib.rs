//! Polygon UI Theme System
//!
//! Design tokens, immutable theme snapshots, and contrast validation for
//! Polygon UI components.
//!
//! # Overview
//!
//! - **Design tokens**: ten-shade color families, spacing, typography, radii,
//!   and opacity
//! - **Validation**: token sets are checked once when built; an invalid
//!   [`ColorSystem`] or [`Theme`] is never observable
//! - **Contrast checks**: WCAG relative-luminance ratios over every family
//! - **Snapshots**: a [`Theme`] is immutable; settings changes derive a new one
//!
//! # Quick Start
//!
//! ```rust
//! use polygon_theme::{ColorScheme, Theme};
//!
//! let theme = Theme::new(ColorScheme::Light);
//! assert_eq!(theme.get_color("blue", 5).unwrap(), "#339af0");
//!
//! // Settings changes never touch the original snapshot
//! let shade_5 = theme.with_primary_shade(5).unwrap();
//! assert_ne!(shade_5.get_primary_color(), theme.get_primary_color());
//! ```
//!
//! # Tokens
//!
//! - [`ColorSystem`]: named families of ten `#rrggbb` shades plus semantic aliases
//! - [`SpacingScale`]: `xs`..`xl` spacing in pixels
//! - [`TypographyScale`]: font sizes, weights, line heights
//! - [`RadiusScale`]: named corner radii
//! - [`OpacityTokens`]: disabled/hover opacities
//!
//! # Application state
//!
//! [`ThemeHolder`] keeps the current snapshot for an app, applies validated
//! [`ThemeSettings`], saves them through a [`SettingsStore`], and notifies
//! subscribers on change.

mod error;
pub mod settings;
pub mod state;
pub mod theme;
pub mod tokens;
pub mod validator;

// Re-export commonly used types
pub use error::{LookupError, ThemeError, ValidationError};
pub use settings::{MemoryStore, SettingsStore, ThemeSettings};
pub use state::ThemeHolder;
pub use theme::{ColorScheme, Theme, ThemeBuilder, DEFAULT_PRIMARY_COLOR, PRIMARY_ALIAS};
pub use tokens::*;
pub use validator::{
    contrast_ratio, ContrastIssue, ContrastPair, DesignTokenValidator, WCAG_AA_CONTRAST,
};
