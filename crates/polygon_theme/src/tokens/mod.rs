//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a design system:
//! - Color families with ten-step shade ramps
//! - Spacing (padding, margins)
//! - Typography (sizes, weights, line heights)
//! - Border radii
//! - Opacity

mod color;
mod opacity;
mod radius;
mod spacing;
mod typography;

pub use color::*;
pub use opacity::*;
pub use radius::*;
pub use spacing::{ScaleValue, SizeKey, SpacingScale};
pub use typography::*;
