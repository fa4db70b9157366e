//! Polygon UI Core
//!
//! Foundational value types shared by the Polygon UI crates:
//!
//! - **Color**: an RGBA value with `#rrggbb` parsing and formatting, linear
//!   interpolation, and WCAG relative luminance / contrast math.
//!
//! # Example
//!
//! ```rust
//! use polygon_core::Color;
//!
//! let blue = Color::parse_hex("#228be6").unwrap();
//! assert_eq!(blue.to_hex(), "#228be6");
//!
//! let ratio = Color::contrast_ratio(Color::BLACK, Color::WHITE);
//! assert!((ratio - 21.0).abs() < 1e-6);
//! ```

pub mod color;

pub use color::{is_hex_color, Color, ColorParseError};
