//! Polygon UI responsive layout
//!
//! Properties may vary with the viewport width. A [`ResponsiveValue`] is
//! either a literal or a map from [`Breakpoint`] to value; [`resolve`] picks
//! the single effective value for a width, and a [`ResponsiveResolver`]
//! keeps a component's responsive properties with a per-width cache that is
//! refreshed on every resize event.
//!
//! # Example
//!
//! ```rust
//! use polygon_layout::{resolve, Breakpoint, ResponsiveValue};
//!
//! let padding = ResponsiveValue::from_entries([
//!     (Breakpoint::Base, "xs"),
//!     (Breakpoint::Md, "lg"),
//! ]);
//! assert_eq!(resolve(&padding, 499), Ok(&"xs"));
//! assert_eq!(resolve(&padding, 768), Ok(&"lg"));
//! ```

mod breakpoint;
mod resolver;
mod responsive;

pub use breakpoint::{Breakpoint, BreakpointTable};
pub use resolver::ResponsiveResolver;
pub use responsive::{resolve, resolve_with, ResolveError, ResponsiveValue};
