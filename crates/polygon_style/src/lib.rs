//! Polygon UI Style Generation
//!
//! Compiles component props (symbolic values such as `"blue.5"` or `"md"`)
//! against a [`Theme`](polygon_theme::Theme) into Qt stylesheet text.
//!
//! ```rust
//! use polygon_style::{generate_component_qss, PropValue};
//! use polygon_theme::Theme;
//! use std::collections::BTreeMap;
//!
//! let props = BTreeMap::from([("bg".to_string(), PropValue::token("blue.5"))]);
//! let qss = generate_component_qss("btn", &props, &Theme::light()).unwrap();
//! assert!(qss.contains("#btn {\n    background-color: #339af0;\n}"));
//! assert!(qss.contains("#btn:hover"));
//! ```
//!
//! Generation never fails on a value it cannot resolve. Each such value is
//! replaced by a theme default and logged with `tracing::warn!`.

mod component;
mod error;
pub mod generator;
pub mod property;
pub mod symbolic;

pub use component::StyledComponent;
pub use error::StyleError;
pub use generator::{generate_component_qss, generate_theme_qss, FOCUS_OUTLINE_PX, STATES};
pub use property::{Property, PropertyKind, PROPERTIES};
pub use symbolic::{ColorValue, PropValue, Resolved};
