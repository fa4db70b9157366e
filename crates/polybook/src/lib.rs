//! PolyBook - headless catalog and stylesheet export for Polygon UI
//!
//! Lists the color system, checks contrast, and compiles the component
//! catalog into Qt stylesheets for a theme loaded from a settings file.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod store;

pub use config::PolybookConfig;
pub use store::JsonFileStore;
