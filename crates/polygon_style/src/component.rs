//! Glue between responsive props and style generation for one widget

use crate::error::StyleError;
use crate::generator::generate_component_qss;
use crate::symbolic::PropValue;
use polygon_layout::{BreakpointTable, ResponsiveResolver, ResponsiveValue};
use polygon_theme::Theme;

/// A styled widget instance: id, accessible name/description, and its
/// responsive props.
///
/// The owning UI layer calls [`on_resize`](Self::on_resize) with every new
/// width and applies the returned stylesheet text. After a theme change it
/// calls [`theme_changed`](Self::theme_changed) and restyles.
pub struct StyledComponent {
    id: String,
    accessible_name: String,
    accessible_description: String,
    resolver: ResponsiveResolver<PropValue>,
}

impl StyledComponent {
    pub fn new(id: impl Into<String>, width: u32) -> Result<Self, StyleError> {
        Self::with_table(id, width, BreakpointTable::DEFAULT)
    }

    pub fn with_table(
        id: impl Into<String>,
        width: u32,
        table: BreakpointTable,
    ) -> Result<Self, StyleError> {
        let id = id.into();
        if id.is_empty() {
            return Err(StyleError::InvalidComponentId);
        }
        Ok(Self {
            accessible_name: id.clone(),
            accessible_description: String::new(),
            id,
            resolver: ResponsiveResolver::with_table(width, table),
        })
    }

    /// Set the accessible name and description
    pub fn with_accessible(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.accessible_name = name.into();
        self.accessible_description = description.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn accessible_name(&self) -> &str {
        &self.accessible_name
    }

    pub fn accessible_description(&self) -> &str {
        &self.accessible_description
    }

    pub fn width(&self) -> u32 {
        self.resolver.width()
    }

    pub fn set_property(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ResponsiveValue<PropValue>>,
    ) {
        self.resolver.set_property(name, value);
    }

    pub fn remove_property(&mut self, name: &str) -> Option<ResponsiveValue<PropValue>> {
        self.resolver.remove_property(name)
    }

    pub fn resolver(&self) -> &ResponsiveResolver<PropValue> {
        &self.resolver
    }

    /// Stylesheet text at the current width
    pub fn style(&mut self, theme: &Theme) -> Result<String, StyleError> {
        let props = self.resolver.resolved()?;
        generate_component_qss(&self.id, &props, theme)
    }

    /// Record a new width and return the stylesheet text for it.
    pub fn on_resize(&mut self, width: u32, theme: &Theme) -> Result<String, StyleError> {
        let props = self.resolver.on_resize(width)?;
        generate_component_qss(&self.id, &props, theme)
    }

    /// Drop cached resolutions after the active theme changed.
    pub fn theme_changed(&mut self) {
        tracing::debug!(component = %self.id, "theme changed, invalidating resolver cache");
        self.resolver.invalidate_all();
    }
}
