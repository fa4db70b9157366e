//! Component catalog shown and exported by PolyBook

use anyhow::{Context, Result};
use polygon_layout::ResponsiveValue;
use polygon_style::{PropValue, StyledComponent};
use std::collections::BTreeMap;

/// Default props of one catalog component, keyed by property
pub type CatalogProps = BTreeMap<String, ResponsiveValue<PropValue>>;

/// One previewable component
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Props as JSON: a bare value is a literal, an object is per breakpoint
    props: &'static str,
}

impl CatalogEntry {
    pub fn props(&self) -> Result<CatalogProps> {
        serde_json::from_str(self.props)
            .with_context(|| format!("Invalid default props for {}", self.id))
    }

    /// A styled instance at `width` with the default props applied.
    pub fn component(&self, width: u32) -> Result<StyledComponent> {
        let mut component =
            StyledComponent::new(self.id, width)?.with_accessible(self.name, self.description);
        for (name, value) in self.props()? {
            component.set_property(name, value);
        }
        Ok(component)
    }
}

pub static CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        id: "button",
        name: "Button",
        description: "Primary action button",
        props: r##"{
            "bg": "primary",
            "c": "#ffffff",
            "radius": "sm",
            "p": {"base": "xs", "md": "sm"},
            "fz": {"base": "sm", "lg": "md"},
            "fw": "semibold",
            "h": {"base": 32, "md": 36}
        }"##,
    },
    CatalogEntry {
        id: "badge",
        name: "Badge",
        description: "Small status label",
        props: r##"{
            "bg": "blue.1",
            "c": "blue.8",
            "radius": "xl",
            "p": 4,
            "fz": "xs",
            "fw": "bold"
        }"##,
    },
    CatalogEntry {
        id: "card",
        name: "Card",
        description: "Surface grouping related content",
        props: r##"{
            "bg": "gray.0",
            "c": "gray.9",
            "bc": "gray.3",
            "bw": 1,
            "radius": "md",
            "p": {"base": "md", "md": "lg", "xl": "xl"},
            "w": {"base": 280, "md": 360}
        }"##,
    },
    CatalogEntry {
        id: "input",
        name: "Input",
        description: "Single-line text field",
        props: r##"{
            "bg": "gray.0",
            "c": "gray.9",
            "bc": "gray.4",
            "bw": 1,
            "radius": "sm",
            "p": "xs",
            "fz": {"base": "sm", "md": "md"},
            "h": 36
        }"##,
    },
    CatalogEntry {
        id: "alert",
        name: "Alert",
        description: "Inline message for errors and warnings",
        props: r##"{
            "bg": "red.0",
            "c": "red.9",
            "bc": "red.6",
            "bw": 1,
            "radius": "md",
            "p": {"base": "sm", "lg": "md"},
            "m": {"base": "xs", "lg": "sm"}
        }"##,
    },
    CatalogEntry {
        id: "chip",
        name: "Chip",
        description: "Toggleable filter chip",
        props: r##"{
            "bg": "gray.1",
            "c": "dark.7",
            "radius": "xl",
            "pl": "sm",
            "pr": "sm",
            "fz": "sm",
            "h": {"base": 28, "md": 32}
        }"##,
    },
];

/// Find a catalog entry by id
pub fn find(id: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polygon_theme::Theme;

    #[test]
    fn every_entry_has_valid_props() {
        for entry in CATALOG {
            let props = entry.props().unwrap();
            assert!(!props.is_empty(), "{} has no props", entry.id);
            assert!(props.contains_key("bg"), "{} has no background", entry.id);
        }
    }

    #[test]
    fn every_entry_styles_at_every_breakpoint() {
        let theme = Theme::light();
        for entry in CATALOG {
            let mut component = entry.component(0).unwrap();
            for width in [0, 640, 768, 1024, 1280] {
                let qss = component.on_resize(width, &theme).unwrap();
                assert!(qss.contains(&format!("#{} {{", entry.id)));
            }
        }
    }

    #[test]
    fn literal_hex_props_parse() {
        let props = find("button").unwrap().props().unwrap();
        assert_eq!(props["c"], ResponsiveValue::Literal(PropValue::token("#ffffff")));
        assert_eq!(props.len(), 7);

        let qss = find("button").unwrap().component(1024).unwrap().style(&Theme::light()).unwrap();
        assert!(qss.contains("    color: #ffffff;\n"));
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(find("card").map(|e| e.name), Some("Card"));
        assert!(find("carousel").is_none());
    }

    #[test]
    fn button_padding_grows_at_md() {
        let theme = Theme::light();
        let mut button = find("button").unwrap().component(500).unwrap();
        assert!(button.style(&theme).unwrap().contains("padding: 10px;"));
        assert!(button.on_resize(800, &theme).unwrap().contains("padding: 12px;"));
    }
}
