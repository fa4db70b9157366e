//! Known style properties and their emission order

/// How a property's symbolic value is looked up
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// `family.shade`, bare family, or `#rrggbb`
    Color,
    /// Spacing scale key or pixels
    Spacing,
    /// Font-size scale key or pixels
    FontSize,
    /// Named weight (`bold`) or 100..=900
    FontWeight,
    /// Radius scale key or pixels
    Radius,
}

impl PropertyKind {
    pub fn is_color(self) -> bool {
        self == Self::Color
    }
}

/// One row of the property table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Property {
    /// Short key used in component props (`bg`, `p`, `fz`)
    pub key: &'static str,
    /// Stylesheet property name, also accepted as a key
    pub css: &'static str,
    pub kind: PropertyKind,
}

const fn prop(key: &'static str, css: &'static str, kind: PropertyKind) -> Property {
    Property { key, css, kind }
}

/// Every supported property, in the order declarations are emitted.
pub static PROPERTIES: [Property; 19] = [
    prop("bg", "background-color", PropertyKind::Color),
    prop("c", "color", PropertyKind::Color),
    prop("bc", "border-color", PropertyKind::Color),
    prop("bw", "border-width", PropertyKind::Spacing),
    prop("radius", "border-radius", PropertyKind::Radius),
    prop("p", "padding", PropertyKind::Spacing),
    prop("pt", "padding-top", PropertyKind::Spacing),
    prop("pr", "padding-right", PropertyKind::Spacing),
    prop("pb", "padding-bottom", PropertyKind::Spacing),
    prop("pl", "padding-left", PropertyKind::Spacing),
    prop("m", "margin", PropertyKind::Spacing),
    prop("mt", "margin-top", PropertyKind::Spacing),
    prop("mr", "margin-right", PropertyKind::Spacing),
    prop("mb", "margin-bottom", PropertyKind::Spacing),
    prop("ml", "margin-left", PropertyKind::Spacing),
    prop("w", "min-width", PropertyKind::Spacing),
    prop("h", "min-height", PropertyKind::Spacing),
    prop("fz", "font-size", PropertyKind::FontSize),
    prop("fw", "font-weight", PropertyKind::FontWeight),
];

/// Find a property by short key or stylesheet name.
///
/// Returns the property and its position in the canonical order.
pub fn lookup(name: &str) -> Option<(usize, &'static Property)> {
    PROPERTIES
        .iter()
        .enumerate()
        .find(|(_, p)| p.key == name || p.css == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_and_long_names_agree() {
        assert_eq!(lookup("bg"), lookup("background-color"));
        assert_eq!(lookup("fz").map(|(i, _)| i), Some(17));
        assert!(lookup("shadow").is_none());
    }

    #[test]
    fn keys_are_unique() {
        for (i, a) in PROPERTIES.iter().enumerate() {
            for b in &PROPERTIES[i + 1..] {
                assert_ne!(a.key, b.key);
                assert_ne!(a.css, b.css);
                assert_ne!(a.key, b.css);
            }
        }
    }
}
