//! Radius tokens for theming

use super::spacing::SizeKey;
use crate::error::{LookupError, ValidationError};
use std::collections::BTreeMap;

/// Named corner radii in pixels
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RadiusScale {
    radii: BTreeMap<String, i32>,
}

impl RadiusScale {
    /// Build from named values. Negative radii are rejected.
    pub fn new(radii: BTreeMap<String, i32>) -> Result<Self, ValidationError> {
        let scale = Self { radii };
        scale.validate()?;
        Ok(scale)
    }

    /// Default scale with `overrides` applied on top.
    pub fn with_overrides(overrides: &BTreeMap<String, i32>) -> Result<Self, ValidationError> {
        let mut radii = Self::default().radii;
        radii.extend(overrides.iter().map(|(k, v)| (k.clone(), *v)));
        Self::new(radii)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.radii.iter().find(|(_, v)| **v < 0) {
            Some((key, &value)) => Err(ValidationError::InvalidRadius {
                key: key.clone(),
                value,
            }),
            None => Ok(()),
        }
    }

    pub fn get(&self, name: &str) -> Result<i32, LookupError> {
        self.radii
            .get(name)
            .copied()
            .ok_or_else(|| LookupError::UnknownScaleKey {
                scale: "radius",
                key: name.to_string(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.radii.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl Default for RadiusScale {
    fn default() -> Self {
        Self {
            radii: SizeKey::ALL
                .into_iter()
                .zip([2, 4, 8, 16, 32])
                .map(|(k, v)| (k.as_str().to_string(), v))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_and_extend() {
        let overrides = BTreeMap::from([("md".to_string(), 6), ("full".to_string(), 9999)]);
        let scale = RadiusScale::with_overrides(&overrides).unwrap();
        assert_eq!(scale.get("md"), Ok(6));
        assert_eq!(scale.get("full"), Ok(9999));
        assert_eq!(scale.get("xs"), Ok(2));
    }

    #[test]
    fn negative_radius_is_rejected() {
        let overrides = BTreeMap::from([("xs".to_string(), -1)]);
        assert_eq!(
            RadiusScale::with_overrides(&overrides),
            Err(ValidationError::InvalidRadius {
                key: "xs".into(),
                value: -1,
            })
        );
    }
}
