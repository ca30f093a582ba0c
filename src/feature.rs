use super::geometry::Geometry;
use std::collections::BTreeMap;

/// A geometry paired with an identifier and string attributes
///
/// Example
/// ```rust
/// use geoformat::{Feature, Point};
/// let feature = Feature::new(Point::new(1.0, 2.0))
///     .with_id("depot-7")
///     .with_property("name", "North depot");
/// assert_eq!(feature.property("name"), Some("North depot"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Feature {
    pub id: Option<String>,
    pub geometry: Option<Geometry>,
    pub properties: BTreeMap<String, String>,
}

impl Feature {
    /// Instantiate a feature carrying the given geometry
    pub fn new(geometry: impl Into<Geometry>) -> Self {
        Self {
            geometry: Some(geometry.into()),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}
