//! Source format readers
//!
//! A source yields features: a geometry plus a mapping of named
//! attributes. Decoding into domain records happens in [`crate::source`];
//! this module only gets the data off disk.

pub mod shapefile;

use std::collections::HashMap;

use crate::error::{CamsectError, Result};

/// Attribute value decoded from a source record
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    Null,
}

impl AttributeValue {
    /// Render as text. Whole numbers print integrally, which covers dBase
    /// columns that hold numbers the domain treats as strings.
    pub fn to_text(&self) -> Option<String> {
        match self {
            AttributeValue::Text(s) => Some(s.clone()),
            AttributeValue::Number(n) if n.fract() == 0.0 && n.is_finite() => {
                Some(format!("{}", *n as i64))
            }
            AttributeValue::Number(n) => Some(n.to_string()),
            AttributeValue::Boolean(_) | AttributeValue::Null => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttributeValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// One feature read from a source.
#[derive(Debug, Clone)]
pub struct Feature {
    /// Zero-based position in the source collection
    pub index: usize,
    pub geometry: geo::Geometry<f64>,
    pub attributes: HashMap<String, AttributeValue>,
}

impl Feature {
    /// Look up a required attribute, rendered as text. Absent and null
    /// values are an error; there is no default substitution.
    pub fn text_attribute(&self, field: &str) -> Result<String> {
        match self.attributes.get(field) {
            None | Some(AttributeValue::Null) => Err(CamsectError::MissingAttribute {
                field: field.to_string(),
                feature: self.index,
            }),
            Some(value) => value.to_text().ok_or_else(|| CamsectError::InvalidAttribute {
                field: field.to_string(),
                feature: self.index,
                reason: "expected a text value".to_string(),
            }),
        }
    }

    /// Look up a required numeric attribute.
    pub fn numeric_attribute(&self, field: &str) -> Result<f64> {
        match self.attributes.get(field) {
            None | Some(AttributeValue::Null) => Err(CamsectError::MissingAttribute {
                field: field.to_string(),
                feature: self.index,
            }),
            Some(value) => value.as_number().ok_or_else(|| CamsectError::InvalidAttribute {
                field: field.to_string(),
                feature: self.index,
                reason: "expected a numeric value".to_string(),
            }),
        }
    }
}

/// A named collection of features with the CRS detected from source
/// metadata, when one could be detected.
#[derive(Debug, Clone)]
pub struct FeatureCollection {
    pub name: String,
    pub crs: Option<u32>,
    pub features: Vec<Feature>,
}

/// Human-readable name of a geometry class, for errors and diagnostics.
pub fn geometry_name(geometry: &geo::Geometry<f64>) -> &'static str {
    match geometry {
        geo::Geometry::Point(_) => "point",
        geo::Geometry::Line(_) | geo::Geometry::LineString(_) => "linestring",
        geo::Geometry::MultiLineString(_) => "multilinestring",
        geo::Geometry::Polygon(_) | geo::Geometry::Rect(_) | geo::Geometry::Triangle(_) => {
            "polygon"
        }
        geo::Geometry::MultiPoint(_) => "multipoint",
        geo::Geometry::MultiPolygon(_) => "multipolygon",
        geo::Geometry::GeometryCollection(_) => "geometry collection",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature_with(field: &str, value: AttributeValue) -> Feature {
        Feature {
            index: 7,
            geometry: geo::Geometry::Point(geo::Point::new(0.0, 0.0)),
            attributes: HashMap::from([(field.to_string(), value)]),
        }
    }

    #[test]
    fn text_attribute_accepts_character_values() {
        let feature = feature_with("NAMN", AttributeValue::Text("Eskilstuna".to_string()));
        assert_eq!(feature.text_attribute("NAMN").unwrap(), "Eskilstuna");
    }

    #[test]
    fn text_attribute_renders_whole_numbers_integrally() {
        let feature = feature_with("HUVUDNR", AttributeValue::Number(40.0));
        assert_eq!(feature.text_attribute("HUVUDNR").unwrap(), "40");
    }

    #[test]
    fn missing_attribute_is_fatal() {
        let feature = feature_with("NAMN", AttributeValue::Text("x".to_string()));
        let err = feature.text_attribute("ID").unwrap_err();
        assert!(matches!(
            err,
            CamsectError::MissingAttribute { ref field, feature: 7 } if field == "ID"
        ));
    }

    #[test]
    fn null_attribute_counts_as_missing() {
        let feature = feature_with("VINKEL", AttributeValue::Null);
        assert!(matches!(
            feature.numeric_attribute("VINKEL"),
            Err(CamsectError::MissingAttribute { .. })
        ));
    }

    #[test]
    fn numeric_attribute_rejects_text() {
        let feature = feature_with("VINKEL", AttributeValue::Text("north".to_string()));
        assert!(matches!(
            feature.numeric_attribute("VINKEL"),
            Err(CamsectError::InvalidAttribute { .. })
        ));
    }
}
