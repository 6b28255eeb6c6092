//! Shapefile format reader
//!
//! Reads ESRI shapefiles with the pure-Rust `shapefile` crate. A
//! shapefile is a bundle of component files (.shp, .shx, .dbf, optional
//! .prj) that must sit next to each other under one base name.

use shapefile::dbase::FieldValue as DbaseFieldValue;
use shapefile::{Reader, Shape};
use std::collections::HashMap;
use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::{CamsectError, Result};
use crate::formats::{AttributeValue, Feature, FeatureCollection};

/// Reader for one shapefile layer.
pub struct ShapefileReader;

impl ShapefileReader {
    pub fn read(&self, path: &Path) -> Result<FeatureCollection> {
        self.verify_components(path)?;

        let mut reader = Reader::from_path(path).map_err(|e| CamsectError::FormatError {
            format: "Shapefile".to_string(),
            message: format!("Failed to open shapefile: {e}"),
        })?;

        let crs = self.extract_crs(path)?;
        let features = self.read_features(&mut reader)?;

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unnamed")
            .to_string();

        Ok(FeatureCollection { name, crs, features })
    }

    /// Base path without extension, validated to end in .shp
    fn shapefile_base(&self, path: &Path) -> Result<PathBuf> {
        let is_shp = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("shp"))
            .unwrap_or(false);

        if !is_shp {
            return Err(CamsectError::InvalidPath {
                path: path.to_path_buf(),
                reason: "not a shapefile (.shp)".to_string(),
            });
        }

        Ok(path.with_extension(""))
    }

    fn verify_components(&self, path: &Path) -> Result<()> {
        let base = self.shapefile_base(path)?;
        let mut missing = Vec::new();

        for ext in ["shp", "shx", "dbf"] {
            if !base.with_extension(ext).exists() {
                missing.push(format!(".{ext}"));
            }
        }

        if !missing.is_empty() {
            return Err(CamsectError::FormatError {
                format: "Shapefile".to_string(),
                message: format!("Missing required component files: {}", missing.join(", ")),
            });
        }

        Ok(())
    }

    /// EPSG code of the layer, from the .prj WKT when present.
    fn extract_crs(&self, path: &Path) -> Result<Option<u32>> {
        let prj_path = self.shapefile_base(path)?.with_extension("prj");

        if !prj_path.exists() {
            tracing::warn!(
                path = %path.display(),
                "no .prj next to shapefile, trusting the source CRS"
            );
            return Ok(None);
        }

        let wkt = fs::read_to_string(&prj_path).map_err(|e| CamsectError::FormatError {
            format: "Shapefile".to_string(),
            message: format!("Failed to read .prj file: {e}"),
        })?;

        let epsg = parse_epsg_from_wkt(&wkt);
        if epsg.is_none() {
            tracing::warn!(path = %prj_path.display(), "could not extract an EPSG code from .prj");
        }

        Ok(epsg)
    }

    fn read_features(
        &self,
        reader: &mut Reader<BufReader<File>, BufReader<File>>,
    ) -> Result<Vec<Feature>> {
        let mut features = Vec::new();

        for result in reader.iter_shapes_and_records() {
            let (shape, record) = result.map_err(|e| CamsectError::FormatError {
                format: "Shapefile".to_string(),
                message: format!("Failed to read feature: {e}"),
            })?;

            let index = features.len();
            let geometry = convert_shape(shape, index)?;
            let attributes = convert_record(record);

            features.push(Feature { index, geometry, attributes });
        }

        Ok(features)
    }
}

/// Convert a shapefile shape into a `geo` geometry. The NVDB layers this
/// reader serves only carry points and polylines; everything else is a
/// format error.
fn convert_shape(shape: Shape, feature: usize) -> Result<geo::Geometry<f64>> {
    match shape {
        Shape::Point(p) => Ok(geo::Geometry::Point(geo::Point::new(p.x, p.y))),
        Shape::PointZ(p) => Ok(geo::Geometry::Point(geo::Point::new(p.x, p.y))),
        Shape::PointM(p) => Ok(geo::Geometry::Point(geo::Point::new(p.x, p.y))),
        Shape::Polyline(line) => {
            let parts: Vec<geo::LineString<f64>> = line
                .parts()
                .iter()
                .map(|part| part.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>().into())
                .collect();
            Ok(geo::Geometry::MultiLineString(geo::MultiLineString::new(parts)))
        }
        Shape::PolylineZ(line) => {
            let parts: Vec<geo::LineString<f64>> = line
                .parts()
                .iter()
                .map(|part| part.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>().into())
                .collect();
            Ok(geo::Geometry::MultiLineString(geo::MultiLineString::new(parts)))
        }
        Shape::PolylineM(line) => {
            let parts: Vec<geo::LineString<f64>> = line
                .parts()
                .iter()
                .map(|part| part.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>().into())
                .collect();
            Ok(geo::Geometry::MultiLineString(geo::MultiLineString::new(parts)))
        }
        other => {
            let actual = match other {
                Shape::Polygon(_) | Shape::PolygonZ(_) | Shape::PolygonM(_) => "polygon",
                Shape::Multipoint(_) | Shape::MultipointZ(_) | Shape::MultipointM(_) => {
                    "multipoint"
                }
                Shape::Multipatch(_) => "multipatch",
                Shape::NullShape => "null shape",
                _ => "unsupported",
            };
            Err(CamsectError::UnsupportedGeometry {
                feature,
                expected: "point or polyline",
                actual: actual.to_string(),
            })
        }
    }
}

fn convert_record(record: shapefile::dbase::Record) -> HashMap<String, AttributeValue> {
    record
        .into_iter()
        .map(|(name, value)| (name, convert_dbase_value(value)))
        .collect()
}

fn convert_dbase_value(value: DbaseFieldValue) -> AttributeValue {
    match value {
        DbaseFieldValue::Character(Some(s)) => AttributeValue::Text(s.trim_end().to_string()),
        DbaseFieldValue::Character(None) => AttributeValue::Null,
        DbaseFieldValue::Numeric(Some(n)) => AttributeValue::Number(n),
        DbaseFieldValue::Numeric(None) => AttributeValue::Null,
        DbaseFieldValue::Logical(Some(b)) => AttributeValue::Boolean(b),
        DbaseFieldValue::Logical(None) => AttributeValue::Null,
        DbaseFieldValue::Float(Some(f)) => AttributeValue::Number(f as f64),
        DbaseFieldValue::Float(None) => AttributeValue::Null,
        DbaseFieldValue::Integer(i) => AttributeValue::Number(i as f64),
        DbaseFieldValue::Currency(c) => AttributeValue::Number(c),
        DbaseFieldValue::Double(d) => AttributeValue::Number(d),
        DbaseFieldValue::Date(Some(date)) => AttributeValue::Text(format!(
            "{:04}-{:02}-{:02}",
            date.year(),
            date.month(),
            date.day()
        )),
        DbaseFieldValue::Date(None) => AttributeValue::Null,
        DbaseFieldValue::DateTime(dt) => AttributeValue::Text(format!(
            "{:04}-{:02}-{:02}",
            dt.date().year(),
            dt.date().month(),
            dt.date().day()
        )),
        DbaseFieldValue::Memo(s) => AttributeValue::Text(s),
    }
}

/// Extract the EPSG code from a .prj WKT string.
///
/// The outermost AUTHORITY entry is the last one in the WKT; a PROJCS
/// carries its nested GEOGCS authority first, which is the wrong code for
/// the layer.
fn parse_epsg_from_wkt(wkt: &str) -> Option<u32> {
    const MARKER: &str = "AUTHORITY[\"EPSG\",\"";

    if let Some(start) = wkt.rfind(MARKER) {
        let code_start = start + MARKER.len();
        if let Some(end) = wkt[code_start..].find('"') {
            if let Ok(code) = wkt[code_start..code_start + end].parse::<u32>() {
                return Some(code);
            }
        }
    }

    if let Some(start) = wkt.find("EPSG:") {
        let digits: String = wkt[start + 5..]
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        if let Ok(code) = digits.parse::<u32>() {
            return Some(code);
        }
    }

    None
}
