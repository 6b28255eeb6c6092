//! Typed decoding of the two NVDB source layers.
//!
//! The camera layer (Mätplats) yields point features with an id, a name,
//! and an orientation angle; the road layer (Vägnummer) yields polyline
//! features with the official road number and the European-road flag.
//! Both layers are expected in SWEREF 99 TM and are matched without any
//! reprojection, so a source that declares another CRS is rejected.

use std::path::Path;

use geo::Geometry;

use crate::error::{CamsectError, Result};
use crate::formats::shapefile::ShapefileReader;
use crate::formats::{geometry_name, Feature, FeatureCollection};
use crate::models::{CameraRecord, RoadSegmentRecord};

/// Native CRS both layers must share.
pub const SWEREF99TM_EPSG: u32 = 3006;

/// EUROPAVÄG sentinel meaning the road is not part of the European
/// network.
pub const EUROPAVAG_NOT_APPLICABLE: &str = "-1";

pub fn read_cameras(path: &Path) -> Result<Vec<CameraRecord>> {
    let collection = read_collection(path)?;
    collection.features.iter().map(camera_from_feature).collect()
}

pub fn read_roads(path: &Path) -> Result<Vec<RoadSegmentRecord>> {
    let collection = read_collection(path)?;
    collection.features.iter().map(road_from_feature).collect()
}

fn read_collection(path: &Path) -> Result<FeatureCollection> {
    let collection = ShapefileReader.read(path)?;

    if let Some(epsg) = collection.crs {
        if epsg != SWEREF99TM_EPSG {
            return Err(CamsectError::CrsMismatch {
                source_epsg: epsg,
                expected_epsg: SWEREF99TM_EPSG,
            });
        }
    }

    tracing::debug!(
        name = %collection.name,
        features = collection.features.len(),
        "read source collection"
    );

    Ok(collection)
}

fn camera_from_feature(feature: &Feature) -> Result<CameraRecord> {
    let point = match &feature.geometry {
        Geometry::Point(p) => *p,
        other => {
            return Err(CamsectError::UnsupportedGeometry {
                feature: feature.index,
                expected: "point",
                actual: geometry_name(other).to_string(),
            })
        }
    };

    let id = feature.text_attribute("ID")?;
    let name = feature.text_attribute("NAMN")?;
    let direction = feature.numeric_attribute("VINKEL")?;

    Ok(CameraRecord::new(id, name, point.x(), point.y(), direction))
}

fn road_from_feature(feature: &Feature) -> Result<RoadSegmentRecord> {
    let geometry = match &feature.geometry {
        Geometry::MultiLineString(lines) => lines.clone(),
        Geometry::LineString(line) => geo::MultiLineString::new(vec![line.clone()]),
        other => {
            return Err(CamsectError::UnsupportedGeometry {
                feature: feature.index,
                expected: "polyline",
                actual: geometry_name(other).to_string(),
            })
        }
    };

    let road_number = feature.text_attribute("HUVUDNR")?;
    let europavag = feature.text_attribute("EUROPAVÄG")?;

    Ok(RoadSegmentRecord::new(
        road_number,
        europavag != EUROPAVAG_NOT_APPLICABLE,
        geometry,
    ))
}
