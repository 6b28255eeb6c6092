//! Camera-to-road proximity matching

use camsect_core::models::{CameraRecord, RoadSegmentRecord};
use geo::{Distance, Euclidean};

/// Matching tolerance in SWEREF 99 TM meters. One meter is more than
/// enough to land on the road line; the cameras are placed accurately.
pub const DEFAULT_TOLERANCE: f64 = 1.0;

/// Matches cameras against road features by proximity. A road matches
/// when its line comes within `tolerance` of the camera point, which is
/// the same predicate as intersecting a closed disc of that radius with
/// the line.
#[derive(Debug, Clone, Copy)]
pub struct RoadMatcher {
    tolerance: f64,
}

impl RoadMatcher {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Every road feature within tolerance of the camera. Full scan over
    /// the whole sequence; the result is exhaustive, not first-match.
    pub fn matching_segments<'a>(
        &self,
        camera: &CameraRecord,
        roads: &'a [RoadSegmentRecord],
    ) -> Vec<&'a RoadSegmentRecord> {
        roads
            .iter()
            .filter(|road| self.is_match(camera, road))
            .collect()
    }

    fn is_match(&self, camera: &CameraRecord, road: &RoadSegmentRecord) -> bool {
        road.geometry
            .iter()
            .any(|part| Euclidean.distance(&camera.geometry, part) <= self.tolerance)
    }
}

impl Default for RoadMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE)
    }
}
