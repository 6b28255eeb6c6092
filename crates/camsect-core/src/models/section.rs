use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Per-camera detail carried into a section record. Native coordinates
/// and the reprojected geographic pair travel together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraDetail {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub lat: f64,
    pub lon: f64,
    pub direction: f64,
}

/// The aggregated output unit, one per distinct section key.
///
/// `road_numbers` deduplicates across matches; `names` and `cameras` keep
/// match order with duplicates allowed. `count` tracks (camera, road)
/// pairs rather than distinct cameras, so a camera matching two road
/// features contributes 2. Invariant: `count == names.len() ==
/// cameras.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRecord {
    pub id: String,
    pub count: usize,
    pub road_numbers: BTreeSet<String>,
    pub names: Vec<String>,
    pub eroad: bool,
    pub cameras: Vec<CameraDetail>,
}
