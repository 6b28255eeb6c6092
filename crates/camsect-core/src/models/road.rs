use geo::MultiLineString;

/// One road-network feature; read once, may be matched against many
/// cameras. Shapefile polylines are multipart, so the geometry keeps all
/// parts of the source feature together.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadSegmentRecord {
    /// The road's official number
    pub road_number: String,
    /// Part of the continental European road numbering network
    pub is_european_road: bool,
    pub geometry: MultiLineString<f64>,
}

impl RoadSegmentRecord {
    pub fn new(
        road_number: impl Into<String>,
        is_european_road: bool,
        geometry: MultiLineString<f64>,
    ) -> Self {
        Self {
            road_number: road_number.into(),
            is_european_road,
            geometry,
        }
    }
}
