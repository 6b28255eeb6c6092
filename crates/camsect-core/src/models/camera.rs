use geo::Point;

/// One speed-camera installation, read once from the camera source and
/// immutable thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraRecord {
    /// Source-assigned, globally unique identifier
    pub id: String,
    pub name: String,
    /// Easting in the native projected CRS (SWEREF 99 TM)
    pub native_x: f64,
    /// Northing in the native projected CRS
    pub native_y: f64,
    /// Camera orientation angle
    pub direction: f64,
    pub geometry: Point<f64>,
}

impl CameraRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        native_x: f64,
        native_y: f64,
        direction: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            native_x,
            native_y,
            direction,
            geometry: Point::new(native_x, native_y),
        }
    }

    /// Section identifier: the leading five characters of the id.
    /// Shorter ids yield shorter keys, accepted as-is.
    pub fn section_key(&self) -> String {
        self.id.chars().take(5).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_key_takes_five_characters() {
        let camera = CameraRecord::new("ABCDE001", "Testvägen", 0.0, 0.0, 90.0);
        assert_eq!(camera.section_key(), "ABCDE");
    }

    #[test]
    fn short_id_yields_short_key() {
        let camera = CameraRecord::new("AB1", "Kort", 0.0, 0.0, 0.0);
        assert_eq!(camera.section_key(), "AB1");
    }

    #[test]
    fn section_key_respects_char_boundaries() {
        let camera = CameraRecord::new("ÅÄÖÅÄ42", "Norrland", 0.0, 0.0, 0.0);
        assert_eq!(camera.section_key(), "ÅÄÖÅÄ");
    }

    #[test]
    fn geometry_mirrors_native_coordinates() {
        let camera = CameraRecord::new("X", "X", 674_032.0, 6_580_822.0, 0.0);
        assert_eq!(camera.geometry.x(), 674_032.0);
        assert_eq!(camera.geometry.y(), 6_580_822.0);
    }
}
