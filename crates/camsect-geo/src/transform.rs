//! SWEREF 99 TM to WGS 84 transformation

use camsect_core::error::{CamsectError, Result};
use proj::Proj;

pub const SWEREF99TM: &str = "EPSG:3006";
pub const WGS84: &str = "EPSG:4326";

/// Inverse projection from native SWEREF 99 TM coordinates to geographic
/// longitude/latitude. The transform is built once and reused for every
/// camera; conversion itself is pure and deterministic, so reprojecting
/// the same point twice yields bit-identical results.
pub struct SwerefProjector {
    to_geographic: Proj,
}

impl SwerefProjector {
    pub fn new() -> Result<Self> {
        let to_geographic = Proj::new_known_crs(SWEREF99TM, WGS84, None).map_err(|e| {
            CamsectError::Projection {
                reason: format!("failed to create {SWEREF99TM} -> {WGS84} transform: {e}"),
            }
        })?;

        Ok(Self { to_geographic })
    }

    /// Geographic (lon, lat) for a native (x, y). `new_known_crs`
    /// normalizes axis order, so the pair comes back longitude first.
    pub fn to_lonlat(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        self.to_geographic
            .convert((x, y))
            .map_err(|e| CamsectError::Projection {
                reason: format!("projection failed for ({x}, {y}): {e}"),
            })
    }
}
