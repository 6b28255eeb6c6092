//! Camsect Geo - proximity matching and CRS transformation
//!
//! The spatial side of the pipeline: deciding which road features a
//! camera belongs to, and turning native SWEREF 99 TM coordinates into
//! geographic WGS 84 for the output.

pub mod matcher;
pub mod transform;
