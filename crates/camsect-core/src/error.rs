//! Error types for Camsect

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CamsectError {
    // Source format errors
    #[error("{format} error: {message}")]
    FormatError { format: String, message: String },

    #[error("Invalid path {path}: {reason}")]
    InvalidPath { path: PathBuf, reason: String },

    // Attribute errors
    #[error("Feature {feature} is missing required attribute \"{field}\"")]
    MissingAttribute { field: String, feature: usize },

    #[error("Feature {feature} has an unusable \"{field}\" attribute: {reason}")]
    InvalidAttribute {
        field: String,
        feature: usize,
        reason: String,
    },

    // Geometry errors
    #[error("Feature {feature} has {actual} geometry, expected {expected}")]
    UnsupportedGeometry {
        feature: usize,
        expected: &'static str,
        actual: String,
    },

    #[error("CRS mismatch: source is EPSG:{source_epsg}, expected EPSG:{expected_epsg}")]
    CrsMismatch { source_epsg: u32, expected_epsg: u32 },

    // Projection errors
    #[error("Projection failed: {reason}")]
    Projection { reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CamsectError>;
