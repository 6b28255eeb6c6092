//! Camsect Core - domain models, source decoding, and section aggregation
//!
//! This crate contains everything that does not touch geometry math: the
//! camera and road record types, the shapefile source adapter, and the
//! fold that groups matched cameras into sections.

pub mod aggregate;
pub mod error;
pub mod formats;
pub mod models;
pub mod source;

pub use error::{CamsectError, Result};
