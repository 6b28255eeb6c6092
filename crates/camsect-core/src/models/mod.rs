//! Domain models

pub mod camera;
pub mod road;
pub mod section;

pub use camera::CameraRecord;
pub use road::RoadSegmentRecord;
pub use section::{CameraDetail, SectionRecord};
