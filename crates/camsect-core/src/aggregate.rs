//! Section aggregation
//!
//! Folds (camera, matched road) pairs into per-section records. The
//! section key is the leading five characters of the camera id, so every
//! camera of one installation cluster lands in the same record no matter
//! which road features it matched. Two cameras sharing an id prefix merge
//! even when geographically distant.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use crate::models::{CameraDetail, CameraRecord, RoadSegmentRecord, SectionRecord};

/// Accumulates match pairs for one run. Construct one per run; the
/// mapping is owned here and handed out by [`Self::into_sections`].
#[derive(Debug, Default)]
pub struct SectionAggregator {
    sections: BTreeMap<String, SectionRecord>,
}

impl SectionAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one (camera, road) match pair. A camera matching several road
    /// features is folded once per feature and counted once per feature.
    /// `lonlat` is the camera's reprojected position, computed once per
    /// camera by the caller.
    pub fn fold(&mut self, camera: &CameraRecord, road: &RoadSegmentRecord, lonlat: (f64, f64)) {
        let (lon, lat) = lonlat;
        let detail = CameraDetail {
            name: camera.name.clone(),
            x: camera.native_x,
            y: camera.native_y,
            lat,
            lon,
            direction: camera.direction,
        };

        match self.sections.entry(camera.section_key()) {
            Entry::Occupied(mut occupied) => {
                let section = occupied.get_mut();
                section.count += 1;
                section.road_numbers.insert(road.road_number.clone());
                section.names.push(camera.name.clone());
                section.eroad |= road.is_european_road;
                section.cameras.push(detail);
            }
            Entry::Vacant(vacant) => {
                let id = vacant.key().clone();
                vacant.insert(SectionRecord {
                    id,
                    count: 1,
                    road_numbers: BTreeSet::from([road.road_number.clone()]),
                    names: vec![camera.name.clone()],
                    eroad: road.is_european_road,
                    cameras: vec![detail],
                });
            }
        }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Hand out the finished mapping. `BTreeMap` keeps the serialization
    /// order deterministic, so identical inputs serialize identically.
    pub fn into_sections(self) -> BTreeMap<String, SectionRecord> {
        self.sections
    }
}
