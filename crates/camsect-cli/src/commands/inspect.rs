//! Inspect command implementation

use crate::cli::InspectArgs;
use crate::output::OutputWriter;
use anyhow::{Context, Result};
use camsect_core::formats::shapefile::ShapefileReader;
use camsect_core::formats::geometry_name;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
struct InspectReport {
    name: String,
    crs: Option<u32>,
    feature_count: usize,
    geometry_types: BTreeMap<String, usize>,
    attribute_fields: Vec<String>,
}

pub fn execute(args: InspectArgs, output: &OutputWriter) -> Result<()> {
    let collection = ShapefileReader
        .read(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;

    let mut geometry_types: BTreeMap<String, usize> = BTreeMap::new();
    for feature in &collection.features {
        *geometry_types
            .entry(geometry_name(&feature.geometry).to_string())
            .or_insert(0) += 1;
    }

    let mut attribute_fields: Vec<String> = collection
        .features
        .first()
        .map(|f| f.attributes.keys().cloned().collect())
        .unwrap_or_default();
    attribute_fields.sort();

    let report = InspectReport {
        name: collection.name,
        crs: collection.crs,
        feature_count: collection.features.len(),
        geometry_types,
        attribute_fields,
    };

    if output.is_json() {
        output.result(&report)?;
    } else {
        output.section(format!("Source: {}", report.name));
        output.kv("Features", report.feature_count);
        output.kv(
            "CRS",
            report
                .crs
                .map(|c| format!("EPSG:{c}"))
                .unwrap_or_else(|| "unknown".to_string()),
        );
        for (kind, count) in &report.geometry_types {
            output.kv(kind, count);
        }
        output.kv("Attributes", report.attribute_fields.join(", "));
    }

    Ok(())
}
