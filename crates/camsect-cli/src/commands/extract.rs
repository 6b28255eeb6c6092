//! Extract command implementation
//!
//! The whole batch job lives here: read both layers, scan every camera
//! against every road feature, fold the match pairs into sections, and
//! serialize the mapping.

use crate::cli::ExtractArgs;
use crate::config::ExtractConfig;
use crate::output::OutputWriter;
use crate::progress;
use anyhow::{Context, Result};
use camsect_core::aggregate::SectionAggregator;
use camsect_core::source;
use camsect_geo::matcher::RoadMatcher;
use camsect_geo::transform::SwerefProjector;
use indicatif::ProgressBar;
use std::fs;

pub fn execute(args: ExtractArgs, output: &OutputWriter) -> Result<()> {
    let config = ExtractConfig::resolve(&args)?;

    let loading = if output.is_json() {
        ProgressBar::hidden()
    } else {
        progress::spinner("Reading source layers")
    };
    let cameras = source::read_cameras(&config.cameras)
        .with_context(|| format!("failed to read camera source {}", config.cameras.display()))?;
    let roads = source::read_roads(&config.roads)
        .with_context(|| format!("failed to read road source {}", config.roads.display()))?;
    loading.finish_and_clear();

    output.info(format!(
        "Loaded {} cameras and {} road features",
        cameras.len(),
        roads.len()
    ));

    let matcher = RoadMatcher::new(config.tolerance);
    let projector = SwerefProjector::new()?;

    let bar = if output.is_json() {
        ProgressBar::hidden()
    } else {
        progress::scan_bar(cameras.len() as u64)
    };

    let mut aggregator = SectionAggregator::new();
    let mut matched = 0usize;
    let mut unmatched = 0usize;
    let mut pairs = 0usize;

    for camera in &cameras {
        let matches = matcher.matching_segments(camera, &roads);
        if matches.is_empty() {
            tracing::debug!(id = %camera.id, name = %camera.name, "no road within tolerance");
            unmatched += 1;
            bar.inc(1);
            continue;
        }

        let lonlat = projector.to_lonlat(camera.native_x, camera.native_y)?;
        matched += 1;
        for road in matches {
            aggregator.fold(camera, road, lonlat);
            pairs += 1;
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    let sections = aggregator.into_sections();

    output.success(format!(
        "Folded {pairs} match pairs from {matched} cameras into {} sections",
        sections.len()
    ));
    if unmatched > 0 {
        output.warning(format!(
            "{unmatched} cameras matched no road within {} m and were dropped",
            matcher.tolerance()
        ));
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&sections)?
    } else {
        serde_json::to_string(&sections)?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            output.info(format!("Wrote section mapping to {}", path.display()));
        }
        None => println!("{json}"),
    }

    Ok(())
}
