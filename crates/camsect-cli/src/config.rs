//! Extraction configuration
//!
//! Precedence: CLI flags > config file > built-in defaults. The defaults
//! are the layer names Trafikverket's Lastkajen hands out for the NVDB
//! Vägnummer + Mätplats selection.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::ExtractArgs;

pub const DEFAULT_CAMERA_FILE: &str = "geo/trafikkameror_SEATKATK_Matplats.shp";
pub const DEFAULT_ROAD_FILE: &str = "geo/vagnummerNVDB_DKVagnummer.shp";

/// Resolved extraction settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractConfig {
    pub cameras: PathBuf,
    pub roads: PathBuf,
    pub tolerance: f64,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            cameras: PathBuf::from(DEFAULT_CAMERA_FILE),
            roads: PathBuf::from(DEFAULT_ROAD_FILE),
            tolerance: camsect_geo::matcher::DEFAULT_TOLERANCE,
        }
    }
}

/// On-disk configuration file; every field optional.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    cameras: Option<PathBuf>,
    roads: Option<PathBuf>,
    tolerance: Option<f64>,
}

impl ExtractConfig {
    pub fn resolve(args: &ExtractArgs) -> Result<Self> {
        let file = match &args.config {
            Some(path) => load_config_file(path)?,
            None => ConfigFile::default(),
        };
        let defaults = Self::default();

        Ok(Self {
            cameras: args
                .cameras
                .clone()
                .or(file.cameras)
                .unwrap_or(defaults.cameras),
            roads: args.roads.clone().or(file.roads).unwrap_or(defaults.roads),
            tolerance: args
                .tolerance
                .or(file.tolerance)
                .unwrap_or(defaults.tolerance),
        })
    }
}

fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}
