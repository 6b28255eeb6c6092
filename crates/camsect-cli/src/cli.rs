use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Camsect - speed-camera sections from NVDB shapefiles
#[derive(Parser, Debug)]
#[command(name = "camsect")]
#[command(about = "Groups speed-camera installations into road sections", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Emit status messages as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Match cameras to road features and write the section mapping
    Extract(ExtractArgs),

    /// Show what a source shapefile contains
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Camera measurement-site shapefile (NVDB Mätplats layer);
    /// defaults to geo/trafikkameror_SEATKATK_Matplats.shp
    #[arg(long, value_name = "FILE")]
    pub cameras: Option<PathBuf>,

    /// Road-number shapefile (NVDB Vägnummer layer);
    /// defaults to geo/vagnummerNVDB_DKVagnummer.shp
    #[arg(long, value_name = "FILE")]
    pub roads: Option<PathBuf>,

    /// Matching tolerance around each camera, in meters (default 1.0)
    #[arg(long, value_name = "METERS")]
    pub tolerance: Option<f64>,

    /// Read source paths and tolerance from a TOML file; explicit flags win
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the section mapping here instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Shapefile to inspect
    pub path: PathBuf,
}
