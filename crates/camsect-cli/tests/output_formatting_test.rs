//! Integration tests for CLI output behavior
//!
//! These tests drive the built `camsect` binary and verify the output
//! contract: the artifact and JSON reports go to stdout, status and
//! errors go to stderr, and a failed run leaves stdout empty.

use shapefile::dbase::{FieldValue, Record, TableWriterBuilder};
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

const SWEREF99TM_WKT: &str = r#"PROJCS["SWEREF99 TM",GEOGCS["SWEREF99",DATUM["SWEREF99",SPHEROID["GRS 1980",6378137,298.257222101]],PRIMEM["Greenwich",0],UNIT["degree",0.0174532925199433],AUTHORITY["EPSG","4619"]],PROJECTION["Transverse_Mercator"],PARAMETER["latitude_of_origin",0],PARAMETER["central_meridian",15],PARAMETER["scale_factor",0.9996],PARAMETER["false_easting",500000],PARAMETER["false_northing",0],UNIT["metre",1],AUTHORITY["EPSG","3006"]]"#;

fn camsect_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove 'deps' directory
    path.push("camsect");
    path
}

fn write_camera_layer(dir: &Path) -> PathBuf {
    let path = dir.join("matplats.shp");
    let table = TableWriterBuilder::new()
        .add_character_field("ID".try_into().unwrap(), 30)
        .add_character_field("NAMN".try_into().unwrap(), 60)
        .add_numeric_field("VINKEL".try_into().unwrap(), 10, 2);

    {
        let mut writer = shapefile::Writer::from_path(&path, table).unwrap();
        let mut record = Record::default();
        record.insert(
            "ID".to_string(),
            FieldValue::Character(Some("ABCDE001".to_string())),
        );
        record.insert(
            "NAMN".to_string(),
            FieldValue::Character(Some("Testvagen".to_string())),
        );
        record.insert("VINKEL".to_string(), FieldValue::Numeric(Some(135.0)));
        writer
            .write_shape_and_record(&shapefile::Point::new(674_032.0, 6_580_822.0), &record)
            .unwrap();
    }
    std::fs::write(path.with_extension("prj"), SWEREF99TM_WKT).unwrap();

    path
}

#[test]
fn inspect_json_emits_a_parseable_report() {
    let dir = TempDir::new().unwrap();
    let shp = write_camera_layer(dir.path());

    let output = Command::new(camsect_bin())
        .args(["inspect", shp.to_str().unwrap(), "--json"])
        .output()
        .expect("failed to run camsect");

    assert!(output.status.success(), "inspect should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let report: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout should be valid JSON");

    assert_eq!(report["name"], "matplats");
    assert_eq!(report["crs"], 3006);
    assert_eq!(report["feature_count"], 1);
    assert_eq!(report["geometry_types"]["point"], 1);

    let fields: Vec<&str> = report["attribute_fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["ID", "NAMN", "VINKEL"]);
}

#[test]
fn extract_fails_cleanly_when_a_source_is_missing() {
    let output = Command::new(camsect_bin())
        .args([
            "extract",
            "--cameras",
            "/nonexistent/matplats.shp",
            "--roads",
            "/nonexistent/vagnummer.shp",
        ])
        .output()
        .expect("failed to run camsect");

    assert!(!output.status.success(), "extract should fail");
    assert!(
        output.stdout.is_empty(),
        "no partial mapping may reach stdout"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("/nonexistent/matplats.shp"));
}

#[test]
fn inspect_rejects_a_missing_file() {
    let output = Command::new(camsect_bin())
        .args(["inspect", "/nonexistent/layer.shp"])
        .output()
        .expect("failed to run camsect");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("/nonexistent/layer.shp"));
}
