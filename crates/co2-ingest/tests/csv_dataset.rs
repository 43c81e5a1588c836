//! Integration tests for loading the emissions CSV from disk.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use co2_ingest::{IngestError, read_dataset};
use co2_model::Sector;

fn write_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write csv");
    path
}

#[test]
fn loads_rows_and_filter_options() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(
        &dir,
        "co2.csv",
        "country,region,income_level,year,co2,coal_co2,oil_co2,gas_co2,cement_co2\n\
         Germany,Europe,High income,2019,700.5,250,230,180,20\n\
         India,South Asia,Lower middle income,2019,2600,1800,600,150,50\n\
         Kosovo,,Upper middle income,2019,8,,,,\n",
    );

    let loaded = read_dataset(&path).expect("load dataset");
    let dataset = &loaded.dataset;

    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.regions(), ["Europe", "South Asia"]);
    assert_eq!(
        dataset.income_levels(),
        ["High income", "Lower middle income", "Upper middle income"]
    );
    let kosovo = &dataset.records()[2];
    assert_eq!(kosovo.region, "");
    assert_eq!(kosovo.sector(Sector::Gas), 0.0);
    assert_eq!(loaded.report.values_defaulted, 4);
    assert_eq!(loaded.report.rows_skipped, 0);
}

#[test]
fn rows_without_year_are_skipped() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(
        &dir,
        "co2.csv",
        "country,region,income_level,year,co2\nA,R1,I1,,1\nB,R1,I1,2001,2\n\nC,R1,I1,n/a,3\n",
    );

    let loaded = read_dataset(&path).expect("load dataset");

    assert_eq!(loaded.dataset.len(), 1);
    assert_eq!(loaded.report.rows_read, 3);
    assert_eq!(loaded.report.rows_skipped, 2);
    assert_eq!(loaded.dataset.year_bounds().expect("bounds").first(), 2001);
}

#[test]
fn malformed_totals_default_to_zero() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(
        &dir,
        "co2.csv",
        "country,region,income_level,year,co2\nA,R1,I1,2000,oops\n",
    );

    let loaded = read_dataset(&path).expect("load dataset");

    assert_eq!(loaded.dataset.records()[0].co2, 0.0);
}

#[test]
fn missing_required_column_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(&dir, "co2.csv", "country,region,year,co2\nA,R1,2000,1\n");

    let error = read_dataset(&path).expect_err("missing income_level");

    assert!(matches!(
        error,
        IngestError::MissingColumn {
            column: "income_level",
            ..
        }
    ));
}

#[test]
fn header_only_file_loads_an_empty_dataset() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(&dir, "co2.csv", "country,region,income_level,year,co2\n");

    let loaded = read_dataset(&path).expect("load dataset");

    assert!(loaded.dataset.is_empty());
    assert_eq!(loaded.dataset.year_bounds(), None);
    assert_eq!(loaded.report.rows_read, 0);
}

#[test]
fn file_without_any_year_loads_an_empty_dataset() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(
        &dir,
        "co2.csv",
        "country,region,income_level,year,co2\nA,R1,I1,,1\nB,R1,I1,soon,2\n",
    );

    let loaded = read_dataset(&path).expect("load dataset");

    assert!(loaded.dataset.is_empty());
    assert_eq!(loaded.report.rows_skipped, 2);
    assert!(loaded.dataset.regions().is_empty());
}

#[test]
fn missing_file_reports_path() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("absent.csv");

    let error = read_dataset(&path).expect_err("missing file");

    assert!(error.to_string().contains("absent.csv"));
}
