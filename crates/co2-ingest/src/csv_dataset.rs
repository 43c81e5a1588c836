//! Load the emissions CSV into a [`Dataset`].
//!
//! Headers are matched case-insensitively after trimming whitespace and a
//! leading byte-order mark. `country`, `region`, `income_level`, `year` and
//! `co2` are required; the sector columns are optional and default to zero.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info, info_span, warn};

use co2_model::{Dataset, Record, Sector};

use crate::error::{IngestError, Result};
use crate::numbers::{parse_f64, parse_year};

/// Counters collected while loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Data rows encountered (blank lines excluded).
    pub rows_read: usize,
    /// Rows dropped because the year could not be parsed.
    pub rows_skipped: usize,
    /// Numeric cells that were blank or malformed and replaced by zero.
    /// Columns absent from the header are not counted.
    pub values_defaulted: usize,
}

#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub dataset: Dataset,
    pub report: LoadReport,
}

#[derive(Debug, Clone, Copy)]
struct Columns {
    country: usize,
    region: usize,
    income_level: usize,
    year: usize,
    co2: usize,
    sectors: [Option<usize>; 4],
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_ascii_lowercase()
}

fn normalize_cell(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}

fn find_column(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|header| header == name)
}

fn resolve_columns(headers: &StringRecord, source_name: &str) -> Result<Columns> {
    let headers: Vec<String> = headers.iter().map(normalize_header).collect();
    let required = |column: &'static str| {
        find_column(&headers, column).ok_or_else(|| IngestError::MissingColumn {
            source_name: source_name.to_string(),
            column,
        })
    };
    let mut sectors = [None; 4];
    for sector in Sector::ALL {
        sectors[sector.index()] = find_column(&headers, sector.column());
    }
    Ok(Columns {
        country: required("country")?,
        region: required("region")?,
        income_level: required("income_level")?,
        year: required("year")?,
        co2: required("co2")?,
        sectors,
    })
}

fn text_cell(record: &StringRecord, index: usize) -> String {
    record.get(index).map(normalize_cell).unwrap_or("").to_string()
}

fn numeric_cell(record: &StringRecord, index: Option<usize>, report: &mut LoadReport) -> f64 {
    let Some(index) = index else {
        return 0.0;
    };
    match record.get(index).and_then(parse_f64) {
        Some(value) => value,
        None => {
            report.values_defaulted += 1;
            0.0
        }
    }
}

/// Read the dataset from any reader. `source_name` is used in errors and logs.
pub fn read_dataset_from_reader<R: Read>(reader: R, source_name: &str) -> Result<LoadedDataset> {
    let span = info_span!("load_dataset", source = %source_name);
    let _guard = span.enter();

    let csv_error = |source: csv::Error| IngestError::Csv {
        source_name: source_name.to_string(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = reader.headers().map_err(csv_error)?.clone();
    let columns = resolve_columns(&headers, source_name)?;
    let has_sectors = columns.sectors.iter().filter(|column| column.is_some()).count();
    debug!(columns = headers.len(), sector_columns = has_sectors, "resolved header");

    let mut report = LoadReport::default();
    let mut records = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        let row = row.map_err(csv_error)?;
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        report.rows_read += 1;
        let Some(year) = row.get(columns.year).and_then(parse_year) else {
            report.rows_skipped += 1;
            warn!(line = idx + 2, "skipping row without a valid year");
            continue;
        };
        let mut record = Record::new(
            text_cell(&row, columns.country),
            text_cell(&row, columns.region),
            text_cell(&row, columns.income_level),
            year,
            numeric_cell(&row, Some(columns.co2), &mut report),
        );
        for sector in Sector::ALL {
            let value = numeric_cell(&row, columns.sectors[sector.index()], &mut report);
            *record.sector_mut(sector) = value;
        }
        records.push(record);
    }

    let dataset = Dataset::new(records);
    let years = dataset.year_bounds();
    if years.is_none() {
        warn!("dataset has no rows with a year");
    }
    info!(
        rows = dataset.len(),
        skipped = report.rows_skipped,
        defaulted = report.values_defaulted,
        regions = dataset.regions().len(),
        income_levels = dataset.income_levels().len(),
        first_year = years.map(|range| range.first()),
        last_year = years.map(|range| range.last()),
        "dataset loaded"
    );
    Ok(LoadedDataset { dataset, report })
}

/// Read the dataset from a CSV file.
pub fn read_dataset(path: &Path) -> Result<LoadedDataset> {
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_dataset_from_reader(file, &path.display().to_string())
}
