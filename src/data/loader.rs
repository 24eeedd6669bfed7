use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord};
use crate::config::ColumnNames;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Startup-fatal failures while reading the launch table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dataset file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV is missing required column '{column}'")]
    MissingColumn { column: String },

    #[error("CSV row {row}, column '{column}': invalid value '{value}'")]
    Malformed {
        row: usize,
        column: String,
        value: String,
    },

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV contains a header but no launch records")]
    Empty,
}

impl LoadError {
    /// Whether the header row lacked something we need.
    pub fn is_schema_mismatch(&self) -> bool {
        matches!(self, LoadError::MissingColumn { .. })
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the launch table from a CSV file on disk.
pub fn load_file(path: &Path, columns: &ColumnNames) -> Result<LaunchDataset, LoadError> {
    let file = std::fs::File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let dataset = load_reader(file, columns)?;
    log::info!(
        "Loaded {} launches from {} ({} sites, payload {:?} kg)",
        dataset.len(),
        path.display(),
        dataset.sites().len(),
        dataset.payload_bounds()
    );
    Ok(dataset)
}

/// CSV layout: header row with column names, one launch per row.
/// Only the four configured columns are read; everything else is ignored.
pub fn load_reader<R: Read>(reader: R, columns: &ColumnNames) -> Result<LaunchDataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let site_idx = column_index(&headers, &columns.launch_site)?;
    let mass_idx = column_index(&headers, &columns.payload_mass)?;
    let booster_idx = column_index(&headers, &columns.booster_version)?;
    let class_idx = column_index(&headers, &columns.outcome_class)?;

    let mut records = Vec::new();

    for (i, result) in reader.records().enumerate() {
        // 1-based, counting the header as row 1, to match what editors show.
        let row = i + 2;
        let record = result?;
        let cell = |idx: usize| record.get(idx).unwrap_or("");

        let launch_site = required_text(cell(site_idx), row, &columns.launch_site)?;
        let payload_mass_kg = parse_payload(cell(mass_idx), row, &columns.payload_mass)?;
        let booster_version = required_text(cell(booster_idx), row, &columns.booster_version)?;
        let outcome_class = parse_outcome(cell(class_idx), row, &columns.outcome_class)?;

        records.push(LaunchRecord {
            launch_site,
            payload_mass_kg,
            booster_version,
            outcome_class,
        });
    }

    log::debug!("Parsed {} CSV rows", records.len());
    LaunchDataset::from_records(records).ok_or(LoadError::Empty)
}

// -- Cell helpers --

fn column_index(headers: &[String], name: &str) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| LoadError::MissingColumn {
            column: name.to_string(),
        })
}

fn malformed(row: usize, column: &str, value: &str) -> LoadError {
    LoadError::Malformed {
        row,
        column: column.to_string(),
        value: value.to_string(),
    }
}

fn required_text(s: &str, row: usize, column: &str) -> Result<String, LoadError> {
    if s.is_empty() {
        return Err(malformed(row, column, s));
    }
    Ok(s.to_string())
}

fn parse_payload(s: &str, row: usize, column: &str) -> Result<f64, LoadError> {
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(malformed(row, column, s)),
    }
}

/// `1` / `0` (also `1.0`, `0.0` as written by some exporters) or
/// `true` / `false`.
fn parse_outcome(s: &str, row: usize, column: &str) -> Result<bool, LoadError> {
    if let Ok(v) = s.parse::<f64>() {
        if v == 1.0 {
            return Ok(true);
        }
        if v == 0.0 {
            return Ok(false);
        }
    }
    match s.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(malformed(row, column, s)),
    }
}
