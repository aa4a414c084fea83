use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::input::InputError;
use crate::input::reader::open_maybe_gz;
use crate::model::{EnergyCategory, Installation};

/// One CSV row as published; every column is optional so that a malformed
/// row can be reported and skipped instead of aborting the load.
#[derive(Debug, Deserialize)]
struct RawInstallation {
    #[serde(default)]
    canton_name: String,
    #[serde(default)]
    energy_source_level_2: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    electrical_capacity: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    production: Option<f64>,
    #[serde(default)]
    commissioning_date: Option<String>,
    #[serde(default, alias = "lat", deserialize_with = "csv::invalid_option")]
    latitude: Option<f64>,
    #[serde(default, alias = "lon", deserialize_with = "csv::invalid_option")]
    longitude: Option<f64>,
    #[serde(default)]
    municipality: Option<String>,
    #[serde(default)]
    company: Option<String>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    technology: Option<String>,
}

#[derive(Debug, Error, PartialEq)]
enum RowIssue {
    #[error("empty canton_name")]
    EmptyCanton,
    #[error("unknown energy category {0:?}")]
    UnknownCategory(String),
    #[error("{column} must be a non-negative number (got {value})")]
    InvalidAmount { column: &'static str, value: f64 },
}

impl RawInstallation {
    fn into_installation(self) -> Result<Installation, RowIssue> {
        let canton_name = self.canton_name.trim().to_string();
        if canton_name.is_empty() {
            return Err(RowIssue::EmptyCanton);
        }
        let category = EnergyCategory::parse(&self.energy_source_level_2)
            .ok_or_else(|| RowIssue::UnknownCategory(self.energy_source_level_2.clone()))?;
        let latitude = self.latitude.filter(|v| v.is_finite());
        let longitude = self.longitude.filter(|v| v.is_finite());
        let electrical_capacity = amount("electrical_capacity", self.electrical_capacity)?;
        let production = amount("production", self.production)?;

        let commissioning_date = match self.commissioning_date.as_deref() {
            Some(raw) => {
                let parsed = parse_commissioning_date(raw);
                if parsed.is_none() && !raw.trim().is_empty() {
                    debug!(value = raw, "unparseable commissioning_date treated as missing");
                }
                parsed
            }
            None => None,
        };

        Ok(Installation {
            canton_name,
            energy_source_level_2: category,
            electrical_capacity,
            production,
            commissioning_date,
            latitude,
            longitude,
            municipality: self.municipality.unwrap_or_default(),
            company: self.company.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            technology: self.technology.unwrap_or_default(),
        })
    }
}

/// Empty cells read as zero; negative or non-finite values reject the row.
fn amount(column: &'static str, value: Option<f64>) -> Result<f64, RowIssue> {
    match value {
        None => Ok(0.0),
        Some(v) if v.is_finite() && v >= 0.0 => Ok(v),
        Some(v) => Err(RowIssue::InvalidAmount { column, value: v }),
    }
}

/// Accepts `YYYY-MM-DD`, ignoring any trailing time component.
pub fn parse_commissioning_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

pub fn load_installations(path: &Path) -> Result<Vec<Installation>, InputError> {
    info!(path = %path.display(), "reading installations");
    let reader = open_maybe_gz(path)?;
    parse_installations(reader)
}

pub fn parse_installations<R: Read>(reader: R) -> Result<Vec<Installation>, InputError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for (idx, row) in csv_reader.deserialize::<RawInstallation>().enumerate() {
        // header is line 1
        let line_no = idx + 2;
        let raw = row?;
        match raw.into_installation() {
            Ok(record) => records.push(record),
            Err(issue) => {
                skipped += 1;
                warn!(line = line_no, %issue, "skipping installation row");
            }
        }
    }

    let undated = records
        .iter()
        .filter(|r| r.commissioning_date.is_none())
        .count();
    let unplaced = records.iter().filter(|r| r.position().is_none()).count();
    info!(
        records = records.len(),
        skipped, undated, unplaced, "installations loaded"
    );
    Ok(records)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/installations.rs"]
mod tests;
