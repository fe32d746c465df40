//! CSV Loader
//!
//! Reads the launch records file into a [`LaunchTable`]. Required header
//! columns are checked up front; any row that cannot be turned into a
//! record aborts the load, since the dashboard must not start on a
//! partially parsed dataset.

use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use super::error::{DatasetError, DatasetResult};
use super::types::{LaunchRecord, LaunchTable};

pub const COL_LAUNCH_SITE: &str = "Launch Site";
pub const COL_PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const COL_CLASS: &str = "class";
pub const COL_BOOSTER_CATEGORY: &str = "Booster Version Category";

const REQUIRED_COLUMNS: [&str; 4] = [
    COL_LAUNCH_SITE,
    COL_PAYLOAD_MASS,
    COL_CLASS,
    COL_BOOSTER_CATEGORY,
];

/// Row shape as it appears in the file; unknown columns are ignored
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: f64,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
    #[serde(rename = "Flight Number", default)]
    flight_number: Option<u32>,
    #[serde(rename = "Booster Version", default)]
    booster_version: Option<String>,
}

impl RawRow {
    fn into_record(self, line: u64) -> DatasetResult<LaunchRecord> {
        let malformed = |reason: String| DatasetError::Malformed { line, reason };

        if !self.payload_mass_kg.is_finite() || self.payload_mass_kg < 0.0 {
            return Err(malformed(format!(
                "payload mass must be a non-negative number, got {}",
                self.payload_mass_kg
            )));
        }

        let class = if self.class == 0.0 {
            0
        } else if self.class == 1.0 {
            1
        } else {
            return Err(malformed(format!("class must be 0 or 1, got {}", self.class)));
        };

        let launch_site = self.launch_site.trim().to_string();
        if launch_site.is_empty() {
            return Err(malformed("launch site is empty".to_string()));
        }

        Ok(LaunchRecord {
            launch_site,
            payload_mass_kg: self.payload_mass_kg,
            class,
            booster_version_category: self.booster_version_category.trim().to_string(),
            flight_number: self.flight_number,
            booster_version: self
                .booster_version
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
        })
    }
}

/// Load the launch table from a CSV file
pub fn load_csv(path: &Path) -> DatasetResult<LaunchTable> {
    let file = std::fs::File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let table = read_csv(file)?;

    tracing::info!(
        path = %path.display(),
        records = table.len(),
        "Loaded launch records"
    );

    Ok(table)
}

/// Load the launch table from any reader (useful for testing)
pub fn read_csv<R: Read>(reader: R) -> DatasetResult<LaunchTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DatasetError::MissingColumn(column.to_string()));
        }
    }

    let mut records = Vec::new();
    let mut raw = csv::StringRecord::new();

    while reader.read_record(&mut raw)? {
        let line = raw.position().map(|p| p.line()).unwrap_or_default();

        let row: RawRow = raw
            .deserialize(Some(&headers))
            .map_err(|e| DatasetError::Malformed {
                line,
                reason: e.to_string(),
            })?;

        records.push(row.into_record(line)?);
    }

    let table = LaunchTable::new(records);
    if let Some(bounds) = table.payload_bounds() {
        tracing::debug!(
            min_kg = bounds.min,
            max_kg = bounds.max,
            sites = ?table.sites(),
            "Computed payload bounds"
        );
    }

    Ok(table)
}
