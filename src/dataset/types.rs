//! Core data types for the launch dashboard
//!
//! This module defines the fundamental types shared by every layer:
//! - `LaunchRecord`: One launch row from the dataset
//! - `LaunchTable`: The immutable, fully loaded table
//! - `SiteSelector`: Dropdown selection (`ALL` or one site)
//! - `PayloadRange`: Inclusive payload mass interval in kilograms

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{DatasetError, DatasetResult};

/// Wire value of the "every site" dropdown option
pub const ALL_SITES: &str = "ALL";

/// Launch sites offered by the site dropdown, in display order
pub const KNOWN_SITES: [&str; 4] = ["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"];

/// A single launch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LaunchRecord {
    /// Launch pad label, e.g. "KSC LC-39A"
    pub launch_site: String,
    /// Payload mass in kilograms
    pub payload_mass_kg: f64,
    /// Outcome class: 1 = success, 0 = failure
    pub class: u8,
    /// Booster variant label, e.g. "FT"
    pub booster_version_category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booster_version: Option<String>,
}

impl LaunchRecord {
    /// Create a record with the four required fields
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        class: u8,
        booster_version_category: impl Into<String>,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass_kg,
            class,
            booster_version_category: booster_version_category.into(),
            flight_number: None,
            booster_version: None,
        }
    }

    /// Builder method: set flight number
    pub fn flight_number(mut self, number: u32) -> Self {
        self.flight_number = Some(number);
        self
    }

    /// Builder method: set the full booster version
    pub fn booster_version(mut self, version: impl Into<String>) -> Self {
        self.booster_version = Some(version.into());
        self
    }

    pub fn is_success(&self) -> bool {
        self.class == 1
    }
}

/// The loaded dataset
///
/// Never mutated after construction. Shared across handlers as
/// `Arc<LaunchTable>`.
#[derive(Debug, Clone, Default)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
    payload_bounds: Option<PayloadRange>,
}

impl LaunchTable {
    /// Build a table and compute its payload bounds once
    pub fn new(records: Vec<LaunchRecord>) -> Self {
        let payload_bounds = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(None, |acc: Option<(f64, f64)>, mass| match acc {
                None => Some((mass, mass)),
                Some((lo, hi)) => Some((lo.min(mass), hi.max(mass))),
            })
            .map(|(min, max)| PayloadRange { min, max });

        Self {
            records,
            payload_bounds,
        }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Smallest and largest payload mass in the table, `None` when empty
    pub fn payload_bounds(&self) -> Option<PayloadRange> {
        self.payload_bounds
    }

    /// Distinct launch sites in first-seen order
    pub fn sites(&self) -> Vec<&str> {
        let mut sites: Vec<&str> = Vec::new();
        for record in &self.records {
            if !sites.contains(&record.launch_site.as_str()) {
                sites.push(&record.launch_site);
            }
        }
        sites
    }
}

impl<'a> IntoIterator for &'a LaunchTable {
    type Item = &'a LaunchRecord;
    type IntoIter = std::slice::Iter<'a, LaunchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Site dropdown selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum SiteSelector {
    /// Every site (wire value `ALL`)
    #[default]
    All,
    /// One exact site label, matched case-sensitively
    Site(String),
}

impl SiteSelector {
    /// Parse a dropdown value; only the exact string `ALL` selects every site
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelector::All
        } else {
            SiteSelector::Site(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelector::All)
    }

    /// Human readable label used in chart titles
    pub fn label(&self) -> &str {
        match self {
            SiteSelector::All => "All Sites",
            SiteSelector::Site(site) => site,
        }
    }

    /// Whether a record launched from the selected site
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelector::All => true,
            SiteSelector::Site(site) => record.launch_site == *site,
        }
    }
}

impl fmt::Display for SiteSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelector::All => write!(f, "{}", ALL_SITES),
            SiteSelector::Site(site) => write!(f, "{}", site),
        }
    }
}

impl Serialize for SiteSelector {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SiteSelector {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(SiteSelector::parse(&value))
    }
}

/// Inclusive payload mass interval in kilograms
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadRange {
    pub min: f64,
    pub max: f64,
}

impl PayloadRange {
    /// Create a range, rejecting non-finite bounds and `min > max`
    pub fn new(min: f64, max: f64) -> DatasetResult<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(DatasetError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Inclusive on both ends
    pub fn contains(&self, mass_kg: f64) -> bool {
        mass_kg >= self.min && mass_kg <= self.max
    }
}

impl fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] kg", self.min, self.max)
    }
}
