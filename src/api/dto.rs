//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::charts::ChartSpec;
use crate::dataset::{
    DatasetError, LaunchRecord, LaunchTable, PayloadRange, SiteSelector, ALL_SITES,
};
use crate::filter::FilterCriteria;

// ============================================
// QUERY PARAMETERS
// ============================================

/// Filter parameters shared by chart and launch endpoints
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    /// Site dropdown value, `ALL` when absent
    #[serde(default)]
    pub site: Option<String>,
    /// Lower payload bound in kg, 0 when absent
    #[serde(default)]
    pub min: Option<f64>,
    /// Upper payload bound in kg, table maximum when absent
    #[serde(default)]
    pub max: Option<f64>,
}

// ============================================
// CHART DTOs
// ============================================

/// A chart description plus its Plotly figure
#[derive(Debug, Serialize)]
pub struct ChartResponse {
    pub chart: ChartSpec,
    pub figure: Value,
}

impl From<ChartSpec> for ChartResponse {
    fn from(chart: ChartSpec) -> Self {
        let figure = chart.to_plotly();
        Self { chart, figure }
    }
}

// ============================================
// LAUNCH DTOs
// ============================================

/// Filtered launch records
#[derive(Debug, Serialize)]
pub struct LaunchesResponse<'a> {
    pub site: String,
    pub payload: PayloadRange,
    pub count: usize,
    pub records: Vec<&'a LaunchRecord>,
}

/// Per-site counts
#[derive(Debug, Serialize)]
pub struct SiteSummary {
    pub site: String,
    pub launches: usize,
    pub successes: usize,
    pub success_rate: f64,
}

/// Dataset overview
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub records: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_bounds: Option<PayloadRange>,
    pub sites: Vec<SiteSummary>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: "healthy" or "degraded"
    pub status: String,
    /// Number of loaded launch records
    pub records: usize,
    /// Live dashboard connections
    pub connections: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Server version
    pub version: String,
}

impl FilterQuery {
    /// Resolve the query against a table
    ///
    /// A missing `min` means 0 kg; a missing `max` means the heaviest payload
    /// in the table (never below `min`).
    pub fn criteria(&self, table: &LaunchTable) -> Result<FilterCriteria, DatasetError> {
        let site = SiteSelector::parse(self.site.as_deref().unwrap_or(ALL_SITES));
        let min = self.min.unwrap_or(0.0);
        let max = self.max.unwrap_or_else(|| {
            table
                .payload_bounds()
                .map(|b| b.max)
                .unwrap_or(min)
                .max(min)
        });

        Ok(FilterCriteria::new(site, PayloadRange::new(min, max)?))
    }
}
