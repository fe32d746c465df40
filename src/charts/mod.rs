//! Chart Builders
//!
//! Pure functions turning the launch table into declarative chart
//! descriptions. Each description also converts to a Plotly figure for the
//! browser.
//!
//! - [`pie_chart`]: success totals by site, or success vs. failure for one site
//! - [`scatter_chart`]: payload mass vs. outcome, colored by booster category

mod pie;
mod scatter;

pub use pie::{pie_chart, PieChart, PieSlice};
pub use scatter::{scatter_chart, ScatterChart, ScatterPoint, ScatterSeries};

use serde::Serialize;
use serde_json::Value;

/// Any chart the dashboard can render
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    Pie(PieChart),
    Scatter(ScatterChart),
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Pie(chart) => &chart.title,
            ChartSpec::Scatter(chart) => &chart.title,
        }
    }

    /// Plotly figure JSON (`{data, layout}`)
    pub fn to_plotly(&self) -> Value {
        match self {
            ChartSpec::Pie(chart) => chart.to_plotly(),
            ChartSpec::Scatter(chart) => chart.to_plotly(),
        }
    }
}

impl From<PieChart> for ChartSpec {
    fn from(chart: PieChart) -> Self {
        ChartSpec::Pie(chart)
    }
}

impl From<ScatterChart> for ChartSpec {
    fn from(chart: ScatterChart) -> Self {
        ChartSpec::Scatter(chart)
    }
}
