//! Scatter Chart Builder
//!
//! Payload mass against outcome class for every record passing both the
//! payload range and the site selection, colored by booster category.

use serde::Serialize;
use serde_json::{json, Value};

use crate::dataset::LaunchTable;
use crate::filter::FilterCriteria;

pub const X_AXIS_LABEL: &str = "Payload Mass (kg)";
pub const Y_AXIS_LABEL: &str = "Launch Success";

/// One plotted launch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    /// Payload mass in kg
    pub x: f64,
    /// Outcome class (0 or 1)
    pub y: u8,
    /// Booster version category, drives the point color
    pub category: String,
}

/// Points sharing a booster category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries<'a> {
    pub category: &'a str,
    pub x: Vec<f64>,
    pub y: Vec<u8>,
}

/// Declarative scatter chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ScatterPoint>,
}

impl ScatterChart {
    /// Points grouped by category, categories in first-seen order
    pub fn series(&self) -> Vec<ScatterSeries<'_>> {
        let mut series: Vec<ScatterSeries<'_>> = Vec::new();
        for point in &self.points {
            let idx = match series.iter().position(|s| s.category == point.category) {
                Some(idx) => idx,
                None => {
                    series.push(ScatterSeries {
                        category: &point.category,
                        x: Vec::new(),
                        y: Vec::new(),
                    });
                    series.len() - 1
                }
            };
            series[idx].x.push(point.x);
            series[idx].y.push(point.y);
        }
        series
    }

    /// Plotly figure JSON, one marker trace per booster category
    pub fn to_plotly(&self) -> Value {
        let data: Vec<Value> = self
            .series()
            .into_iter()
            .map(|s| {
                json!({
                    "type": "scatter",
                    "mode": "markers",
                    "name": s.category,
                    "legendgroup": s.category,
                    "x": s.x,
                    "y": s.y,
                })
            })
            .collect();

        json!({
            "data": data,
            "layout": {
                "title": { "text": self.title },
                "xaxis": { "title": { "text": self.x_label } },
                "yaxis": { "title": { "text": self.y_label } },
                "legend": { "title": { "text": "Booster Version Category" } },
            },
        })
    }
}

/// Build the scatter chart for the given filter criteria
pub fn scatter_chart(table: &LaunchTable, criteria: &FilterCriteria) -> ScatterChart {
    let points = criteria
        .apply(table)
        .into_iter()
        .map(|r| ScatterPoint {
            x: r.payload_mass_kg,
            y: r.class,
            category: r.booster_version_category.clone(),
        })
        .collect();

    ScatterChart {
        title: format!("Payload vs. Launch Success ({})", criteria.site.label()),
        x_label: X_AXIS_LABEL.to_string(),
        y_label: Y_AXIS_LABEL.to_string(),
        points,
    }
}
