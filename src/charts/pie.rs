//! Pie Chart Builder
//!
//! Success totals per site, or the success/failure split for one site.
//! The payload slider does not feed this chart.

use serde::Serialize;
use serde_json::{json, Value};

use crate::dataset::{LaunchTable, SiteSelector};
use crate::filter::filter_by_site;

pub const ALL_SITES_TITLE: &str = "Total Success Launches by Site";

/// One pie wedge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
}

/// Declarative pie chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    /// Sum of all slice values
    pub fn total(&self) -> u64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    /// Fraction of the total held by the slice at `index` (0.0 when the total is zero)
    pub fn share(&self, index: usize) -> f64 {
        let total = self.total();
        match self.slices.get(index) {
            Some(slice) if total > 0 => slice.value as f64 / total as f64,
            _ => 0.0,
        }
    }

    /// Plotly figure JSON
    pub fn to_plotly(&self) -> Value {
        let labels: Vec<&str> = self.slices.iter().map(|s| s.label.as_str()).collect();
        let values: Vec<u64> = self.slices.iter().map(|s| s.value).collect();

        json!({
            "data": [{
                "type": "pie",
                "labels": labels,
                "values": values,
            }],
            "layout": {
                "title": { "text": self.title },
                "legend": { "tracegroupgap": 0 },
            },
        })
    }
}

/// Build the pie chart for a site selection
///
/// `All` sums the outcome class per site over the whole table, one slice per
/// site in first-seen order. A specific site counts its records per class,
/// labelled `"0"` and `"1"`, emitting only the classes present.
pub fn pie_chart(table: &LaunchTable, site: &SiteSelector) -> PieChart {
    match site {
        SiteSelector::All => {
            let mut slices: Vec<PieSlice> = Vec::new();
            for record in table {
                let success = u64::from(record.class);
                match slices.iter_mut().find(|s| s.label == record.launch_site) {
                    Some(slice) => slice.value += success,
                    None => slices.push(PieSlice {
                        label: record.launch_site.clone(),
                        value: success,
                    }),
                }
            }

            PieChart {
                title: ALL_SITES_TITLE.to_string(),
                slices,
            }
        }
        SiteSelector::Site(name) => {
            let mut counts = [0u64; 2];
            for record in filter_by_site(table, site) {
                counts[usize::from(record.class.min(1))] += 1;
            }

            let slices = counts
                .iter()
                .enumerate()
                .filter(|(_, count)| **count > 0)
                .map(|(class, count)| PieSlice {
                    label: class.to_string(),
                    value: *count,
                })
                .collect();

            PieChart {
                title: format!("Launch Success vs. Failed for {}", name),
                slices,
            }
        }
    }
}
