//! Page Layout
//!
//! Declarative description of the dashboard page. The browser builds its
//! controls from this, and the dispatcher uses it to know which input ids
//! exist and what kind of value each accepts.

use serde::{Deserialize, Serialize};

use super::component::{
    InputKind, InputState, InputValue, PAYLOAD_SLIDER, PIE_CHART, SCATTER_CHART, SITE_DROPDOWN,
};
use super::error::ReactiveError;
use crate::dataset::{LaunchTable, ALL_SITES, KNOWN_SITES};

/// Tunable parts of the page
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_slider_min")]
    pub slider_min: f64,

    #[serde(default = "default_slider_max")]
    pub slider_max: f64,

    #[serde(default = "default_slider_step")]
    pub slider_step: f64,
}

fn default_title() -> String {
    "SpaceX Launch Records Dashboard".to_string()
}

fn default_slider_min() -> f64 {
    0.0
}

fn default_slider_max() -> f64 {
    10000.0
}

fn default_slider_step() -> f64 {
    1000.0
}

/// Upper bound on slider marks a layout may ask for
pub const MAX_SLIDER_MARKS: usize = 1000;

impl LayoutConfig {
    /// Check the slider settings: finite bounds, `min <= max`, positive step
    /// and at most [`MAX_SLIDER_MARKS`] marks
    pub fn validate(&self) -> Result<(), ReactiveError> {
        let invalid = |reason: String| Err(ReactiveError::InvalidLayout(reason));

        if !self.slider_min.is_finite() || !self.slider_max.is_finite() {
            return invalid(format!(
                "slider bounds must be finite, got [{}, {}]",
                self.slider_min, self.slider_max
            ));
        }
        if self.slider_min > self.slider_max {
            return invalid(format!(
                "slider_min {} is above slider_max {}",
                self.slider_min, self.slider_max
            ));
        }
        if !self.slider_step.is_finite() || self.slider_step <= 0.0 {
            return invalid(format!(
                "slider_step must be positive, got {}",
                self.slider_step
            ));
        }

        let marks = (self.slider_max - self.slider_min) / self.slider_step;
        if marks >= MAX_SLIDER_MARKS as f64 {
            return invalid(format!(
                "slider_step {} gives more than {} marks",
                self.slider_step, MAX_SLIDER_MARKS
            ));
        }

        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            slider_min: default_slider_min(),
            slider_max: default_slider_max(),
            slider_step: default_slider_step(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dropdown {
    pub id: String,
    pub options: Vec<DropdownOption>,
    pub value: String,
    pub placeholder: String,
    pub searchable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSlider {
    pub id: String,
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
    pub value: [f64; 2],
}

/// The whole page: header, dropdown, pie graph, slider, scatter graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: String,
    pub dropdown: Dropdown,
    pub slider: RangeSlider,
    pub graphs: Vec<String>,
}

impl Layout {
    /// Layout for the launch records dashboard, slider seeded from the table's payload bounds
    pub fn launch_records(table: &LaunchTable, config: &LayoutConfig) -> Self {
        let mut options = vec![DropdownOption {
            label: "All Sites".to_string(),
            value: ALL_SITES.to_string(),
        }];
        options.extend(KNOWN_SITES.iter().map(|site| DropdownOption {
            label: site.to_string(),
            value: site.to_string(),
        }));

        let marks = slider_marks(config.slider_min, config.slider_max, config.slider_step);

        let value = match table.payload_bounds() {
            Some(bounds) => [bounds.min, bounds.max],
            None => [config.slider_min, config.slider_max],
        };

        Self {
            title: config.title.clone(),
            dropdown: Dropdown {
                id: SITE_DROPDOWN.to_string(),
                options,
                value: ALL_SITES.to_string(),
                placeholder: "Select a Launch Site here".to_string(),
                searchable: true,
            },
            slider: RangeSlider {
                id: PAYLOAD_SLIDER.to_string(),
                label: "Payload range (Kg):".to_string(),
                min: config.slider_min,
                max: config.slider_max,
                step: config.slider_step,
                marks,
                value,
            },
            graphs: vec![PIE_CHART.to_string(), SCATTER_CHART.to_string()],
        }
    }

    /// Kind of the input component with this id, if any
    pub fn input_kind(&self, component: &str) -> Option<InputKind> {
        if component == self.dropdown.id {
            Some(InputKind::Dropdown)
        } else if component == self.slider.id {
            Some(InputKind::RangeSlider)
        } else {
            None
        }
    }

    pub fn has_graph(&self, id: &str) -> bool {
        self.graphs.iter().any(|g| g == id)
    }

    /// Input values as first rendered
    pub fn initial_state(&self) -> InputState {
        let mut state = InputState::new();
        state.set(self.dropdown.id.clone(), InputValue::text(self.dropdown.value.clone()));
        state.set(self.slider.id.clone(), InputValue::Range(self.slider.value));
        state
    }
}

/// One mark per step from `min` to `max`, labelled with the integer value
///
/// Settings that fail [`LayoutConfig::validate`] give no marks.
fn slider_marks(min: f64, max: f64, step: f64) -> Vec<SliderMark> {
    if !min.is_finite() || !max.is_finite() || !step.is_finite() || step <= 0.0 || min > max {
        return Vec::new();
    }

    let count = ((max - min) / step).floor() as usize;
    if count >= MAX_SLIDER_MARKS {
        return Vec::new();
    }
    (0..=count)
        .map(|i| {
            let value = min + step * i as f64;
            SliderMark {
                value,
                label: format!("{}", value.round() as i64),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::LaunchRecord;

    #[test]
    fn test_default_layout() {
        let table = LaunchTable::new(vec![
            LaunchRecord::new("KSC LC-39A", 2000.0, 1, "FT"),
            LaunchRecord::new("CCAFS LC-40", 9600.0, 0, "B4"),
        ]);
        let layout = Layout::launch_records(&table, &LayoutConfig::default());

        assert_eq!(layout.title, "SpaceX Launch Records Dashboard");
        assert_eq!(layout.dropdown.options.len(), 5);
        assert_eq!(layout.dropdown.options[0].value, "ALL");
        assert_eq!(layout.dropdown.options[0].label, "All Sites");
        assert_eq!(layout.dropdown.options[4].value, "VAFB SLC-4E");
        assert_eq!(layout.dropdown.value, "ALL");
        assert_eq!(layout.slider.value, [2000.0, 9600.0]);
        assert_eq!(layout.graphs, vec![PIE_CHART, SCATTER_CHART]);
    }

    #[test]
    fn test_slider_marks() {
        let layout = Layout::launch_records(&LaunchTable::default(), &LayoutConfig::default());

        assert_eq!(layout.slider.marks.len(), 11);
        assert_eq!(layout.slider.marks[0].label, "0");
        assert_eq!(layout.slider.marks[10].label, "10000");
        assert_eq!(layout.slider.step, 1000.0);
    }

    #[test]
    fn test_empty_table_slider_falls_back_to_bounds() {
        let layout = Layout::launch_records(&LaunchTable::default(), &LayoutConfig::default());
        assert_eq!(layout.slider.value, [0.0, 10000.0]);
    }

    #[test]
    fn test_input_kinds() {
        let layout = Layout::launch_records(&LaunchTable::default(), &LayoutConfig::default());

        assert_eq!(layout.input_kind(SITE_DROPDOWN), Some(InputKind::Dropdown));
        assert_eq!(layout.input_kind(PAYLOAD_SLIDER), Some(InputKind::RangeSlider));
        assert_eq!(layout.input_kind(PIE_CHART), None);
        assert!(layout.has_graph(SCATTER_CHART));
    }

    #[test]
    fn test_initial_state() {
        let layout = Layout::launch_records(&LaunchTable::default(), &LayoutConfig::default());
        let state = layout.initial_state();

        assert_eq!(state.get(SITE_DROPDOWN), Some(&InputValue::text("ALL")));
        assert_eq!(
            state.get(PAYLOAD_SLIDER),
            Some(&InputValue::range(0.0, 10000.0))
        );
    }

    fn config(min: f64, max: f64, step: f64) -> LayoutConfig {
        LayoutConfig {
            slider_min: min,
            slider_max: max,
            slider_step: step,
            ..LayoutConfig::default()
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(LayoutConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_slider() {
        for bad in [
            config(0.0, f64::INFINITY, 1000.0),
            config(f64::NAN, 10000.0, 1000.0),
            config(10000.0, 0.0, 1000.0),
            config(0.0, 10000.0, 0.0),
            config(0.0, 10000.0, -5.0),
            config(0.0, 10000.0, 1e-6),
        ] {
            assert!(
                matches!(bad.validate(), Err(ReactiveError::InvalidLayout(_))),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_unbounded_slider_yields_no_marks() {
        let layout = Layout::launch_records(
            &LaunchTable::default(),
            &config(0.0, f64::INFINITY, 1000.0),
        );
        assert!(layout.slider.marks.is_empty());

        let layout = Layout::launch_records(&LaunchTable::default(), &config(0.0, 10000.0, 1e-6));
        assert!(layout.slider.marks.is_empty());
    }
}
