//! Component ids, input values and per-session input state

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::error::ReactiveError;
use crate::dataset::{PayloadRange, SiteSelector};

pub const SITE_DROPDOWN: &str = "site-dropdown";
pub const PAYLOAD_SLIDER: &str = "payload-slider";
pub const PIE_CHART: &str = "success-pie-chart";
pub const SCATTER_CHART: &str = "success-payload-scatter-chart";

/// Value carried by an input component
///
/// Dropdowns send a string, range sliders a `[low, high]` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputValue {
    Range([f64; 2]),
    Text(String),
}

impl InputValue {
    pub fn text(value: impl Into<String>) -> Self {
        InputValue::Text(value.into())
    }

    pub fn range(low: f64, high: f64) -> Self {
        InputValue::Range([low, high])
    }
}

/// Kind of an input component, used to validate incoming values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Dropdown,
    RangeSlider,
}

impl InputKind {
    pub fn validate(&self, component: &str, value: &InputValue) -> Result<(), ReactiveError> {
        let invalid = |reason: String| ReactiveError::InvalidValue {
            component: component.to_string(),
            reason,
        };

        match (self, value) {
            (InputKind::Dropdown, InputValue::Text(_)) => Ok(()),
            (InputKind::RangeSlider, InputValue::Range([low, high])) => PayloadRange::new(*low, *high)
                .map(|_| ())
                .map_err(|e| invalid(e.to_string())),
            (InputKind::Dropdown, _) => Err(invalid("expected a string".to_string())),
            (InputKind::RangeSlider, _) => Err(invalid("expected a [low, high] pair".to_string())),
        }
    }
}

/// Current input values for one session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    values: HashMap<String, InputValue>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, component: &str) -> Option<&InputValue> {
        self.values.get(component)
    }

    /// Store a value, returning whether it differs from the previous one
    pub fn set(&mut self, component: impl Into<String>, value: InputValue) -> bool {
        let component = component.into();
        if self.values.get(&component) == Some(&value) {
            return false;
        }
        self.values.insert(component, value);
        true
    }

    /// Current site dropdown selection
    pub fn site(&self) -> Result<SiteSelector, ReactiveError> {
        match self.get(SITE_DROPDOWN) {
            Some(InputValue::Text(value)) => Ok(SiteSelector::parse(value)),
            Some(_) => Err(ReactiveError::InvalidValue {
                component: SITE_DROPDOWN.to_string(),
                reason: "expected a string".to_string(),
            }),
            None => Err(ReactiveError::MissingInput(SITE_DROPDOWN.to_string())),
        }
    }

    /// Current payload slider range
    pub fn payload_range(&self) -> Result<PayloadRange, ReactiveError> {
        match self.get(PAYLOAD_SLIDER) {
            Some(InputValue::Range([low, high])) => {
                PayloadRange::new(*low, *high).map_err(|e| ReactiveError::InvalidValue {
                    component: PAYLOAD_SLIDER.to_string(),
                    reason: e.to_string(),
                })
            }
            Some(_) => Err(ReactiveError::InvalidValue {
                component: PAYLOAD_SLIDER.to_string(),
                reason: "expected a [low, high] pair".to_string(),
            }),
            None => Err(ReactiveError::MissingInput(PAYLOAD_SLIDER.to_string())),
        }
    }
}
