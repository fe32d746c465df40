//! Callback Registry and Dispatcher
//!
//! Each output graph registers one callback together with the input ids it
//! reads. When an input changes, only the callbacks declaring that input are
//! re-run, synchronously and in registration order.

use serde::Serialize;
use std::sync::Arc;

use super::component::{InputState, InputValue, PAYLOAD_SLIDER, PIE_CHART, SCATTER_CHART, SITE_DROPDOWN};
use super::error::ReactiveError;
use super::layout::{Layout, LayoutConfig};
use crate::charts::{pie_chart, scatter_chart, ChartSpec};
use crate::dataset::LaunchTable;
use crate::filter::FilterCriteria;

/// Signature of a chart-producing callback
pub type CallbackFn =
    dyn Fn(&LaunchTable, &InputState) -> Result<ChartSpec, ReactiveError> + Send + Sync;

struct Callback {
    output: String,
    inputs: Vec<String>,
    handler: Box<CallbackFn>,
}

impl Callback {
    fn depends_on(&self, component: &str) -> bool {
        self.inputs.iter().any(|i| i == component)
    }
}

/// New content for one output graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputUpdate {
    pub output: String,
    pub chart: ChartSpec,
}

/// The table, the page layout and the callbacks bound to it
pub struct Dashboard {
    table: Arc<LaunchTable>,
    layout: Layout,
    callbacks: Vec<Callback>,
}

impl Dashboard {
    /// Create a dashboard with no callbacks
    pub fn new(table: Arc<LaunchTable>, layout: Layout) -> Self {
        Self {
            table,
            layout,
            callbacks: Vec::new(),
        }
    }

    /// The launch records dashboard: pie chart bound to the dropdown, scatter
    /// chart bound to the dropdown and the payload slider
    pub fn launch_records(
        table: Arc<LaunchTable>,
        config: &LayoutConfig,
    ) -> Result<Self, ReactiveError> {
        config.validate()?;
        let layout = Layout::launch_records(&table, config);
        let mut dashboard = Self::new(table, layout);

        dashboard.register(PIE_CHART, &[SITE_DROPDOWN], |table, inputs| {
            let site = inputs.site()?;
            Ok(pie_chart(table, &site).into())
        })?;

        dashboard.register(
            SCATTER_CHART,
            &[SITE_DROPDOWN, PAYLOAD_SLIDER],
            |table, inputs| {
                let criteria = FilterCriteria::new(inputs.site()?, inputs.payload_range()?);
                Ok(scatter_chart(table, &criteria).into())
            },
        )?;

        Ok(dashboard)
    }

    /// Register a callback for `output`, re-run whenever one of `inputs` changes
    pub fn register<F>(
        &mut self,
        output: &str,
        inputs: &[&str],
        handler: F,
    ) -> Result<&mut Self, ReactiveError>
    where
        F: Fn(&LaunchTable, &InputState) -> Result<ChartSpec, ReactiveError>
            + Send
            + Sync
            + 'static,
    {
        if !self.layout.has_graph(output) {
            return Err(ReactiveError::UnknownComponent(output.to_string()));
        }
        if self.callbacks.iter().any(|c| c.output == output) {
            return Err(ReactiveError::DuplicateOutput(output.to_string()));
        }
        if let Some(unknown) = inputs.iter().find(|i| self.layout.input_kind(i).is_none()) {
            return Err(ReactiveError::UnknownComponent(unknown.to_string()));
        }

        self.callbacks.push(Callback {
            output: output.to_string(),
            inputs: inputs.iter().map(|i| i.to_string()).collect(),
            handler: Box::new(handler),
        });

        tracing::debug!(output = %output, inputs = ?inputs, "Registered callback");
        Ok(self)
    }

    pub fn table(&self) -> &LaunchTable {
        &self.table
    }

    /// Another handle on the same table
    pub fn shared_table(&self) -> Arc<LaunchTable> {
        Arc::clone(&self.table)
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Input values a new session starts from
    pub fn initial_state(&self) -> InputState {
        self.layout.initial_state()
    }

    /// Run every callback (first paint)
    pub fn render_all(&self, state: &InputState) -> Result<Vec<OutputUpdate>, ReactiveError> {
        self.callbacks.iter().map(|c| self.invoke(c, state)).collect()
    }

    /// Apply an input change and re-run the callbacks that depend on it
    ///
    /// The state is left untouched when the value is rejected or a callback
    /// fails. An unchanged value produces no updates.
    pub fn on_input_change(
        &self,
        state: &mut InputState,
        component: &str,
        value: InputValue,
    ) -> Result<Vec<OutputUpdate>, ReactiveError> {
        let kind = self
            .layout
            .input_kind(component)
            .ok_or_else(|| ReactiveError::UnknownComponent(component.to_string()))?;
        kind.validate(component, &value)?;

        let mut next = state.clone();
        if !next.set(component, value) {
            tracing::trace!(component = %component, "Input unchanged, nothing to update");
            return Ok(Vec::new());
        }

        let updates = self
            .callbacks
            .iter()
            .filter(|c| c.depends_on(component))
            .map(|c| self.invoke(c, &next))
            .collect::<Result<Vec<_>, _>>()?;
        *state = next;

        tracing::debug!(
            component = %component,
            outputs = updates.len(),
            "Dispatched input change"
        );

        Ok(updates)
    }

    fn invoke(&self, callback: &Callback, state: &InputState) -> Result<OutputUpdate, ReactiveError> {
        let chart = (callback.handler)(&self.table, state)?;
        Ok(OutputUpdate {
            output: callback.output.clone(),
            chart,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::PieChart;
    use crate::dataset::LaunchRecord;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn example_dashboard() -> Dashboard {
        let table = LaunchTable::new(vec![
            LaunchRecord::new("KSC LC-39A", 2000.0, 1, "v1"),
            LaunchRecord::new("KSC LC-39A", 6000.0, 0, "v2"),
            LaunchRecord::new("CCAFS LC-40", 3000.0, 1, "v1"),
        ]);
        Dashboard::launch_records(Arc::new(table), &LayoutConfig::default()).unwrap()
    }

    fn scatter_points(update: &OutputUpdate) -> usize {
        match &update.chart {
            ChartSpec::Scatter(chart) => chart.points.len(),
            other => panic!("Expected scatter, got {:?}", other),
        }
    }

    #[test]
    fn test_render_all() {
        let dashboard = example_dashboard();
        let state = dashboard.initial_state();

        let updates = dashboard.render_all(&state).unwrap();
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].output, PIE_CHART);
        assert_eq!(updates[1].output, SCATTER_CHART);
        assert_eq!(scatter_points(&updates[1]), 3);
    }

    #[test]
    fn test_slider_change_updates_only_scatter() {
        let dashboard = example_dashboard();
        let mut state = dashboard.initial_state();

        let updates = dashboard
            .on_input_change(&mut state, PAYLOAD_SLIDER, InputValue::range(0.0, 5000.0))
            .unwrap();

        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].output, SCATTER_CHART);
        assert_eq!(scatter_points(&updates[0]), 2);
    }

    #[test]
    fn test_dropdown_change_updates_both() {
        let dashboard = example_dashboard();
        let mut state = dashboard.initial_state();

        let updates = dashboard
            .on_input_change(&mut state, SITE_DROPDOWN, InputValue::text("KSC LC-39A"))
            .unwrap();

        assert_eq!(updates.len(), 2);
        assert_eq!(
            updates[0].chart.title(),
            "Launch Success vs. Failed for KSC LC-39A"
        );
        assert_eq!(
            updates[1].chart.title(),
            "Payload vs. Launch Success (KSC LC-39A)"
        );
        assert_eq!(scatter_points(&updates[1]), 2);
    }

    #[test]
    fn test_unchanged_value_produces_no_updates() {
        let dashboard = example_dashboard();
        let mut state = dashboard.initial_state();

        let updates = dashboard
            .on_input_change(&mut state, SITE_DROPDOWN, InputValue::text("ALL"))
            .unwrap();
        assert!(updates.is_empty());
    }

    #[test]
    fn test_rejected_value_leaves_state() {
        let dashboard = example_dashboard();
        let mut state = dashboard.initial_state();
        let before = state.clone();

        let err = dashboard
            .on_input_change(&mut state, PAYLOAD_SLIDER, InputValue::range(9000.0, 1000.0))
            .unwrap_err();
        assert!(matches!(err, ReactiveError::InvalidValue { .. }));
        assert_eq!(state, before);

        let err = dashboard
            .on_input_change(&mut state, "no-such-input", InputValue::text("x"))
            .unwrap_err();
        assert_eq!(err, ReactiveError::UnknownComponent("no-such-input".to_string()));
        assert_eq!(state, before);
    }

    #[test]
    fn test_unknown_site_degrades_to_empty_charts() {
        let dashboard = example_dashboard();
        let mut state = dashboard.initial_state();

        let updates = dashboard
            .on_input_change(&mut state, SITE_DROPDOWN, InputValue::text("Boca Chica"))
            .unwrap();

        assert_eq!(updates.len(), 2);
        match &updates[0].chart {
            ChartSpec::Pie(chart) => assert!(chart.slices.is_empty()),
            other => panic!("Expected pie, got {:?}", other),
        }
        assert_eq!(scatter_points(&updates[1]), 0);
    }

    #[test]
    fn test_register_validation() {
        let table = Arc::new(LaunchTable::default());
        let layout = Layout::launch_records(&table, &LayoutConfig::default());
        let mut dashboard = Dashboard::new(table, layout);

        let empty_pie = |_: &LaunchTable, _: &InputState| {
            Ok(ChartSpec::Pie(PieChart {
                title: String::new(),
                slices: Vec::new(),
            }))
        };

        assert!(dashboard.register(PIE_CHART, &[SITE_DROPDOWN], empty_pie).is_ok());
        assert!(matches!(
            dashboard.register(PIE_CHART, &[SITE_DROPDOWN], empty_pie),
            Err(ReactiveError::DuplicateOutput(_))
        ));
        assert!(matches!(
            dashboard.register("missing-graph", &[SITE_DROPDOWN], empty_pie),
            Err(ReactiveError::UnknownComponent(_))
        ));
        assert!(matches!(
            dashboard.register(SCATTER_CHART, &["missing-input"], empty_pie),
            Err(ReactiveError::UnknownComponent(_))
        ));
    }

    #[test]
    fn test_only_dependent_callbacks_run() {
        let table = Arc::new(LaunchTable::default());
        let layout = Layout::launch_records(&table, &LayoutConfig::default());
        let mut dashboard = Dashboard::new(table, layout);

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        dashboard
            .register(PIE_CHART, &[SITE_DROPDOWN], move |table, inputs| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(pie_chart(table, &inputs.site()?).into())
            })
            .unwrap();

        let mut state = dashboard.initial_state();
        dashboard
            .on_input_change(&mut state, PAYLOAD_SLIDER, InputValue::range(0.0, 100.0))
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        dashboard
            .on_input_change(&mut state, SITE_DROPDOWN, InputValue::text("VAFB SLC-4E"))
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failed_callback_leaves_state() {
        let table = Arc::new(LaunchTable::default());
        let layout = Layout::launch_records(&table, &LayoutConfig::default());
        let mut dashboard = Dashboard::new(table, layout);

        dashboard
            .register(PIE_CHART, &[SITE_DROPDOWN], |_, inputs| {
                Err(ReactiveError::InvalidValue {
                    component: SITE_DROPDOWN.to_string(),
                    reason: format!("refusing {}", inputs.site()?),
                })
            })
            .unwrap();

        let mut state = dashboard.initial_state();
        let before = state.clone();

        let err = dashboard
            .on_input_change(&mut state, SITE_DROPDOWN, InputValue::text("KSC LC-39A"))
            .unwrap_err();
        assert!(matches!(err, ReactiveError::InvalidValue { .. }));
        assert_eq!(state, before);
    }

    #[test]
    fn test_invalid_layout_config_rejected() {
        let config = LayoutConfig {
            slider_min: 10000.0,
            slider_max: 0.0,
            ..LayoutConfig::default()
        };

        let result = Dashboard::launch_records(Arc::new(LaunchTable::default()), &config);
        assert!(matches!(result, Err(ReactiveError::InvalidLayout(_))));
    }
}
