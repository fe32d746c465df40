//! Chart Routes
//!
//! Stateless chart rendering, the same outputs the WebSocket pushes.
//!
//! - GET /api/v1/charts/pie?site= - Success pie chart
//! - GET /api/v1/charts/scatter?site=&min=&max= - Payload vs. outcome scatter

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{ChartResponse, FilterQuery};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::charts::{pie_chart, scatter_chart, ChartSpec};

/// GET /api/v1/charts/:kind
///
/// Render one chart for the given filter parameters. The pie chart only
/// reads `site`.
pub async fn get_chart(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
    Query(query): Query<FilterQuery>,
) -> ApiResult<Json<ChartResponse>> {
    let criteria = query.criteria(&state.table)?;

    let chart: ChartSpec = match kind.as_str() {
        "pie" => pie_chart(&state.table, &criteria.site).into(),
        "scatter" => scatter_chart(&state.table, &criteria).into(),
        other => {
            return Err(ApiError::NotFound(format!(
                "chart '{}' (use pie or scatter)",
                other
            )))
        }
    };

    tracing::debug!(
        chart = %kind,
        site = %criteria.site,
        payload = %criteria.payload,
        "Rendered chart"
    );

    Ok(Json(chart.into()))
}
