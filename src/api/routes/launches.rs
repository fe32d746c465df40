//! Launch Routes
//!
//! Read access to the loaded table.
//!
//! - GET /api/v1/launches?site=&min=&max= - Filtered launch records
//! - GET /api/v1/summary - Record count, payload bounds, per-site counts

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{FilterQuery, LaunchesResponse, SiteSummary, SummaryResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::dataset::{LaunchTable, SiteSelector};
use crate::filter::filter_by_site;

/// GET /api/v1/launches
///
/// Records passing both the payload range and the site filter.
pub async fn list_launches(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FilterQuery>,
) -> ApiResult<Response> {
    let criteria = query.criteria(&state.table)?;
    let records = criteria.apply(&state.table);

    let body = LaunchesResponse {
        site: criteria.site.to_string(),
        payload: criteria.payload,
        count: records.len(),
        records,
    };

    Ok(Json(body).into_response())
}

/// GET /api/v1/summary
pub async fn summary(State(state): State<Arc<AppState>>) -> Json<SummaryResponse> {
    Json(summarize(&state.table))
}

/// Per-site launch and success counts, sites in first-seen order
pub fn summarize(table: &LaunchTable) -> SummaryResponse {
    let sites = table
        .sites()
        .into_iter()
        .map(|site| {
            let records = filter_by_site(table, &SiteSelector::parse(site));
            let launches = records.len();
            let successes = records.iter().filter(|r| r.is_success()).count();

            SiteSummary {
                site: site.to_string(),
                launches,
                successes,
                success_rate: if launches > 0 {
                    successes as f64 / launches as f64
                } else {
                    0.0
                },
            }
        })
        .collect();

    SummaryResponse {
        records: table.len(),
        payload_bounds: table.payload_bounds(),
        sites,
    }
}
