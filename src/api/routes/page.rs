//! Page Routes
//!
//! - GET / - Dashboard page
//! - GET /api/v1/layout - Page layout the browser builds its controls from

use axum::{extract::State, response::Html, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::reactive::Layout;

const INDEX_HTML: &str = include_str!("../../../static/index.html");

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /api/v1/layout
pub async fn layout(State(state): State<Arc<AppState>>) -> Json<Layout> {
    Json(state.dashboard.layout().clone())
}
