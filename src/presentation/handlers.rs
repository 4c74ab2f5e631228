// HTTP request handlers
use crate::application::snapshot_provider::SnapshotQuery;
use crate::domain::department::Department;
use crate::domain::filters::{DepartmentSelection, FilterState, Timeframe, ALL_STORES};
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use crate::presentation::error::AppError;
use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct FilterValue {
    pub value: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotParams {
    pub store_id: Option<String>,
    pub timeframe: Option<String>,
}

async fn respond<T: Serialize>(headers: &HeaderMap, data: &T) -> Response {
    match json_response(data, accepts_brotli(headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn list_stores(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    respond(&headers, &state.dashboard_service.stores()).await
}

pub async fn list_departments() -> Json<Vec<&'static str>> {
    Json(Department::ALL.iter().map(|d| d.label()).collect())
}

pub async fn get_filters(State(state): State<Arc<AppState>>) -> Json<FilterState> {
    Json(state.filters.current())
}

pub async fn set_store(
    State(state): State<Arc<AppState>>,
    Json(body): Json<FilterValue>,
) -> Result<Json<FilterState>, AppError> {
    let store_id = body.value.trim();
    if store_id.is_empty() {
        return Err(AppError::EmptyStoreId);
    }
    Ok(Json(state.filters.set_store_id(store_id)))
}

pub async fn set_timeframe(
    State(state): State<Arc<AppState>>,
    Json(body): Json<FilterValue>,
) -> Result<Json<FilterState>, AppError> {
    let timeframe: Timeframe = body.value.parse()?;
    Ok(Json(state.filters.set_timeframe(timeframe)))
}

pub async fn set_query(
    State(state): State<Arc<AppState>>,
    Json(body): Json<FilterValue>,
) -> Json<FilterState> {
    Json(state.filters.set_query(body.value))
}

pub async fn set_department(
    State(state): State<Arc<AppState>>,
    Json(body): Json<FilterValue>,
) -> Result<Json<FilterState>, AppError> {
    let selected: DepartmentSelection = body.value.parse()?;
    Ok(Json(state.filters.set_selected_dept(selected)))
}

pub async fn reset_filters(State(state): State<Arc<AppState>>) -> Json<FilterState> {
    Json(state.filters.reset())
}

/// Raw retrieval for a store and timeframe, bypassing filters and cache
pub async fn get_snapshots(
    Query(params): Query<SnapshotParams>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, AppError> {
    let timeframe = match params.timeframe.as_deref() {
        Some(raw) => raw.parse::<Timeframe>()?,
        None => Timeframe::default(),
    };
    let store_id = params.store_id.unwrap_or_else(|| ALL_STORES.to_string());

    let query = SnapshotQuery::new(store_id, timeframe);
    let snapshots = state.dashboard_service.retrieve(&query).await;
    Ok(respond(&headers, &snapshots).await)
}

pub async fn get_dashboard(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let filters = state.filters.current();
    let dashboard = state.dashboard_service.get_dashboard(&filters).await;
    respond(&headers, &dashboard).await
}

pub async fn get_matrix(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let filters = state.filters.current();
    let rows = state.dashboard_service.get_matrix(&filters).await;
    respond(&headers, &rows).await
}

pub async fn get_ops(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let filters = state.filters.current();
    let entries = state.dashboard_service.get_ops(&filters).await;
    respond(&headers, &entries).await
}

pub async fn get_config_panel(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let filters = state.filters.current();
    let entries = state.dashboard_service.get_config_panel(&filters).await;
    respond(&headers, &entries).await
}
