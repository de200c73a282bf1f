use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::analysis::{scan_catalog, summarize, CatalogStats, ObjectReport, ProximityAlert};
use crate::web::api::error::{ApiResult, ErrorResponse};
use crate::web::server::AppState;

/// Full payload for one computation over the current catalog snapshot.
#[derive(Debug, Serialize, ToSchema)]
pub struct DataResponse {
    pub timestamp: DateTime<Utc>,
    pub objects: Vec<ObjectReport>,
    pub alerts: Vec<ProximityAlert>,
    pub stats: CatalogStats,
}

#[utoipa::path(
    get,
    path = "/api/data",
    responses(
        (status = 200, description = "Catalog objects with computed proximity alerts and stats", body = DataResponse),
        (status = 500, description = "Catalog could not be loaded", body = ErrorResponse)
    ),
    tag = "catalog"
)]
pub async fn get_data(State(state): State<AppState>) -> ApiResult<Json<DataResponse>> {
    let snapshot = state.loader.load()?;
    if snapshot.skipped > 0 {
        log::warn!("Catalog load skipped {} malformed record(s)", snapshot.skipped);
    }

    let outcome = scan_catalog(&state.analysis, &snapshot.objects);
    let stats = summarize(&snapshot.objects, &outcome.alerts);

    Ok(Json(DataResponse {
        timestamp: Utc::now(),
        objects: outcome.objects,
        alerts: outcome.alerts,
        stats,
    }))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
    })
}
