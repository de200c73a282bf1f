use utoipa::OpenApi;

use super::api::data::{DataResponse, HealthResponse};
use super::api::error::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(super::api::data::get_data, super::api::data::health),
    components(
        schemas(
            DataResponse,
            HealthResponse,
            ErrorResponse,
            crate::analysis::ObjectReport,
            crate::analysis::ProximityAlert,
            crate::analysis::CatalogStats,
            crate::analysis::RiskLevel,
            crate::catalog::SpaceObject,
            crate::catalog::ObjectKind,
        )
    ),
    info(
        title = "Debris Watch API",
        description = "Satellite/debris proximity alerts computed from a catalog snapshot",
        version = "0.1.0"
    ),
    tags(
        (name = "catalog", description = "Catalog scan and alerts"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;
