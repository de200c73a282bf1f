use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::analysis::AnalysisConfig;
use crate::catalog::CatalogLoader;

use super::api::data as data_handlers;
use super::api_doc::ApiDoc;
use super::config::Config;
use super::ui::handlers as ui_handlers;

/// Shared per-process state. The loader re-reads the catalog on every
/// request, so no computation ever sees another request's data.
#[derive(Clone)]
pub struct AppState {
    pub loader: Arc<CatalogLoader>,
    pub analysis: AnalysisConfig,
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let bind_addr = config.web.bind.clone();

    let state = AppState {
        loader: Arc::new(CatalogLoader::new(config.catalog.path.clone())),
        analysis: config.analysis.to_analysis_config(),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // UI routes
        .route("/", get(ui_handlers::dashboard))
        // API endpoints
        .route("/api/data", get(data_handlers::get_data))
        .route("/api/health", get(data_handlers::health))
        // Static files
        .nest_service("/static", ServeDir::new("src/web/static"))
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await
}
