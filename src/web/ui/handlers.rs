use axum::{extract::State, response::IntoResponse};

use crate::web::server::AppState;

use super::templates::DashboardTemplate;

pub async fn dashboard(State(_state): State<AppState>) -> impl IntoResponse {
    DashboardTemplate {}
}
