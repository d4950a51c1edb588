use axum::Json;
use axum::extract::State;
use revcycle_core::models::summary::AnalyticsSummary;

use crate::state::AppState;

pub async fn get_summary(State(state): State<AppState>) -> Json<AnalyticsSummary> {
    Json(state.engine.lock().await.summary())
}
