use axum::Json;
use axum::extract::State;
use revcycle_core::demo;

use crate::routes::uploads::UploadResponse;
use crate::state::AppState;

/// Replace all three lists with the built-in sample data.
pub async fn load_demo(State(state): State<AppState>) -> Json<UploadResponse> {
    let mut engine = state.engine.lock().await;
    engine.load_contracts(demo::contracts());
    engine.load_payments(demo::payments());
    engine.load_claims(demo::claims());

    tracing::info!("demo datasets loaded");
    Json(UploadResponse {
        records: engine.contracts().len() + engine.payments().len() + engine.claims().len(),
        issues: engine.validate_contracts(),
    })
}
