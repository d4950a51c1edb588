use axum::Json;
use axum::extract::{Path, State};
use revcycle_core::models::pricing::PriceTransparency;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn get_pricing(
    State(state): State<AppState>,
    Path(cpt_code): Path<String>,
) -> Result<Json<PriceTransparency>, ApiError> {
    state
        .engine
        .lock()
        .await
        .price_transparency(&cpt_code)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("no contracted rates for CPT {cpt_code}")))
}
