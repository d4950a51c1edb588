use axum::Json;
use axum::extract::State;
use revcycle_core::settings::AnalysisSettings;

use crate::config;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn get_settings(State(state): State<AppState>) -> Json<AnalysisSettings> {
    Json(*state.engine.lock().await.settings())
}

/// Validate new thresholds, persist them, then apply them.
///
/// Nothing changes in memory unless the config file was written.
pub async fn update_settings(
    State(state): State<AppState>,
    Json(settings): Json<AnalysisSettings>,
) -> Result<Json<AnalysisSettings>, ApiError> {
    settings.validate()?;

    // Held across the save so concurrent updates land in order.
    let mut current = state.config.write().await;
    let mut updated = current.clone();
    updated.analysis = settings;

    if let Some(path) = state.config_path.clone() {
        let to_save = updated.clone();
        tokio::task::spawn_blocking(move || config::save_config(&to_save, &path))
            .await
            .map_err(|e| ApiError::Internal(format!("config save task failed: {e}")))??;
    }

    state.engine.lock().await.set_settings(settings)?;
    *current = updated;

    tracing::info!(
        threshold_pct = settings.underpayment_threshold_pct,
        "analysis settings updated"
    );
    Ok(Json(settings))
}
