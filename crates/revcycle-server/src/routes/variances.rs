use axum::Json;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use revcycle_core::models::key::normalize;
use revcycle_core::models::risk::RiskLevel;
use revcycle_core::models::variance::{VarianceAnalysis, VarianceRecord};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct VarianceFilter {
    #[serde(default)]
    pub underpaid_only: bool,
    pub risk: Option<String>,
    pub payer_id: Option<String>,
}

impl VarianceFilter {
    fn apply(&self, records: Vec<VarianceRecord>) -> Result<Vec<VarianceRecord>, ApiError> {
        let risk = self.risk.as_deref().map(str::parse::<RiskLevel>).transpose()?;
        let payer = self.payer_id.as_deref().map(normalize);

        Ok(records
            .into_iter()
            .filter(|r| !self.underpaid_only || r.underpaid)
            .filter(|r| risk.is_none_or(|level| r.risk_level == level))
            .filter(|r| payer.as_ref().is_none_or(|p| *p == normalize(&r.payer_id)))
            .collect())
    }
}

pub async fn list_variances(
    State(state): State<AppState>,
    Query(filter): Query<VarianceFilter>,
) -> Result<Json<VarianceAnalysis>, ApiError> {
    let mut analysis = state.engine.lock().await.analyze_variances();
    analysis.records = filter.apply(analysis.records)?;
    Ok(Json(analysis))
}

/// The filtered variance records as a CSV download.
pub async fn export_variances(
    State(state): State<AppState>,
    Query(filter): Query<VarianceFilter>,
) -> Result<impl IntoResponse, ApiError> {
    let records = state.engine.lock().await.analyze_variances().records;
    let records = filter.apply(records)?;
    let csv = revcycle_export::report::write_variance_csv(&records)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"variance-report.csv\"",
            ),
        ],
        csv,
    ))
}
