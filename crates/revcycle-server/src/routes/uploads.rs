use axum::Json;
use axum::extract::State;
use jiff::civil::Date;
use revcycle_ingest::EraClaim;
use revcycle_payers::validation::ContractIssue;
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Rows now loaded for this upload.
    pub records: usize,
    /// Contract rows that failed payer checks. The rows are loaded anyway.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<ContractIssue>,
}

#[derive(Debug, Serialize)]
pub struct EraUploadResponse {
    pub records: usize,
    pub payer_id: String,
    pub payer_name: String,
    pub payment_date: Option<Date>,
    pub trace_number: Option<String>,
    pub claim_count: usize,
    pub claims: Vec<EraClaim>,
}

pub async fn upload_contracts(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<UploadResponse>, ApiError> {
    let contracts = revcycle_ingest::parse_contracts(&body)?;
    let mut engine = state.engine.lock().await;
    engine.load_contracts(contracts);

    let issues = engine.validate_contracts();
    if !issues.is_empty() {
        tracing::warn!(issues = issues.len(), "uploaded contracts have issues");
    }
    Ok(Json(UploadResponse {
        records: engine.contracts().len(),
        issues,
    }))
}

pub async fn upload_payments(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<UploadResponse>, ApiError> {
    let payments = revcycle_ingest::parse_payments(&body)?;
    let mut engine = state.engine.lock().await;
    engine.load_payments(payments);
    Ok(Json(UploadResponse {
        records: engine.payments().len(),
        issues: Vec::new(),
    }))
}

pub async fn upload_claims(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<UploadResponse>, ApiError> {
    let claims = revcycle_ingest::parse_claims(&body)?;
    let mut engine = state.engine.lock().await;
    engine.load_claims(claims);
    Ok(Json(UploadResponse {
        records: engine.claims().len(),
        issues: Vec::new(),
    }))
}

/// An 835 remittance replaces the payment list, like a payments CSV.
pub async fn upload_era(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<EraUploadResponse>, ApiError> {
    let remittance = revcycle_ingest::parse_era(&body)?;
    let response = EraUploadResponse {
        records: remittance.payments.len(),
        payer_id: remittance.payer_id,
        payer_name: remittance.payer_name,
        payment_date: remittance.payment_date,
        trace_number: remittance.trace_number,
        claim_count: remittance.claim_count,
        claims: remittance.claims,
    };

    state.engine.lock().await.load_payments(remittance.payments);
    Ok(Json(response))
}
