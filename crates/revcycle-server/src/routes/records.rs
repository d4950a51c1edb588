use axum::Json;
use axum::extract::{Query, State};
use revcycle_core::models::claim::{Claim, ClaimStatus};
use revcycle_core::models::contract::Contract;
use revcycle_core::models::key::normalize;
use revcycle_core::models::payment::Payment;
use revcycle_payers::validation::ContractIssue;
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RecordFilter {
    pub payer_id: Option<String>,
    pub status: Option<String>,
}

impl RecordFilter {
    fn payer_matches(&self, payer_id: &str) -> bool {
        self.payer_id
            .as_deref()
            .is_none_or(|wanted| normalize(wanted) == normalize(payer_id))
    }
}

pub async fn list_contracts(
    State(state): State<AppState>,
    Query(filter): Query<RecordFilter>,
) -> Json<Vec<Contract>> {
    let engine = state.engine.lock().await;
    let contracts = engine
        .contracts()
        .iter()
        .filter(|c| filter.payer_matches(&c.payer_id))
        .cloned()
        .collect();
    Json(contracts)
}

pub async fn contract_issues(State(state): State<AppState>) -> Json<Vec<ContractIssue>> {
    Json(state.engine.lock().await.validate_contracts())
}

pub async fn list_payments(
    State(state): State<AppState>,
    Query(filter): Query<RecordFilter>,
) -> Json<Vec<Payment>> {
    let engine = state.engine.lock().await;
    let payments = engine
        .payments()
        .iter()
        .filter(|p| filter.payer_matches(&p.payer_id))
        .cloned()
        .collect();
    Json(payments)
}

pub async fn list_claims(
    State(state): State<AppState>,
    Query(filter): Query<RecordFilter>,
) -> Result<Json<Vec<Claim>>, ApiError> {
    let status = filter
        .status
        .as_deref()
        .map(str::parse::<ClaimStatus>)
        .transpose()?;

    let engine = state.engine.lock().await;
    let claims = engine
        .claims()
        .iter()
        .filter(|c| filter.payer_matches(&c.payer_id))
        .filter(|c| status.is_none_or(|s| c.status == s))
        .cloned()
        .collect();
    Ok(Json(claims))
}
