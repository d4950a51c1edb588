use axum::Json;
use axum::extract::{Path, State};
use revcycle_core::models::summary::PayerSummary;
use revcycle_payers::error::PayerError;
use revcycle_payers::{Payer, all_payers, get_payer, payer_or_generic};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PayerProfile {
    pub id: String,
    pub name: String,
    pub appeal_window_days: u32,
    pub timely_filing_days: u32,
    pub appeal_address: String,
    /// False when the id is not in the registry and generic terms apply.
    pub registered: bool,
}

impl PayerProfile {
    fn from_payer(payer: &dyn Payer, registered: bool) -> Self {
        Self {
            id: payer.id().to_string(),
            name: payer.name().to_string(),
            appeal_window_days: payer.appeal_window_days(),
            timely_filing_days: payer.timely_filing_days(),
            appeal_address: payer.appeal_address().to_string(),
            registered,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PayerDetail {
    #[serde(flatten)]
    pub profile: PayerProfile,
    pub summary: Option<PayerSummary>,
}

pub async fn list_payers() -> Json<Vec<PayerProfile>> {
    let payers = all_payers()
        .iter()
        .map(|p| PayerProfile::from_payer(p.as_ref(), true))
        .collect();
    Json(payers)
}

/// Registry profile plus reconciliation numbers for one payer.
///
/// Unregistered payers that appear in the loaded data get the generic
/// profile; anything else is a 404.
pub async fn get_payer_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PayerDetail>, ApiError> {
    let summary = state.engine.lock().await.payer_summary(&id);

    let profile = match get_payer(&id) {
        Some(payer) => PayerProfile::from_payer(payer.as_ref(), true),
        None if summary.is_some() => PayerProfile::from_payer(payer_or_generic(&id).as_ref(), false),
        None => return Err(PayerError::UnknownPayer(id).into()),
    };

    Ok(Json(PayerDetail { profile, summary }))
}
