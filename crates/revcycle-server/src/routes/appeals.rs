use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use jiff::civil::Date;
use revcycle_core::models::appeal::AppealLetter;
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Default, Deserialize)]
pub struct AppealQuery {
    /// Date printed on the letter. Defaults to today.
    pub letter_date: Option<Date>,
}

impl AppealQuery {
    fn letter_date(&self) -> Date {
        self.letter_date.unwrap_or_else(|| jiff::Zoned::now().date())
    }
}

pub async fn generate_appeals(
    State(state): State<AppState>,
    Query(query): Query<AppealQuery>,
) -> Result<Json<Vec<AppealLetter>>, ApiError> {
    let provider = state.config.read().await.provider.clone();
    let letters = state
        .engine
        .lock()
        .await
        .generate_appeals(&provider, query.letter_date())?;
    Ok(Json(letters))
}

/// One claim's appeal letter rendered as a Word document.
pub async fn appeal_docx(
    State(state): State<AppState>,
    Path(claim_id): Path<String>,
    Query(query): Query<AppealQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let (provider, styles) = {
        let config = state.config.read().await;
        (config.provider.clone(), config.letter_styles.clone())
    };

    let letter = state
        .engine
        .lock()
        .await
        .appeal_for_claim(&claim_id, &provider, query.letter_date())?
        .ok_or_else(|| ApiError::NotFound(format!("no underpaid lines on claim {claim_id}")))?;

    let bytes = revcycle_export::docx::generate_docx(&letter.body, &styles)?;
    let disposition = format!(
        "attachment; filename=\"appeal-{}.docx\"",
        filename_safe(&letter.claim_id)
    );

    Ok((
        [
            (header::CONTENT_TYPE, DOCX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}

/// Claim ids come from uploads; keep only characters safe in a header
/// filename.
pub fn filename_safe(claim_id: &str) -> String {
    claim_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
