use axum::{extract::State, Json};
use service_core::error::AppError;
use service_core::extract::StrictApiJson;

use crate::dtos::{GrammarInput, GrammarOutput};
use crate::startup::AppState;

#[tracing::instrument(skip_all)]
pub async fn check_grammar(
    State(state): State<AppState>,
    StrictApiJson(input): StrictApiJson<GrammarInput>,
) -> Result<Json<GrammarOutput>, AppError> {
    if input.text.is_none() {
        tracing::debug!("No text supplied, checking empty string");
    }

    let output = state.checker.check(input.text());
    tracing::debug!(
        text_len = output.original_text.len(),
        suggestions = output.suggestions.len(),
        "Checked grammar"
    );

    Ok(Json(output))
}
