use axum::{extract::State, Json};
use service_core::error::{AppError, ErrorResponse};
use service_core::extract::ApiJson;

use crate::dtos::{SpellcheckOutput, SummaryOutput, TextInput};
use crate::startup::AppState;

#[utoipa::path(
    post,
    path = "/api/ai/summarize",
    request_body = TextInput,
    responses(
        (status = 200, description = "Summary of the submitted text", body = SummaryOutput),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Text"
)]
#[tracing::instrument(skip_all)]
pub async fn summarize(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<TextInput>,
) -> Result<Json<SummaryOutput>, AppError> {
    let output = state.analyzer.summarize(&input.text);
    tracing::debug!(text_len = input.text.len(), "Summarized text");
    Ok(Json(output))
}

#[utoipa::path(
    post,
    path = "/api/ai/spellcheck",
    request_body = TextInput,
    responses(
        (status = 200, description = "Spell-checked text", body = SpellcheckOutput),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Text"
)]
#[tracing::instrument(skip_all)]
pub async fn spellcheck(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<TextInput>,
) -> Result<Json<SpellcheckOutput>, AppError> {
    let output = state.analyzer.spellcheck(&input.text);
    tracing::debug!(text_len = input.text.len(), "Spell-checked text");
    Ok(Json(output))
}
