use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body accepted by the summarize and spellcheck endpoints.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct TextInput {
    #[schema(example = "Large language models are trained on text.")]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct SummaryOutput {
    #[schema(example = "Processed summary for text length 43.")]
    pub summary: String,
    pub key_points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct SpellcheckOutput {
    pub corrected_text: String,
    pub corrections: Vec<Correction>,
}

/// A single spelling fix. Offsets count characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct Correction {
    pub original: String,
    pub suggestion: String,
    pub offset: usize,
    pub length: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct StatusResponse {
    #[schema(example = "AI Service is running")]
    pub status: String,
}
