//! Text analysis backends.
//!
//! Handlers only see [`TextAnalyzer`]; the placeholder implementation returns
//! fixed data until a real NLP backend is wired in.

use crate::dtos::{SpellcheckOutput, SummaryOutput};

pub trait TextAnalyzer: Send + Sync {
    fn summarize(&self, text: &str) -> SummaryOutput;

    fn spellcheck(&self, text: &str) -> SpellcheckOutput;
}

/// Deterministic stand-in used until a real analyzer exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderAnalyzer;

impl TextAnalyzer for PlaceholderAnalyzer {
    fn summarize(&self, text: &str) -> SummaryOutput {
        // Length in characters; byte length would overcount non-ASCII input.
        let length = text.chars().count();

        SummaryOutput {
            summary: format!("Processed summary for text length {}.", length),
            key_points: vec!["Point 1".to_string(), "Point 2".to_string()],
        }
    }

    fn spellcheck(&self, text: &str) -> SpellcheckOutput {
        SpellcheckOutput {
            corrected_text: text.to_string(),
            corrections: Vec::new(),
        }
    }
}
