//! Grammar-check backends.

use crate::dtos::GrammarOutput;

/// Appended to the input to mark it as processed.
pub const CHECKED_SUFFIX: &str = " (Checked by AI)";

pub const PLACEHOLDER_SUGGESTION: &str = "Consider rephrasing sentence 2.";

pub trait GrammarChecker: Send + Sync {
    fn check(&self, text: &str) -> GrammarOutput;
}

/// Returns the input with [`CHECKED_SUFFIX`] and one fixed suggestion.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderGrammarChecker;

impl GrammarChecker for PlaceholderGrammarChecker {
    fn check(&self, text: &str) -> GrammarOutput {
        GrammarOutput {
            success: true,
            original_text: text.to_string(),
            corrected_text: format!("{}{}", text, CHECKED_SUFFIX),
            suggestions: vec![PLACEHOLDER_SUGGESTION.to_string()],
        }
    }
}
