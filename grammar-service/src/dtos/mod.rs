use serde::{Deserialize, Serialize};

/// Body accepted by `/check-grammar`. A missing or `null` text is treated
/// as the empty string.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GrammarInput {
    #[serde(default)]
    pub text: Option<String>,
}

impl GrammarInput {
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GrammarOutput {
    pub success: bool,
    pub original_text: String,
    pub corrected_text: String,
    pub suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_null_text_read_as_empty() {
        let absent: GrammarInput = serde_json::from_str("{}").unwrap();
        let null: GrammarInput = serde_json::from_str(r#"{"text":null}"#).unwrap();

        assert_eq!(absent.text(), "");
        assert_eq!(null.text(), "");
    }

    #[test]
    fn present_text_is_kept() {
        let input: GrammarInput = serde_json::from_str(r#"{"text":"She go home."}"#).unwrap();
        assert_eq!(input.text(), "She go home.");
    }
}
