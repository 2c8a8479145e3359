// Coaching service: prompt construction, response parsing, and deterministic
// fallbacks for every AI-backed feature. All LLM calls go through
// llm_client::ChatCompletion; no operation here ever returns an error.

pub mod cover_letter;
pub mod identity;
pub mod matching;
pub mod prompts;
pub mod resume;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::llm_client::strip_json_fences;

/// Outcome of a strict-JSON parse over raw model output.
///
/// Strict-JSON operations get either the typed payload or the untouched text,
/// decided in this single place rather than by scattered error handling at
/// each call site.
#[derive(Debug)]
pub enum ModelPayload<T> {
    Structured(T),
    Raw(String),
}

/// Parses model output as JSON (after stripping any code fences), recovering
/// to `Raw` with the original text on any mismatch.
pub fn parse_or_recover<T: DeserializeOwned>(text: &str) -> ModelPayload<T> {
    match serde_json::from_str(strip_json_fences(text)) {
        Ok(value) => ModelPayload::Structured(value),
        Err(e) => {
            debug!("Model output was not strict JSON ({e}); recovering as raw text");
            ModelPayload::Raw(text.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        guide: String,
    }

    #[test]
    fn test_parse_or_recover_structured() {
        let text = r#"{"guide": "Tailor your summary."}"#;
        match parse_or_recover::<Payload>(text) {
            ModelPayload::Structured(p) => assert_eq!(p.guide, "Tailor your summary."),
            ModelPayload::Raw(_) => panic!("expected structured payload"),
        }
    }

    #[test]
    fn test_parse_or_recover_strips_fences_first() {
        let text = "```json\n{\"guide\": \"Quantify results.\"}\n```";
        assert!(matches!(
            parse_or_recover::<Payload>(text),
            ModelPayload::Structured(_)
        ));
    }

    #[test]
    fn test_parse_or_recover_keeps_original_text_on_failure() {
        let text = "Here are my thoughts on your resume...";
        match parse_or_recover::<Payload>(text) {
            ModelPayload::Raw(raw) => assert_eq!(raw, text),
            ModelPayload::Structured(_) => panic!("prose must not parse as structured"),
        }
    }
}
