//! Career identity statement generation.
//!
//! One LLM attempt; any failure or empty response falls back to a
//! deterministic template over role, top skills, and experience level.

use serde::Deserialize;
use tracing::warn;

use crate::coaching::prompts::{IDENTITY_PROMPT_TEMPLATE, IDENTITY_SYSTEM};
use crate::llm_client::ChatCompletion;

const IDENTITY_MAX_TOKENS: u32 = 200;
/// Skills quoted in the fallback statement.
const FALLBACK_SKILL_COUNT: usize = 3;

/// Request body for identity generation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdentityRequest {
    pub current_role: String,
    pub years_experience: String,
    pub education: String,
    pub selected_skills: Vec<String>,
    pub interests: String,
    pub achievements: String,
    pub career_goals: String,
}

/// Generates a 2-3 sentence career identity statement. Never fails: provider
/// errors and empty content yield the template fallback.
pub async fn generate_identity(chat: &dyn ChatCompletion, request: &IdentityRequest) -> String {
    let prompt = build_identity_prompt(request);

    match chat.complete(IDENTITY_SYSTEM, &prompt, IDENTITY_MAX_TOKENS).await {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            warn!("Identity generation failed, using fallback: {e}");
            fallback_identity(request)
        }
    }
}

fn build_identity_prompt(request: &IdentityRequest) -> String {
    IDENTITY_PROMPT_TEMPLATE
        .replace("{current_role}", or_default(&request.current_role, "Professional"))
        .replace(
            "{years_experience}",
            or_default(&request.years_experience, "Entry level"),
        )
        .replace("{education}", or_default(&request.education, "College graduate"))
        .replace("{skills}", &request.selected_skills.join(", "))
        .replace("{interests}", or_default(&request.interests, "Professional growth"))
        .replace(
            "{achievements}",
            or_default(&request.achievements, "Various accomplishments"),
        )
        .replace(
            "{career_goals}",
            or_default(&request.career_goals, "Career advancement"),
        )
}

/// Deterministic identity statement used when the provider is unavailable.
fn fallback_identity(request: &IdentityRequest) -> String {
    let role = or_default(&request.current_role, "professional");
    let experience = or_default(&request.years_experience, "experienced");

    let skills: Vec<&str> = if request.selected_skills.is_empty() {
        vec!["problem-solving", "communication"]
    } else {
        request
            .selected_skills
            .iter()
            .take(FALLBACK_SKILL_COUNT)
            .map(String::as_str)
            .collect()
    };

    format!(
        "As a {experience} {role}, I bring a unique combination of {} to drive meaningful \
         impact. My proven track record and commitment to continuous learning position me to \
         excel in challenging roles that require collaboration and innovation.",
        skills.join(", ")
    )
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.trim().is_empty() {
        default
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;

    struct StubChat(Option<String>);

    #[async_trait]
    impl ChatCompletion for StubChat {
        async fn complete(
            &self,
            _system: &str,
            _prompt: &str,
            _max_tokens: u32,
        ) -> Result<String, LlmError> {
            match &self.0 {
                Some(text) => Ok(text.clone()),
                None => Err(LlmError::EmptyContent),
            }
        }
    }

    fn analyst_request() -> IdentityRequest {
        IdentityRequest {
            current_role: "Data Analyst".to_string(),
            years_experience: "6-10 years".to_string(),
            selected_skills: vec!["Python".to_string(), "SQL".to_string()],
            ..IdentityRequest::default()
        }
    }

    #[tokio::test]
    async fn test_identity_uses_model_output_when_available() {
        let chat = StubChat(Some("A seasoned analyst turning data into decisions.".to_string()));
        let statement = generate_identity(&chat, &analyst_request()).await;
        assert_eq!(statement, "A seasoned analyst turning data into decisions.");
    }

    #[tokio::test]
    async fn test_identity_falls_back_on_provider_failure() {
        let chat = StubChat(None);
        let statement = generate_identity(&chat, &analyst_request()).await;

        assert!(!statement.is_empty());
        assert!(statement.contains("Data Analyst"));
        assert!(statement.contains("6-10 years"));
        assert!(statement.contains("Python, SQL"));
    }

    #[test]
    fn test_fallback_quotes_at_most_three_skills() {
        let request = IdentityRequest {
            selected_skills: vec![
                "Python".to_string(),
                "SQL".to_string(),
                "Spark".to_string(),
                "Tableau".to_string(),
            ],
            ..IdentityRequest::default()
        };
        let statement = fallback_identity(&request);
        assert!(statement.contains("Python, SQL, Spark"));
        assert!(!statement.contains("Tableau"));
    }

    #[test]
    fn test_fallback_defaults_for_empty_profile() {
        let statement = fallback_identity(&IdentityRequest::default());
        assert!(statement.contains("professional"));
        assert!(statement.contains("problem-solving, communication"));
    }

    #[test]
    fn test_prompt_substitutes_all_placeholders() {
        let prompt = build_identity_prompt(&analyst_request());
        assert!(!prompt.contains('{'));
        assert!(prompt.contains("Data Analyst"));
        assert!(prompt.contains("Python, SQL"));
    }
}
