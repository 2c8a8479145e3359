//! Cover letter generation.
//!
//! One LLM attempt; any failure falls back to a deterministic template
//! parameterized by job title and company.

use serde::Deserialize;
use tracing::warn;

use crate::coaching::prompts::{COVER_LETTER_PROMPT_TEMPLATE, COVER_LETTER_SYSTEM};
use crate::llm_client::ChatCompletion;
use crate::models::user::UserProfile;

const COVER_LETTER_MAX_TOKENS: u32 = 400;

/// Request body for cover letter generation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoverLetterRequest {
    pub job_title: String,
    pub company: String,
    pub job_description: String,
    pub user_profile: Option<UserProfile>,
}

/// Generates a 3-4 paragraph cover letter. Never fails.
pub async fn generate_cover_letter(
    chat: &dyn ChatCompletion,
    request: &CoverLetterRequest,
) -> String {
    let prompt = build_cover_letter_prompt(request);

    match chat
        .complete(COVER_LETTER_SYSTEM, &prompt, COVER_LETTER_MAX_TOKENS)
        .await
    {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            warn!("Cover letter generation failed, using fallback: {e}");
            fallback_cover_letter(request)
        }
    }
}

fn build_cover_letter_prompt(request: &CoverLetterRequest) -> String {
    let user_context = match &request.user_profile {
        Some(profile) => format!(
            "\nUser Background:\n\
             - Current Role: {}\n\
             - Experience: {}\n\
             - Skills: {}\n\
             - Career Goals: {}\n",
            profile.current_role.as_deref().unwrap_or("Professional"),
            profile.years_experience.as_deref().unwrap_or("Experienced"),
            profile.skills.join(", "),
            profile.career_goals.as_deref().unwrap_or("Professional growth"),
        ),
        None => String::new(),
    };

    COVER_LETTER_PROMPT_TEMPLATE
        .replace("{job_title}", non_empty(&request.job_title, "Professional Role"))
        .replace("{company}", non_empty(&request.company, "Target Company"))
        .replace(
            "{job_description}",
            non_empty(&request.job_description, "Professional opportunity"),
        )
        .replace("{user_context}", &user_context)
}

/// Deterministic cover letter used when the provider is unavailable.
fn fallback_cover_letter(request: &CoverLetterRequest) -> String {
    let job_title = non_empty(&request.job_title, "this position");
    let company = non_empty(&request.company, "your organization");

    format!(
        "Dear Hiring Manager,\n\n\
         I am writing to express my strong interest in the {job_title} position at {company}. \
         With my background in professional development and proven track record of success, I am \
         excited about the opportunity to contribute to your team's continued growth.\n\n\
         In my previous roles, I have successfully delivered results through strategic thinking \
         and collaborative leadership. My experience has equipped me with the skills necessary to \
         excel in this position, particularly in problem-solving, project management, and \
         stakeholder communication.\n\n\
         I am particularly drawn to {company} because of your commitment to innovation and \
         excellence in your industry. I would welcome the opportunity to discuss how my skills \
         and enthusiasm can contribute to your team's objectives and help drive your \
         organization's success.\n\n\
         Thank you for considering my application. I look forward to hearing from you and \
         discussing how I can contribute to your team.\n\n\
         Sincerely,\n\
         [Your Name]"
    )
}

fn non_empty<'a>(value: &'a str, default: &'a str) -> &'a str {
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

    #[tokio::test]
    async fn test_cover_letter_uses_model_output() {
        let chat = StubChat(Some("Dear team, I am thrilled to apply.".to_string()));
        let letter = generate_cover_letter(&chat, &CoverLetterRequest::default()).await;
        assert_eq!(letter, "Dear team, I am thrilled to apply.");
    }

    #[tokio::test]
    async fn test_cover_letter_fallback_names_job_and_company() {
        let chat = StubChat(None);
        let request = CoverLetterRequest {
            job_title: "Product Marketing Manager".to_string(),
            company: "GrowthTech Inc".to_string(),
            ..CoverLetterRequest::default()
        };
        let letter = generate_cover_letter(&chat, &request).await;

        assert!(letter.starts_with("Dear Hiring Manager,"));
        assert!(letter.contains("Product Marketing Manager position at GrowthTech Inc"));
        assert!(letter.ends_with("[Your Name]"));
    }

    #[tokio::test]
    async fn test_cover_letter_fallback_defaults_for_empty_fields() {
        let chat = StubChat(None);
        let letter = generate_cover_letter(&chat, &CoverLetterRequest::default()).await;
        assert!(letter.contains("this position"));
        assert!(letter.contains("your organization"));
    }

    #[test]
    fn test_prompt_includes_profile_context_when_present() {
        let request = CoverLetterRequest {
            user_profile: Some(UserProfile {
                current_role: Some("Engineer".to_string()),
                skills: vec!["Rust".to_string(), "SQL".to_string()],
                ..UserProfile::default()
            }),
            ..CoverLetterRequest::default()
        };
        let prompt = build_cover_letter_prompt(&request);
        assert!(prompt.contains("User Background:"));
        assert!(prompt.contains("Rust, SQL"));
    }

    #[test]
    fn test_prompt_omits_profile_block_when_absent() {
        let prompt = build_cover_letter_prompt(&CoverLetterRequest::default());
        assert!(!prompt.contains("User Background:"));
    }
}
