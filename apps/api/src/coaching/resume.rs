//! Resume optimization and single-bullet rewriting.
//!
//! Both operations prompt for strict JSON. The optimize path recovers from a
//! parse failure by treating the entire response as the guide text; the
//! rewrite path recovers with a heuristic weak-phrase substitution. Total
//! provider failure yields deterministic template content. Neither operation
//! ever surfaces an error to the route layer.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::coaching::prompts::{
    OPTIMIZE_PROMPT_TEMPLATE, OPTIMIZE_SYSTEM, REWRITE_PROMPT_TEMPLATE, REWRITE_SYSTEM,
};
use crate::coaching::{parse_or_recover, ModelPayload};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::ChatCompletion;

const OPTIMIZE_MAX_TOKENS: u32 = 1024;
const REWRITE_MAX_TOKENS: u32 = 300;

/// Suggestion list attached to every successful optimization response.
/// Kept for backward compatibility with clients that predate jobEdits.
const SUGGESTIONS: [&str; 5] = [
    "Quantify achievements with specific metrics",
    "Include relevant keywords from job description",
    "Tailor professional summary to target role",
    "Highlight transferable skills",
    "Use strong action verbs",
];

/// Suggestion list attached when the provider is unavailable.
const FALLBACK_SUGGESTIONS: [&str; 5] = [
    "Quantify achievements with specific numbers",
    "Use keywords from job description",
    "Strengthen action verbs",
    "Highlight relevant skills",
    "Show career progression",
];

/// Weak openings replaced by the heuristic rewrite, checked in order so that
/// longer phrases win over their prefixes.
const WEAK_PHRASES: [(&str, &str); 6] = [
    ("responsible for", "Led"),
    ("worked on", "Delivered"),
    ("helped with", "Drove"),
    ("helped", "Drove"),
    ("assisted with", "Supported"),
    ("participated in", "Contributed to"),
];

// ────────────────────────────────────────────────────────────────────────────
// Request / data types
// ────────────────────────────────────────────────────────────────────────────

/// One prior job from a structured resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeJob {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

/// The two accepted resume input shapes: free text or a structured job list.
#[derive(Debug, Clone)]
pub enum ResumeInput {
    Text(String),
    Jobs(Vec<ResumeJob>),
}

/// Request body for resume optimization. `jobs` wins over `currentResume`
/// when both are present; with neither, a placeholder text is used.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptimizeRequest {
    pub job_title: String,
    pub company: String,
    pub job_description: String,
    pub current_resume: Option<String>,
    pub jobs: Option<Vec<ResumeJob>>,
}

impl OptimizeRequest {
    pub fn resume_input(&self) -> ResumeInput {
        match (&self.jobs, &self.current_resume) {
            (Some(jobs), _) if !jobs.is_empty() => ResumeInput::Jobs(jobs.clone()),
            (_, Some(text)) if !text.trim().is_empty() => ResumeInput::Text(text.clone()),
            _ => ResumeInput::Text("No current resume provided".to_string()),
        }
    }
}

/// A single bullet rewrite within an optimization response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BulletEdit {
    pub original: String,
    pub improved: String,
    pub rationale: String,
    pub keywords: Vec<String>,
}

/// Structured improvement suggestions for one job on the resume.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobEdit {
    pub job_index: usize,
    pub company: String,
    pub role: String,
    pub period: String,
    pub bullets: Vec<BulletEdit>,
}

/// Strict-JSON shape the model is instructed to return for optimization.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct OptimizeModelOutput {
    guide: String,
    job_edits: Vec<JobEdit>,
    pro_tips: Vec<String>,
}

/// Fully shaped optimization result handed to the route layer.
#[derive(Debug, Clone)]
pub struct OptimizedResume {
    pub guide: String,
    pub job_edits: Vec<JobEdit>,
    pub bullet_edits: Vec<BulletEdit>,
    pub pro_tips: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Request body for single-bullet rewriting.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RewriteRequest {
    pub job_title: String,
    pub company: String,
    pub job_description: String,
    pub original: String,
    pub context: String,
}

/// Result of a bullet rewrite. Also the strict-JSON shape the model returns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RewrittenBullet {
    pub improved: String,
    pub rationale: String,
    pub keywords: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Optimize resume
// ────────────────────────────────────────────────────────────────────────────

/// Optimizes a resume against a job posting. Never fails: a JSON parse miss
/// demotes the response to an unstructured guide, and a provider failure
/// yields the template fallback.
pub async fn optimize_resume(
    chat: &dyn ChatCompletion,
    request: &OptimizeRequest,
) -> OptimizedResume {
    let prompt = build_optimize_prompt(request);
    let system = format!("{OPTIMIZE_SYSTEM} {JSON_ONLY_SYSTEM}");

    match chat.complete(&system, &prompt, OPTIMIZE_MAX_TOKENS).await {
        Ok(text) => shape_optimize_output(&text),
        Err(e) => {
            warn!("Resume optimization failed, using fallback: {e}");
            fallback_optimization(request)
        }
    }
}

/// Single parse-or-recover step over the model text (never errors).
fn shape_optimize_output(text: &str) -> OptimizedResume {
    match parse_or_recover::<OptimizeModelOutput>(text) {
        ModelPayload::Structured(output) => {
            let bullet_edits = output
                .job_edits
                .iter()
                .flat_map(|job| job.bullets.iter().cloned())
                .collect();
            OptimizedResume {
                guide: output.guide,
                job_edits: output.job_edits,
                bullet_edits,
                pro_tips: output.pro_tips,
                suggestions: SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
            }
        }
        ModelPayload::Raw(raw) => OptimizedResume {
            guide: raw,
            job_edits: Vec::new(),
            bullet_edits: Vec::new(),
            pro_tips: Vec::new(),
            suggestions: SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        },
    }
}

fn build_optimize_prompt(request: &OptimizeRequest) -> String {
    OPTIMIZE_PROMPT_TEMPLATE
        .replace("{job_title}", non_empty(&request.job_title, "Professional Role"))
        .replace("{company}", non_empty(&request.company, "Target Company"))
        .replace(
            "{job_description}",
            non_empty(
                &request.job_description,
                "Professional role with growth opportunities",
            ),
        )
        .replace("{resume}", &render_resume_input(&request.resume_input()))
}

/// Renders either resume shape into prompt text.
fn render_resume_input(input: &ResumeInput) -> String {
    match input {
        ResumeInput::Text(text) => text.clone(),
        ResumeInput::Jobs(jobs) => {
            let mut rendered = String::new();
            for (index, job) in jobs.iter().enumerate() {
                rendered.push_str(&format!(
                    "Job {index}: {} at {} ({})\n",
                    non_empty(&job.role, "Unknown role"),
                    non_empty(&job.company, "Unknown company"),
                    non_empty(&job.period, "unspecified period"),
                ));
                for bullet in &job.bullets {
                    rendered.push_str(&format!("- {bullet}\n"));
                }
            }
            rendered
        }
    }
}

/// Deterministic optimization guide used when the provider is unavailable.
fn fallback_optimization(request: &OptimizeRequest) -> OptimizedResume {
    let job_title = non_empty(&request.job_title, "target role");

    let guide = format!(
        "**RESUME OPTIMIZATION SUGGESTIONS**\n\n\
         **Professional Summary Enhancement:**\n\
         Tailor your professional summary to emphasize skills relevant to the {job_title} \
         position. Focus on quantifiable achievements and results that demonstrate your value \
         proposition.\n\n\
         **Key Improvements:**\n\
         \u{2022} Quantify achievements with specific metrics and percentages\n\
         \u{2022} Include relevant keywords from the job description for ATS optimization\n\
         \u{2022} Strengthen action verbs to show initiative and leadership\n\
         \u{2022} Highlight transferable skills that apply to the target role\n\
         \u{2022} Emphasize recent and relevant experience\n\n\
         **Skills to Highlight:**\n\
         \u{2022} Technical expertise relevant to {job_title}\n\
         \u{2022} Leadership and project management capabilities\n\
         \u{2022} Problem-solving and analytical thinking\n\
         \u{2022} Communication and collaboration skills"
    );

    OptimizedResume {
        guide,
        job_edits: Vec::new(),
        bullet_edits: Vec::new(),
        pro_tips: Vec::new(),
        suggestions: FALLBACK_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rewrite one bullet
// ────────────────────────────────────────────────────────────────────────────

/// Rewrites a single resume bullet. Never fails: a parse miss or provider
/// failure falls back to the heuristic weak-phrase substitution.
pub async fn rewrite_bullet(
    chat: &dyn ChatCompletion,
    request: &RewriteRequest,
) -> RewrittenBullet {
    let prompt = build_rewrite_prompt(request);
    let system = format!("{REWRITE_SYSTEM} {JSON_ONLY_SYSTEM}");

    match chat.complete(&system, &prompt, REWRITE_MAX_TOKENS).await {
        Ok(text) => match parse_or_recover::<RewrittenBullet>(&text) {
            ModelPayload::Structured(bullet) if !bullet.improved.trim().is_empty() => bullet,
            _ => heuristic_rewrite(&request.original),
        },
        Err(e) => {
            warn!("Bullet rewrite failed, using heuristic fallback: {e}");
            heuristic_rewrite(&request.original)
        }
    }
}

fn build_rewrite_prompt(request: &RewriteRequest) -> String {
    REWRITE_PROMPT_TEMPLATE
        .replace("{job_title}", non_empty(&request.job_title, "Professional Role"))
        .replace("{company}", non_empty(&request.company, "Target Company"))
        .replace(
            "{job_description}",
            non_empty(&request.job_description, "Professional opportunity"),
        )
        .replace("{original}", &request.original)
        .replace("{context}", non_empty(&request.context, "none provided"))
}

/// Deterministic rewrite: swaps a weak opening phrase for a stronger verb.
/// Leaves bullets that already lead with strong phrasing untouched.
fn heuristic_rewrite(original: &str) -> RewrittenBullet {
    let trimmed = original.trim();

    for (weak, strong) in WEAK_PHRASES {
        let matches = trimmed
            .get(..weak.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(weak));
        if matches {
            let rest = trimmed[weak.len()..].trim_start();
            return RewrittenBullet {
                improved: format!("{strong} {rest}"),
                rationale: "Replaced weak phrasing with a stronger action verb.".to_string(),
                keywords: Vec::new(),
            };
        }
    }

    RewrittenBullet {
        improved: trimmed.to_string(),
        rationale: "Bullet already leads with strong phrasing.".to_string(),
        keywords: Vec::new(),
    }
}

fn non_empty<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.trim().is_empty() {
        default
    } else {
        value
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

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
                None => Err(LlmError::Api {
                    status: 500,
                    message: "upstream down".to_string(),
                }),
            }
        }
    }

    const STRUCTURED_REPLY: &str = r#"{
        "guide": "Lead with cloud migration wins.",
        "jobEdits": [
            {
                "jobIndex": 0,
                "company": "TechCorp",
                "role": "Senior Engineer",
                "period": "2020-Present",
                "bullets": [
                    {
                        "original": "Responsible for microservices",
                        "improved": "Led development of microservices serving 1M+ users",
                        "rationale": "Adds scale and a strong verb.",
                        "keywords": ["microservices", "scale"]
                    },
                    {
                        "original": "Worked on CI/CD",
                        "improved": "Built CI/CD pipelines cutting deploy time 60%",
                        "rationale": "Quantifies the result.",
                        "keywords": ["CI/CD"]
                    }
                ]
            }
        ],
        "proTips": ["Mirror the posting's vocabulary."]
    }"#;

    #[tokio::test]
    async fn test_optimize_parses_structured_output_and_flattens_bullets() {
        let chat = StubChat(Some(STRUCTURED_REPLY.to_string()));
        let result = optimize_resume(&chat, &OptimizeRequest::default()).await;

        assert_eq!(result.guide, "Lead with cloud migration wins.");
        assert_eq!(result.job_edits.len(), 1);
        assert_eq!(result.bullet_edits.len(), 2);
        assert_eq!(result.job_edits[0].company, "TechCorp");
        assert_eq!(result.pro_tips.len(), 1);
        assert_eq!(result.suggestions.len(), 5);
    }

    #[tokio::test]
    async fn test_optimize_recovers_prose_as_guide() {
        let chat = StubChat(Some("Plain prose advice, not JSON.".to_string()));
        let result = optimize_resume(&chat, &OptimizeRequest::default()).await;

        assert_eq!(result.guide, "Plain prose advice, not JSON.");
        assert!(result.job_edits.is_empty());
        assert!(result.bullet_edits.is_empty());
        assert!(result.pro_tips.is_empty());
    }

    #[tokio::test]
    async fn test_optimize_fallback_on_provider_failure() {
        let chat = StubChat(None);
        let request = OptimizeRequest {
            job_title: "Staff Engineer".to_string(),
            ..OptimizeRequest::default()
        };
        let result = optimize_resume(&chat, &request).await;

        assert!(result.guide.contains("**RESUME OPTIMIZATION SUGGESTIONS**"));
        assert!(result.guide.contains("Staff Engineer"));
        assert_eq!(result.suggestions.len(), 5);
        assert!(result.job_edits.is_empty());
    }

    #[tokio::test]
    async fn test_optimize_with_empty_request_still_well_formed() {
        let chat = StubChat(None);
        let result = optimize_resume(&chat, &OptimizeRequest::default()).await;
        assert!(!result.guide.is_empty());
        assert!(result.guide.contains("target role"));
    }

    #[test]
    fn test_resume_input_prefers_structured_jobs() {
        let request = OptimizeRequest {
            current_resume: Some("plain text".to_string()),
            jobs: Some(vec![ResumeJob {
                company: "Acme".to_string(),
                role: "Engineer".to_string(),
                period: "2021-2023".to_string(),
                bullets: vec!["Shipped things".to_string()],
            }]),
            ..OptimizeRequest::default()
        };
        assert!(matches!(request.resume_input(), ResumeInput::Jobs(_)));
    }

    #[test]
    fn test_resume_input_defaults_to_placeholder_text() {
        let request = OptimizeRequest::default();
        match request.resume_input() {
            ResumeInput::Text(text) => assert_eq!(text, "No current resume provided"),
            ResumeInput::Jobs(_) => panic!("expected text input"),
        }
    }

    #[test]
    fn test_render_jobs_lists_roles_and_bullets() {
        let input = ResumeInput::Jobs(vec![ResumeJob {
            company: "Acme".to_string(),
            role: "Engineer".to_string(),
            period: "2021-2023".to_string(),
            bullets: vec!["Shipped the widget".to_string()],
        }]);
        let rendered = render_resume_input(&input);
        assert!(rendered.contains("Engineer at Acme (2021-2023)"));
        assert!(rendered.contains("- Shipped the widget"));
    }

    #[tokio::test]
    async fn test_rewrite_uses_structured_model_output() {
        let chat = StubChat(Some(
            r#"{"improved": "Led a team of five engineers", "rationale": "Stronger verb.", "keywords": ["leadership"]}"#
                .to_string(),
        ));
        let request = RewriteRequest {
            original: "Responsible for a team of five engineers".to_string(),
            ..RewriteRequest::default()
        };
        let bullet = rewrite_bullet(&chat, &request).await;
        assert_eq!(bullet.improved, "Led a team of five engineers");
        assert_eq!(bullet.keywords, vec!["leadership"]);
    }

    #[tokio::test]
    async fn test_rewrite_heuristic_on_unparseable_output() {
        let chat = StubChat(Some("I think this bullet is fine as is.".to_string()));
        let request = RewriteRequest {
            original: "Responsible for deployment automation".to_string(),
            ..RewriteRequest::default()
        };
        let bullet = rewrite_bullet(&chat, &request).await;
        assert_eq!(bullet.improved, "Led deployment automation");
    }

    #[tokio::test]
    async fn test_rewrite_heuristic_on_provider_failure() {
        let chat = StubChat(None);
        let request = RewriteRequest {
            original: "Worked on the billing service".to_string(),
            ..RewriteRequest::default()
        };
        let bullet = rewrite_bullet(&chat, &request).await;
        assert_eq!(bullet.improved, "Delivered the billing service");
        assert!(!bullet.rationale.is_empty());
    }

    #[test]
    fn test_heuristic_is_case_insensitive_on_the_weak_phrase() {
        let bullet = heuristic_rewrite("RESPONSIBLE FOR the data warehouse");
        assert_eq!(bullet.improved, "Led the data warehouse");
    }

    #[test]
    fn test_heuristic_leaves_strong_bullets_untouched() {
        let bullet = heuristic_rewrite("Architected the payments platform");
        assert_eq!(bullet.improved, "Architected the payments platform");
    }

    #[test]
    fn test_heuristic_prefers_longer_weak_phrase() {
        // "helped with" must match before its prefix "helped"
        let bullet = heuristic_rewrite("Helped with incident response");
        assert_eq!(bullet.improved, "Drove incident response");
    }
}
