//! Career match scoring and the recommendation pipeline.
//!
//! Scoring prompts the model for a bare number and extracts the first integer
//! substring, clamped to [0, 100]. The two failure defaults are deliberately
//! distinct: 75 when a successful call contains no parseable number, 70 when
//! the call itself fails. Preserved as observable behavior.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::coaching::prompts::{MATCH_PROMPT_TEMPLATE, MATCH_SYSTEM};
use crate::llm_client::ChatCompletion;
use crate::models::career::Career;
use crate::models::user::UserProfile;

const MATCH_MAX_TOKENS: u32 = 50;

/// Default when the call succeeded but returned no integer.
pub const DEFAULT_SCORE_UNPARSED: u8 = 75;
/// Default when the upstream call failed outright.
pub const DEFAULT_SCORE_PROVIDER_FAILURE: u8 = 70;

/// Careers below this score are not recommended.
pub const RECOMMEND_SCORE_FLOOR: u8 = 60;
const STRONG_MATCH_THRESHOLD: u8 = 80;
/// At most this many candidates are scored per request (fixed cap, not
/// adaptive control).
const MAX_SCORED_CANDIDATES: usize = 10;
const MAX_RECOMMENDATIONS: usize = 5;

/// A recommended career with its score and canned reasons.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub career: Career,
    pub match_score: u8,
    pub match_reasons: Vec<String>,
}

/// Output of the recommendation pipeline: the top recommendations plus the
/// full score map for every scored candidate.
#[derive(Debug, Clone)]
pub struct RecommendationSet {
    pub recommendations: Vec<Recommendation>,
    pub match_scores: HashMap<String, u8>,
}

/// Scores how well a profile matches one career, in [0, 100]. Never fails.
pub async fn score_career_match(
    chat: &dyn ChatCompletion,
    profile: &UserProfile,
    career: &Career,
) -> u8 {
    let prompt = build_match_prompt(profile, career);

    match chat.complete(MATCH_SYSTEM, &prompt, MATCH_MAX_TOKENS).await {
        Ok(text) => extract_score(&text).unwrap_or(DEFAULT_SCORE_UNPARSED),
        Err(e) => {
            warn!("Career match scoring failed for '{}': {e}", career.title);
            DEFAULT_SCORE_PROVIDER_FAILURE
        }
    }
}

/// Scores up to ten candidates, keeps those at or above the floor, attaches
/// canned reasons, and returns the top five by descending score.
pub async fn recommend_careers(
    chat: &dyn ChatCompletion,
    profile: &UserProfile,
    careers: Vec<Career>,
) -> RecommendationSet {
    let mut recommendations = Vec::new();
    let mut match_scores = HashMap::new();

    for career in careers.into_iter().take(MAX_SCORED_CANDIDATES) {
        let score = score_career_match(chat, profile, &career).await;
        match_scores.insert(career.id.to_string(), score);

        if score >= RECOMMEND_SCORE_FLOOR {
            recommendations.push(Recommendation {
                match_reasons: match_reasons(score),
                match_score: score,
                career,
            });
        }
    }

    recommendations.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    recommendations.truncate(MAX_RECOMMENDATIONS);

    info!(
        "Recommendation pipeline: {} scored, {} recommended",
        match_scores.len(),
        recommendations.len()
    );

    RecommendationSet {
        recommendations,
        match_scores,
    }
}

fn build_match_prompt(profile: &UserProfile, career: &Career) -> String {
    MATCH_PROMPT_TEMPLATE
        .replace(
            "{current_role}",
            profile.current_role.as_deref().unwrap_or("Professional"),
        )
        .replace("{skills}", &profile.skills.join(", "))
        .replace(
            "{years_experience}",
            profile.years_experience.as_deref().unwrap_or("Some experience"),
        )
        .replace(
            "{interests}",
            profile.interests.as_deref().unwrap_or("Professional growth"),
        )
        .replace(
            "{career_goals}",
            profile.career_goals.as_deref().unwrap_or("Career advancement"),
        )
        .replace("{career_title}", &career.title)
        .replace("{career_skills}", &career.skills.join(", "))
        .replace("{career_description}", &career.description)
        .replace("{career_category}", &career.category)
}

/// Extracts the first integer substring from model output, clamped to 100.
/// Returns None only when the text contains no digits at all.
fn extract_score(text: &str) -> Option<u8> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits: String = text[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    // A parse failure here can only be overflow, which clamps to 100 anyway.
    let value = digits.parse::<u64>().unwrap_or(u64::MAX);
    Some(value.min(100) as u8)
}

fn match_reasons(score: u8) -> Vec<String> {
    let alignment = if score >= STRONG_MATCH_THRESHOLD {
        "Skills alignment"
    } else {
        "Potential for skill development"
    };

    vec![
        alignment.to_string(),
        "Growth opportunity in your field".to_string(),
        "Matches your experience level".to_string(),
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
