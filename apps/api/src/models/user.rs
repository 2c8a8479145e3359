use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Free-text profile fields submitted by the user. No cross-field invariants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub name: Option<String>,
    pub current_role: Option<String>,
    pub years_experience: Option<String>,
    pub education: Option<String>,
    pub skills: Vec<String>,
    pub interests: Option<String>,
    pub achievements: Option<String>,
    pub career_goals: Option<String>,
}

/// Generated identity statement. Overwritten on regeneration, never versioned.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CareerIdentity {
    pub statement: Option<String>,
    pub generated_at: Option<DateTime<Utc>>,
}

/// A registered user. Profile and identity are embedded JSONB documents;
/// `saved_careers` is a duplicate-suppressed set of career id strings with no
/// referential-integrity check against the careers table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub profile: Json<UserProfile>,
    pub career_identity: Json<CareerIdentity>,
    pub saved_careers: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_profile_deserializes_from_partial_camel_case_json() {
        let json = r#"{
            "currentRole": "Data Analyst",
            "skills": ["Python", "SQL"],
            "yearsExperience": "6-10 years"
        }"#;

        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.current_role.as_deref(), Some("Data Analyst"));
        assert_eq!(profile.skills, vec!["Python", "SQL"]);
        assert!(profile.education.is_none());
    }

    #[test]
    fn test_user_profile_defaults_to_empty() {
        let profile: UserProfile = serde_json::from_str("{}").unwrap();
        assert!(profile.skills.is_empty());
        assert!(profile.current_role.is_none());
    }

    #[test]
    fn test_career_identity_round_trips_generated_at() {
        let identity = CareerIdentity {
            statement: Some("A driven analyst.".to_string()),
            generated_at: Some(Utc::now()),
        };
        let value = serde_json::to_value(&identity).unwrap();
        assert!(value["generatedAt"].is_string());
        let recovered: CareerIdentity = serde_json::from_value(value).unwrap();
        assert_eq!(recovered.statement.as_deref(), Some("A driven analyst."));
    }
}
