use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A catalog career. Bulk-seeded on first connect; read-only afterwards.
///
/// `related_careers` is part of the model but never populated by this service.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Career {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub description: String,
    pub skills: Vec<String>,
    pub average_salary: String,
    pub growth_rate: String,
    pub education: String,
    pub related_careers: Vec<String>,
    pub job_postings: i32,
    pub companies: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_career_serializes_camel_case_with_string_id() {
        let career = Career {
            id: Uuid::new_v4(),
            title: "Data Scientist".to_string(),
            category: "Technology".to_string(),
            description: "Analyze complex data".to_string(),
            skills: vec!["Python".to_string(), "SQL".to_string()],
            average_salary: "$95,000 - $165,000".to_string(),
            growth_rate: "35% (Much faster than average)".to_string(),
            education: "Master's degree".to_string(),
            related_careers: vec![],
            job_postings: 1580,
            companies: vec!["Netflix".to_string()],
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&career).unwrap();
        assert!(value["id"].is_string());
        assert_eq!(value["averageSalary"], "$95,000 - $165,000");
        assert_eq!(value["growthRate"], "35% (Much faster than average)");
        assert_eq!(value["jobPostings"], 1580);
        assert!(value.get("average_salary").is_none());
    }
}
