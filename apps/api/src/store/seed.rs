//! One-time sample-data bootstrap for the career catalog.
//!
//! Runs at startup: if the careers table is empty, inserts six sample careers
//! covering distinct categories. Not a general import mechanism.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

struct SeedCareer {
    title: &'static str,
    category: &'static str,
    description: &'static str,
    skills: &'static [&'static str],
    average_salary: &'static str,
    growth_rate: &'static str,
    education: &'static str,
    job_postings: i32,
    companies: &'static [&'static str],
}

const SAMPLE_CAREERS: &[SeedCareer] = &[
    SeedCareer {
        title: "UX/UI Designer",
        category: "Design & Creative",
        description: "Create intuitive and engaging user experiences for digital products",
        skills: &[
            "Design Thinking",
            "Prototyping",
            "User Research",
            "Figma",
            "Adobe Creative Suite",
        ],
        average_salary: "$75,000 - $120,000",
        growth_rate: "13% (Much faster than average)",
        education: "Bachelor's degree in Design, Psychology, or related field",
        job_postings: 1250,
        companies: &["Google", "Apple", "Airbnb", "Spotify", "Netflix"],
    },
    SeedCareer {
        title: "Frontend Developer",
        category: "Technology",
        description: "Build user-facing web applications using modern frameworks and technologies",
        skills: &[
            "JavaScript",
            "React",
            "HTML/CSS",
            "TypeScript",
            "Version Control",
        ],
        average_salary: "$70,000 - $130,000",
        growth_rate: "22% (Much faster than average)",
        education: "Bachelor's degree in Computer Science or equivalent experience",
        job_postings: 2100,
        companies: &["Meta", "Amazon", "Microsoft", "Tesla", "Shopify"],
    },
    SeedCareer {
        title: "Product Manager",
        category: "Business & Strategy",
        description: "Drive product strategy and coordinate cross-functional teams to deliver successful products",
        skills: &[
            "Product Strategy",
            "Data Analysis",
            "Leadership",
            "Market Research",
            "Agile Methodology",
        ],
        average_salary: "$90,000 - $160,000",
        growth_rate: "19% (Much faster than average)",
        education: "Bachelor's degree in Business, Engineering, or related field",
        job_postings: 980,
        companies: &["Google", "Uber", "Slack", "Zoom", "Dropbox"],
    },
    SeedCareer {
        title: "Data Scientist",
        category: "Technology",
        description: "Analyze complex data to help organizations make data-driven decisions",
        skills: &[
            "Python",
            "Machine Learning",
            "Statistics",
            "SQL",
            "Data Visualization",
        ],
        average_salary: "$95,000 - $165,000",
        growth_rate: "35% (Much faster than average)",
        education: "Master's degree in Data Science, Statistics, or related field",
        job_postings: 1580,
        companies: &["Netflix", "Spotify", "Airbnb", "LinkedIn", "Twitter"],
    },
    SeedCareer {
        title: "Digital Marketing Manager",
        category: "Marketing & Communications",
        description: "Develop and execute digital marketing strategies across multiple channels",
        skills: &[
            "SEO/SEM",
            "Social Media Marketing",
            "Content Strategy",
            "Analytics",
            "Email Marketing",
        ],
        average_salary: "$55,000 - $95,000",
        growth_rate: "10% (Faster than average)",
        education: "Bachelor's degree in Marketing, Communications, or related field",
        job_postings: 1890,
        companies: &["HubSpot", "Mailchimp", "Buffer", "Hootsuite", "Canva"],
    },
    SeedCareer {
        title: "Cybersecurity Analyst",
        category: "Technology",
        description: "Protect organizations from cyber threats and maintain information security",
        skills: &[
            "Network Security",
            "Incident Response",
            "Risk Assessment",
            "Compliance",
            "Ethical Hacking",
        ],
        average_salary: "$80,000 - $140,000",
        growth_rate: "33% (Much faster than average)",
        education: "Bachelor's degree in Cybersecurity, Computer Science, or related field",
        job_postings: 1650,
        companies: &["IBM", "Cisco", "FireEye", "CrowdStrike", "Palo Alto Networks"],
    },
];

/// Seeds the career catalog iff the table is empty. Idempotent across restarts.
pub async fn seed_if_empty(pool: &PgPool) -> Result<(), sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM careers")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        return Ok(());
    }

    for career in SAMPLE_CAREERS {
        sqlx::query(
            r#"
            INSERT INTO careers
                (id, title, category, description, skills, average_salary,
                 growth_rate, education, job_postings, companies)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(career.title)
        .bind(career.category)
        .bind(career.description)
        .bind(career.skills.iter().map(|s| s.to_string()).collect::<Vec<_>>())
        .bind(career.average_salary)
        .bind(career.growth_rate)
        .bind(career.education)
        .bind(career.job_postings)
        .bind(
            career
                .companies
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>(),
        )
        .execute(pool)
        .await?;
    }

    info!(
        "Seeded careers collection with {} sample records",
        SAMPLE_CAREERS.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_set_has_six_careers() {
        assert_eq!(SAMPLE_CAREERS.len(), 6);
    }

    #[test]
    fn test_seed_set_covers_distinct_categories() {
        let categories: HashSet<&str> = SAMPLE_CAREERS.iter().map(|c| c.category).collect();
        // Four distinct categories across the six sample careers
        assert_eq!(categories.len(), 4);
        assert!(categories.contains("Technology"));
    }

    #[test]
    fn test_seed_careers_are_fully_populated() {
        for career in SAMPLE_CAREERS {
            assert!(!career.title.is_empty());
            assert!(!career.skills.is_empty());
            assert!(!career.companies.is_empty());
            assert!(career.job_postings > 0);
        }
    }
}
