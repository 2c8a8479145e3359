use sqlx::PgPool;
use uuid::Uuid;

use crate::models::career::Career;

/// Lists careers with optional case-insensitive substring search over
/// title/description/skills and optional exact category match, capped at
/// `limit` rows.
pub async fn list_careers(
    pool: &PgPool,
    search: Option<&str>,
    category: Option<&str>,
    limit: i64,
) -> Result<Vec<Career>, sqlx::Error> {
    let pattern = search.map(|s| format!("%{s}%"));

    sqlx::query_as::<_, Career>(
        r#"
        SELECT * FROM careers
        WHERE ($1::text IS NULL
               OR title ILIKE $1
               OR description ILIKE $1
               OR EXISTS (SELECT 1 FROM unnest(skills) AS skill WHERE skill ILIKE $1))
          AND ($2::text IS NULL OR category = $2)
        ORDER BY created_at
        LIMIT $3
        "#,
    )
    .bind(pattern)
    .bind(category)
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Fetches a single career by its id string.
/// A malformed id is "not found", never an error.
pub async fn get_career(pool: &PgPool, id: &str) -> Result<Option<Career>, sqlx::Error> {
    let Ok(id) = Uuid::parse_str(id) else {
        return Ok(None);
    };

    sqlx::query_as::<_, Career>("SELECT * FROM careers WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Returns the distinct category strings present in the catalog.
pub async fn list_categories(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>("SELECT DISTINCT category FROM careers ORDER BY category")
        .fetch_all(pool)
        .await
}
