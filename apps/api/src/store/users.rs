use chrono::Utc;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::user::{CareerIdentity, User, UserProfile};

/// Inserts a new user row and returns it.
/// Callers wanting find-or-create semantics look up by email first.
pub async fn create_user(
    pool: &PgPool,
    email: &str,
    profile: UserProfile,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, email, profile, career_identity)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(email)
    .bind(Json(profile))
    .bind(Json(CareerIdentity::default()))
    .fetch_one(pool)
    .await
}

/// Fetches a user by id string. A malformed id is "not found", never an error.
pub async fn get_user_by_id(pool: &PgPool, id: &str) -> Result<Option<User>, sqlx::Error> {
    let Ok(id) = Uuid::parse_str(id) else {
        return Ok(None);
    };

    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

/// Replaces the user's profile document. Stamps `updated_at`.
/// Returns false when no row matched.
pub async fn update_profile(
    pool: &PgPool,
    id: Uuid,
    profile: UserProfile,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE users SET profile = $2, updated_at = now() WHERE id = $1")
        .bind(id)
        .bind(Json(profile))
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Overwrites the user's career identity with a freshly stamped statement.
pub async fn save_identity(
    pool: &PgPool,
    id: Uuid,
    statement: &str,
) -> Result<bool, sqlx::Error> {
    let identity = CareerIdentity {
        statement: Some(statement.to_string()),
        generated_at: Some(Utc::now()),
    };

    let result =
        sqlx::query("UPDATE users SET career_identity = $2, updated_at = now() WHERE id = $1")
            .bind(id)
            .bind(Json(identity))
            .execute(pool)
            .await?;

    Ok(result.rows_affected() > 0)
}

/// Adds a career id to the user's saved set.
/// Idempotent: a no-op (affecting zero rows) when the id is already present.
pub async fn add_saved_career(
    pool: &PgPool,
    id: Uuid,
    career_id: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE users
        SET saved_careers = array_append(saved_careers, $2), updated_at = now()
        WHERE id = $1 AND NOT ($2 = ANY(saved_careers))
        "#,
    )
    .bind(id)
    .bind(career_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Removes a career id from the user's saved set.
/// Removing an absent id is a no-op, not an error.
pub async fn remove_saved_career(
    pool: &PgPool,
    id: Uuid,
    career_id: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE users
        SET saved_careers = array_remove(saved_careers, $2), updated_at = now()
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(career_id)
    .execute(pool)
    .await?;

    Ok(())
}
