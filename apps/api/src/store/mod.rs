//! Document store adapter over PostgreSQL.
//!
//! Two collections: `careers` (seeded once, then read-only) and `users`
//! (full CRUD plus saved-career set mutations). All functions take `&PgPool`
//! and return plain sqlx results; the route layer decides status codes.

pub mod careers;
pub mod seed;
pub mod users;

use anyhow::Result;
use sqlx::PgPool;
use tracing::info;

const CREATE_CAREERS: &str = r#"
CREATE TABLE IF NOT EXISTS careers (
    id UUID PRIMARY KEY,
    title TEXT NOT NULL,
    category TEXT NOT NULL,
    description TEXT NOT NULL,
    skills TEXT[] NOT NULL DEFAULT '{}',
    average_salary TEXT NOT NULL,
    growth_rate TEXT NOT NULL,
    education TEXT NOT NULL,
    related_careers TEXT[] NOT NULL DEFAULT '{}',
    job_postings INT NOT NULL DEFAULT 0,
    companies TEXT[] NOT NULL DEFAULT '{}',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

// Email is the lookup key but deliberately NOT a uniqueness constraint;
// create_user guards against duplicates by looking up first.
const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id UUID PRIMARY KEY,
    email TEXT NOT NULL,
    profile JSONB NOT NULL DEFAULT '{}',
    career_identity JSONB NOT NULL DEFAULT '{}',
    saved_careers TEXT[] NOT NULL DEFAULT '{}',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

/// One-time bootstrap at startup: create tables if absent, then seed the
/// sample career catalog iff the careers table is empty.
pub async fn init(pool: &PgPool) -> Result<()> {
    sqlx::query(CREATE_CAREERS).execute(pool).await?;
    sqlx::query(CREATE_USERS).execute(pool).await?;

    seed::seed_if_empty(pool).await?;

    info!("Store initialized");
    Ok(())
}
