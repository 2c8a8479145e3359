use std::sync::Arc;

use sqlx::PgPool;

use crate::llm_client::ChatCompletion;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The chat provider is held as `Arc<dyn ChatCompletion>` so tests can inject
/// a stub backend instead of the real Anthropic client.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub chat: Arc<dyn ChatCompletion>,
}
