pub mod careers;
pub mod health;
pub mod identity;
pub mod resume;
pub mod users;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // API root status
        .route("/api/", get(health::api_root))
        // Career identity
        .route(
            "/api/identity/generate",
            post(identity::handle_generate_identity),
        )
        // Career catalog
        .route("/api/careers", get(careers::handle_list_careers))
        .route(
            "/api/careers/categories",
            get(careers::handle_list_categories),
        )
        .route("/api/careers/recommend", post(careers::handle_recommend))
        .route("/api/careers/:id", get(careers::handle_get_career))
        // Resume tools
        .route("/api/resume/parse", post(resume::handle_parse_upload))
        .route("/api/resume/optimize", post(resume::handle_optimize))
        .route(
            "/api/resume/rewrite-bullet",
            post(resume::handle_rewrite_bullet),
        )
        .route(
            "/api/resume/cover-letter",
            post(resume::handle_cover_letter),
        )
        // Users and saved careers
        .route("/api/users", post(users::handle_create_user))
        .route("/api/users/:id", get(users::handle_get_user))
        .route("/api/users/:id/profile", put(users::handle_update_profile))
        .route("/api/users/:id/identity", post(users::handle_save_identity))
        .route(
            "/api/users/:id/careers/:career_id",
            post(users::handle_save_career).delete(users::handle_remove_career),
        )
        .with_state(state)
}
