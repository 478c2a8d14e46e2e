pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::state::AppState;
use crate::{admin, assistant, auth, planner, roadmap};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth
        .route("/api/v1/auth/signup", post(auth::handlers::handle_signup))
        .route("/api/v1/auth/login", post(auth::handlers::handle_login))
        // Roadmap
        .route(
            "/api/v1/roadmap/generate",
            post(roadmap::handlers::handle_generate),
        )
        .route(
            "/api/v1/roadmap",
            get(roadmap::handlers::handle_get_roadmap)
                .put(roadmap::handlers::handle_save_roadmap),
        )
        .route(
            "/api/v1/roadmap/task",
            patch(roadmap::handlers::handle_update_task),
        )
        .route(
            "/api/v1/roadmap/progress",
            get(roadmap::handlers::handle_get_progress),
        )
        .route(
            "/api/v1/roadmap/history",
            get(roadmap::handlers::handle_history),
        )
        // Planner
        .route(
            "/api/v1/planner/daily",
            get(planner::handlers::handle_get_daily_plan)
                .post(planner::handlers::handle_generate_daily_plan),
        )
        .route(
            "/api/v1/planner/schedule",
            post(planner::handlers::handle_schedule),
        )
        // Assistant
        .route(
            "/api/v1/assistant/quick",
            post(assistant::handlers::handle_quick),
        )
        .route(
            "/api/v1/assistant/history",
            get(assistant::handlers::handle_history),
        )
        // Admin
        .route("/api/v1/admin/stats", get(admin::handle_stats))
        .with_state(state)
}
