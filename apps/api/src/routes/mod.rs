pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::prediction::handlers as prediction;
use crate::roadmap::handlers as roadmap;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Quiz API
        .route(
            "/api/v1/quiz/questions",
            get(prediction::handle_get_questions),
        )
        .route("/api/v1/quiz/submit", post(prediction::handle_submit_quiz))
        // Manual prediction API
        .route(
            "/api/v1/predictions/manual",
            post(prediction::handle_manual_prediction),
        )
        // Roadmap API
        .route(
            "/api/v1/roadmap/generate",
            post(roadmap::handle_generate_roadmap),
        )
        .with_state(state)
}
