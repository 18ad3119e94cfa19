//! Axum route handlers for the Prediction API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::bundle::ResultBundle;
use crate::models::profile::UserProfile;
use crate::models::question::{AnswerSet, QuizQuestion};
use crate::prediction::manual::compute_manual_matches;
use crate::prediction::quiz::compute_quiz_matches;
use crate::prediction::sampler::sample_quiz_set;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub data: Vec<QuizQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitQuizRequest {
    pub questions: Vec<QuizQuestion>,
    pub answers: AnswerSet,
}

/// GET /api/v1/quiz/questions
///
/// Samples a fresh fixed-composition question set from the bank. Every
/// request draws anew; nothing is cached across sessions.
pub async fn handle_get_questions(State(state): State<AppState>) -> Json<QuestionsResponse> {
    let mut rng = rand::thread_rng();
    let data = sample_quiz_set(&state.questions, &mut rng);
    info!("Sampled {} quiz questions", data.len());
    Json(QuestionsResponse {
        success: true,
        data,
    })
}

/// POST /api/v1/quiz/submit
///
/// Runs the quiz engine over the served question set and the user's
/// answers. Incomplete answer sets are rejected before scoring.
pub async fn handle_submit_quiz(
    Json(request): Json<SubmitQuizRequest>,
) -> Result<Json<ResultBundle>, AppError> {
    if request.questions.is_empty() {
        return Err(AppError::Validation(
            "questions cannot be empty".to_string(),
        ));
    }

    let bundle = compute_quiz_matches(&request.answers, &request.questions)?;
    info!(
        "Quiz scored: {} answers, top match {}",
        request.answers.len(),
        bundle
            .predictions
            .first()
            .map(|p| p.title.as_str())
            .unwrap_or("none")
    );
    Ok(Json(bundle))
}

/// POST /api/v1/predictions/manual
///
/// Scores a structured profile against the full career catalog. Total: any
/// well-typed profile yields a bundle.
pub async fn handle_manual_prediction(
    Json(profile): Json<UserProfile>,
) -> Json<ResultBundle> {
    let bundle = compute_manual_matches(&profile);
    info!(
        "Manual prediction: top match {}",
        bundle
            .predictions
            .first()
            .map(|p| p.title.as_str())
            .unwrap_or("none")
    );
    Json(bundle)
}
