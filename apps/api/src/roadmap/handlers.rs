//! Axum route handlers for the Roadmap API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::roadmap::Roadmap;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRoadmapRequest {
    pub career_title: String,
    /// Accepted for wire compatibility; the static generator does not
    /// personalize by profile.
    #[serde(default)]
    #[allow(dead_code)]
    pub user_profile: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct GenerateRoadmapResponse {
    pub success: bool,
    pub roadmap: Roadmap,
    pub message: String,
}

/// POST /api/v1/roadmap/generate
///
/// Returns a learning roadmap for the given career title. Unknown titles
/// get the generic template; an empty title is the only rejection.
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    Json(request): Json<GenerateRoadmapRequest>,
) -> Result<Json<GenerateRoadmapResponse>, AppError> {
    if request.career_title.trim().is_empty() {
        return Err(AppError::Validation(
            "careerTitle is required".to_string(),
        ));
    }

    let roadmap = state.roadmap.generate(request.career_title.trim()).await?;

    Ok(Json(GenerateRoadmapResponse {
        success: true,
        roadmap,
        message: "Roadmap generated successfully".to_string(),
    }))
}
