//! Result bundle — the one artifact the engines hand to the results view.
//!
//! Wire shape mirrors what the original client persists under its
//! `quizResults` storage key: snake_case candidate fields inside a
//! camelCase envelope. Serialization must round-trip losslessly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::roadmap::Roadmap;

/// Which pipeline produced a bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisType {
    #[serde(rename = "manual-input")]
    ManualInput,
    #[serde(rename = "smart-algorithm")]
    SmartAlgorithm,
    #[serde(rename = "frontend-analysis")]
    FrontendAnalysis,
}

/// A ranked career match with its attached metadata and learning plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerCandidate {
    pub title: String,
    pub match_percentage: u8,
    pub icon: String,
    pub description: String,
    pub salary_range: String,
    pub growth_rate: String,
    pub learning_time: String,
    pub difficulty: String,
    pub matching_skills: Vec<String>,
    pub skills_to_learn: Vec<String>,
    pub next_steps: Vec<String>,
    pub roadmap: Roadmap,
}

/// The top-3 result set produced by either scoring pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultBundle {
    pub success: bool,
    pub message: String,
    pub predictions: Vec<CareerCandidate>,
    #[serde(rename = "analysisType")]
    pub analysis_type: AnalysisType,
    #[serde(rename = "submissionTime")]
    pub submission_time: DateTime<Utc>,
    #[serde(rename = "quizSessionId", skip_serializing_if = "Option::is_none")]
    pub quiz_session_id: Option<Uuid>,
    #[serde(rename = "answersProcessed", skip_serializing_if = "Option::is_none")]
    pub answers_processed: Option<usize>,
}
