//! Quiz Scoring Engine — turns a complete AnswerSet plus its question set
//! into ranked career matches.
//!
//! Per quiz-catalog career:
//! `min(95, max(65, round(min(40, indicator·3) + min(55, blend))))`, where
//! `blend` is a career-specific linear combination of the five category
//! percentages. Each career's blend weights sum to 1.0; the literals are
//! the contract and are verified in tests.

use chrono::Utc;
use uuid::Uuid;

use crate::careers::{CareerId, QUIZ_CATALOG};
use crate::errors::AppError;
use crate::models::bundle::{AnalysisType, ResultBundle};
use crate::models::question::{AnswerSet, QuizQuestion};
use crate::prediction::analysis::{analyze_answers, CategoryAnalysis, CareerIndicators};
use crate::prediction::clamp_match;
use crate::prediction::selection::{select_top, ScoredCareer};

pub const QUIZ_FLOOR: u8 = 65;
pub const QUIZ_CEILING: u8 = 95;
const INDICATOR_CAP: f64 = 40.0;
const BLEND_CAP: f64 = 55.0;

/// Category-percentage blend weights for one career.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendWeights {
    pub tech: f64,
    pub coding: f64,
    pub interest: f64,
    pub scenario: f64,
    pub personality: f64,
}

impl BlendWeights {
    pub fn sum(&self) -> f64 {
        self.tech + self.coding + self.interest + self.scenario + self.personality
    }
}

/// Blend weights per quiz-catalog career. `None` for careers the quiz path
/// does not score (Project Manager, Product Manager).
pub fn blend_weights(career: CareerId) -> Option<BlendWeights> {
    match career {
        CareerId::DataScientist => Some(BlendWeights {
            tech: 0.25,
            coding: 0.25,
            interest: 0.2,
            scenario: 0.3,
            personality: 0.0,
        }),
        CareerId::SoftwareDeveloper => Some(BlendWeights {
            tech: 0.35,
            coding: 0.35,
            interest: 0.0,
            scenario: 0.2,
            personality: 0.1,
        }),
        CareerId::FrontendDeveloper => Some(BlendWeights {
            tech: 0.3,
            coding: 0.3,
            interest: 0.25,
            scenario: 0.0,
            personality: 0.15,
        }),
        CareerId::BusinessAnalyst => Some(BlendWeights {
            tech: 0.0,
            coding: 0.0,
            interest: 0.3,
            scenario: 0.4,
            personality: 0.3,
        }),
        CareerId::UxUiDesigner => Some(BlendWeights {
            tech: 0.0,
            coding: 0.0,
            interest: 0.4,
            scenario: 0.3,
            personality: 0.3,
        }),
        CareerId::CybersecuritySpecialist => Some(BlendWeights {
            tech: 0.4,
            coding: 0.3,
            interest: 0.0,
            scenario: 0.3,
            personality: 0.0,
        }),
        CareerId::ProjectManager | CareerId::ProductManager => None,
    }
}

fn indicator_for(career: CareerId, indicators: &CareerIndicators) -> f64 {
    match career {
        CareerId::DataScientist => indicators.data_science,
        CareerId::SoftwareDeveloper => indicators.software_dev,
        CareerId::FrontendDeveloper => indicators.web_dev,
        CareerId::BusinessAnalyst => indicators.business,
        CareerId::UxUiDesigner => indicators.design,
        CareerId::CybersecuritySpecialist => indicators.cybersecurity,
        CareerId::ProjectManager | CareerId::ProductManager => 0.0,
    }
}

/// Match percentage for one quiz-catalog career. `None` outside the quiz
/// catalog.
pub fn quiz_career_score(career: CareerId, analysis: &CategoryAnalysis) -> Option<u8> {
    let weights = blend_weights(career)?;
    let base = (indicator_for(career, &analysis.indicators) * 3.0).min(INDICATOR_CAP);
    let blend = weights.tech * f64::from(analysis.tech_percentage)
        + weights.coding * f64::from(analysis.coding_percentage)
        + weights.interest * f64::from(analysis.interest_percentage)
        + weights.scenario * f64::from(analysis.scenario_percentage)
        + weights.personality * f64::from(analysis.personality_percentage);
    let blended = blend.min(BLEND_CAP);
    Some(clamp_match(base + blended, QUIZ_FLOOR, QUIZ_CEILING))
}

/// Validates completeness, analyzes the answers, scores the quiz catalog,
/// and returns the top-3 bundle.
///
/// Scoring never runs against a partial AnswerSet: an incomplete
/// submission is rejected with the exact answered/required counts.
pub fn compute_quiz_matches(
    answers: &AnswerSet,
    questions: &[QuizQuestion],
) -> Result<ResultBundle, AppError> {
    let answered = answers.len();
    let required = questions.len();
    if answered < required {
        return Err(AppError::Validation(format!(
            "Please answer all questions. You have answered {answered} out of {required} questions."
        )));
    }

    let analysis = analyze_answers(answers, questions);

    let scored: Vec<ScoredCareer> = QUIZ_CATALOG
        .iter()
        .filter_map(|&career| {
            quiz_career_score(career, &analysis).map(|score| ScoredCareer { career, score })
        })
        .collect();

    let predictions = select_top(scored);

    Ok(ResultBundle {
        success: true,
        message: "Quiz submitted successfully".to_string(),
        predictions,
        analysis_type: AnalysisType::SmartAlgorithm,
        submission_time: Utc::now(),
        quiz_session_id: Some(Uuid::new_v4()),
        answers_processed: Some(answered),
    })
}
