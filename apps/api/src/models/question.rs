//! Quiz questions, answer sets, and category classification.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The five assessment categories, plus a terminal `Unknown` for questions
/// whose identifier matches no known pattern. Unknown questions are never
/// sampled and contribute nothing to analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuizCategory {
    TechQuiz,
    CodeChallenge,
    InterestProfile,
    ScenarioSolver,
    Personality,
    Unknown,
}

/// A quiz question as served by the question source. `category` may be
/// absent on the wire; `resolved_category` fills it in from the identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<QuizCategory>,
}

impl QuizQuestion {
    pub fn resolved_category(&self) -> QuizCategory {
        self.category.unwrap_or_else(|| infer_category(&self.id))
    }
}

/// Question id -> chosen option index (zero-based), one entry per question.
pub type AnswerSet = HashMap<String, usize>;

/// Infers a question's category from its identifier.
///
/// Precedence (first match wins):
/// 1. TechQuiz: starts with `TQ`, or contains `tech`
/// 2. CodeChallenge: starts with `cc-`, or contains `code` or `CC`
/// 3. InterestProfile: starts with `ip-`, or contains `interest` or `IP`
/// 4. ScenarioSolver: starts with `scenario-`, or contains `scenario`, or starts with `SC`
/// 5. Personality: starts with `pi-`, or contains `personality`, or starts with `P`
/// 6. otherwise Unknown
///
/// The bare `P` prefix is deliberately last so it cannot shadow the more
/// specific patterns above it.
pub fn infer_category(id: &str) -> QuizCategory {
    if id.starts_with("TQ") || id.contains("tech") {
        QuizCategory::TechQuiz
    } else if id.starts_with("cc-") || id.contains("code") || id.contains("CC") {
        QuizCategory::CodeChallenge
    } else if id.starts_with("ip-") || id.contains("interest") || id.contains("IP") {
        QuizCategory::InterestProfile
    } else if id.starts_with("scenario-") || id.contains("scenario") || id.starts_with("SC") {
        QuizCategory::ScenarioSolver
    } else if id.starts_with("pi-") || id.contains("personality") || id.starts_with('P') {
        QuizCategory::Personality
    } else {
        QuizCategory::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infers_each_prefix() {
        assert_eq!(infer_category("TQ-001"), QuizCategory::TechQuiz);
        assert_eq!(infer_category("cc-003"), QuizCategory::CodeChallenge);
        assert_eq!(infer_category("ip-002"), QuizCategory::InterestProfile);
        assert_eq!(infer_category("scenario-004"), QuizCategory::ScenarioSolver);
        assert_eq!(infer_category("pi-005"), QuizCategory::Personality);
    }

    #[test]
    fn test_unmatched_id_is_unknown() {
        assert_eq!(infer_category("q-42"), QuizCategory::Unknown);
        assert_eq!(infer_category(""), QuizCategory::Unknown);
    }

    #[test]
    fn test_tech_prefix_wins_over_bare_p() {
        // "TQ" ids would also match the bare `P`-prefix rule if precedence
        // were reversed; they must classify as TechQuiz.
        assert_eq!(infer_category("TQ7"), QuizCategory::TechQuiz);
        // A bare capital P prefix lands on Personality only as a last resort.
        assert_eq!(infer_category("P12"), QuizCategory::Personality);
    }

    #[test]
    fn test_explicit_category_beats_inference() {
        let q = QuizQuestion {
            id: "TQ1".to_string(),
            question: "placeholder".to_string(),
            options: vec![],
            category: Some(QuizCategory::Personality),
        };
        assert_eq!(q.resolved_category(), QuizCategory::Personality);
    }

    #[test]
    fn test_missing_category_is_inferred_on_deserialize() {
        let json = r#"{"id": "cc-9", "question": "x", "options": ["a", "b"]}"#;
        let q: QuizQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(q.category, None);
        assert_eq!(q.resolved_category(), QuizCategory::CodeChallenge);
    }
}
