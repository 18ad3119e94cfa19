//! Quiz answer analysis — per-category score accumulation and the six
//! career-indicator accumulators that feed quiz-path candidate scoring.
//!
//! Each category has its own contribution rule keyed on the chosen option
//! index; TechQuiz additionally keyword-matches the question text into
//! indicators. Computed once per submission, never persisted.

use std::collections::HashMap;

use crate::models::question::{AnswerSet, QuizCategory, QuizQuestion};

/// Running totals per candidate domain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CareerIndicators {
    pub data_science: f64,
    pub software_dev: f64,
    pub web_dev: f64,
    pub design: f64,
    pub business: f64,
    pub cybersecurity: f64,
}

/// Aggregated view of one submission's answers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryAnalysis {
    pub tech_score: f64,
    pub coding_score: f64,
    pub interest_score: f64,
    pub scenario_score: f64,
    pub personality_score: f64,
    pub total_answered: usize,
    pub answered_per_category: HashMap<QuizCategory, usize>,
    pub indicators: CareerIndicators,
    pub tech_percentage: u32,
    pub coding_percentage: u32,
    pub interest_percentage: u32,
    pub scenario_percentage: u32,
    pub personality_percentage: u32,
}

/// Maximum contribution a single question can make, per category.
/// InterestProfile peaks at (3+1)*2, Personality at (3+1)*1.5.
const MAX_TECH: u32 = 4;
const MAX_CODING: u32 = 4;
const MAX_INTEREST: u32 = 8;
const MAX_SCENARIO: u32 = 4;
const MAX_PERSONALITY: u32 = 6;

fn tech_contribution(index: usize) -> f64 {
    match index {
        1 => 4.0,
        2 => 3.0,
        0 => 2.0,
        _ => 1.0,
    }
}

fn coding_contribution(index: usize) -> f64 {
    match index {
        1 => 4.0,
        2 => 3.0,
        _ => 2.0,
    }
}

fn interest_contribution(index: usize) -> f64 {
    ((index + 1) * 2) as f64
}

fn scenario_contribution(index: usize) -> f64 {
    match index {
        2 => 4.0,
        1 => 3.0,
        3 => 2.0,
        _ => 1.0,
    }
}

fn personality_contribution(index: usize) -> f64 {
    (index + 1) as f64 * 1.5
}

/// TechQuiz questions feed indicators by question-text keywords; several
/// keyword groups may match the same question.
fn apply_tech_keywords(indicators: &mut CareerIndicators, question_text: &str, score: f64) {
    let text = question_text.to_lowercase();
    if text.contains("data") || text.contains("algorithm") || text.contains("statistics") {
        indicators.data_science += score;
    }
    if text.contains("programming") || text.contains("code") || text.contains("software") {
        indicators.software_dev += score;
    }
    if text.contains("web") || text.contains("html") || text.contains("css") {
        indicators.web_dev += score;
    }
    if text.contains("security") || text.contains("encryption") {
        indicators.cybersecurity += score;
    }
}

/// Percentage of the category maximum actually scored. The denominator
/// defaults to 1 when no questions in the category were answered.
fn category_percentage(score: f64, answered: usize, max_per_question: u32) -> u32 {
    let mut denominator = answered as f64 * f64::from(max_per_question);
    if denominator == 0.0 {
        denominator = 1.0;
    }
    (score / denominator * 100.0).round() as u32
}

/// Builds the full analysis for one submission. Unanswered questions and
/// Unknown-category questions contribute nothing.
pub fn analyze_answers(answers: &AnswerSet, questions: &[QuizQuestion]) -> CategoryAnalysis {
    let mut analysis = CategoryAnalysis::default();

    for question in questions {
        let Some(&index) = answers.get(&question.id) else {
            continue;
        };
        let category = question.resolved_category();
        if category == QuizCategory::Unknown {
            continue;
        }

        analysis.total_answered += 1;
        *analysis.answered_per_category.entry(category).or_insert(0) += 1;

        match category {
            QuizCategory::TechQuiz => {
                let score = tech_contribution(index);
                analysis.tech_score += score;
                apply_tech_keywords(&mut analysis.indicators, &question.question, score);
            }
            QuizCategory::CodeChallenge => {
                let score = coding_contribution(index);
                analysis.coding_score += score;
                analysis.indicators.software_dev += score;
                analysis.indicators.data_science += (score * 0.8).floor();
            }
            QuizCategory::InterestProfile => {
                let score = interest_contribution(index);
                analysis.interest_score += score;
                match index {
                    3 => analysis.indicators.data_science += 4.0,
                    2 => analysis.indicators.software_dev += 3.0,
                    1 => analysis.indicators.design += 3.0,
                    _ => analysis.indicators.business += 2.0,
                }
            }
            QuizCategory::ScenarioSolver => {
                let score = scenario_contribution(index);
                analysis.scenario_score += score;
                if index == 1 || index == 2 {
                    analysis.indicators.data_science += 3.0;
                    analysis.indicators.software_dev += 2.0;
                }
            }
            QuizCategory::Personality => {
                let score = personality_contribution(index);
                analysis.personality_score += score;
                match index {
                    1 => {
                        analysis.indicators.data_science += 3.0;
                        analysis.indicators.software_dev += 2.0;
                    }
                    0 => {
                        analysis.indicators.design += 3.0;
                        analysis.indicators.web_dev += 2.0;
                    }
                    2 => analysis.indicators.business += 3.0,
                    _ => {}
                }
            }
            QuizCategory::Unknown => unreachable!("filtered above"),
        }
    }

    let counts = analysis.answered_per_category.clone();
    let answered = |category: QuizCategory| counts.get(&category).copied().unwrap_or(0);
    analysis.tech_percentage =
        category_percentage(analysis.tech_score, answered(QuizCategory::TechQuiz), MAX_TECH);
    analysis.coding_percentage = category_percentage(
        analysis.coding_score,
        answered(QuizCategory::CodeChallenge),
        MAX_CODING,
    );
    analysis.interest_percentage = category_percentage(
        analysis.interest_score,
        answered(QuizCategory::InterestProfile),
        MAX_INTEREST,
    );
    analysis.scenario_percentage = category_percentage(
        analysis.scenario_score,
        answered(QuizCategory::ScenarioSolver),
        MAX_SCENARIO,
    );
    analysis.personality_percentage = category_percentage(
        analysis.personality_score,
        answered(QuizCategory::Personality),
        MAX_PERSONALITY,
    );

    analysis
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &str, text: &str) -> QuizQuestion {
        QuizQuestion {
            id: id.to_string(),
            question: text.to_string(),
            options: vec![
                "A".to_string(),
                "B".to_string(),
                "C".to_string(),
                "D".to_string(),
            ],
            category: None,
        }
    }

    fn answers(pairs: &[(&str, usize)]) -> AnswerSet {
        pairs
            .iter()
            .map(|(id, idx)| (id.to_string(), *idx))
            .collect()
    }

    #[test]
    fn test_tech_contribution_ladder() {
        assert_eq!(tech_contribution(1), 4.0);
        assert_eq!(tech_contribution(2), 3.0);
        assert_eq!(tech_contribution(0), 2.0);
        assert_eq!(tech_contribution(3), 1.0);
    }

    #[test]
    fn test_scenario_contribution_ladder() {
        assert_eq!(scenario_contribution(2), 4.0);
        assert_eq!(scenario_contribution(1), 3.0);
        assert_eq!(scenario_contribution(3), 2.0);
        assert_eq!(scenario_contribution(0), 1.0);
    }

    #[test]
    fn test_interest_and_personality_scale_with_index() {
        assert_eq!(interest_contribution(3), 8.0);
        assert_eq!(interest_contribution(0), 2.0);
        assert_eq!(personality_contribution(3), 6.0);
        assert_eq!(personality_contribution(0), 1.5);
    }

    #[test]
    fn test_tech_keywords_feed_indicators() {
        let questions = vec![question(
            "TQ1",
            "Which data structure backs this algorithm?",
        )];
        let analysis = analyze_answers(&answers(&[("TQ1", 1)]), &questions);
        assert_eq!(analysis.indicators.data_science, 4.0);
        assert_eq!(analysis.indicators.software_dev, 0.0);
    }

    #[test]
    fn test_multiple_keyword_groups_can_match_one_question() {
        let questions = vec![question(
            "TQ2",
            "How does code interact with web security layers?",
        )];
        let analysis = analyze_answers(&answers(&[("TQ2", 1)]), &questions);
        assert_eq!(analysis.indicators.software_dev, 4.0);
        assert_eq!(analysis.indicators.web_dev, 4.0);
        assert_eq!(analysis.indicators.cybersecurity, 4.0);
    }

    #[test]
    fn test_code_challenge_splits_into_both_indicators() {
        let questions = vec![question("cc-1", "Trace the loop")];
        let analysis = analyze_answers(&answers(&[("cc-1", 1)]), &questions);
        assert_eq!(analysis.indicators.software_dev, 4.0);
        // floor(4 * 0.8) = 3
        assert_eq!(analysis.indicators.data_science, 3.0);
    }

    #[test]
    fn test_unanswered_and_unknown_questions_are_skipped() {
        let questions = vec![
            question("TQ1", "data question"),
            question("mystery-1", "unclassifiable"),
        ];
        let analysis = analyze_answers(&answers(&[("mystery-1", 2)]), &questions);
        assert_eq!(analysis.total_answered, 0);
        assert_eq!(analysis.tech_score, 0.0);
    }

    #[test]
    fn test_percentages_with_full_marks() {
        let questions = vec![
            question("TQ1", "neutral one"),
            question("TQ2", "neutral two"),
            question("pi-1", "style"),
        ];
        let analysis = analyze_answers(
            &answers(&[("TQ1", 1), ("TQ2", 1), ("pi-1", 3)]),
            &questions,
        );
        assert_eq!(analysis.tech_percentage, 100);
        assert_eq!(analysis.personality_percentage, 100);
        // Unanswered categories read 0, not a division error.
        assert_eq!(analysis.coding_percentage, 0);
        assert_eq!(analysis.interest_percentage, 0);
    }

    #[test]
    fn test_percentage_rounds_to_nearest() {
        // One TechQuiz answer at index 2: 3 of 4 -> 75%.
        let questions = vec![question("TQ1", "neutral")];
        let analysis = analyze_answers(&answers(&[("TQ1", 2)]), &questions);
        assert_eq!(analysis.tech_percentage, 75);
    }
}
