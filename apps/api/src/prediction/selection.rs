//! Ranking and selection — shared tail of both scoring pipelines.

use crate::careers::{
    matching_skills_for_title, next_steps_for_title, skills_to_learn_for_title, CareerId,
};
use crate::models::bundle::CareerCandidate;
use crate::roadmap::roadmap_for;

/// How many matches a result bundle carries.
pub const TOP_N: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredCareer {
    pub career: CareerId,
    pub score: u8,
}

/// Sorts descending by score and keeps the top 3, enriched with static
/// metadata, skill tables, and a roadmap.
///
/// The sort is stable, so tied scores keep catalog declaration order.
pub fn select_top(mut scored: Vec<ScoredCareer>) -> Vec<CareerCandidate> {
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
        .into_iter()
        .take(TOP_N)
        .map(|entry| build_candidate(entry.career, entry.score))
        .collect()
}

fn build_candidate(career: CareerId, score: u8) -> CareerCandidate {
    let info = career.info();
    let title = career.title();
    CareerCandidate {
        title: title.to_string(),
        match_percentage: score,
        icon: info.icon.to_string(),
        description: info.description.to_string(),
        salary_range: info.salary_range.to_string(),
        growth_rate: info.growth_rate.to_string(),
        learning_time: info.learning_time.to_string(),
        difficulty: info.difficulty.to_string(),
        matching_skills: matching_skills_for_title(title),
        skills_to_learn: skills_to_learn_for_title(title),
        next_steps: next_steps_for_title(title),
        roadmap: roadmap_for(title),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::careers::CATALOG;

    #[test]
    fn test_orders_by_score_descending() {
        let scored = vec![
            ScoredCareer {
                career: CareerId::DataScientist,
                score: 70,
            },
            ScoredCareer {
                career: CareerId::SoftwareDeveloper,
                score: 90,
            },
            ScoredCareer {
                career: CareerId::UxUiDesigner,
                score: 80,
            },
        ];
        let selected = select_top(scored);
        let titles: Vec<&str> = selected.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Software Developer", "UX/UI Designer", "Data Scientist"]
        );
    }

    #[test]
    fn test_ties_keep_catalog_declaration_order() {
        let scored: Vec<ScoredCareer> = CATALOG
            .iter()
            .map(|&career| ScoredCareer { career, score: 75 })
            .collect();
        let selected = select_top(scored);
        let titles: Vec<&str> = selected.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Data Scientist", "Software Developer", "Frontend Developer"]
        );
    }

    #[test]
    fn test_takes_at_most_three() {
        let scored: Vec<ScoredCareer> = CATALOG
            .iter()
            .enumerate()
            .map(|(i, &career)| ScoredCareer {
                career,
                score: 60 + i as u8,
            })
            .collect();
        assert_eq!(select_top(scored).len(), 3);
    }

    #[test]
    fn test_short_input_yields_short_output() {
        let scored = vec![ScoredCareer {
            career: CareerId::ProductManager,
            score: 88,
        }];
        let selected = select_top(scored);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].match_percentage, 88);
    }

    #[test]
    fn test_candidates_are_fully_enriched() {
        let selected = select_top(vec![ScoredCareer {
            career: CareerId::CybersecuritySpecialist,
            score: 82,
        }]);
        let candidate = &selected[0];
        assert_eq!(candidate.icon, "🔐");
        assert!(!candidate.skills_to_learn.is_empty());
        assert!(!candidate.next_steps.is_empty());
        assert_eq!(candidate.roadmap.phases.len(), 4);
        // Cybersecurity has no authored roadmap; the generic template must
        // carry the title through.
        assert!(candidate.roadmap.title.contains("Cybersecurity Specialist"));
    }
}
