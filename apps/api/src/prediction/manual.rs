//! Manual Scoring Engine — maps a structured user profile to ranked career
//! matches.
//!
//! Per career: `50 + Σ(weight · skill) + preference bonuses + uniform
//! experience/education bonuses`, clamped to [60, 95]. The weight and bonus
//! tables are the product contract; they are pinned literal-by-literal in
//! the tests below.

use chrono::Utc;

use crate::careers::{CareerId, CATALOG};
use crate::models::bundle::{AnalysisType, ResultBundle};
use crate::models::profile::{
    CareerGoal, PrimaryInterest, SkillRatings, UserProfile, WorkEnvironment, WorkStyle,
};
use crate::prediction::clamp_match;
use crate::prediction::selection::{select_top, ScoredCareer};

const BASE_SCORE: f64 = 50.0;
const PRIMARY_BONUS: f64 = 15.0;
const SECONDARY_BONUS: f64 = 10.0;
const UNIFORM_BONUS: f64 = 5.0;
pub const MANUAL_FLOOR: u8 = 60;
pub const MANUAL_CEILING: u8 = 95;

/// Career-specific weighted skill sum.
fn weighted_skill_score(career: CareerId, skills: &SkillRatings) -> f64 {
    match career {
        CareerId::DataScientist => {
            skills.programming * 2.0 + skills.data_analysis * 3.0 + skills.analytical * 2.5
        }
        CareerId::SoftwareDeveloper => {
            skills.programming * 3.0 + skills.analytical * 2.0 + skills.design * 1.0
        }
        CareerId::FrontendDeveloper => {
            skills.programming * 2.5 + skills.design * 2.5 + skills.communication * 1.5
        }
        CareerId::BusinessAnalyst => {
            skills.analytical * 2.5 + skills.communication * 2.5 + skills.data_analysis * 2.0
        }
        CareerId::UxUiDesigner => {
            skills.design * 3.0 + skills.communication * 2.0 + skills.analytical * 1.5
        }
        CareerId::ProjectManager => {
            skills.leadership * 3.0 + skills.communication * 2.5 + skills.analytical * 1.5
        }
        CareerId::CybersecuritySpecialist => {
            skills.programming * 2.0 + skills.analytical * 2.5 + skills.data_analysis * 1.5
        }
        CareerId::ProductManager => {
            skills.analytical * 2.0 + skills.leadership * 2.5 + skills.communication * 2.5
        }
    }
}

/// Career-specific preference bonuses: at most one +15 and one +10 per
/// career, each tied to a single field/value pair.
fn preference_bonus(career: CareerId, profile: &UserProfile) -> f64 {
    let mut bonus = 0.0;
    match career {
        CareerId::DataScientist => {
            if profile.primary_interest == Some(PrimaryInterest::DataAnalysis) {
                bonus += PRIMARY_BONUS;
            }
            if profile.work_style == Some(WorkStyle::Independent) {
                bonus += SECONDARY_BONUS;
            }
        }
        CareerId::SoftwareDeveloper => {
            if profile.primary_interest == Some(PrimaryInterest::Programming) {
                bonus += PRIMARY_BONUS;
            }
            if profile.work_environment == Some(WorkEnvironment::TechCompany) {
                bonus += SECONDARY_BONUS;
            }
        }
        CareerId::FrontendDeveloper => {
            if profile.primary_interest == Some(PrimaryInterest::WebDevelopment) {
                bonus += PRIMARY_BONUS;
            }
            if profile.work_style == Some(WorkStyle::Collaborative) {
                bonus += SECONDARY_BONUS;
            }
        }
        CareerId::BusinessAnalyst => {
            if profile.primary_interest == Some(PrimaryInterest::BusinessStrategy) {
                bonus += PRIMARY_BONUS;
            }
            if profile.work_environment == Some(WorkEnvironment::Corporate) {
                bonus += SECONDARY_BONUS;
            }
        }
        CareerId::UxUiDesigner => {
            if profile.primary_interest == Some(PrimaryInterest::Design) {
                bonus += PRIMARY_BONUS;
            }
            if profile.work_style == Some(WorkStyle::Creative) {
                bonus += SECONDARY_BONUS;
            }
        }
        CareerId::ProjectManager => {
            if profile.work_style == Some(WorkStyle::Leadership) {
                bonus += PRIMARY_BONUS;
            }
            if profile.career_goals == Some(CareerGoal::Management) {
                bonus += SECONDARY_BONUS;
            }
        }
        CareerId::CybersecuritySpecialist => {
            if profile.primary_interest == Some(PrimaryInterest::Cybersecurity) {
                bonus += PRIMARY_BONUS;
            }
            if profile.work_environment == Some(WorkEnvironment::SecurityFocused) {
                bonus += SECONDARY_BONUS;
            }
        }
        CareerId::ProductManager => {
            if profile.career_goals == Some(CareerGoal::ProductStrategy) {
                bonus += PRIMARY_BONUS;
            }
            if profile.work_style == Some(WorkStyle::Strategic) {
                bonus += SECONDARY_BONUS;
            }
        }
    }
    bonus
}

/// Match percentage for one career against a profile.
pub fn career_score(career: CareerId, profile: &UserProfile) -> u8 {
    let skills = SkillRatings::from_profile(profile);
    let mut score = BASE_SCORE + weighted_skill_score(career, &skills);
    score += preference_bonus(career, profile);
    if profile.has_experience_bonus() {
        score += UNIFORM_BONUS;
    }
    if profile.has_education_bonus() {
        score += UNIFORM_BONUS;
    }
    clamp_match(score, MANUAL_FLOOR, MANUAL_CEILING)
}

/// Scores all 8 catalog careers, ranks them, and returns the top-3 bundle.
pub fn compute_manual_matches(profile: &UserProfile) -> ResultBundle {
    let scored: Vec<ScoredCareer> = CATALOG
        .iter()
        .map(|&career| ScoredCareer {
            career,
            score: career_score(career, profile),
        })
        .collect();

    let predictions = select_top(scored);

    ResultBundle {
        success: true,
        message: "Manual prediction completed successfully".to_string(),
        predictions,
        analysis_type: AnalysisType::ManualInput,
        submission_time: Utc::now(),
        quiz_session_id: None,
        answers_processed: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{Education, Experience};

    fn flat_profile(rating: u8) -> UserProfile {
        UserProfile {
            programming_skills: rating,
            data_analysis_skills: rating,
            design_skills: rating,
            communication_skills: rating,
            leadership_skills: rating,
            analytical_skills: rating,
            ..UserProfile::default()
        }
    }

    #[test]
    fn test_minimum_profile_scores_floor_for_every_career() {
        let profile = flat_profile(1);
        for career in CATALOG {
            assert_eq!(
                career_score(career, &profile),
                60,
                "{} should hit the floor",
                career.title()
            );
        }
    }

    #[test]
    fn test_maximum_profile_scores_ceiling_for_every_career() {
        let mut profile = flat_profile(10);
        profile.education = Some(Education::Masters);
        profile.experience = Some(Experience::FivePlus);
        for career in CATALOG {
            assert_eq!(
                career_score(career, &profile),
                95,
                "{} should hit the ceiling",
                career.title()
            );
        }
    }

    #[test]
    fn test_weight_table_literals() {
        // The raw multipliers are the contract; any change shifts scores.
        let skills = SkillRatings {
            programming: 1.0,
            data_analysis: 1.0,
            design: 1.0,
            communication: 1.0,
            leadership: 1.0,
            analytical: 1.0,
        };
        let expected = [
            (CareerId::DataScientist, 7.5),
            (CareerId::SoftwareDeveloper, 6.0),
            (CareerId::FrontendDeveloper, 6.5),
            (CareerId::BusinessAnalyst, 7.0),
            (CareerId::UxUiDesigner, 6.5),
            (CareerId::ProjectManager, 7.0),
            (CareerId::CybersecuritySpecialist, 6.0),
            (CareerId::ProductManager, 7.0),
        ];
        for (career, sum) in expected {
            assert!(
                (weighted_skill_score(career, &skills) - sum).abs() < 1e-9,
                "{} weight sum drifted",
                career.title()
            );
        }
    }

    #[test]
    fn test_preference_bonuses_are_not_cumulative_across_careers() {
        // A profile matching the Data Scientist pair adds nothing for
        // Software Developer.
        let profile = UserProfile {
            primary_interest: Some(PrimaryInterest::DataAnalysis),
            work_style: Some(WorkStyle::Independent),
            ..flat_profile(1)
        };
        assert_eq!(
            preference_bonus(CareerId::DataScientist, &profile),
            25.0
        );
        assert_eq!(preference_bonus(CareerId::SoftwareDeveloper, &profile), 0.0);
    }

    #[test]
    fn test_uniform_bonuses_apply_to_every_career() {
        let plain = flat_profile(5);
        let boosted = UserProfile {
            education: Some(Education::Bachelors),
            experience: Some(Experience::ThreeToFive),
            ..flat_profile(5)
        };
        for career in CATALOG {
            let base = career_score(career, &plain);
            let with_bonus = career_score(career, &boosted);
            // +10 raw, visible unless clamped.
            if base < 85 {
                assert_eq!(with_bonus, base + 10, "{}", career.title());
            }
        }
    }

    #[test]
    fn test_strong_technical_profile_ranks_developer_above_analyst() {
        let profile = UserProfile {
            programming_skills: 10,
            data_analysis_skills: 10,
            analytical_skills: 10,
            design_skills: 1,
            communication_skills: 1,
            leadership_skills: 1,
            primary_interest: Some(PrimaryInterest::Programming),
            work_environment: Some(WorkEnvironment::TechCompany),
            ..UserProfile::default()
        };
        let bundle = compute_manual_matches(&profile);
        assert_eq!(bundle.predictions.len(), 3);
        let titles: Vec<&str> = bundle
            .predictions
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        let dev = titles
            .iter()
            .position(|t| *t == "Software Developer")
            .expect("developer must be in the top 3");
        let analyst = titles
            .iter()
            .position(|t| *t == "Business Analyst")
            .expect("analyst lands in the top 3 on this profile");
        assert!(dev < analyst, "developer must outrank analyst: {titles:?}");
    }

    #[test]
    fn test_bundle_shape() {
        let bundle = compute_manual_matches(&flat_profile(5));
        assert!(bundle.success);
        assert_eq!(bundle.analysis_type, AnalysisType::ManualInput);
        assert_eq!(bundle.predictions.len(), 3);
        for prediction in &bundle.predictions {
            assert!((60..=95).contains(&prediction.match_percentage));
            assert_eq!(bundle.quiz_session_id, None);
            assert!(!prediction.matching_skills.is_empty());
            assert_eq!(prediction.roadmap.phases.len(), 4);
        }
    }

    #[test]
    fn test_result_bundle_round_trips_through_json() {
        let bundle = compute_manual_matches(&flat_profile(7));
        let json = serde_json::to_string(&bundle).unwrap();
        let parsed: ResultBundle = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, bundle);
    }
}
