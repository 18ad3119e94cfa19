//! User profile submitted on the manual-input path.
//!
//! Categorical fields are closed enumerations matching the form options;
//! skill ratings arrive on a 1-10 scale and are re-clamped here so the
//! engine stays total even for hand-crafted payloads.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Education {
    HighSchool,
    Associate,
    Bachelors,
    Masters,
    Phd,
    Bootcamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Experience {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "0-1")]
    ZeroToOne,
    #[serde(rename = "1-3")]
    OneToThree,
    #[serde(rename = "3-5")]
    ThreeToFive,
    #[serde(rename = "5+")]
    FivePlus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrimaryInterest {
    Programming,
    DataAnalysis,
    WebDevelopment,
    Design,
    BusinessStrategy,
    Cybersecurity,
    Management,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkEnvironment {
    TechCompany,
    Startup,
    Corporate,
    Consulting,
    Freelance,
    Government,
    SecurityFocused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkStyle {
    Independent,
    Collaborative,
    Leadership,
    Creative,
    Analytical,
    Strategic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CareerGoal {
    TechnicalExpert,
    Management,
    Entrepreneurship,
    Consulting,
    ProductStrategy,
    WorkLifeBalance,
}

/// Structured manual-input profile.
///
/// `salary_expectation`, `learning_time`, `difficulty_preference` and
/// `industry_preference` are collected by the form but do not feed scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub name: String,
    pub age: Option<String>,
    pub education: Option<Education>,
    pub current_role: Option<String>,
    pub experience: Option<Experience>,

    pub programming_skills: u8,
    pub data_analysis_skills: u8,
    pub design_skills: u8,
    pub communication_skills: u8,
    pub leadership_skills: u8,
    pub analytical_skills: u8,

    pub primary_interest: Option<PrimaryInterest>,
    pub work_environment: Option<WorkEnvironment>,
    pub work_style: Option<WorkStyle>,
    pub career_goals: Option<CareerGoal>,

    pub salary_expectation: Option<String>,
    pub learning_time: Option<String>,
    pub difficulty_preference: Option<String>,
    pub industry_preference: Vec<String>,
}

/// Skill ratings clamped to the 1-10 scale the sliders produce.
#[derive(Debug, Clone, Copy)]
pub struct SkillRatings {
    pub programming: f64,
    pub data_analysis: f64,
    pub design: f64,
    pub communication: f64,
    pub leadership: f64,
    pub analytical: f64,
}

impl SkillRatings {
    pub fn from_profile(profile: &UserProfile) -> Self {
        let clamp = |v: u8| f64::from(v.clamp(1, 10));
        Self {
            programming: clamp(profile.programming_skills),
            data_analysis: clamp(profile.data_analysis_skills),
            design: clamp(profile.design_skills),
            communication: clamp(profile.communication_skills),
            leadership: clamp(profile.leadership_skills),
            analytical: clamp(profile.analytical_skills),
        }
    }
}

impl UserProfile {
    /// Uniform +5 bonus bracket: 3-5 or 5+ years of experience.
    pub fn has_experience_bonus(&self) -> bool {
        matches!(
            self.experience,
            Some(Experience::ThreeToFive) | Some(Experience::FivePlus)
        )
    }

    /// Uniform +5 bonus bracket: bachelor's or master's degree.
    pub fn has_education_bonus(&self) -> bool {
        matches!(
            self.education,
            Some(Education::Bachelors) | Some(Education::Masters)
        )
    }
}
