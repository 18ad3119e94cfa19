//! Career catalog — the fixed set of careers the engines can recommend,
//! plus the static metadata and skill/step tables attached to each match.
//!
//! Declaration order in `CATALOG` is load-bearing: ranking uses a stable
//! sort, so tied scores resolve to this order.

use serde::{Deserialize, Serialize};

/// A career known to the matching engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CareerId {
    DataScientist,
    SoftwareDeveloper,
    FrontendDeveloper,
    BusinessAnalyst,
    UxUiDesigner,
    ProjectManager,
    CybersecuritySpecialist,
    ProductManager,
}

/// Every career the manual engine scores, in tie-break order.
pub const CATALOG: [CareerId; 8] = [
    CareerId::DataScientist,
    CareerId::SoftwareDeveloper,
    CareerId::FrontendDeveloper,
    CareerId::BusinessAnalyst,
    CareerId::UxUiDesigner,
    CareerId::ProjectManager,
    CareerId::CybersecuritySpecialist,
    CareerId::ProductManager,
];

/// The subset the quiz engine scores, in tie-break order.
pub const QUIZ_CATALOG: [CareerId; 6] = [
    CareerId::DataScientist,
    CareerId::SoftwareDeveloper,
    CareerId::FrontendDeveloper,
    CareerId::BusinessAnalyst,
    CareerId::UxUiDesigner,
    CareerId::CybersecuritySpecialist,
];

/// Fixed descriptive metadata shown alongside a match.
#[derive(Debug, Clone, Copy)]
pub struct CareerInfo {
    pub icon: &'static str,
    pub description: &'static str,
    pub salary_range: &'static str,
    pub growth_rate: &'static str,
    pub learning_time: &'static str,
    pub difficulty: &'static str,
}

impl CareerId {
    pub fn title(self) -> &'static str {
        match self {
            CareerId::DataScientist => "Data Scientist",
            CareerId::SoftwareDeveloper => "Software Developer",
            CareerId::FrontendDeveloper => "Frontend Developer",
            CareerId::BusinessAnalyst => "Business Analyst",
            CareerId::UxUiDesigner => "UX/UI Designer",
            CareerId::ProjectManager => "Project Manager",
            CareerId::CybersecuritySpecialist => "Cybersecurity Specialist",
            CareerId::ProductManager => "Product Manager",
        }
    }

    /// Exact-title lookup. `None` for titles outside the catalog; callers
    /// fall back to the generic tables below.
    pub fn from_title(title: &str) -> Option<Self> {
        CATALOG.iter().copied().find(|c| c.title() == title)
    }

    pub fn info(self) -> CareerInfo {
        match self {
            CareerId::DataScientist => CareerInfo {
                icon: "📊",
                description:
                    "Perfect for analytical minds who love working with data and statistics",
                salary_range: "$80,000 - $150,000",
                growth_rate: "Very High (22%)",
                learning_time: "12-18 months",
                difficulty: "Advanced",
            },
            CareerId::SoftwareDeveloper => CareerInfo {
                icon: "💻",
                description:
                    "Ideal for logical thinkers who enjoy building applications and solving problems",
                salary_range: "$70,000 - $130,000",
                growth_rate: "High (20%)",
                learning_time: "8-14 months",
                difficulty: "Moderate",
            },
            CareerId::FrontendDeveloper => CareerInfo {
                icon: "🎨",
                description:
                    "Perfect blend of technical skills and creative design for user interfaces",
                salary_range: "$65,000 - $120,000",
                growth_rate: "High (18%)",
                learning_time: "6-12 months",
                difficulty: "Moderate",
            },
            CareerId::BusinessAnalyst => CareerInfo {
                icon: "📈",
                description:
                    "Great for analytical minds who want to bridge technology and business",
                salary_range: "$60,000 - $110,000",
                growth_rate: "High (19%)",
                learning_time: "4-8 months",
                difficulty: "Moderate",
            },
            CareerId::UxUiDesigner => CareerInfo {
                icon: "🎨",
                description:
                    "Perfect for creative problem-solvers focused on user experience",
                salary_range: "$55,000 - $110,000",
                growth_rate: "High (16%)",
                learning_time: "6-10 months",
                difficulty: "Moderate",
            },
            CareerId::ProjectManager => CareerInfo {
                icon: "📋",
                description:
                    "Ideal for organized leaders who excel at coordinating teams and projects",
                salary_range: "$70,000 - $120,000",
                growth_rate: "High (20%)",
                learning_time: "6-12 months",
                difficulty: "Moderate",
            },
            CareerId::CybersecuritySpecialist => CareerInfo {
                icon: "🔐",
                description:
                    "Perfect for detail-oriented professionals who want to protect digital assets",
                salary_range: "$75,000 - $140,000",
                growth_rate: "Very High (28%)",
                learning_time: "10-16 months",
                difficulty: "Advanced",
            },
            CareerId::ProductManager => CareerInfo {
                icon: "🚀",
                description:
                    "Great for strategic thinkers who want to drive product development",
                salary_range: "$80,000 - $140,000",
                growth_rate: "Very High (25%)",
                learning_time: "8-15 months",
                difficulty: "Advanced",
            },
        }
    }

    pub fn matching_skills(self) -> &'static [&'static str] {
        match self {
            CareerId::DataScientist => &["Analytical Thinking", "Problem Solving", "Statistics"],
            CareerId::SoftwareDeveloper => &["Programming", "Logic", "Problem Solving"],
            CareerId::FrontendDeveloper => &["HTML/CSS", "JavaScript", "Design Sense"],
            CareerId::BusinessAnalyst => &["Analysis", "Communication", "Business Logic"],
            CareerId::UxUiDesigner => &["Design Thinking", "User Empathy", "Creativity"],
            CareerId::ProjectManager => &["Leadership", "Organization", "Communication"],
            CareerId::CybersecuritySpecialist => {
                &["Security Mindset", "Technical Analysis", "Problem Solving"]
            }
            CareerId::ProductManager => &["Strategic Thinking", "Market Analysis", "Leadership"],
        }
    }

    pub fn skills_to_learn(self) -> &'static [&'static str] {
        match self {
            CareerId::DataScientist => &["Python", "R", "SQL", "Machine Learning", "Statistics"],
            CareerId::SoftwareDeveloper => {
                &["Programming Languages", "Frameworks", "DevOps", "Testing"]
            }
            CareerId::FrontendDeveloper => {
                &["React/Vue", "CSS Frameworks", "JavaScript ES6+", "Design Tools"]
            }
            CareerId::BusinessAnalyst => {
                &["Excel/Power BI", "SQL", "Business Process Modeling", "Analytics"]
            }
            CareerId::UxUiDesigner => {
                &["Figma/Adobe XD", "User Research", "Prototyping", "Usability Testing"]
            }
            CareerId::ProjectManager => &[
                "Project Management Tools",
                "Agile/Scrum",
                "Risk Management",
                "Leadership",
            ],
            CareerId::CybersecuritySpecialist => {
                &["Network Security", "Ethical Hacking", "Security Tools", "Compliance"]
            }
            CareerId::ProductManager => {
                &["Product Strategy", "Market Research", "Analytics", "Roadmapping"]
            }
        }
    }

    pub fn next_steps(self) -> &'static [&'static str] {
        match self {
            CareerId::DataScientist => &[
                "Learn Python for data analysis",
                "Complete online statistics course",
                "Build data projects portfolio",
            ],
            CareerId::SoftwareDeveloper => &[
                "Master a programming language",
                "Build personal projects",
                "Contribute to open source",
            ],
            CareerId::FrontendDeveloper => &[
                "Learn modern JavaScript",
                "Master a frontend framework",
                "Build responsive websites",
            ],
            CareerId::BusinessAnalyst => &[
                "Learn Excel and SQL",
                "Understand business processes",
                "Practice data visualization",
            ],
            CareerId::UxUiDesigner => &[
                "Learn design tools",
                "Study user psychology",
                "Create design portfolio",
            ],
            CareerId::ProjectManager => &[
                "Get PMP certification",
                "Practice with project management tools",
                "Lead small projects",
            ],
            CareerId::CybersecuritySpecialist => &[
                "Study network fundamentals",
                "Get security certifications",
                "Practice ethical hacking",
            ],
            CareerId::ProductManager => &[
                "Learn product strategy",
                "Understand market research",
                "Practice product roadmapping",
            ],
        }
    }
}

/// Fallback tuples for titles outside the catalog (a title can reach the
/// skill tables through the roadmap endpoint, which accepts free text).
pub const GENERIC_MATCHING_SKILLS: &[&str] = &["Problem Solving", "Communication"];
pub const GENERIC_SKILLS_TO_LEARN: &[&str] =
    &["Industry Knowledge", "Communication", "Technical Skills"];
pub const GENERIC_NEXT_STEPS: &[&str] = &[
    "Research the field",
    "Build relevant skills",
    "Network with professionals",
];

pub fn matching_skills_for_title(title: &str) -> Vec<String> {
    CareerId::from_title(title)
        .map(|c| c.matching_skills())
        .unwrap_or(GENERIC_MATCHING_SKILLS)
        .iter()
        .map(ToString::to_string)
        .collect()
}

pub fn skills_to_learn_for_title(title: &str) -> Vec<String> {
    CareerId::from_title(title)
        .map(|c| c.skills_to_learn())
        .unwrap_or(GENERIC_SKILLS_TO_LEARN)
        .iter()
        .map(ToString::to_string)
        .collect()
}

pub fn next_steps_for_title(title: &str) -> Vec<String> {
    CareerId::from_title(title)
        .map(|c| c.next_steps())
        .unwrap_or(GENERIC_NEXT_STEPS)
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_titles_round_trip() {
        for career in CATALOG {
            assert_eq!(CareerId::from_title(career.title()), Some(career));
        }
    }

    #[test]
    fn test_quiz_catalog_is_subset_of_catalog() {
        for career in QUIZ_CATALOG {
            assert!(CATALOG.contains(&career));
        }
    }

    #[test]
    fn test_unknown_title_gets_generic_tables() {
        let skills = matching_skills_for_title("Astronaut");
        assert_eq!(skills, vec!["Problem Solving", "Communication"]);
        let steps = next_steps_for_title("Astronaut");
        assert_eq!(steps.len(), 3);
        assert!(steps[0].contains("Research"));
    }

    #[test]
    fn test_known_title_gets_specific_tables() {
        let skills = skills_to_learn_for_title("Data Scientist");
        assert!(skills.contains(&"Machine Learning".to_string()));
    }
}
