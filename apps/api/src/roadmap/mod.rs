//! Roadmap generation — static learning-plan catalog with a generic
//! fallback template.
//!
//! `roadmap_for` is pure and total: every title, known or not, yields a
//! fully-populated 4-phase roadmap. The optional network-backed provider
//! lives in `provider` and produces the exact same shape, so consumers
//! cannot tell the two apart.

pub mod handlers;
pub mod provider;

use serde::{Deserialize, Serialize};

/// Progression tag carried by each phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseType {
    Foundation,
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapPhase {
    pub phase_number: u8,
    pub title: String,
    pub duration: String,
    #[serde(rename = "type")]
    pub phase_type: PhaseType,
    pub description: String,
    pub skills: Vec<String>,
    pub projects: Vec<String>,
    pub resources: Vec<String>,
    pub milestones: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    pub title: String,
    pub estimated_time: String,
    pub total_phases: u8,
    pub phases: Vec<RoadmapPhase>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

#[allow(clippy::too_many_arguments)]
fn phase(
    number: u8,
    title: &str,
    duration: &str,
    phase_type: PhaseType,
    description: &str,
    skills: &[&str],
    projects: &[&str],
    resources: &[&str],
    milestones: &[&str],
) -> RoadmapPhase {
    RoadmapPhase {
        phase_number: number,
        title: title.to_string(),
        duration: duration.to_string(),
        phase_type,
        description: description.to_string(),
        skills: strings(skills),
        projects: strings(projects),
        resources: strings(resources),
        milestones: strings(milestones),
    }
}

/// Looks up the pre-authored roadmap for `career_title`, or synthesizes the
/// generic template with the title interpolated into every phase.
pub fn roadmap_for(career_title: &str) -> Roadmap {
    authored_roadmap(career_title).unwrap_or_else(|| generic_roadmap(career_title))
}

fn authored_roadmap(career_title: &str) -> Option<Roadmap> {
    match career_title {
        "Data Scientist" => Some(Roadmap {
            title: "Data Scientist Learning Roadmap".to_string(),
            estimated_time: "14 months".to_string(),
            total_phases: 4,
            phases: vec![
                phase(
                    1,
                    "Programming & Statistics Foundation",
                    "3 months",
                    PhaseType::Foundation,
                    "Master Python programming and statistical fundamentals essential for data science.",
                    &["Python", "Statistics", "Pandas", "NumPy", "Jupyter Notebooks"],
                    &["Data cleaning project", "Statistical analysis report", "Python automation script"],
                    &["Python for Data Science course", "Statistics textbook", "Kaggle Learn"],
                    &["Complete Python basics", "Understand descriptive statistics", "Build first data project"],
                ),
                phase(
                    2,
                    "Data Analysis & Visualization",
                    "4 months",
                    PhaseType::Beginner,
                    "Develop skills in data manipulation, visualization, and exploratory data analysis.",
                    &["Data Visualization", "Scikit-learn", "SQL", "Data Cleaning", "Matplotlib", "Seaborn"],
                    &["Business intelligence dashboard", "Predictive model", "Data storytelling presentation"],
                    &["SQL for Data Science", "Tableau/Power BI courses", "Data visualization best practices"],
                    &["Master data visualization", "Build predictive models", "Present data insights"],
                ),
                phase(
                    3,
                    "Machine Learning & Advanced Analytics",
                    "4 months",
                    PhaseType::Intermediate,
                    "Learn machine learning algorithms, deep learning, and advanced analytical techniques.",
                    &["Machine Learning", "Deep Learning", "TensorFlow", "Feature Engineering", "Model Evaluation"],
                    &["End-to-end ML project", "Deep learning model", "Feature engineering pipeline"],
                    &["Machine Learning course", "Deep Learning specialization", "MLOps tutorials"],
                    &["Deploy ML models", "Master feature engineering", "Build neural networks"],
                ),
                phase(
                    4,
                    "MLOps & Production Systems",
                    "3 months",
                    PhaseType::Advanced,
                    "Learn to deploy, monitor, and maintain machine learning systems in production.",
                    &["MLOps", "Big Data", "Model Deployment", "Advanced Analytics", "Cloud Platforms"],
                    &["Production ML pipeline", "Model monitoring system", "Big data processing"],
                    &["MLOps best practices", "Cloud ML platforms", "Production ML case studies"],
                    &["Deploy production models", "Set up monitoring", "Handle big data"],
                ),
            ],
        }),
        "Software Developer" => Some(Roadmap {
            title: "Software Developer Learning Roadmap".to_string(),
            estimated_time: "12 months".to_string(),
            total_phases: 4,
            phases: vec![
                phase(
                    1,
                    "Programming Fundamentals",
                    "3 months",
                    PhaseType::Foundation,
                    "Master core programming concepts and choose your primary programming language.",
                    &["Programming Logic", "Data Structures", "Algorithms", "Git", "Problem Solving"],
                    &["Console applications", "Basic algorithms", "Git portfolio"],
                    &["Programming fundamentals course", "Algorithm practice", "Git documentation"],
                    &["Understand OOP", "Solve coding challenges", "Use version control"],
                ),
                phase(
                    2,
                    "Web Development Basics",
                    "3 months",
                    PhaseType::Beginner,
                    "Learn web technologies and build your first web applications.",
                    &["HTML5", "CSS3", "JavaScript", "Responsive Design", "DOM Manipulation"],
                    &["Personal portfolio", "Interactive web app", "Responsive website"],
                    &["Web development bootcamp", "MDN documentation", "Frontend practice"],
                    &["Build responsive sites", "Master JavaScript", "Create portfolio"],
                ),
                phase(
                    3,
                    "Backend & Frameworks",
                    "3 months",
                    PhaseType::Intermediate,
                    "Develop backend skills and learn popular frameworks for full-stack development.",
                    &["Node.js/Python", "Frameworks", "Databases", "APIs", "Authentication"],
                    &["REST API", "Database-driven app", "Authentication system"],
                    &["Backend development course", "Database tutorials", "API design guides"],
                    &["Build APIs", "Work with databases", "Implement authentication"],
                ),
                phase(
                    4,
                    "Advanced Development & DevOps",
                    "3 months",
                    PhaseType::Advanced,
                    "Master advanced development practices, testing, and deployment strategies.",
                    &["Testing", "DevOps", "Cloud Deployment", "Performance", "Security"],
                    &["Production application", "CI/CD pipeline", "Performance optimization"],
                    &["DevOps tutorials", "Cloud platform docs", "Testing frameworks"],
                    &["Deploy to production", "Set up CI/CD", "Optimize performance"],
                ),
            ],
        }),
        "Frontend Developer" => Some(Roadmap {
            title: "Frontend Developer Learning Roadmap".to_string(),
            estimated_time: "10 months".to_string(),
            total_phases: 4,
            phases: vec![
                phase(
                    1,
                    "Web Fundamentals",
                    "2 months",
                    PhaseType::Foundation,
                    "Master HTML, CSS, and JavaScript fundamentals for modern web development.",
                    &["HTML5", "CSS3", "JavaScript ES6+", "Responsive Design", "Git"],
                    &["Landing page", "Portfolio website", "Interactive components"],
                    &["HTML/CSS course", "JavaScript fundamentals", "Git basics"],
                    &["Build responsive layouts", "Master CSS Grid/Flexbox", "Understand JavaScript"],
                ),
                phase(
                    2,
                    "Modern JavaScript & Tools",
                    "3 months",
                    PhaseType::Beginner,
                    "Learn modern JavaScript features, package managers, and build tools.",
                    &["ES6+ Features", "NPM/Yarn", "Webpack", "Sass/SCSS", "Browser DevTools"],
                    &["JavaScript SPA", "Build tool setup", "Component library"],
                    &["Modern JavaScript course", "Build tools documentation", "DevTools tutorials"],
                    &["Use modern JS features", "Set up build pipeline", "Debug effectively"],
                ),
                phase(
                    3,
                    "Frontend Frameworks",
                    "3 months",
                    PhaseType::Intermediate,
                    "Master a popular frontend framework and learn state management.",
                    &["React/Vue/Angular", "State Management", "Component Architecture", "Testing"],
                    &["Framework-based app", "State management implementation", "Component testing"],
                    &["Framework documentation", "State management guides", "Testing tutorials"],
                    &["Build complex apps", "Manage application state", "Write tests"],
                ),
                phase(
                    4,
                    "Advanced Frontend & Performance",
                    "2 months",
                    PhaseType::Advanced,
                    "Optimize applications for performance, accessibility, and production deployment.",
                    &["Performance Optimization", "Accessibility", "PWA", "Advanced Testing", "Deployment"],
                    &["Optimized production app", "PWA implementation", "Accessibility audit"],
                    &["Performance guides", "Accessibility standards", "PWA tutorials"],
                    &["Optimize for performance", "Ensure accessibility", "Deploy professionally"],
                ),
            ],
        }),
        "UX/UI Designer" => Some(Roadmap {
            title: "UX/UI Designer Learning Roadmap".to_string(),
            estimated_time: "10 months".to_string(),
            total_phases: 4,
            phases: vec![
                phase(
                    1,
                    "Design Fundamentals",
                    "2 months",
                    PhaseType::Foundation,
                    "Learn core design principles, color theory, and typography basics.",
                    &["Design Principles", "Color Theory", "Typography", "Layout", "Visual Hierarchy"],
                    &["Logo design", "Poster design", "Typography study"],
                    &["Design fundamentals course", "Color theory guide", "Typography handbook"],
                    &["Understand design principles", "Apply color theory", "Create visual hierarchy"],
                ),
                phase(
                    2,
                    "UX Research & Design Tools",
                    "3 months",
                    PhaseType::Beginner,
                    "Master design tools and learn user research methodologies.",
                    &["Figma/Sketch", "User Research", "Personas", "User Journey Mapping", "Wireframing"],
                    &["User research study", "Persona development", "Wireframe set"],
                    &["Figma tutorials", "UX research methods", "Wireframing best practices"],
                    &["Conduct user research", "Create user personas", "Design wireframes"],
                ),
                phase(
                    3,
                    "UI Design & Prototyping",
                    "3 months",
                    PhaseType::Intermediate,
                    "Create beautiful interfaces and interactive prototypes.",
                    &["UI Design", "Prototyping", "Design Systems", "Interaction Design", "Usability Testing"],
                    &["Mobile app design", "Interactive prototype", "Design system"],
                    &["UI design course", "Prototyping tutorials", "Design system examples"],
                    &["Design beautiful UIs", "Create interactive prototypes", "Build design systems"],
                ),
                phase(
                    4,
                    "Advanced UX & Portfolio",
                    "2 months",
                    PhaseType::Advanced,
                    "Master advanced UX techniques and build a professional portfolio.",
                    &["Advanced UX", "Portfolio Development", "Client Communication", "Design Strategy"],
                    &["Complete UX case study", "Professional portfolio", "Client project"],
                    &["Advanced UX course", "Portfolio examples", "Client communication guide"],
                    &["Complete UX projects", "Build strong portfolio", "Present work effectively"],
                ),
            ],
        }),
        _ => None,
    }
}

/// Generic 4-phase template for titles without an authored roadmap. The
/// career title appears in every phase title and description so the plan
/// still reads as career-specific.
fn generic_roadmap(career_title: &str) -> Roadmap {
    Roadmap {
        title: format!("{career_title} Learning Roadmap"),
        estimated_time: "12 months".to_string(),
        total_phases: 4,
        phases: vec![
            phase(
                1,
                &format!("{career_title} Foundation Phase"),
                "3 months",
                PhaseType::Foundation,
                &format!("Build foundational knowledge for {career_title}."),
                &["Core Fundamentals", "Basic Tools", "Industry Knowledge"],
                &["Introductory project", "Basic portfolio piece"],
                &["Online courses", "Documentation", "Practice platforms"],
                &["Complete fundamentals", "Build first project", "Understand basics"],
            ),
            phase(
                2,
                &format!("{career_title} Development Phase"),
                "3 months",
                PhaseType::Beginner,
                &format!("Develop practical skills in {career_title}."),
                &["Practical Skills", "Intermediate Concepts", "Real-world Application"],
                &["Skill-based project", "Portfolio expansion"],
                &["Advanced courses", "Industry tutorials", "Practice projects"],
                &["Apply skills practically", "Build portfolio", "Gain confidence"],
            ),
            phase(
                3,
                &format!("{career_title} Advanced Phase"),
                "3 months",
                PhaseType::Intermediate,
                &format!("Master advanced concepts in {career_title}."),
                &["Advanced Techniques", "Specialization", "Expert Knowledge"],
                &["Complex project", "Specialized implementation"],
                &["Expert tutorials", "Advanced documentation", "Professional guides"],
                &["Master advanced skills", "Complete complex projects", "Demonstrate expertise"],
            ),
            phase(
                4,
                &format!("{career_title} Professional Phase"),
                "3 months",
                PhaseType::Advanced,
                &format!("Achieve professional-level competency in {career_title}."),
                &["Professional Skills", "Industry Standards", "Leadership"],
                &["Professional portfolio", "Industry-standard project"],
                &["Professional development", "Industry standards", "Leadership training"],
                &["Reach professional level", "Meet industry standards", "Ready for career"],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authored_titles_get_specific_roadmaps() {
        for title in [
            "Data Scientist",
            "Software Developer",
            "Frontend Developer",
            "UX/UI Designer",
        ] {
            let roadmap = roadmap_for(title);
            assert_eq!(roadmap.total_phases, 4);
            assert_eq!(roadmap.phases.len(), 4);
            assert!(roadmap.title.starts_with(title));
        }
    }

    #[test]
    fn test_phase_numbers_are_sequential() {
        let roadmap = roadmap_for("Data Scientist");
        let numbers: Vec<u8> = roadmap.phases.iter().map(|p| p.phase_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_unknown_title_interpolated_into_every_phase() {
        let roadmap = roadmap_for("UnknownCareerXYZ");
        assert_eq!(roadmap.phases.len(), 4);
        for phase in &roadmap.phases {
            assert!(
                phase.title.contains("UnknownCareerXYZ"),
                "phase title missing career: {}",
                phase.title
            );
            assert!(
                phase.description.contains("UnknownCareerXYZ"),
                "phase description missing career: {}",
                phase.description
            );
        }
    }

    #[test]
    fn test_generic_phase_types_progress() {
        let roadmap = roadmap_for("Project Manager");
        let types: Vec<PhaseType> = roadmap.phases.iter().map(|p| p.phase_type).collect();
        assert_eq!(
            types,
            vec![
                PhaseType::Foundation,
                PhaseType::Beginner,
                PhaseType::Intermediate,
                PhaseType::Advanced
            ]
        );
    }

    #[test]
    fn test_roadmap_round_trips_through_json() {
        let roadmap = roadmap_for("Software Developer");
        let json = serde_json::to_string(&roadmap).unwrap();
        let parsed: Roadmap = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, roadmap);
    }

    #[test]
    fn test_phase_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PhaseType::Foundation).unwrap(),
            r#""foundation""#
        );
    }
}
