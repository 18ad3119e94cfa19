//! Built-in question bank.
//!
//! Stands in for an external question source: identifiers carry the
//! category prefixes (`TQ`, `cc-`, `ip-`, `scenario-`, `pi-`) and no
//! explicit category, so classification runs on the real serving path.
//! Each category pool is larger than its sampling target.

use crate::models::question::QuizQuestion;

fn q(id: &str, question: &str, options: [&str; 4]) -> QuizQuestion {
    QuizQuestion {
        id: id.to_string(),
        question: question.to_string(),
        options: options.iter().map(ToString::to_string).collect(),
        category: None,
    }
}

/// The full question pool the sampler draws from.
pub fn question_bank() -> Vec<QuizQuestion> {
    vec![
        // Technical knowledge
        q(
            "TQ01",
            "Which data structure gives constant-time lookup by key?",
            ["Linked list", "Hash map", "Binary tree", "Stack"],
        ),
        q(
            "TQ02",
            "What does an algorithm's time complexity describe?",
            ["Memory layout", "How runtime grows with input size", "Code length", "CPU model"],
        ),
        q(
            "TQ03",
            "In statistics, what does the median of a data set represent?",
            ["The most frequent value", "The middle value", "The average", "The spread"],
        ),
        q(
            "TQ04",
            "Which language is most associated with statistical data analysis?",
            ["Assembly", "R", "COBOL", "Prolog"],
        ),
        q(
            "TQ05",
            "What is the main job of version control in software projects?",
            ["Compiling code", "Tracking changes over time", "Running tests", "Formatting files"],
        ),
        q(
            "TQ06",
            "Which HTML element links a stylesheet to a web page?",
            ["<script>", "<link>", "<div>", "<meta>"],
        ),
        q(
            "TQ07",
            "What does CSS control in a web page?",
            ["Database queries", "Visual presentation", "Server routing", "Authentication"],
        ),
        q(
            "TQ08",
            "What is the purpose of encryption in network security?",
            ["Speeding up traffic", "Protecting data from eavesdropping", "Compressing files", "Caching pages"],
        ),
        q(
            "TQ09",
            "Which practice helps catch programming defects earliest?",
            ["Manual release checks", "Automated testing", "Longer deadlines", "Code freezes"],
        ),
        q(
            "TQ10",
            "What does a relational database use to link tables of data?",
            ["File paths", "Foreign keys", "CSS selectors", "Environment variables"],
        ),
        // Code challenges
        q(
            "cc-01",
            "A loop sums the numbers 1 through 4. What does it print?",
            ["8", "10", "12", "14"],
        ),
        q(
            "cc-02",
            "A function returns its input times two. What is f(f(3))?",
            ["6", "12", "9", "18"],
        ),
        q(
            "cc-03",
            "What does reversing the list [1, 2, 3] produce?",
            ["[1, 2, 3]", "[3, 2, 1]", "[2, 1, 3]", "[3, 1, 2]"],
        ),
        q(
            "cc-04",
            "An if-branch runs only when x > 5. For x = 5, what happens?",
            ["It runs", "It is skipped", "It errors", "It loops"],
        ),
        q(
            "cc-05",
            "Which index does a zero-based array use for its first element?",
            ["1", "0", "-1", "Depends on length"],
        ),
        q(
            "cc-06",
            "A stack receives push(1), push(2), pop(). What remains on top?",
            ["2", "1", "Nothing", "Both"],
        ),
        q(
            "cc-07",
            "What is the result of the boolean expression true AND false?",
            ["true", "false", "undefined", "error"],
        ),
        // Interest profile
        q(
            "ip-01",
            "Which kind of project would you pick up on a free weekend?",
            ["Organizing a team event", "Designing a poster", "Building a small app", "Exploring a public data set"],
        ),
        q(
            "ip-02",
            "Which article headline would you open first?",
            ["Growing a business", "A new design trend", "A programming deep dive", "Insights from election data"],
        ),
        q(
            "ip-03",
            "What part of a group project do you volunteer for?",
            ["Coordinating people", "Making it look great", "Wiring up the logic", "Crunching the numbers"],
        ),
        q(
            "ip-04",
            "Which workshop would you sign up for?",
            ["Pitching ideas", "Illustration basics", "Intro to coding", "Statistics in practice"],
        ),
        q(
            "ip-05",
            "Which achievement would make you proudest?",
            ["Closing a deal", "A portfolio piece", "Shipping a feature", "A published analysis"],
        ),
        // Scenario solving
        q(
            "scenario-01",
            "A report is due tomorrow and the numbers look wrong. What first?",
            ["Submit as-is", "Ask a colleague to fix it", "Re-derive the numbers from the source", "Request an extension"],
        ),
        q(
            "scenario-02",
            "Your team misses a deadline. How do you respond?",
            ["Assign blame", "Work overtime silently", "Analyze what slowed the team down", "Drop the feature"],
        ),
        q(
            "scenario-03",
            "A customer reports an intermittent fault. Your approach?",
            ["Wait for it to recur", "Reproduce it under controlled conditions", "Replace the hardware", "Escalate immediately"],
        ),
        q(
            "scenario-04",
            "Two solutions look equally good. How do you choose?",
            ["Flip a coin", "Pick the familiar one", "Prototype both and measure", "Defer the decision"],
        ),
        q(
            "scenario-05",
            "You inherit a confusing process. What do you do first?",
            ["Follow it blindly", "Rewrite it from scratch", "Map it out step by step", "Ignore it"],
        ),
        q(
            "scenario-06",
            "A stakeholder asks for a feature you think is harmful. You...",
            ["Build it anyway", "Refuse outright", "Present evidence and alternatives", "Delay indefinitely"],
        ),
        q(
            "scenario-07",
            "Halfway through a project the requirements change. You...",
            ["Keep the old plan", "Start over", "Re-scope against the new goals", "Escalate to management"],
        ),
        // Personality
        q(
            "pi-01",
            "In a brainstorm, you are usually the one who...",
            ["Sketches the ideas", "Questions the assumptions", "Keeps the group on track", "Listens and synthesizes"],
        ),
        q(
            "pi-02",
            "Your ideal workday is mostly...",
            ["Open-ended creative work", "Deep focused analysis", "Meetings and coordination", "A mix of everything"],
        ),
        q(
            "pi-03",
            "When learning something new, you prefer to...",
            ["See examples first", "Understand the theory first", "Discuss it with others", "Experiment immediately"],
        ),
        q(
            "pi-04",
            "Under pressure, you tend to...",
            ["Improvise", "Make a checklist", "Rally the team", "Step back and reassess"],
        ),
        q(
            "pi-05",
            "Which compliment lands best with you?",
            ["That was beautiful", "That was rigorous", "That was well led", "That was practical"],
        ),
        q(
            "pi-06",
            "Outside work you are most likely to...",
            ["Make something by hand", "Solve puzzles", "Organize a gathering", "Read broadly"],
        ),
        q(
            "pi-07",
            "You finish a task early. What next?",
            ["Polish the presentation", "Double-check the details", "Help a teammate", "Start the next task"],
        ),
    ]
}
