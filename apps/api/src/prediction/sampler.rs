//! Quiz Question Sampler — draws a fresh fixed-composition question set
//! from the available pool for every quiz session.
//!
//! The random source is a parameter so tests can seed it; production
//! callers pass `rand::thread_rng()`.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::question::{QuizCategory, QuizQuestion};

/// Target composition: 25 questions across the five categories.
pub const CATEGORY_LIMITS: [(QuizCategory, usize); 5] = [
    (QuizCategory::TechQuiz, 7),
    (QuizCategory::CodeChallenge, 5),
    (QuizCategory::InterestProfile, 3),
    (QuizCategory::ScenarioSolver, 5),
    (QuizCategory::Personality, 5),
];

/// Samples each category uniformly without replacement, taking all
/// available when the pool falls short of the target, then shuffles the
/// combined set so category order is unpredictable.
pub fn sample_quiz_set<R: Rng + ?Sized>(
    pool: &[QuizQuestion],
    rng: &mut R,
) -> Vec<QuizQuestion> {
    let mut selected = Vec::new();

    for (category, limit) in CATEGORY_LIMITS {
        let mut bucket: Vec<&QuizQuestion> = pool
            .iter()
            .filter(|q| q.resolved_category() == category)
            .collect();
        bucket.shuffle(rng);
        selected.extend(bucket.into_iter().take(limit).cloned());
    }

    selected.shuffle(rng);
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn pool_question(prefix: &str, index: usize) -> QuizQuestion {
        QuizQuestion {
            id: format!("{prefix}{index}"),
            question: format!("Question {prefix}{index}"),
            options: vec!["A".to_string(), "B".to_string()],
            category: None,
        }
    }

    fn full_pool() -> Vec<QuizQuestion> {
        let mut pool = Vec::new();
        pool.extend((0..10).map(|i| pool_question("TQ", i)));
        pool.extend((0..8).map(|i| pool_question("cc-", i)));
        pool.extend((0..6).map(|i| pool_question("ip-", i)));
        pool.extend((0..8).map(|i| pool_question("scenario-", i)));
        pool.extend((0..8).map(|i| pool_question("pi-", i)));
        pool
    }

    fn count(set: &[QuizQuestion], category: QuizCategory) -> usize {
        set.iter()
            .filter(|q| q.resolved_category() == category)
            .count()
    }

    #[test]
    fn test_full_pool_yields_exact_composition() {
        let mut rng = StdRng::seed_from_u64(7);
        let set = sample_quiz_set(&full_pool(), &mut rng);
        assert_eq!(set.len(), 25);
        assert_eq!(count(&set, QuizCategory::TechQuiz), 7);
        assert_eq!(count(&set, QuizCategory::CodeChallenge), 5);
        assert_eq!(count(&set, QuizCategory::InterestProfile), 3);
        assert_eq!(count(&set, QuizCategory::ScenarioSolver), 5);
        assert_eq!(count(&set, QuizCategory::Personality), 5);
    }

    #[test]
    fn test_no_duplicates_in_sample() {
        let mut rng = StdRng::seed_from_u64(11);
        let set = sample_quiz_set(&full_pool(), &mut rng);
        let ids: HashSet<&str> = set.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids.len(), set.len());
    }

    #[test]
    fn test_short_pool_takes_all_available_without_error() {
        // Only 2 InterestProfile questions available against a target of 3.
        let mut pool = full_pool();
        pool.retain(|q| {
            q.resolved_category() != QuizCategory::InterestProfile || q.id == "ip-0" || q.id == "ip-1"
        });
        let mut rng = StdRng::seed_from_u64(3);
        let set = sample_quiz_set(&pool, &mut rng);
        assert_eq!(count(&set, QuizCategory::InterestProfile), 2);
        assert_eq!(set.len(), 24);
    }

    #[test]
    fn test_empty_pool_yields_empty_set() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sample_quiz_set(&[], &mut rng).is_empty());
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let pool = full_pool();
        let first = sample_quiz_set(&pool, &mut StdRng::seed_from_u64(42));
        let second = sample_quiz_set(&pool, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_category_questions_are_never_sampled() {
        let mut pool = full_pool();
        pool.push(QuizQuestion {
            id: "mystery-1".to_string(),
            question: "unclassifiable".to_string(),
            options: vec![],
            category: None,
        });
        let mut rng = StdRng::seed_from_u64(5);
        let set = sample_quiz_set(&pool, &mut rng);
        assert!(set.iter().all(|q| q.id != "mystery-1"));
    }
}
