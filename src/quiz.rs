//! Random selection of a question the player has not seen yet.

use crate::models::Question;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Uniformly random question from `candidates` whose id is not in `previous`.
/// `None` once every candidate has been asked.
pub fn pick_unseen<'a, R: Rng + ?Sized>(
    candidates: &'a [Question],
    previous: &[i64],
    rng: &mut R,
) -> Option<&'a Question> {
    let seen: HashSet<i64> = previous.iter().copied().collect();
    let remaining: Vec<&Question> = candidates.iter().filter(|q| !seen.contains(&q.id)).collect();
    remaining.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn question(id: i64, category: i64) -> Question {
        Question {
            id,
            question: Some(format!("question {id}")),
            answer: Some(format!("answer {id}")),
            category: Some(category),
            difficulty: Some(1),
        }
    }

    #[test]
    fn test_never_returns_previous() {
        let candidates: Vec<Question> = (1..=5).map(|id| question(id, 1)).collect();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let picked = pick_unseen(&candidates, &[1, 2, 4], &mut rng).unwrap();
            assert!(picked.id == 3 || picked.id == 5);
        }
    }

    #[test]
    fn test_exhausted_returns_none() {
        let candidates: Vec<Question> = (1..=3).map(|id| question(id, 1)).collect();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pick_unseen(&candidates, &[3, 1, 2], &mut rng).is_none());
        assert!(pick_unseen(&[], &[], &mut rng).is_none());
    }

    #[test]
    fn test_previous_ids_outside_candidates_are_ignored() {
        let candidates = vec![question(9, 2)];
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(pick_unseen(&candidates, &[100, 200], &mut rng).map(|q| q.id), Some(9));
    }

    #[test]
    fn test_every_unseen_candidate_is_reachable() {
        let candidates: Vec<Question> = (1..=4).map(|id| question(id, 1)).collect();
        let mut rng = StdRng::seed_from_u64(42);
        let mut hits = HashSet::new();
        for _ in 0..500 {
            hits.insert(pick_unseen(&candidates, &[2], &mut rng).unwrap().id);
        }
        assert_eq!(hits, HashSet::from([1, 3, 4]));
    }
}
