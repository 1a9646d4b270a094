use crate::core::filters::filter_candidates;
use crate::core::rules::{RankingProfile, Ruleset};
use crate::core::scoring::{calculate_match_score, JitterSource, JitterStrategy};
use crate::models::domain::Candidate;

/// Result of one ranking pass
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<C> {
    /// Survivors ordered by match score, highest first
    pub results: Vec<C>,
    /// Candidates considered before filtering
    pub total_candidates: usize,
}

impl<C> Ranked<C> {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }
}

/// Run the filter/score/sort pipeline with an explicit ruleset.
///
/// # Pipeline Stages
/// 1. Hard filters remove candidates outright
/// 2. Every survivor gets a fresh match score
/// 3. Stable sort, highest score first (ties keep catalog order)
///
/// Candidates are cloned; the input slice is never mutated.
pub fn rank<P, C: Candidate>(
    prefs: &P,
    candidates: &[C],
    rules: &Ruleset<P, C>,
    jitter: &mut dyn JitterSource,
) -> Ranked<C> {
    let total_candidates = candidates.len();

    // Stage 1: hard filters
    let mut results = filter_candidates(prefs, candidates, rules);

    // Stage 2: score assignment, overwriting any previous value
    for candidate in results.iter_mut() {
        let score = calculate_match_score(prefs, candidate, rules, jitter);
        candidate.set_match_score(score);
    }

    // Stage 3: stable descending sort
    results.sort_by(|a, b| b.match_score().cmp(&a.match_score()));

    tracing::debug!(
        "{:?} ranking kept {} of {} candidates",
        rules.persona,
        results.len(),
        total_candidates
    );

    Ranked {
        results,
        total_candidates,
    }
}

/// Ranking orchestrator shared by all dashboards
#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    jitter: JitterStrategy,
    seed: u64,
    limit: Option<usize>,
}

impl Ranker {
    pub fn new(jitter: JitterStrategy, seed: u64) -> Self {
        Self {
            jitter,
            seed,
            limit: None,
        }
    }

    /// Ranker without jitter, for reproducible output
    pub fn deterministic() -> Self {
        Self::new(JitterStrategy::None, 0)
    }

    /// Keep at most `limit` results after sorting
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Rank candidates using the ruleset the preferences select
    pub fn rank<P: RankingProfile>(&self, prefs: &P, candidates: &[P::Candidate]) -> Ranked<P::Candidate> {
        let rules = prefs.ruleset();
        let mut jitter = self.jitter.source(self.seed);
        let mut ranked = rank(prefs, candidates, &rules, jitter.as_mut());

        if let Some(limit) = self.limit {
            ranked.results.truncate(limit);
        }

        ranked
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(JitterStrategy::default(), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rules::{BonusRule, HardFilter};
    use crate::core::scoring::FixedJitter;
    use crate::models::domain::Persona;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: &'static str,
        tag: u8,
        score: u8,
    }

    impl Candidate for Item {
        fn name(&self) -> &str {
            self.name
        }

        fn match_score(&self) -> u8 {
            self.score
        }

        fn set_match_score(&mut self, score: u8) {
            self.score = score;
        }
    }

    fn item(name: &'static str, tag: u8) -> Item {
        Item { name, tag, score: 0 }
    }

    fn tag_not_zero(_: &u8, item: &Item) -> bool {
        item.tag != 0
    }

    fn tag_matches(wanted: &u8, item: &Item) -> bool {
        item.tag == *wanted
    }

    fn rules() -> Ruleset<u8, Item> {
        Ruleset {
            persona: Persona::Student,
            base: 75,
            cap: 98,
            jitter: false,
            filters: vec![HardFilter { name: "non-zero", keep: tag_not_zero }],
            bonuses: vec![BonusRule { name: "tag", points: 10, applies: tag_matches }],
        }
    }

    #[test]
    fn test_rank_sorts_descending() {
        let candidates = vec![item("a", 1), item("b", 2), item("c", 1)];
        let ranked = rank(&2, &candidates, &rules(), &mut FixedJitter(0));

        let names: Vec<_> = ranked.results.iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert_eq!(ranked.results[0].score, 85);
        assert_eq!(ranked.total_candidates, 3);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let candidates = vec![item("x", 3), item("y", 4), item("z", 5)];
        let ranked = rank(&9, &candidates, &rules(), &mut FixedJitter(0));

        let names: Vec<_> = ranked.results.iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_scores_overwritten_not_accumulated() {
        let mut candidates = vec![item("a", 1)];
        candidates[0].score = 97;

        let first = rank(&1, &candidates, &rules(), &mut FixedJitter(0));
        let second = rank(&1, &first.results, &rules(), &mut FixedJitter(0));

        assert_eq!(first.results[0].score, 85);
        assert_eq!(second.results[0].score, 85);
        assert_eq!(candidates[0].score, 97);
    }

    #[test]
    fn test_empty_when_everything_filtered() {
        let candidates = vec![item("a", 0), item("b", 0)];
        let ranked = rank(&1, &candidates, &rules(), &mut FixedJitter(0));

        assert!(ranked.is_empty());
        assert_eq!(ranked.total_candidates, 2);
    }
}
