// Core algorithm exports
pub mod filters;
pub mod normalizer;
pub mod ranker;
pub mod rules;
pub mod scoring;

pub use filters::{filter_candidates, passes_hard_filters, rejected_by};
pub use normalizer::{normalize, normalize_professional, normalize_student, normalize_tourist};
pub use ranker::{rank, Ranked, Ranker};
pub use rules::{RankingProfile, Ruleset, JITTER_SPAN};
pub use scoring::{calculate_match_score, FixedJitter, JitterSource, JitterStrategy, SeededJitter, ThreadJitter};
