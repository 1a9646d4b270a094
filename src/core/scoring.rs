use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use crate::core::rules::{Ruleset, JITTER_SPAN};

/// Source of the random jitter added by baseline rulesets
pub trait JitterSource {
    /// Draw a value in `0..span` (0 when `span` is 0)
    fn draw(&mut self, span: u8) -> u8;
}

/// Non-deterministic jitter from the thread-local generator
#[derive(Debug, Default)]
pub struct ThreadJitter;

impl JitterSource for ThreadJitter {
    fn draw(&mut self, span: u8) -> u8 {
        if span == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..span)
    }
}

/// Reproducible jitter: the same seed yields the same draws
#[derive(Debug)]
pub struct SeededJitter {
    rng: StdRng,
}

impl SeededJitter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl JitterSource for SeededJitter {
    fn draw(&mut self, span: u8) -> u8 {
        if span == 0 {
            return 0;
        }
        self.rng.gen_range(0..span)
    }
}

/// Always draws the same value, clamped into range
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedJitter(pub u8);

impl JitterSource for FixedJitter {
    fn draw(&mut self, span: u8) -> u8 {
        if span == 0 {
            return 0;
        }
        self.0.min(span - 1)
    }
}

/// How ranking passes obtain their jitter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JitterStrategy {
    #[default]
    Random,
    Seeded,
    None,
}

impl JitterStrategy {
    /// A fresh source for one ranking pass
    pub fn source(&self, seed: u64) -> Box<dyn JitterSource + Send> {
        match self {
            JitterStrategy::Random => Box::new(ThreadJitter),
            JitterStrategy::Seeded => Box::new(SeededJitter::new(seed)),
            JitterStrategy::None => Box::new(FixedJitter(0)),
        }
    }
}

/// Calculate the match score for one candidate.
///
/// score = min(base + jitter + Σ applicable bonuses, cap)
///
/// The result is never below the ruleset's base and never above its cap.
pub fn calculate_match_score<P, C>(
    prefs: &P,
    candidate: &C,
    rules: &Ruleset<P, C>,
    jitter: &mut dyn JitterSource,
) -> u8 {
    let mut score = u16::from(rules.base);

    if rules.jitter {
        score += u16::from(jitter.draw(JITTER_SPAN));
    }

    score += rules
        .bonuses
        .iter()
        .filter(|bonus| (bonus.applies)(prefs, candidate))
        .map(|bonus| u16::from(bonus.points))
        .sum::<u16>();

    score.min(u16::from(rules.cap)) as u8
}

/// Names of the bonus rules that hold for a candidate
pub fn applied_bonuses<P, C>(prefs: &P, candidate: &C, rules: &Ruleset<P, C>) -> Vec<&'static str> {
    rules
        .bonuses
        .iter()
        .filter(|bonus| (bonus.applies)(prefs, candidate))
        .map(|bonus| bonus.name)
        .collect()
}
