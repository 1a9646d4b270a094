//! Wayfarer Match - preference matching and ranking for the Wayfarer
//! study, work and travel dashboards.
//!
//! Form submissions are validated, normalized into typed preference
//! records, then ranked against a fixed catalog by per-persona rule tables.
//! Student submissions can be served by a remote recommender instead, with
//! the local catalog as fallback.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{normalize, rank, Ranked, Ranker};
pub use crate::models::{PreferenceForm, PreferenceRecord, RecommendationOutcome, ResultCard};
pub use crate::services::{Catalog, RecommendationService};
