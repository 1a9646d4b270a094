use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;
use validator::ValidationErrors;

use crate::core::normalizer::normalize;
use crate::core::ranker::{Ranked, Ranker};
use crate::models::domain::{
    Persona, PreferenceRecord, ProfessionalPreferences, StudentPreferences, TouristPreferences,
};
use crate::models::requests::{invalid_fields, PreferenceForm};
use crate::models::responses::{
    RecommendationOutcome, RemoteRecommendation, RemoteRecommendationRequest, RemoteStatus,
    ResultSource, FALLBACK_ADVISORY,
};
use crate::models::views::ResultCard;
use crate::services::cache::{CacheKey, ResultCache};
use crate::services::catalog::Catalog;
use crate::services::remote::RemoteRecommender;

/// A submission that never reached ranking
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

impl RecommendError {
    /// Names of the offending form fields
    pub fn fields(&self) -> Vec<String> {
        match self {
            RecommendError::Validation(errors) => invalid_fields(errors),
        }
    }
}

fn to_cards<C>(ranked: &Ranked<C>) -> Vec<ResultCard>
where
    for<'a> ResultCard: From<&'a C>,
{
    ranked.results.iter().map(ResultCard::from).collect()
}

/// Turns dashboard submissions into ranked result cards
///
/// Student submissions try the remote recommender first (when configured)
/// and fall back to the local catalog on any failure. Professional and
/// tourist submissions are always ranked locally. A failed health check
/// marks the remote as down, and student submissions skip it until a later
/// check succeeds.
#[derive(Clone)]
pub struct RecommendationService {
    catalog: Arc<Catalog>,
    ranker: Ranker,
    remote: Option<RemoteRecommender>,
    remote_up: Arc<AtomicBool>,
    cache: Option<ResultCache>,
}

impl RecommendationService {
    /// Local-only service
    pub fn new(catalog: Arc<Catalog>, ranker: Ranker) -> Self {
        Self {
            catalog,
            ranker,
            remote: None,
            remote_up: Arc::new(AtomicBool::new(true)),
            cache: None,
        }
    }

    pub fn with_remote(mut self, remote: RemoteRecommender) -> Self {
        self.remote = Some(remote);
        self
    }

    pub fn with_cache(mut self, cache: ResultCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Probe the remote service, if one is configured
    ///
    /// The outcome decides whether student submissions use the remote.
    pub async fn remote_status(&self) -> RemoteStatus {
        let remote = match &self.remote {
            Some(remote) => remote,
            None => return RemoteStatus::Disabled,
        };

        let up = remote.health_check(None).await;
        self.remote_up.store(up, Ordering::SeqCst);
        if up {
            RemoteStatus::Available
        } else {
            RemoteStatus::Unavailable
        }
    }

    /// Whether student submissions currently go to the remote
    pub fn uses_remote(&self) -> bool {
        self.remote.is_some() && self.remote_up.load(Ordering::SeqCst)
    }

    /// Validate, normalize and rank one form submission
    ///
    /// Invalid forms are rejected before any network call.
    pub async fn recommend(&self, form: &PreferenceForm) -> Result<RecommendationOutcome, RecommendError> {
        form.validate()?;
        let record = normalize(form);
        Ok(self.recommend_record(&record).await)
    }

    pub async fn recommend_record(&self, record: &PreferenceRecord) -> RecommendationOutcome {
        match record {
            PreferenceRecord::Student(prefs) => self.recommend_student(prefs).await,
            PreferenceRecord::Professional(prefs) => self.recommend_professional(prefs),
            PreferenceRecord::Tourist(prefs) => self.recommend_tourist(prefs),
        }
    }

    pub async fn recommend_student(&self, prefs: &StudentPreferences) -> RecommendationOutcome {
        let remote = match &self.remote {
            Some(remote) if self.remote_up.load(Ordering::SeqCst) => remote,
            _ => return self.local_students(prefs, ResultSource::Local, None),
        };

        match self.fetch_remote(remote, prefs).await {
            Ok(recommendations) => {
                tracing::info!("Serving {} remote recommendations", recommendations.len());
                let cards = recommendations.iter().map(ResultCard::from).collect();
                RecommendationOutcome::from_cards(Persona::Student, ResultSource::Remote, None, cards)
            }
            Err(e) => {
                tracing::warn!("Remote recommender unavailable, using local catalog: {}", e);
                self.local_students(
                    prefs,
                    ResultSource::Fallback,
                    Some(FALLBACK_ADVISORY.to_string()),
                )
            }
        }
    }

    async fn fetch_remote(
        &self,
        remote: &RemoteRecommender,
        prefs: &StudentPreferences,
    ) -> Result<Vec<RemoteRecommendation>, crate::services::remote::RemoteUnavailable> {
        let key = match &self.cache {
            Some(_) => match CacheKey::student_recommendations(&RemoteRecommendationRequest::from(prefs)) {
                Ok(key) => Some(key),
                Err(e) => {
                    tracing::warn!("Could not build cache key: {}", e);
                    None
                }
            },
            None => None,
        };

        if let (Some(cache), Some(key)) = (&self.cache, &key) {
            match cache.get::<Vec<RemoteRecommendation>>(key).await {
                Ok(cached) => {
                    tracing::debug!("Using cached remote recommendations");
                    return Ok(cached);
                }
                Err(e) => tracing::debug!("{}", e),
            }
        }

        let recommendations = remote.fetch_recommendations(prefs, None).await?;

        if let (Some(cache), Some(key)) = (&self.cache, &key) {
            if let Err(e) = cache.set(key, &recommendations).await {
                tracing::warn!("Failed to cache remote recommendations: {}", e);
            }
        }

        Ok(recommendations)
    }

    fn local_students(
        &self,
        prefs: &StudentPreferences,
        source: ResultSource,
        advisory: Option<String>,
    ) -> RecommendationOutcome {
        let ranked = self.ranker.rank(prefs, &self.catalog.universities);
        tracing::info!(
            "Ranked {} of {} universities locally",
            ranked.len(),
            ranked.total_candidates
        );
        RecommendationOutcome::from_cards(Persona::Student, source, advisory, to_cards(&ranked))
    }

    pub fn recommend_professional(&self, prefs: &ProfessionalPreferences) -> RecommendationOutcome {
        let ranked = self.ranker.rank(prefs, &self.catalog.countries);
        tracing::info!(
            "Ranked {} of {} countries for {:?}",
            ranked.len(),
            ranked.total_candidates,
            prefs.industry
        );
        RecommendationOutcome::from_cards(Persona::Professional, ResultSource::Local, None, to_cards(&ranked))
    }

    pub fn recommend_tourist(&self, prefs: &TouristPreferences) -> RecommendationOutcome {
        let ranked = self.ranker.rank(prefs, &self.catalog.destinations);
        tracing::info!(
            "Ranked {} of {} destinations",
            ranked.len(),
            ranked.total_candidates
        );
        RecommendationOutcome::from_cards(Persona::Tourist, ResultSource::Local, None, to_cards(&ranked))
    }
}
