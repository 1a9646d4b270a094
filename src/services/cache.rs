use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::models::responses::RemoteRecommendationRequest;

/// Errors that can occur with cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Cache miss: {0}")]
    CacheMiss(String),
}

/// In-memory TTL cache for remote recommendation results
///
/// Values are stored as JSON bytes so any serializable result fits. The
/// cache is internally synchronized and cheap to clone.
#[derive(Clone)]
pub struct ResultCache {
    entries: moka::future::Cache<String, Vec<u8>>,
}

impl ResultCache {
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let entries = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { entries }
    }

    pub async fn get<T>(&self, key: &str) -> Result<T, CacheError>
    where
        T: for<'de> Deserialize<'de>,
    {
        match self.entries.get(key).await {
            Some(bytes) => {
                tracing::trace!("Cache hit: {}", key);
                Ok(serde_json::from_slice(&bytes)?)
            }
            None => {
                tracing::trace!("Cache miss: {}", key);
                Err(CacheError::CacheMiss(key.to_string()))
            }
        }
    }

    pub async fn set<T>(&self, key: &str, value: &T) -> Result<(), CacheError>
    where
        T: Serialize,
    {
        let bytes = serde_json::to_vec(value)?;
        self.entries.insert(key.to_string(), bytes).await;
        tracing::trace!("Cache set: {}", key);
        Ok(())
    }

    pub async fn delete(&self, key: &str) {
        self.entries.invalidate(key).await;
    }
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Key for remote student results: the exact request body sent upstream
    pub fn student_recommendations(body: &RemoteRecommendationRequest) -> Result<String, CacheError> {
        Ok(format!("student:recommend:{}", serde_json::to_string(body)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(gpa: f32) -> RemoteRecommendationRequest {
        RemoteRecommendationRequest {
            degree_level: "masters".to_string(),
            field_of_study: "Engineering".to_string(),
            gpa,
            budget: "low".to_string(),
            program_type: "any".to_string(),
            destination_preference: "europe".to_string(),
            climate_preference: "any".to_string(),
            scholarship_interest: false,
            work_importance: "moderate".to_string(),
            visa_importance: "moderate".to_string(),
            language_proficiency: "none".to_string(),
        }
    }

    #[tokio::test]
    async fn test_cache_set_get() {
        let cache = ResultCache::new(100, 60);

        cache.set("key", &vec!["a".to_string(), "b".to_string()]).await.unwrap();
        let value: Vec<String> = cache.get("key").await.unwrap();
        assert_eq!(value, vec!["a", "b"]);

        cache.delete("key").await;
        assert!(matches!(
            cache.get::<Vec<String>>("key").await,
            Err(CacheError::CacheMiss(_))
        ));
    }

    #[test]
    fn test_cache_key_differs_per_body() {
        let a = CacheKey::student_recommendations(&body(3.5)).unwrap();
        let b = CacheKey::student_recommendations(&body(3.6)).unwrap();
        assert!(a.starts_with("student:recommend:"));
        assert_ne!(a, b);
    }
}
