use crate::models::domain::StudentPreferences;
use crate::models::responses::{
    RemoteHealth, RemoteRecommendation, RemoteRecommendationRequest, RemoteResponse,
};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(8000);
pub const DEFAULT_HEALTH_TIMEOUT: Duration = Duration::from_millis(5000);

/// Reasons the remote recommender could not produce results
///
/// Every variant is recoverable: callers fall back to the local catalog.
#[derive(Debug, Error)]
pub enum RemoteUnavailable {
    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Remote returned status {0}")]
    Status(u16),

    #[error("Remote rejected the request: {0}")]
    Rejected(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

impl RemoteUnavailable {
    fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            RemoteUnavailable::Timeout(timeout)
        } else if err.is_decode() {
            RemoteUnavailable::InvalidResponse(err.to_string())
        } else {
            RemoteUnavailable::Transport(err)
        }
    }
}

/// Client for the remote student recommendation service
///
/// Handles:
/// - Posting normalized student preferences to `{base}/student/recommend`
/// - Probing `{base}/student/health`
///
/// Results are returned as the remote ordered them; nothing is re-ranked.
#[derive(Debug, Clone)]
pub struct RemoteRecommender {
    base_url: String,
    client: Client,
    timeout: Duration,
    health_timeout: Duration,
}

impl RemoteRecommender {
    /// Create a client with the default 8 s request and 5 s health timeouts
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        Self::with_timeouts(base_url, DEFAULT_TIMEOUT, DEFAULT_HEALTH_TIMEOUT)
    }

    pub fn with_timeouts(
        base_url: impl Into<String>,
        timeout: Duration,
        health_timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!("wayfarer-match/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
            timeout,
            health_timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the remote service for university recommendations
    ///
    /// `timeout` overrides the client's default for this call only.
    pub async fn fetch_recommendations(
        &self,
        prefs: &StudentPreferences,
        timeout: Option<Duration>,
    ) -> Result<Vec<RemoteRecommendation>, RemoteUnavailable> {
        let timeout = timeout.unwrap_or(self.timeout);
        let url = format!("{}/student/recommend", self.base_url);
        let body = RemoteRecommendationRequest::from(prefs);

        tracing::debug!("Requesting recommendations from: {}", url);

        let response = self
            .client
            .post(&url)
            .timeout(timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| RemoteUnavailable::from_reqwest(e, timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteUnavailable::Status(status.as_u16()));
        }

        let payload: RemoteResponse = response
            .json()
            .await
            .map_err(|e| RemoteUnavailable::from_reqwest(e, timeout))?;

        if !payload.success {
            return Err(RemoteUnavailable::Rejected(
                payload.error.unwrap_or_else(|| "success=false".to_string()),
            ));
        }

        tracing::debug!(
            "Remote returned {} recommendations",
            payload.recommendations.len()
        );

        Ok(payload.recommendations)
    }

    /// True only when the remote answers 2xx with `status: "healthy"`
    pub async fn health_check(&self, timeout: Option<Duration>) -> bool {
        let timeout = timeout.unwrap_or(self.health_timeout);
        let url = format!("{}/student/health", self.base_url);

        let response = match self.client.get(&url).timeout(timeout).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("Remote health probe failed: {}", e);
                return false;
            }
        };

        if !response.status().is_success() {
            tracing::debug!("Remote health probe returned {}", response.status());
            return false;
        }

        match response.json::<RemoteHealth>().await {
            Ok(health) => health.status == "healthy",
            Err(e) => {
                tracing::debug!("Remote health body unreadable: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let remote = RemoteRecommender::new("http://localhost:5000/api/").unwrap();
        assert_eq!(remote.base_url(), "http://localhost:5000/api");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RemoteUnavailable::Status(503).to_string(),
            "Remote returned status 503"
        );
        assert_eq!(
            RemoteUnavailable::Timeout(Duration::from_millis(8000)).to_string(),
            "Request timed out after 8s"
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_is_unhealthy() {
        // Port 9 (discard) is closed on test machines
        let remote = RemoteRecommender::new("http://127.0.0.1:9/api").unwrap();
        assert!(!remote.health_check(Some(Duration::from_millis(500))).await);
    }
}
