use serde::{Deserialize, Serialize};

use crate::models::domain::{choice_text, Persona, StudentPreferences};
use crate::models::views::ResultCard;

/// Shown above local results when the remote service could not answer
pub const FALLBACK_ADVISORY: &str = "Backend temporarily unavailable. Showing sample recommendations.";

/// Empty-state text for a persona's result grid
pub fn no_matches_message(persona: Persona) -> String {
    format!(
        "No {} match your current criteria. Try adjusting your preferences.",
        persona.candidate_noun()
    )
}

/// Where a set of results came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultSource {
    Remote,
    Local,
    /// Local results served because the remote call failed
    Fallback,
}

/// Final result of one dashboard submission
#[derive(Debug, Clone, PartialEq)]
pub enum RecommendationOutcome {
    Matches {
        source: ResultSource,
        advisory: Option<String>,
        cards: Vec<ResultCard>,
    },
    NoMatches {
        source: ResultSource,
        advisory: Option<String>,
        message: String,
    },
}

impl RecommendationOutcome {
    /// Wrap ranked cards, turning an empty list into the empty-state marker
    pub fn from_cards(
        persona: Persona,
        source: ResultSource,
        advisory: Option<String>,
        cards: Vec<ResultCard>,
    ) -> Self {
        if cards.is_empty() {
            RecommendationOutcome::NoMatches {
                source,
                advisory,
                message: no_matches_message(persona),
            }
        } else {
            RecommendationOutcome::Matches {
                source,
                advisory,
                cards,
            }
        }
    }

    pub fn source(&self) -> ResultSource {
        match self {
            RecommendationOutcome::Matches { source, .. } => *source,
            RecommendationOutcome::NoMatches { source, .. } => *source,
        }
    }

    pub fn advisory(&self) -> Option<&str> {
        match self {
            RecommendationOutcome::Matches { advisory, .. } => advisory.as_deref(),
            RecommendationOutcome::NoMatches { advisory, .. } => advisory.as_deref(),
        }
    }

    pub fn cards(&self) -> &[ResultCard] {
        match self {
            RecommendationOutcome::Matches { cards, .. } => cards,
            RecommendationOutcome::NoMatches { .. } => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RecommendationOutcome::NoMatches { .. })
    }

    pub fn count(&self) -> usize {
        self.cards().len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    Matches,
    NoMatches,
}

/// Response for the recommend endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub success: bool,
    pub request_id: String,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub status: OutcomeStatus,
    pub source: ResultSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advisory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cards: Option<Vec<ResultCard>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub count: usize,
}

impl RecommendationResponse {
    pub fn new(request_id: String, outcome: RecommendationOutcome) -> Self {
        let generated_at = chrono::Utc::now();
        match outcome {
            RecommendationOutcome::Matches {
                source,
                advisory,
                cards,
            } => Self {
                success: true,
                request_id,
                generated_at,
                status: OutcomeStatus::Matches,
                source,
                advisory,
                count: cards.len(),
                cards: Some(cards),
                message: None,
            },
            RecommendationOutcome::NoMatches {
                source,
                advisory,
                message,
            } => Self {
                success: true,
                request_id,
                generated_at,
                status: OutcomeStatus::NoMatches,
                source,
                advisory,
                cards: None,
                message: Some(message),
                count: 0,
            },
        }
    }
}

/// Reachability of the remote recommender as seen by this service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteStatus {
    Available,
    Unavailable,
    Disabled,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub remote: RemoteStatus,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
    /// Form fields that failed validation
    #[serde(default)]
    pub fields: Vec<String>,
}

/// Body posted to the remote recommender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteRecommendationRequest {
    pub degree_level: String,
    pub field_of_study: String,
    pub gpa: f32,
    pub budget: String,
    pub program_type: String,
    pub destination_preference: String,
    pub climate_preference: String,
    pub scholarship_interest: bool,
    pub work_importance: String,
    pub visa_importance: String,
    pub language_proficiency: String,
}

impl From<&StudentPreferences> for RemoteRecommendationRequest {
    fn from(prefs: &StudentPreferences) -> Self {
        Self {
            degree_level: prefs.degree_level.clone(),
            field_of_study: prefs.field_of_study.clone(),
            gpa: prefs.gpa,
            budget: choice_text(&prefs.budget),
            program_type: prefs.program_type.clone(),
            destination_preference: prefs
                .destination
                .map_or_else(|| "any".to_string(), |region| choice_text(&region)),
            climate_preference: prefs
                .climate
                .map_or_else(|| "any".to_string(), |climate| choice_text(&climate)),
            scholarship_interest: prefs.scholarship_interest,
            work_importance: choice_text(&prefs.work_importance),
            visa_importance: choice_text(&prefs.visa_importance),
            language_proficiency: choice_text(&prefs.language_proficiency),
        }
    }
}

/// One university as scored by the remote recommender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteRecommendation {
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub ranking: u32,
    #[serde(default)]
    pub programs: Vec<String>,
    #[serde(default)]
    pub tuition_fee: f64,
    pub match_score: f32,
    #[serde(default)]
    pub acceptance_rate: f32,
    #[serde(default)]
    pub scholarship_availability: String,
    #[serde(default)]
    pub climate: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Envelope returned by the remote recommend endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub recommendations: Vec<RemoteRecommendation>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of the remote health endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteHealth {
    pub status: String,
}
