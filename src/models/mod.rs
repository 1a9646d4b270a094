// Model exports
pub mod domain;
pub mod requests;
pub mod responses;
pub mod views;

pub use domain::{
    Candidate, Country, Destination, Persona, PreferenceRecord, ProfessionalPreferences,
    StudentPreferences, TouristPreferences, University,
};
pub use requests::{PreferenceForm, ProfessionalForm, StudentForm, TouristForm};
pub use responses::{
    ErrorResponse, HealthResponse, RecommendationOutcome, RecommendationResponse,
    RemoteRecommendation, RemoteRecommendationRequest, RemoteStatus, ResultSource,
    FALLBACK_ADVISORY,
};
pub use views::ResultCard;
