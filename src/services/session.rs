use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;

use crate::models::domain::Persona;
use crate::models::requests::PreferenceForm;
use crate::models::responses::RecommendationOutcome;
use crate::services::recommendations::{RecommendError, RecommendationService};

/// What a dashboard's result area currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// Nothing submitted yet
    Idle,
    Loading,
    Ready(RecommendationOutcome),
    /// Last submission failed validation on these fields
    Invalid(Vec<String>),
}

/// How one submission ended
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitResult {
    Completed(RecommendationOutcome),
    Rejected(Vec<String>),
    /// A newer submission started before this one finished; its result was dropped
    Superseded,
}

/// Per-dashboard submission state
///
/// Each submit takes a ticket from a monotonic generation counter. Only the
/// holder of the latest ticket may publish into the view state, so a slow
/// response never overwrites a newer one.
pub struct DashboardSession {
    persona: Persona,
    service: RecommendationService,
    generation: AtomicU64,
    state: Mutex<ViewState>,
}

impl DashboardSession {
    pub fn new(persona: Persona, service: RecommendationService) -> Self {
        Self {
            persona,
            service,
            generation: AtomicU64::new(0),
            state: Mutex::new(ViewState::Idle),
        }
    }

    pub fn persona(&self) -> Persona {
        self.persona
    }

    /// Snapshot of the current view state
    pub async fn state(&self) -> ViewState {
        self.state.lock().await.clone()
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket
    }

    pub async fn submit(&self, form: &PreferenceForm) -> SubmitResult {
        // Ticket and Loading change together under the state lock
        let ticket = {
            let mut state = self.state.lock().await;
            let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *state = ViewState::Loading;
            ticket
        };

        tracing::debug!("{:?} dashboard submission #{} started", self.persona, ticket);

        let result = self.service.recommend(form).await;

        let mut state = self.state.lock().await;
        if !self.is_current(ticket) {
            tracing::debug!("{:?} dashboard submission #{} superseded", self.persona, ticket);
            return SubmitResult::Superseded;
        }

        match result {
            Ok(outcome) => {
                *state = ViewState::Ready(outcome.clone());
                SubmitResult::Completed(outcome)
            }
            Err(RecommendError::Validation(errors)) => {
                let fields = crate::models::requests::invalid_fields(&errors);
                tracing::info!("{:?} form rejected, invalid fields: {:?}", self.persona, fields);
                *state = ViewState::Invalid(fields.clone());
                SubmitResult::Rejected(fields)
            }
        }
    }

    /// Back to the idle state, dropping any in-flight result
    pub async fn reset(&self) {
        let mut state = self.state.lock().await;
        self.generation.fetch_add(1, Ordering::SeqCst);
        *state = ViewState::Idle;
    }
}
