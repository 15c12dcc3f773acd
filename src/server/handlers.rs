use super::types::advice_response;
use crate::{
    llm::LlmClient,
    relay::{self, AdviceRequest, AdviceResult, CompositionRequest, RelayFailure},
};
use axum::{
    extract::{State, rejection::JsonRejection},
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn LlmClient>,
}

pub async fn expert_advice(
    State(state): State<AppState>,
    payload: Result<Json<AdviceRequest>, JsonRejection>,
) -> Result<Json<AdviceResult>, RelayFailure> {
    let Json(request) = payload.map_err(|rejection| unreadable_body("expert-advice", rejection))?;

    info!(
        "Received advice request with {} messages (prediction: {})",
        request.messages.len(),
        request.prediction_data.is_some()
    );

    state
        .llm
        .ensure_configured()
        .map_err(|e| failure("expert-advice", e))?;

    relay::advise(state.llm.as_ref(), &request)
        .await
        .map(advice_response)
        .map_err(|e| failure("expert-advice", e))
}

pub async fn expert_composition(
    State(state): State<AppState>,
    payload: Result<Json<CompositionRequest>, JsonRejection>,
) -> Result<Json<AdviceResult>, RelayFailure> {
    let Json(request) =
        payload.map_err(|rejection| unreadable_body("expert-composition", rejection))?;

    // A missing credential wins over an empty selection.
    state
        .llm
        .ensure_configured()
        .map_err(|e| failure("expert-composition", e))?;

    let matches = match request.matches {
        Some(matches) if !matches.is_empty() => matches,
        _ => return Err(RelayFailure::NoMatches),
    };

    info!("Received composition request with {} matches", matches.len());

    relay::compose(state.llm.as_ref(), &matches)
        .await
        .map(advice_response)
        .map_err(|e| failure("expert-composition", e))
}

fn unreadable_body(relay: &str, rejection: JsonRejection) -> RelayFailure {
    let message = rejection.body_text();
    error!("Error in {} relay: {}", relay, message);
    RelayFailure::Unexpected(message)
}

fn failure(relay: &str, err: crate::Error) -> RelayFailure {
    let failure = RelayFailure::from(err);
    if let RelayFailure::Unexpected(message) = &failure {
        error!("Error in {} relay: {}", relay, message);
    }
    failure
}
