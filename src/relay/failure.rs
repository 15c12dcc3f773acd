use crate::Error;
use axum::http::StatusCode;
use tracing::error;

pub const RATE_LIMITED_MESSAGE: &str = "Limite de requêtes atteinte, réessayez plus tard.";
pub const INSUFFICIENT_CREDITS_MESSAGE: &str = "Crédits insuffisants pour l'IA.";
pub const ANALYSIS_FAILED_MESSAGE: &str = "Erreur lors de l'analyse";
pub const NO_MATCH_MESSAGE: &str = "Aucun match fourni";

/// Terminal outcome of a relay call that did not produce advice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayFailure {
    /// Upstream answered 429.
    RateLimited,
    /// Upstream answered 402.
    InsufficientCredits,
    /// Upstream answered any other non-success status.
    UpstreamFailed,
    /// Composition request without a single match.
    NoMatches,
    /// Anything else, carrying the raw error text.
    Unexpected(String),
}

impl RelayFailure {
    pub fn from_upstream_status(status: u16) -> Self {
        match status {
            429 => Self::RateLimited,
            402 => Self::InsufficientCredits,
            _ => Self::UpstreamFailed,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::InsufficientCredits => StatusCode::PAYMENT_REQUIRED,
            Self::NoMatches => StatusCode::BAD_REQUEST,
            Self::UpstreamFailed | Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::RateLimited => RATE_LIMITED_MESSAGE,
            Self::InsufficientCredits => INSUFFICIENT_CREDITS_MESSAGE,
            Self::UpstreamFailed => ANALYSIS_FAILED_MESSAGE,
            Self::NoMatches => NO_MATCH_MESSAGE,
            Self::Unexpected(message) => message,
        }
    }
}

impl From<Error> for RelayFailure {
    fn from(err: Error) -> Self {
        match err {
            Error::Upstream { status, body } => {
                let failure = Self::from_upstream_status(status);
                if failure == Self::UpstreamFailed {
                    error!(status, body = %body, "AI gateway error");
                }
                failure
            }
            Error::Config(message) => Self::Unexpected(message),
            other => Self::Unexpected(other.to_string()),
        }
    }
}
