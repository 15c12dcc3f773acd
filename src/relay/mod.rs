//! The two expert relays: prompt construction, the single upstream call and
//! the mapping of failures onto relay responses.

mod advice;
mod composition;
mod failure;
mod prediction;
pub mod prompts;
mod types;

pub use advice::{ADVICE_MAX_TOKENS, ADVICE_TEMPERATURE, AdviceTurn, advise, build_advice_request};
pub use composition::{
    COMPOSITION_MAX_TOKENS, COMPOSITION_TEMPERATURE, build_composition_request, compose,
    numbered_matches,
};
pub use failure::*;
pub use prediction::PredictionContext;
pub use types::*;
