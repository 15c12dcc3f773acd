use super::{prediction::PredictionContext, prompts::ADVICE_PERSONA, types::AdviceRequest};
use crate::{
    Result,
    llm::{ChatCompletionRequest, ChatMessage, LlmClient},
};
use tracing::debug;

pub const ADVICE_TEMPERATURE: f32 = 0.7;
pub const ADVICE_MAX_TOKENS: u32 = 1000;

/// Which conversation shape an advice request carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AdviceTurn<'a> {
    /// Single opening message with a prediction: the prompt is synthesized
    /// from the prediction and the message itself is dropped.
    Opening(&'a PredictionContext),
    /// Everything else: the history goes upstream untouched.
    Continuation(&'a [ChatMessage]),
}

impl<'a> AdviceTurn<'a> {
    pub fn classify(request: &'a AdviceRequest) -> Self {
        match (&request.prediction_data, request.messages.len()) {
            (Some(context), 1) => Self::Opening(context),
            _ => Self::Continuation(&request.messages),
        }
    }

    fn conversation(self) -> Vec<ChatMessage> {
        match self {
            Self::Opening(context) => vec![ChatMessage::user(context.to_prompt())],
            Self::Continuation(messages) => messages.to_vec(),
        }
    }
}

pub fn build_advice_request(request: &AdviceRequest) -> ChatCompletionRequest {
    let mut messages = vec![ChatMessage::system(ADVICE_PERSONA)];
    messages.extend(AdviceTurn::classify(request).conversation());

    ChatCompletionRequest {
        messages,
        max_tokens: Some(ADVICE_MAX_TOKENS),
        temperature: Some(ADVICE_TEMPERATURE),
    }
}

/// Runs one advice turn against the model and returns its text.
pub async fn advise(llm: &dyn LlmClient, request: &AdviceRequest) -> Result<String> {
    let completion_request = build_advice_request(request);
    debug!(
        "Advice turn with {} upstream messages",
        completion_request.messages.len()
    );

    let response = llm.create_chat_completion(completion_request).await?;
    Ok(response.first_content()?.to_string())
}
