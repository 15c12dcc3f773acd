use super::{notice::Notice, transport::ExpertRelay};
use crate::{
    llm::ChatMessage,
    relay::{AdviceRequest, PredictionContext, prompts::OPENING_TURN},
};
use std::sync::Arc;
use tracing::warn;

/// Chat panel state: the running conversation about one prediction.
///
/// Nothing outlives the session. Every turn resends the whole history.
pub struct ChatSession {
    relay: Arc<dyn ExpertRelay>,
    prediction: PredictionContext,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new(relay: Arc<dyn ExpertRelay>, prediction: PredictionContext) -> Self {
        Self {
            relay,
            prediction,
            messages: Vec::new(),
        }
    }

    /// Messages in arrival order, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn latest(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Loads the initial analysis. Does nothing once the conversation has
    /// started.
    pub async fn open(&mut self) -> Result<(), Notice> {
        if !self.messages.is_empty() {
            return Ok(());
        }

        let request = AdviceRequest {
            messages: vec![ChatMessage::user(OPENING_TURN)],
            prediction_data: Some(self.prediction.clone()),
        };

        match self.relay.advice(&request).await {
            Ok(advice) => {
                self.messages = vec![ChatMessage::assistant(advice)];
                Ok(())
            }
            Err(e) => {
                warn!("Error loading initial advice: {}", e);
                Err(Notice::InitialAdviceUnavailable)
            }
        }
    }

    /// Appends a user turn and the expert's reply. Blank input is ignored.
    ///
    /// On failure the user turn stays in the conversation.
    pub async fn send(&mut self, input: &str) -> Result<Option<&ChatMessage>, Notice> {
        if input.trim().is_empty() {
            return Ok(None);
        }

        self.messages.push(ChatMessage::user(input));
        let request = AdviceRequest {
            messages: self.messages.clone(),
            prediction_data: None,
        };

        match self.relay.advice(&request).await {
            Ok(advice) => {
                self.messages.push(ChatMessage::assistant(advice));
                Ok(self.messages.last())
            }
            Err(e) => {
                warn!("Error sending message: {}", e);
                Err(Notice::MessageNotSent)
            }
        }
    }
}
