use async_trait::async_trait;
use expert_relay::{
    Error, Result,
    client::ExpertRelay,
    llm::{ChatCompletionRequest, ChatCompletionResponse, LlmClient},
    relay::{AdviceRequest, MatchDescription},
};
use std::sync::Mutex;

/// What a mock answers on its next call.
#[derive(Debug, Clone)]
pub enum MockReply {
    Content(String),
    Upstream(u16, String),
    Failure(String),
}

impl MockReply {
    fn into_error(self) -> Option<Error> {
        match self {
            Self::Content(_) => None,
            Self::Upstream(status, body) => Some(Error::Upstream { status, body }),
            Self::Failure(message) => Some(Error::internal(message)),
        }
    }
}

/// Mock LLM client for testing
#[derive(Debug, Default)]
pub struct MockLlmClient {
    pub replies: Mutex<Vec<MockReply>>,
    pub requests: Mutex<Vec<ChatCompletionRequest>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_replies(self, replies: Vec<MockReply>) -> Self {
        *self.replies.lock().unwrap() = replies;
        self
    }

    pub fn answering(content: &str) -> Self {
        Self::new().with_replies(vec![MockReply::Content(content.to_string())])
    }

    pub fn get_requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.requests.lock().unwrap().push(request);

        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Err(Error::llm("No more mock responses available"));
        }

        let reply = replies.remove(0);
        match reply {
            MockReply::Content(content) => Ok(create_mock_chat_response(&content)),
            other => Err(other.into_error().unwrap()),
        }
    }
}

/// Mock relay standing in for the deployed endpoints.
#[derive(Debug, Default)]
pub struct MockRelay {
    pub replies: Mutex<Vec<MockReply>>,
    pub advice_requests: Mutex<Vec<AdviceRequest>>,
    pub compositions: Mutex<Vec<Vec<MatchDescription>>>,
}

impl MockRelay {
    pub fn with_replies(replies: Vec<MockReply>) -> Self {
        Self {
            replies: Mutex::new(replies),
            ..Default::default()
        }
    }

    pub fn advice_requests(&self) -> Vec<AdviceRequest> {
        self.advice_requests.lock().unwrap().clone()
    }

    pub fn compositions(&self) -> Vec<Vec<MatchDescription>> {
        self.compositions.lock().unwrap().clone()
    }

    fn next(&self) -> Result<String> {
        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Err(Error::internal("No more mock replies available"));
        }
        match replies.remove(0) {
            MockReply::Content(content) => Ok(content),
            MockReply::Upstream(status, message) => Err(Error::Relay { status, message }),
            MockReply::Failure(message) => Err(Error::internal(message)),
        }
    }
}

#[async_trait]
impl ExpertRelay for MockRelay {
    async fn advice(&self, request: &AdviceRequest) -> Result<String> {
        self.advice_requests.lock().unwrap().push(request.clone());
        self.next()
    }

    async fn composition(&self, matches: &[MatchDescription]) -> Result<String> {
        self.compositions.lock().unwrap().push(matches.to_vec());
        self.next()
    }
}

// Helper functions for creating test data

pub fn create_mock_chat_response(content: &str) -> ChatCompletionResponse {
    serde_json::from_value(serde_json::json!({
        "id": "test-id",
        "model": "test-model",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    }))
    .unwrap()
}
