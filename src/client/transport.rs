use crate::{
    Error, Result,
    relay::{AdviceRequest, AdviceResult, CompositionRequest, MatchDescription},
    server::{ADVICE_PATH, COMPOSITION_PATH},
};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

/// Calls the two expert relays on behalf of the client-side screens.
#[async_trait]
pub trait ExpertRelay: Send + Sync {
    async fn advice(&self, request: &AdviceRequest) -> Result<String>;

    async fn composition(&self, matches: &[MatchDescription]) -> Result<String>;
}

/// Reaches a deployed relay over HTTP.
pub struct HttpRelay {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpRelay {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: None,
        }
    }

    /// Sends `key` both as bearer token and `apikey` header.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    async fn invoke<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<String> {
        let mut request = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key).header("apikey", key);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!("Relay {} answered {}", path, status);

        match serde_json::from_str::<AdviceResult>(&text) {
            Ok(AdviceResult::Advice { advice }) if status.is_success() => Ok(advice),
            Ok(AdviceResult::Error { error }) => Err(Error::Relay {
                status: status.as_u16(),
                message: error,
            }),
            _ => Err(Error::Relay {
                status: status.as_u16(),
                message: text,
            }),
        }
    }
}

#[async_trait]
impl ExpertRelay for HttpRelay {
    async fn advice(&self, request: &AdviceRequest) -> Result<String> {
        self.invoke(ADVICE_PATH, request).await
    }

    async fn composition(&self, matches: &[MatchDescription]) -> Result<String> {
        let body = CompositionRequest {
            matches: Some(matches.to_vec()),
        };
        self.invoke(COMPOSITION_PATH, &body).await
    }
}
