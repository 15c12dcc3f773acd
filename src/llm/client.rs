use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse>;

    /// Fails when no request could be sent at all, e.g. a missing credential.
    fn ensure_configured(&self) -> Result<()> {
        Ok(())
    }
}

/// Body of `POST {base_url}/chat/completions`.
#[derive(Debug, Serialize)]
struct GatewayRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

/// OpenAI-compatible chat-completion gateway reached over plain HTTP.
pub struct GatewayClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
    api_key_env: String,
}

impl GatewayClient {
    /// Builds a client whose credential comes from the environment variable
    /// named in `config.api_key_env`.
    pub fn new(config: LlmConfig) -> Self {
        let api_key = config.api_key_from_env();
        Self::with_api_key(config, api_key)
    }

    pub fn with_api_key(config: LlmConfig, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model,
            api_key,
            api_key_env: config.api_key_env,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| Error::config(format!("{} is not configured", self.api_key_env)))
    }
}

#[async_trait]
impl LlmClient for GatewayClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        let api_key = self.api_key()?;

        debug!(
            "Creating chat completion with {} messages on {}",
            request.messages.len(),
            self.model
        );

        let body = GatewayRequest {
            model: &self.model,
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;

        debug!(
            "Received chat completion response with {} choices",
            completion.choices.len()
        );

        Ok(completion)
    }

    fn ensure_configured(&self) -> Result<()> {
        self.api_key().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn create_test_config() -> LlmConfig {
        LlmConfig {
            base_url: "https://gateway.example.com/v1/".to_string(),
            model: "test-model".to_string(),
            api_key_env: "TEST_GATEWAY_KEY".to_string(),
        }
    }

    #[test]
    fn test_gateway_client_trims_base_url() {
        let client = GatewayClient::with_api_key(create_test_config(), Some("k".to_string()));

        assert_eq!(client.endpoint(), "https://gateway.example.com/v1/chat/completions");
        assert_eq!(client.model(), "test-model");
        assert!(client.has_api_key());
    }

    #[test]
    fn test_gateway_request_serialization() {
        let messages = vec![ChatMessage::system("persona"), ChatMessage::user("hello")];
        let body = GatewayRequest {
            model: "test-model",
            messages: &messages,
            temperature: Some(0.7),
            max_tokens: Some(1000),
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "test-model",
                "messages": [
                    {"role": "system", "content": "persona"},
                    {"role": "user", "content": "hello"}
                ],
                "temperature": 0.7f32,
                "max_tokens": 1000
            })
        );
    }

    #[tokio::test]
    async fn test_missing_api_key_is_a_configuration_error() {
        let client = GatewayClient::with_api_key(create_test_config(), None);
        let request = ChatCompletionRequest {
            messages: vec![ChatMessage::user("hi")],
            max_tokens: None,
            temperature: None,
        };

        let err = client.create_chat_completion(request).await.unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: TEST_GATEWAY_KEY is not configured"
        );
        assert!(matches!(client.ensure_configured(), Err(Error::Config(_))));
    }

    #[test]
    fn test_configured_client_passes_check() {
        let client = GatewayClient::with_api_key(create_test_config(), Some("key".into()));
        assert!(client.ensure_configured().is_ok());
    }

    #[test]
    fn test_first_content_requires_a_choice() {
        let response: ChatCompletionResponse =
            serde_json::from_value(json!({ "choices": [] })).unwrap();
        assert!(response.first_content().is_err());

        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "id": "chatcmpl-1",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "Bonjour"}}]
        }))
        .unwrap();
        assert_eq!(response.first_content().unwrap(), "Bonjour");
    }
}
