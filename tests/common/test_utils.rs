use super::mocks::MockLlmClient;
use axum::Router;
use expert_relay::{
    Result,
    config::{Config, LlmConfig, LogsConfig, ServerConfig},
    server::{AppState, router},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        llm: create_test_llm_config("https://gateway.example.com/v1"),
    }
}

pub fn create_test_llm_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        base_url: base_url.to_string(),
        model: "test-model".to_string(),
        api_key_env: "TEST_GATEWAY_KEY".to_string(),
    }
}

/// Router wired to a mock LLM client
pub fn create_test_app(llm: Arc<MockLlmClient>) -> Router {
    router(AppState { llm })
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Gateway body for a successful completion
pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "test-model",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
    })
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9090
  logs:
    level: "debug"

llm:
  base_url: "https://gateway.example.com/v1"
  model: "test-model"
  api_key_env: "TEST_GATEWAY_KEY"
"#;

/// Only the model is overridden, everything else falls back to defaults
pub const PARTIAL_CONFIG_YAML: &str = r#"
llm:
  model: "openai/gpt-4o-mini"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: "not-a-number"
"#;
