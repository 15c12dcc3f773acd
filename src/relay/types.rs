use super::prediction::{PredictionContext, is_absent};
use crate::llm::ChatMessage;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    #[serde(default, deserialize_with = "lenient_prediction")]
    pub prediction_data: Option<PredictionContext>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompositionRequest {
    #[serde(default)]
    pub matches: Option<Vec<MatchDescription>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchDescription {
    /// Client-local identifier, never interpreted by the relay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
}

impl MatchDescription {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: None,
            description: description.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.description.trim().is_empty()
    }
}

/// Any present, non-falsy `predictionData` counts as a prediction. Payloads
/// that are not objects carry no fields.
fn lenient_prediction<'de, D>(deserializer: D) -> Result<Option<PredictionContext>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        value if is_absent(&value) => Ok(None),
        value @ Value::Object(_) => serde_json::from_value(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(Some(PredictionContext::default())),
    }
}

/// Strings pass through, `null` becomes empty, anything else its JSON text.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Body of every relay response: advice or an error, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdviceResult {
    Advice { advice: String },
    Error { error: String },
}
