use super::prompts::{PREDICTION_CLOSING, PREDICTION_HEADER};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Loosely structured prediction card sent with the first advice turn.
///
/// Every field is optional and kept as raw JSON so that whatever the card
/// carries (`"1.85"` or `1.85`) is interpolated as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport: Option<Value>,
    #[serde(rename = "match", default, skip_serializing_if = "Option::is_none")]
    pub match_label: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_time: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bet_type: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub odds: Option<Value>,
    /// Confidence as a percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Value>,
    /// Star rating shown on the cards, out of 5. Not the same scale as
    /// `confidence`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_stars: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matches_data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_odds: Option<Value>,
}

impl PredictionContext {
    /// Builds the first-turn analysis prompt. Absent fields produce no line.
    pub fn to_prompt(&self) -> String {
        let details = [
            line("Sport", &self.sport, ""),
            line("Match", &self.match_label, ""),
            line("Heure", &self.match_time, ""),
            line("Type de pari", &self.bet_type, ""),
            line("Pronostic", &self.prediction, ""),
            line("Cote", &self.odds, ""),
            line("Confiance", &self.confidence, "%"),
            line("Indice de confiance", &self.confidence_stars, "/5"),
            line("Analyse de l'utilisateur", &self.analysis, ""),
        ];
        let multiple = [
            line("Matches multiples", &self.matches_data, ""),
            line("Cote totale", &self.total_odds, ""),
        ];

        let mut sections = vec![PREDICTION_HEADER.to_string()];
        for group in [&details[..], &multiple[..]] {
            let lines: Vec<&str> = group.iter().flatten().map(String::as_str).collect();
            if !lines.is_empty() {
                sections.push(lines.join("\n"));
            }
        }
        sections.push(PREDICTION_CLOSING.to_string());

        sections.join("\n\n")
    }
}

fn line(label: &str, value: &Option<Value>, suffix: &str) -> Option<String> {
    render(value.as_ref()?).map(|text| format!("{label}: {text}{suffix}"))
}

/// Falsy values: `null`, `false`, zero and blank strings.
pub(crate) fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn render(value: &Value) -> Option<String> {
    match value {
        v if is_absent(v) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
