use super::{
    prompts::{COMPOSITION_HEADER, COMPOSITION_INSTRUCTIONS, COMPOSITION_PERSONA},
    types::MatchDescription,
};
use crate::{
    Error, Result,
    llm::{ChatCompletionRequest, ChatMessage, LlmClient},
};
use tracing::debug;

pub const COMPOSITION_TEMPERATURE: f32 = 0.7;
pub const COMPOSITION_MAX_TOKENS: u32 = 2000;

/// `Match 1: …`, `Match 2: …`, separated by a blank line, in input order.
pub fn numbered_matches(matches: &[MatchDescription]) -> String {
    matches
        .iter()
        .enumerate()
        .map(|(index, m)| format!("Match {}: {}", index + 1, m.description))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn build_composition_request(matches: &[MatchDescription]) -> Result<ChatCompletionRequest> {
    if matches.is_empty() {
        return Err(Error::invalid_request("no match provided"));
    }

    let prompt = format!(
        "{COMPOSITION_HEADER}\n\n{}\n\n{COMPOSITION_INSTRUCTIONS}",
        numbered_matches(matches)
    );

    Ok(ChatCompletionRequest {
        messages: vec![
            ChatMessage::system(COMPOSITION_PERSONA),
            ChatMessage::user(prompt),
        ],
        max_tokens: Some(COMPOSITION_MAX_TOKENS),
        temperature: Some(COMPOSITION_TEMPERATURE),
    })
}

/// Analyses a multi-match composition in a single model call.
pub async fn compose(llm: &dyn LlmClient, matches: &[MatchDescription]) -> Result<String> {
    let completion_request = build_composition_request(matches)?;
    debug!("Composition analysis for {} matches", matches.len());

    let response = llm.create_chat_completion(completion_request).await?;
    Ok(response.first_content()?.to_string())
}
