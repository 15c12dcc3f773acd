use super::{notice::Notice, transport::ExpertRelay};
use crate::relay::MatchDescription;
use tracing::warn;
use uuid::Uuid;

/// Composition form state: editable match entries and the last analysis.
#[derive(Debug, Clone)]
pub struct CompositionDraft {
    entries: Vec<MatchDescription>,
    analysis: Option<String>,
}

impl Default for CompositionDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl CompositionDraft {
    /// Starts with a single blank entry.
    pub fn new() -> Self {
        Self {
            entries: vec![blank_entry()],
            analysis: None,
        }
    }

    pub fn entries(&self) -> &[MatchDescription] {
        &self.entries
    }

    pub fn analysis(&self) -> Option<&str> {
        self.analysis.as_deref()
    }

    /// Appends a blank entry and returns its id.
    pub fn add(&mut self) -> String {
        let entry = blank_entry();
        let id = entry.id.clone().unwrap_or_default();
        self.entries.push(entry);
        id
    }

    /// Removes an entry. The last remaining entry is never removed.
    pub fn remove(&mut self, id: &str) -> bool {
        if self.entries.len() <= 1 {
            return false;
        }
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id.as_deref() != Some(id));
        self.entries.len() != before
    }

    pub fn update(&mut self, id: &str, description: impl Into<String>) -> bool {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.id.as_deref() == Some(id))
        {
            Some(entry) => {
                entry.description = description.into();
                true
            }
            None => false,
        }
    }

    /// Entries with a non-blank description, in form order.
    pub fn filled(&self) -> Vec<MatchDescription> {
        self.entries
            .iter()
            .filter(|entry| !entry.is_blank())
            .cloned()
            .collect()
    }

    /// Sends the filled entries once and keeps the returned analysis.
    pub async fn submit(&mut self, relay: &dyn ExpertRelay) -> Result<&str, Notice> {
        let filled = self.filled();
        if filled.is_empty() {
            return Err(Notice::NoMatchEntered);
        }

        self.analysis = None;
        match relay.composition(&filled).await {
            Ok(advice) => Ok(self.analysis.insert(advice).as_str()),
            Err(e) => {
                warn!("Error getting expert advice: {}", e);
                Err(Notice::classify(&e, Notice::AnalysisFailed))
            }
        }
    }
}

fn blank_entry() -> MatchDescription {
    MatchDescription {
        id: Some(Uuid::new_v4().to_string()),
        description: String::new(),
    }
}
