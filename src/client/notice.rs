use crate::Error;

/// Transient toast shown when a relay call cannot be completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    NoMatchEntered,
    RateLimited,
    InsufficientCredits,
    AnalysisFailed,
    InitialAdviceUnavailable,
    MessageNotSent,
}

impl Notice {
    pub fn text(&self) -> &'static str {
        match self {
            Self::NoMatchEntered => "Veuillez entrer au moins un match",
            Self::RateLimited => "Limite de requêtes atteinte, réessayez plus tard.",
            Self::InsufficientCredits => "Crédits insuffisants pour l'IA.",
            Self::AnalysisFailed => "Erreur lors de l'analyse",
            Self::InitialAdviceUnavailable => "Impossible de charger l'avis d'expert",
            Self::MessageNotSent => "Impossible d'envoyer le message",
        }
    }

    /// Rate-limit and credit errors get their own toast, anything else
    /// falls back to the screen's generic one.
    pub fn classify(err: &Error, fallback: Notice) -> Notice {
        let (status, text) = match err {
            Error::Relay { status, message } => (Some(*status), message.to_lowercase()),
            other => (None, other.to_string().to_lowercase()),
        };

        if status == Some(429) || text.contains("rate limit") {
            Self::RateLimited
        } else if status == Some(402) || text.contains("payment required") {
            Self::InsufficientCredits
        } else {
            fallback
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}
