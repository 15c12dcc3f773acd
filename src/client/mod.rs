//! Client-side holders of the expert conversations.

mod chat;
mod composition;
mod notice;
mod transport;

pub use chat::ChatSession;
pub use composition::CompositionDraft;
pub use notice::Notice;
pub use transport::{ExpertRelay, HttpRelay};
