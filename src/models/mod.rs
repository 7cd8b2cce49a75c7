mod chat;

pub use chat::{ChatMessage, ChatSummary, ChatTranscript, Role};
