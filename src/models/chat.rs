use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// A persisted conversation as returned by the chat API. The id is assigned
/// by the remote store on first save; the client only ever appends messages.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ChatTranscript {
    #[serde(rename = "_id")]
    pub id: String,
    pub messages: Vec<ChatMessage>,
}

/// Dashboard listing entry, derived from the first message of a chat.
#[derive(Clone, Debug)]
pub struct ChatSummary {
    pub id: String,
    pub preview: String,
}

pub const PREVIEW_MAX_CHARS: usize = 80;

impl ChatSummary {
    pub fn from_transcript(transcript: &ChatTranscript) -> Self {
        let preview = transcript
            .messages
            .first()
            .map(|m| truncate_preview(&m.content))
            .unwrap_or_else(|| "No messages".to_string());
        Self {
            id: transcript.id.clone(),
            preview,
        }
    }
}

fn truncate_preview(content: &str) -> String {
    // First line only; long lines get an ellipsis on a char boundary.
    let first_line = content.lines().next().unwrap_or("");
    if first_line.chars().count() <= PREVIEW_MAX_CHARS {
        first_line.to_string()
    } else {
        let truncated: String = first_line.chars().take(PREVIEW_MAX_CHARS).collect();
        format!("{}...", truncated.trim_end())
    }
}
