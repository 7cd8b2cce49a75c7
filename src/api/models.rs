use crate::models::{ChatMessage, ChatTranscript};
use serde::{Deserialize, Serialize};

// ---- chat persistence API ----

#[derive(Serialize)]
pub struct SaveChatRequest<'a> {
    pub messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
pub struct ChatListResponse {
    #[serde(default)]
    pub chats: Vec<ChatTranscript>,
}

#[derive(Deserialize)]
pub struct ChatFetchResponse {
    pub chat: ChatTranscript,
}

#[derive(Deserialize)]
pub struct ChatCreateResponse {
    pub chat: CreatedChat,
}

#[derive(Deserialize)]
pub struct CreatedChat {
    #[serde(rename = "_id")]
    pub id: String,
}

// ---- completion API ----

#[derive(Serialize)]
pub struct CompletionRequest {
    pub contents: Vec<Content>,
}

#[derive(Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Serialize)]
pub struct Part {
    pub text: String,
}

impl CompletionRequest {
    /// One stateless prompt per request; no conversation history is sent.
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}
