use crate::api::models::{ChatCreateResponse, ChatFetchResponse, ChatListResponse, SaveChatRequest};
use crate::error::{Result, WriterAiError};
use crate::models::{ChatMessage, ChatSummary, ChatTranscript};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

/// Client for the chat-persistence API. Every call carries the bearer token;
/// failures surface the HTTP status and are never retried.
pub struct ChatApi {
    base_url: String,
    client: reqwest::Client,
}

impl ChatApi {
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
                WriterAiError::Other(format!("Invalid authorization header: {}", e))
            })?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// GET /api/chat/list, reduced to dashboard previews.
    pub async fn list(&self) -> Result<Vec<ChatSummary>> {
        let response = self
            .client
            .get(format!("{}/api/chat/list", self.base_url))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WriterAiError::ExternalService {
                status: status.as_u16(),
                message: "Failed to fetch chat list".to_string(),
            });
        }

        let body: ChatListResponse = response.json().await?;
        Ok(body.chats.iter().map(ChatSummary::from_transcript).collect())
    }

    /// GET /api/chat/:id
    pub async fn fetch(&self, id: &str) -> Result<ChatTranscript> {
        let response = self
            .client
            .get(format!("{}/api/chat/{}", self.base_url, id))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WriterAiError::ExternalService {
                status: status.as_u16(),
                message: format!("Failed to fetch chat {}", id),
            });
        }

        let body: ChatFetchResponse = response.json().await?;
        Ok(body.chat)
    }

    /// POST /api/chat/save, the first save of a transcript; the remote store
    /// assigns and returns the id.
    pub async fn create(&self, messages: &[ChatMessage]) -> Result<String> {
        let response = self
            .client
            .post(format!("{}/api/chat/save", self.base_url))
            .json(&SaveChatRequest { messages })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WriterAiError::ExternalService {
                status: status.as_u16(),
                message: "Failed to save chat".to_string(),
            });
        }

        let body: ChatCreateResponse = response.json().await?;
        Ok(body.chat.id)
    }

    /// PUT /api/chat/update/:id with replace-all semantics, never a delta.
    pub async fn update(&self, id: &str, messages: &[ChatMessage]) -> Result<()> {
        let response = self
            .client
            .put(format!("{}/api/chat/update/{}", self.base_url, id))
            .json(&SaveChatRequest { messages })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WriterAiError::ExternalService {
                status: status.as_u16(),
                message: format!("Failed to save chat {}", id),
            });
        }

        Ok(())
    }
}
