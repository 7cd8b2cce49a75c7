//! Working copy of a transcript plus its sync state against the remote
//! store.
//!
//! Saves are explicit and serialized: `sync` takes the transcript by
//! mutable borrow and awaits the store call to completion, so a second
//! save for the same transcript cannot be issued while one is in flight
//! and updates can never land out of order.

use crate::api::ChatApi;
use crate::error::Result;
use crate::models::{ChatMessage, ChatTranscript};

/// What the next `sync` call will do, derived from local state only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncAction {
    /// Nothing new since the last successful save.
    Skip,
    /// No remote id yet; first save assigns one.
    Create,
    /// Remote transcript exists; replace its full message sequence.
    Update,
}

pub struct TranscriptSync {
    id: Option<String>,
    messages: Vec<ChatMessage>,
    synced_len: usize,
}

impl TranscriptSync {
    /// Fresh, unpersisted transcript (scripting and brainstorming start
    /// here).
    pub fn new() -> Self {
        Self {
            id: None,
            messages: Vec::new(),
            synced_len: 0,
        }
    }

    /// Working copy of a transcript fetched from the remote store.
    pub fn from_remote(transcript: ChatTranscript) -> Self {
        let synced_len = transcript.messages.len();
        Self {
            id: Some(transcript.id),
            messages: transcript.messages,
            synced_len,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::assistant(content));
    }

    /// A transcript is only created remotely once the first assistant
    /// reply exists; a lone user message is never worth persisting.
    pub fn plan(&self) -> SyncAction {
        if self.messages.len() == self.synced_len {
            return SyncAction::Skip;
        }
        match self.id {
            Some(_) => SyncAction::Update,
            None => {
                if self
                    .messages
                    .iter()
                    .any(|m| m.role == crate::models::Role::Assistant)
                {
                    SyncAction::Create
                } else {
                    SyncAction::Skip
                }
            }
        }
    }

    /// Push the working copy to the remote store. Sends the full current
    /// message sequence, never a delta. On failure local state is left
    /// untouched and the unsaved messages are retried by the next call.
    /// Returns the transcript id when one was just assigned.
    pub async fn sync(&mut self, api: &ChatApi) -> Result<Option<String>> {
        match self.plan() {
            SyncAction::Skip => Ok(None),
            SyncAction::Create => {
                let id = api.create(&self.messages).await?;
                self.synced_len = self.messages.len();
                self.id = Some(id.clone());
                Ok(Some(id))
            }
            SyncAction::Update => {
                // plan() only returns Update when an id exists
                let id = self.id.as_deref().unwrap_or_default();
                api.update(id, &self.messages).await?;
                self.synced_len = self.messages.len();
                Ok(None)
            }
        }
    }
}

impl Default for TranscriptSync {
    fn default() -> Self {
        Self::new()
    }
}
