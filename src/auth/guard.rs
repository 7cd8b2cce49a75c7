use super::token::TokenStore;
use crate::error::{Result, WriterAiError};

/// Credential presence is the only session state the client tracks.
pub fn is_authenticated(store: &dyn TokenStore) -> bool {
    store.load().is_some()
}

/// Gate for protected commands. Re-reads the store on every call; nothing
/// is cached between invocations.
pub fn require_auth(store: &dyn TokenStore) -> Result<String> {
    match store.load() {
        Some(stored) => Ok(stored.token),
        None => Err(WriterAiError::Auth(
            "Please login first (writerai login)".to_string(),
        )),
    }
}

/// Gate for guest-only commands such as login and register.
pub fn require_guest(store: &dyn TokenStore) -> Result<()> {
    if is_authenticated(store) {
        Err(WriterAiError::Auth(
            "Already logged in; see your chats with `writerai dashboard`".to_string(),
        ))
    } else {
        Ok(())
    }
}
