use std::sync::Mutex;
use writerai::auth::{is_authenticated, require_auth, require_guest, StoredToken, TokenStore};
use writerai::error::WriterAiError;

/// In-memory credential store; what require_auth/require_guest see is the
/// token's presence, nothing else.
struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    fn empty() -> Self {
        Self {
            token: Mutex::new(None),
        }
    }

    fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<StoredToken> {
        self.token.lock().unwrap().as_ref().map(|t| StoredToken {
            token: t.clone(),
            stored_at: chrono::Local::now(),
        })
    }

    fn save(&self, token: &str) -> Result<(), Box<dyn std::error::Error>> {
        *self.token.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), Box<dyn std::error::Error>> {
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}

#[test]
fn test_require_auth_with_token() {
    let store = MemoryTokenStore::with_token("tok-1");
    assert_eq!(require_auth(&store).unwrap(), "tok-1");
}

#[test]
fn test_require_auth_without_token() {
    let store = MemoryTokenStore::empty();
    assert!(matches!(require_auth(&store), Err(WriterAiError::Auth(_))));
}

#[test]
fn test_require_guest_without_token() {
    let store = MemoryTokenStore::empty();
    assert!(require_guest(&store).is_ok());
}

#[test]
fn test_require_guest_with_token() {
    let store = MemoryTokenStore::with_token("tok-1");
    assert!(matches!(require_guest(&store), Err(WriterAiError::Auth(_))));
}

#[test]
fn test_guards_reevaluate_on_every_call() {
    let store = MemoryTokenStore::empty();
    assert!(!is_authenticated(&store));

    store.save("tok-2").unwrap();
    assert!(is_authenticated(&store));
    assert_eq!(require_auth(&store).unwrap(), "tok-2");

    store.clear().unwrap();
    assert!(!is_authenticated(&store));
    assert!(require_auth(&store).is_err());
}
