use chrono::{Duration, Local};
use std::fs;
use std::sync::{Mutex, MutexGuard, OnceLock};
use tempfile::TempDir;
use writerai::auth::{FilesystemTokenStore, StoredToken, TokenStore, TOKEN_EXPIRY_DAYS};

// Tests rewrite HOME, so they must not interleave.
fn env_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn with_temp_home() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    std::env::set_var("HOME", temp_dir.path().to_str().unwrap());
    temp_dir
}

fn write_stored_token(home: &TempDir, token: &str, age_days: i64) {
    let cache_dir = home.path().join(".cache").join("writerai");
    fs::create_dir_all(&cache_dir).unwrap();
    let stored = StoredToken {
        token: token.to_string(),
        stored_at: Local::now() - Duration::days(age_days),
    };
    fs::write(
        cache_dir.join("token.json"),
        serde_json::to_string(&stored).unwrap(),
    )
    .unwrap();
}

#[test]
fn test_save_and_load_token() {
    let _guard = env_lock();
    let _home = with_temp_home();

    let store = FilesystemTokenStore::new();
    store.save("tok-abc123").unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.token, "tok-abc123");
}

#[test]
fn test_load_without_saved_token() {
    let _guard = env_lock();
    let _home = with_temp_home();

    let store = FilesystemTokenStore::new();
    assert!(store.load().is_none());
}

#[test]
fn test_expired_token_is_not_loaded() {
    let _guard = env_lock();
    let home = with_temp_home();
    write_stored_token(&home, "stale", TOKEN_EXPIRY_DAYS + 1);

    let store = FilesystemTokenStore::new();
    assert!(store.load().is_none());
}

#[test]
fn test_token_within_expiry_is_loaded() {
    let _guard = env_lock();
    let home = with_temp_home();
    write_stored_token(&home, "fresh", TOKEN_EXPIRY_DAYS - 1);

    let store = FilesystemTokenStore::new();
    let loaded = store.load().unwrap();
    assert_eq!(loaded.token, "fresh");
}

#[test]
fn test_clear_removes_token() {
    let _guard = env_lock();
    let _home = with_temp_home();

    let store = FilesystemTokenStore::new();
    store.save("tok-abc123").unwrap();
    store.clear().unwrap();

    assert!(store.load().is_none());
}

#[test]
fn test_clear_is_idempotent() {
    let _guard = env_lock();
    let _home = with_temp_home();

    let store = FilesystemTokenStore::new();
    store.clear().unwrap();
    store.clear().unwrap();
}

#[test]
fn test_save_overwrites_previous_token() {
    let _guard = env_lock();
    let _home = with_temp_home();

    let store = FilesystemTokenStore::new();
    store.save("old-token").unwrap();
    store.save("new-token").unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.token, "new-token");
}
