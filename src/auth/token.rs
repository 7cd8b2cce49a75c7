use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Matches the 7-day cookie lifetime the service issues tokens for.
pub const TOKEN_EXPIRY_DAYS: i64 = 7;

#[derive(Serialize, Deserialize, Clone)]
pub struct StoredToken {
    pub token: String,
    pub stored_at: DateTime<Local>,
}

/// Trait for credential storage backends
pub trait TokenStore: Send + Sync {
    /// Return the stored token if present and not expired
    fn load(&self) -> Option<StoredToken>;

    /// Persist a freshly issued token
    fn save(&self, token: &str) -> Result<(), Box<dyn std::error::Error>>;

    /// Remove any stored token
    fn clear(&self) -> Result<(), Box<dyn std::error::Error>>;
}

pub struct FilesystemTokenStore;

impl FilesystemTokenStore {
    pub fn new() -> Self {
        Self
    }

    fn get_cache_dir(&self) -> PathBuf {
        let home = env::var("HOME").expect("HOME environment variable not set");
        let cache_dir = Path::new(&home).join(".cache").join("writerai");
        if !cache_dir.exists() {
            fs::create_dir_all(&cache_dir).expect("Failed to create cache directory");
        }
        cache_dir
    }

    fn token_file(&self) -> PathBuf {
        self.get_cache_dir().join("token.json")
    }
}

impl TokenStore for FilesystemTokenStore {
    fn load(&self) -> Option<StoredToken> {
        let path = self.token_file();
        let content = fs::read_to_string(&path).ok()?;
        let stored: StoredToken = serde_json::from_str(&content).ok()?;

        let age_days = Local::now()
            .signed_duration_since(stored.stored_at)
            .num_days();
        if age_days.abs() < TOKEN_EXPIRY_DAYS {
            Some(stored)
        } else {
            // Clean up the expired credential
            let _ = fs::remove_file(&path);
            None
        }
    }

    fn save(&self, token: &str) -> Result<(), Box<dyn std::error::Error>> {
        let stored = StoredToken {
            token: token.to_string(),
            stored_at: Local::now(),
        };
        let content = serde_json::to_string_pretty(&stored)?;
        fs::write(self.token_file(), content)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), Box<dyn std::error::Error>> {
        let path = self.token_file();
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

impl Default for FilesystemTokenStore {
    fn default() -> Self {
        Self::new()
    }
}
