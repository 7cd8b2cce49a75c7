mod api;
mod defaults;

use crate::cli::Args;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub use api::ApiConfig;
pub use defaults::{completion_endpoint_for_model, DEFAULT_BASE_URL, DEFAULT_COMPLETION_MODEL};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub verbose: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub completion_model: Option<String>,
}

pub struct Config {
    pub base_url: String,
    pub completion_endpoint: String,
    /// Absent until a command that talks to the completion API needs it.
    pub completion_api_key: Option<String>,
    pub verbose: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FileConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl Config {
    pub fn from_env_and_args(args: &Args) -> Result<Self, String> {
        let file_config = FileConfig::load().unwrap_or_default();

        // Base URL: CLI args > env var > config file > default
        let base_url = args
            .api_url
            .clone()
            .or_else(|| env::var("WRITERAI_BASE_URL").ok())
            .or(file_config.api.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        // Model: env var > config file > default
        let model = env::var("WRITERAI_COMPLETION_MODEL")
            .ok()
            .or(file_config.model.completion_model.clone())
            .unwrap_or_else(|| DEFAULT_COMPLETION_MODEL.to_string());

        // Full endpoint override: env var > config file > derived from model
        let completion_endpoint = env::var("WRITERAI_COMPLETION_ENDPOINT")
            .ok()
            .or(file_config.api.completion_endpoint.clone())
            .unwrap_or_else(|| completion_endpoint_for_model(&model));

        // Key comes from the environment only; it is never written to a
        // config file on disk.
        let completion_api_key = env::var("GEMINI_API_KEY").ok();

        // Verbose flag: CLI args > env var > config file > default
        let verbose = args.verbose
            || env::var("WRITERAI_VERBOSE")
                .ok()
                .map(|v| v == "true")
                .or(file_config.session.verbose)
                .unwrap_or(false);

        Ok(Config {
            base_url,
            completion_endpoint,
            completion_api_key,
            verbose,
        })
    }

    /// The key is only required by commands that call the completion API.
    pub fn require_completion_api_key(&self) -> Result<&str, String> {
        self.completion_api_key
            .as_deref()
            .ok_or_else(|| "GEMINI_API_KEY environment variable not set".to_string())
    }
}

impl FileConfig {
    pub fn load() -> Result<Self> {
        let config_paths = Self::get_config_paths();

        for path in config_paths {
            if path.exists() {
                let contents = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

                // YAML first, JSON as fallback
                let config: FileConfig = if path.extension().and_then(|s| s.to_str())
                    == Some("yaml")
                    || path.extension().and_then(|s| s.to_str()) == Some("yml")
                {
                    serde_yaml::from_str(&contents).with_context(|| {
                        format!("Failed to parse YAML config file: {}", path.display())
                    })?
                } else {
                    serde_json::from_str(&contents).with_context(|| {
                        format!("Failed to parse JSON config file: {}", path.display())
                    })?
                };

                return Ok(config);
            }
        }

        Ok(FileConfig::default())
    }

    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. Current directory (local override)
        paths.push(PathBuf::from(".writerai.yaml"));
        paths.push(PathBuf::from(".writerai.yml"));
        paths.push(PathBuf::from(".writerai.json"));

        // 2. User's config directory
        if let Some(home_dir) = dirs::home_dir() {
            let config_dir = home_dir.join(".config").join("writerai");
            paths.push(config_dir.join("writerai.yaml"));
            paths.push(config_dir.join("writerai.yml"));
            paths.push(config_dir.join("writerai.json"));
        }

        paths
    }
}
