use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the WriterAI backend.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Full completion endpoint override; when unset it is derived from
    /// the model name.
    #[serde(default)]
    pub completion_endpoint: Option<String>,
}
