/// Default base URL of the WriterAI backend (auth + chat persistence).
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Default completion model.
pub const DEFAULT_COMPLETION_MODEL: &str = "gemini-1.5-flash";

/// Base of the generative-language API; the model slots into the path.
pub const COMPLETION_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

pub fn completion_endpoint_for_model(model: &str) -> String {
    format!("{}/{}:generateContent", COMPLETION_API_BASE, model)
}
