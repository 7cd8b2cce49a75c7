use crate::error::{Result, WriterAiError};
use serde_json::Value;

/// Extract the generated text from a completion response.
///
/// The payload nests the text at `candidates[0].content.parts[0].text`; a
/// missing path is treated the same as a failed request.
pub fn extract_completion_text(response_json: &Value) -> Result<String> {
    response_json
        .get("candidates")
        .and_then(|c| c.as_array())
        .and_then(|c| c.first())
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
        .and_then(|p| p.first())
        .and_then(|p| p.get("text"))
        .and_then(|t| t.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| WriterAiError::ExternalService {
            status: 200,
            message: "No response received from AI".to_string(),
        })
}
