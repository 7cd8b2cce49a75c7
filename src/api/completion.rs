use crate::api::models::CompletionRequest;
use crate::api::response::extract_completion_text;
use crate::error::{Result, WriterAiError};
use serde_json::Value;

/// Client for the generative-language completion endpoint. Each call sends
/// a single prompt; the endpoint keeps no conversation state.
pub struct CompletionClient {
    endpoint: String,
    api_key: String,
    client: reqwest::Client,
}

impl CompletionClient {
    pub fn new(endpoint: &str, api_key: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub async fn complete(&self, prompt: &str) -> Result<String> {
        let request_body = CompletionRequest::from_prompt(prompt);

        // The endpoint authenticates via a `key` query parameter rather
        // than a header.
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WriterAiError::ExternalService {
                status: status.as_u16(),
                message: format!("Completion API returned status {}", status.as_u16()),
            });
        }

        let response_json: Value = response.json().await?;
        extract_completion_text(&response_json)
    }
}
