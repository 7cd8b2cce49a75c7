use crate::error::{Result, WriterAiError};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Decide what a login exchange yielded. A rejected login is an auth
/// error carrying the server's message, not an external-service failure;
/// a success without a token is a malformed payload. Only an Ok result
/// ever hands a token to the caller, so nothing is stored on failure.
pub fn login_outcome(status: StatusCode, body: AuthResponse) -> Result<String> {
    if !status.is_success() {
        return Err(WriterAiError::Auth(
            body.message.unwrap_or_else(|| "Login failed".to_string()),
        ));
    }

    body.token.ok_or_else(|| WriterAiError::ExternalService {
        status: status.as_u16(),
        message: "No token in login response".to_string(),
    })
}

/// Exchange credentials for a bearer token.
pub async fn login(base_url: &str, email: &str, password: &str) -> Result<String> {
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/api/auth/login", base_url))
        .json(&LoginRequest { email, password })
        .send()
        .await?;

    let status = response.status();
    let body: AuthResponse = response.json().await.map_err(|_| {
        WriterAiError::ExternalService {
            status: status.as_u16(),
            message: "Malformed response from auth API".to_string(),
        }
    })?;

    login_outcome(status, body)
}

/// Create an account. Returns the server's confirmation message.
pub async fn register(
    base_url: &str,
    username: &str,
    email: &str,
    password: &str,
) -> Result<String> {
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/api/auth/register", base_url))
        .json(&RegisterRequest {
            username,
            email,
            password,
        })
        .send()
        .await?;

    let status = response.status();
    let body: AuthResponse = response.json().await.map_err(|_| {
        WriterAiError::ExternalService {
            status: status.as_u16(),
            message: "Malformed response from auth API".to_string(),
        }
    })?;

    if !status.is_success() {
        return Err(WriterAiError::Auth(
            body.message
                .unwrap_or_else(|| "Registration failed".to_string()),
        ));
    }

    Ok(body
        .message
        .unwrap_or_else(|| "Account created".to_string()))
}
