use std::fmt;

#[derive(Debug)]
pub enum WriterAiError {
    /// Empty or otherwise unusable user input, blocked before any request.
    Validation(String),
    /// Login rejected or no valid credential stored.
    Auth(String),
    /// Non-2xx or malformed payload from the chat or completion APIs.
    ExternalService {
        status: u16,
        message: String,
    },
    NetworkError(reqwest::Error),
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    YamlError(serde_yaml::Error),
    Other(String),
}

impl fmt::Display for WriterAiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriterAiError::Validation(msg) => write!(f, "{}", msg),
            WriterAiError::Auth(msg) => write!(f, "{}", msg),
            WriterAiError::ExternalService { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            WriterAiError::NetworkError(e) => write!(f, "Network error: {}", e),
            WriterAiError::IoError(e) => write!(f, "IO error: {}", e),
            WriterAiError::JsonError(e) => write!(f, "JSON error: {}", e),
            WriterAiError::YamlError(e) => write!(f, "YAML error: {}", e),
            WriterAiError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for WriterAiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WriterAiError::NetworkError(e) => Some(e),
            WriterAiError::IoError(e) => Some(e),
            WriterAiError::JsonError(e) => Some(e),
            WriterAiError::YamlError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for WriterAiError {
    fn from(err: reqwest::Error) -> Self {
        WriterAiError::NetworkError(err)
    }
}

impl From<std::io::Error> for WriterAiError {
    fn from(err: std::io::Error) -> Self {
        WriterAiError::IoError(err)
    }
}

impl From<serde_json::Error> for WriterAiError {
    fn from(err: serde_json::Error) -> Self {
        WriterAiError::JsonError(err)
    }
}

impl From<serde_yaml::Error> for WriterAiError {
    fn from(err: serde_yaml::Error) -> Self {
        WriterAiError::YamlError(err)
    }
}

impl From<anyhow::Error> for WriterAiError {
    fn from(err: anyhow::Error) -> Self {
        WriterAiError::Other(err.to_string())
    }
}

impl From<String> for WriterAiError {
    fn from(msg: String) -> Self {
        WriterAiError::Other(msg)
    }
}

impl From<&str> for WriterAiError {
    fn from(msg: &str) -> Self {
        WriterAiError::Other(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WriterAiError>;
