use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("API request failed: {status} {status_text}{}", body_suffix(.body))]
    Http {
        status: u16,
        status_text: String,
        body: String,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("CSRF token unavailable: {message}")]
    Csrf { message: String },

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },
}

fn body_suffix(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(" - {}", body)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 4xx，請求本身有問題
    Client,
    /// 5xx
    Server,
    /// 傳輸失敗或逾時
    Network,
    Parse,
    Configuration,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// 傳輸層失敗（含逾時），與 HTTP 狀態無關
    pub fn is_network(&self) -> bool {
        match self {
            ApiError::Timeout(_) => true,
            ApiError::Network(e) => e.is_timeout() || e.is_connect() || e.is_request() || e.is_body(),
            _ => false,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ApiError::Http { status, .. } if *status >= 500 => ErrorCategory::Server,
            ApiError::Http { .. } | ApiError::Csrf { .. } => ErrorCategory::Client,
            ApiError::Network(_) | ApiError::Timeout(_) => ErrorCategory::Network,
            ApiError::Parse(_) => ErrorCategory::Parse,
            ApiError::InvalidUrl { .. }
            | ApiError::Io(_)
            | ApiError::Config { .. }
            | ApiError::InvalidConfigValue { .. }
            | ApiError::MissingConfig { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ApiError::Http { status: 403, .. } => {
                "The server rejected the request (403). The session or CSRF token may have expired.".to_string()
            }
            ApiError::Http { status: 404, .. } => "The requested resource was not found.".to_string(),
            ApiError::Http { status, .. } if *status >= 500 => {
                format!("The server is having trouble right now (HTTP {}). Try again later.", status)
            }
            ApiError::Http {
                status,
                status_text,
                body,
            } => format!("Request rejected: {} {} {}", status, status_text, body)
                .trim_end()
                .to_string(),
            ApiError::Timeout(d) => format!("The server did not answer within {:?}.", d),
            ApiError::Network(_) => "Could not reach the server. Check the network connection.".to_string(),
            ApiError::Parse(_) => "The server sent a response that could not be read.".to_string(),
            ApiError::Csrf { .. } => "Could not obtain a CSRF token from the server.".to_string(),
            other => other.to_string(),
        }
    }

    /// CLI 結束代碼
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Client => 1,
            ErrorCategory::Server | ErrorCategory::Network => 2,
            ErrorCategory::Parse => 3,
            ErrorCategory::Configuration => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
