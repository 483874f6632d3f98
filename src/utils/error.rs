use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// The store answered with a non-2xx status; the message is the
    /// raw response body (or the status line when the body is empty).
    #[error("request failed: {message}")]
    RequestFailed { message: String },

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl AppError {
    pub fn request_failed(message: impl Into<String>) -> Self {
        AppError::RequestFailed {
            message: message.into(),
        }
    }

    /// One-line message suitable for the status bar.
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::RequestFailed { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
