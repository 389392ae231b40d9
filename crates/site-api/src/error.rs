use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no admin credential set; log in first")]
    MissingCredential,
    #[error("admin credential rejected")]
    Unauthorized,
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("unexpected status {status}: {message}")]
    UnexpectedStatus { status: StatusCode, message: String },
}
