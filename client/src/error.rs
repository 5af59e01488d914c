use crate::types::ApiError;
use reqwest::StatusCode;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
    #[error("failed to get rules: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("unexpected response status {status}{}", describe_envelope(.envelope))]
    UnexpectedStatus {
        status: StatusCode,
        envelope: Option<ApiError>,
    },
    #[error("failed to parse response: {0}")]
    Decode(#[source] serde_json::Error),
}

fn describe_envelope(envelope: &Option<ApiError>) -> String {
    match envelope {
        Some(ApiError {
            code,
            message,
            errors: Some(errors),
        }) => format!(" (code {code}: {message}, {errors})"),
        Some(ApiError { code, message, .. }) => format!(" (code {code}: {message})"),
        None => String::new(),
    }
}
