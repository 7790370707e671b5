use reqwest::StatusCode;
use thiserror::Error;
use url::ParseError;

#[derive(Debug, Error)]
pub enum PrismError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] ParseError),

    /// Non-200 answer from the files endpoint. Rendered exactly as the CLI
    /// reports it: bare numeric status followed by the raw body.
    #[error("Error fetching Figma file: {} {body}", .status.as_u16())]
    FigmaApi { status: StatusCode, body: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PrismError {
    pub fn figma_api(status: StatusCode, body: impl Into<String>) -> Self {
        PrismError::FigmaApi {
            status,
            body: body.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        PrismError::Config(message.into())
    }

    pub fn remediation(&self) -> &'static str {
        match self {
            PrismError::Io(_) => "Check the output path and its permissions.",
            PrismError::Network(_) => "Check connectivity/proxy/VPN and retry, or raise --timeout.",
            PrismError::InvalidUrl(_) => "Verify --api-base (e.g., https://api.figma.com).",
            PrismError::FigmaApi { status, .. } => match status.as_u16() {
                401 | 403 => "Check the access token and that it can read this file.",
                404 => "Check the file key; copy it from the file's share URL.",
                _ => "Inspect the response body above; retry after waiting.",
            },
            PrismError::Serialization(_) => {
                "The response was not a Figma file document; re-run with --verbose."
            }
            PrismError::Config(_) => "Check flags, the file key and the config file.",
        }
    }
}

pub type Result<T> = std::result::Result<T, PrismError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figma_api_error_renders_numeric_status_and_body() {
        let err = PrismError::figma_api(
            StatusCode::FORBIDDEN,
            "{\"status\":403,\"err\":\"Invalid token\"}",
        );
        assert_eq!(
            err.to_string(),
            "Error fetching Figma file: 403 {\"status\":403,\"err\":\"Invalid token\"}"
        );
    }

    #[test]
    fn remediation_distinguishes_auth_from_missing_file() {
        let auth = PrismError::figma_api(StatusCode::UNAUTHORIZED, "");
        let missing = PrismError::figma_api(StatusCode::NOT_FOUND, "");
        assert!(auth.remediation().contains("token"));
        assert!(missing.remediation().contains("file key"));
    }
}
