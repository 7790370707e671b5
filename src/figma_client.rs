//! Figma REST client.
//!
//! Issues the single `GET /v1/files/:key` call the tool needs. No retries:
//! any non-200 answer is surfaced as [`PrismError::FigmaApi`] with the raw
//! body attached.

use std::fmt;
use std::time::Duration;

use reqwest::StatusCode;
use url::Url;

use crate::config::Config;
use crate::error::{PrismError, Result};
use crate::types::FigmaFileResponse;

pub const TOKEN_HEADER: &str = "X-Figma-Token";

/// Personal access token sent in the `X-Figma-Token` header.
#[derive(Clone)]
pub struct FigmaAuth {
    token: String,
}

impl FigmaAuth {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    fn header_value(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for FigmaAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FigmaAuth").field("token", &"***").finish()
    }
}

/// Successful files-endpoint answer.
#[derive(Debug, Clone)]
pub struct FetchedFile {
    pub body_len: usize,
    pub file: FigmaFileResponse,
}

#[derive(Debug, Clone)]
pub struct FigmaApiClient {
    http: reqwest::Client,
    base_url: Url,
    auth: FigmaAuth,
}

impl FigmaApiClient {
    pub fn from_config(auth: FigmaAuth, config: &Config) -> Result<Self> {
        Self::with_options(auth, &config.api_base, config.timeout)
    }

    pub fn with_options(auth: FigmaAuth, base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(PrismError::config(format!(
                "API base '{}' cannot carry a path",
                base_url
            )));
        }
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("prismforge/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url,
            auth,
        })
    }

    /// `{base}/v1/files/{key}`, keeping any path prefix on the base.
    pub fn file_url(&self, file_key: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                PrismError::config(format!("API base '{}' cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(["v1", "files", file_key]);
        Ok(url)
    }

    /// Fetches and parses the whole document of `file_key`.
    pub async fn get_file(&self, file_key: &str) -> Result<FetchedFile> {
        let url = self.file_url(file_key)?;
        let response = self
            .http
            .get(url)
            .header(TOKEN_HEADER, self.auth.header_value())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if status != StatusCode::OK {
            return Err(PrismError::figma_api(status, body));
        }

        let file = FigmaFileResponse::from_json_str(&body)?;
        Ok(FetchedFile {
            body_len: body.len(),
            file,
        })
    }
}
