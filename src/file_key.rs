//! File key resolution.
//!
//! Accepts either a bare Figma file key or a link copied from the Figma UI
//! and returns the key the REST API expects.

use url::Url;

use crate::error::{PrismError, Result};

const FIGMA_HOSTS: [&str; 2] = ["figma.com", "www.figma.com"];
const FILE_PATH_KINDS: [&str; 4] = ["file", "design", "proto", "board"];

/// Resolves `input` to a file key.
///
/// ```
/// use prismforge_lib::parse_file_key;
///
/// assert_eq!(parse_file_key("AbC123xyz").unwrap(), "AbC123xyz");
/// assert_eq!(
///     parse_file_key("https://www.figma.com/design/AbC123xyz/Landing?node-id=1-2").unwrap(),
///     "AbC123xyz"
/// );
/// ```
pub fn parse_file_key(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return key_from_url(trimmed);
    }
    validate_key(trimmed)?;
    Ok(trimmed.to_string())
}

fn key_from_url(raw: &str) -> Result<String> {
    let url = Url::parse(raw)?;
    let host = url.host_str().unwrap_or_default();
    if !FIGMA_HOSTS.contains(&host) {
        return Err(PrismError::config(format!(
            "Not a Figma URL (host '{}'): {}",
            host, raw
        )));
    }

    let mut segments = url.path_segments().into_iter().flatten();
    let kind = segments.next().unwrap_or_default();
    if !FILE_PATH_KINDS.contains(&kind) {
        return Err(PrismError::config(format!(
            "Figma URL does not point at a file (expected /file/, /design/, /proto/ or /board/): {}",
            raw
        )));
    }
    let key = segments.next().unwrap_or_default();
    validate_key(key)?;
    Ok(key.to_string())
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(PrismError::config("Figma file key is empty"));
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(PrismError::config(format!(
            "Invalid Figma file key '{}': expected letters, digits, '-' or '_'",
            key
        )));
    }
    Ok(())
}
