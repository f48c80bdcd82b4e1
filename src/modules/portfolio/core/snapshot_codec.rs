// Wire form of the published snapshot.
//
// The file in the repository is a pretty-printed JSON array (2-space indent). The
// contents API carries it base64 encoded and returns it wrapped at 60 columns.

use crate::modules::portfolio::core::project::Project;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("snapshot is not valid base64: {0}")]
    Transport(String),

    #[error("snapshot is not a valid project list: {0}")]
    Json(String),
}

pub fn to_json(projects: &[Project]) -> Result<String, CodecError> {
    serde_json::to_string_pretty(projects).map_err(|e| CodecError::Json(e.to_string()))
}

pub fn from_json(bytes: &[u8]) -> Result<Vec<Project>, CodecError> {
    serde_json::from_slice(bytes).map_err(|e| CodecError::Json(e.to_string()))
}

pub fn encode(projects: &[Project]) -> Result<String, CodecError> {
    Ok(STANDARD.encode(to_json(projects)?))
}

/// Accepts both the single-line form we send and the line-wrapped form the API returns.
pub fn decode(content: &str) -> Result<Vec<Project>, CodecError> {
    let compact: String = content.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = STANDARD
        .decode(compact)
        .map_err(|e| CodecError::Transport(e.to_string()))?;
    from_json(&bytes)
}
