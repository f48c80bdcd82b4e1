// Port for a single versioned file held by a remote repository-content API.
//
// Purpose
// - Let the sync client read and conditionally replace one file without knowing the wire protocol.
//
// Responsibilities
// - Report the current content (still transport encoded) together with its revision marker.
// - Accept a replacing write that names the revision it expects to overwrite.
// - Surface non-success answers as a status plus the API's own message, untranslated.
//
// Boundaries
// - No knowledge of what the file contains. Mapping statuses to domain errors is the caller's job.

pub mod github;
pub mod in_memory;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FileStoreError {
    #[error("file store answered {status}: {}", message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },

    #[error("file store unreachable: {0}")]
    Transport(String),
}

/// File content as the store returns it: base64 text plus the revision marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub content: String,
    pub sha: String,
}

/// Body of a replacing write. `sha` is left out of the payload entirely when absent,
/// which is how the store distinguishes "create" from "replace".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PutFile {
    pub message: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PutOutcome {
    pub sha: Option<String>,
}

#[async_trait]
pub trait FileStore: Send + Sync {
    /// `Ok(None)` when the file does not exist yet.
    async fn get(&self, token: Option<&str>) -> Result<Option<StoredFile>, FileStoreError>;
    async fn put(&self, file: &PutFile, token: &str) -> Result<PutOutcome, FileStoreError>;
}
