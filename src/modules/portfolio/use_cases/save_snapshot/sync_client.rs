// Read-modify-write client for the published projects file.
//
// Responsibilities
// - fetch_snapshot: read and decode the current file plus its revision marker,
//   authenticated when a token is at hand so private repositories are readable.
// - commit_snapshot: re-read the revision marker, encode the given projects, and
//   replace the file conditionally on that marker.
//
// Boundaries
// - Holds no state between calls. The revision marker is never cached.
// - Does not decide when to save or what to save. See the save handler.

use crate::modules::portfolio::core::project::Project;
use crate::modules::portfolio::core::session::WriteToken;
use crate::modules::portfolio::core::snapshot_codec;
use crate::shared::core::primitives::Clock;
use crate::shared::infrastructure::file_store::{FileStore, FileStoreError, PutFile};
use chrono::SecondsFormat;
use std::sync::Arc;
use thiserror::Error;

const FETCH_FALLBACK: &str = "Failed to load projects";
const WRITE_FALLBACK: &str = "Failed to update";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyncError {
    #[error("fetch failed: {message}")]
    FetchFailed {
        status: Option<u16>,
        message: String,
    },

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("write failed: {message}")]
    WriteFailed {
        status: Option<u16>,
        message: String,
    },
}

impl SyncError {
    /// The API's own text without the variant prefix, as shown in the status banner.
    pub fn message(&self) -> &str {
        match self {
            SyncError::FetchFailed { message, .. } | SyncError::WriteFailed { message, .. } => {
                message
            }
            SyncError::Unauthorized(message) | SyncError::Conflict(message) => message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub projects: Vec<Project>,
    pub revision: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitAck {
    pub revision: Option<String>,
    pub message: String,
}

pub struct SyncClient<TFileStore>
where
    TFileStore: FileStore + ?Sized,
{
    file_store: Arc<TFileStore>,
    clock: Arc<dyn Clock>,
}

impl<TFileStore> SyncClient<TFileStore>
where
    TFileStore: FileStore + ?Sized,
{
    pub fn new(file_store: Arc<TFileStore>, clock: Arc<dyn Clock>) -> Self {
        Self { file_store, clock }
    }

    pub async fn fetch_snapshot(&self, token: Option<&WriteToken>) -> Result<Snapshot, SyncError> {
        tracing::debug!(authenticated = token.is_some(), "fetching snapshot from file store");
        let Some(file) = self
            .file_store
            .get(token.map(WriteToken::expose))
            .await
            .map_err(fetch_error)?
        else {
            tracing::info!("no snapshot published yet");
            return Ok(Snapshot {
                projects: Vec::new(),
                revision: None,
            });
        };
        let projects = snapshot_codec::decode(&file.content).map_err(|e| SyncError::FetchFailed {
            status: None,
            message: e.to_string(),
        })?;
        tracing::info!(count = projects.len(), revision = %file.sha, "snapshot fetched");
        Ok(Snapshot {
            projects,
            revision: Some(file.sha),
        })
    }

    pub async fn commit_snapshot(
        &self,
        projects: &[Project],
        token: &WriteToken,
    ) -> Result<CommitAck, SyncError> {
        // Only the marker is needed here; the current content is not decoded so a
        // corrupt remote file can still be overwritten.
        let revision = self
            .file_store
            .get(Some(token.expose()))
            .await
            .map_err(fetch_error)?
            .map(|file| file.sha);

        let content = snapshot_codec::encode(projects).map_err(|e| SyncError::WriteFailed {
            status: None,
            message: e.to_string(),
        })?;
        let message = format!(
            "Update portfolio works: {}",
            self.clock.now().to_rfc3339_opts(SecondsFormat::Millis, true)
        );
        let body = PutFile {
            message: message.clone(),
            content,
            sha: revision.clone(),
        };

        tracing::debug!(count = projects.len(), base = ?revision, "committing snapshot");
        match self.file_store.put(&body, token.expose()).await {
            Ok(outcome) => {
                tracing::info!(revision = ?outcome.sha, "snapshot committed");
                Ok(CommitAck {
                    revision: outcome.sha,
                    message,
                })
            }
            Err(error) => {
                let error = write_error(error);
                tracing::warn!(%error, "snapshot commit rejected");
                Err(error)
            }
        }
    }
}

fn fetch_error(error: FileStoreError) -> SyncError {
    let error = match error {
        FileStoreError::Status { status, message } => SyncError::FetchFailed {
            status: Some(status),
            message: message.unwrap_or_else(|| FETCH_FALLBACK.to_string()),
        },
        FileStoreError::Transport(message) => SyncError::FetchFailed {
            status: None,
            message,
        },
    };
    tracing::warn!(%error, "snapshot fetch failed");
    error
}

fn write_error(error: FileStoreError) -> SyncError {
    match error {
        FileStoreError::Status { status, message } => {
            let message = message.unwrap_or_else(|| WRITE_FALLBACK.to_string());
            match status {
                401 | 403 => SyncError::Unauthorized(message),
                409 => SyncError::Conflict(message),
                422 if message.to_lowercase().contains("sha") => SyncError::Conflict(message),
                _ => SyncError::WriteFailed {
                    status: Some(status),
                    message,
                },
            }
        }
        FileStoreError::Transport(message) => SyncError::WriteFailed {
            status: None,
            message,
        },
    }
}
