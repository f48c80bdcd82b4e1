// In memory implementation of the FileStore port.
//
// Purpose
// - Support sync client and save flow tests without a network.
//
// Responsibilities
// - Hold at most one file and its revision marker.
// - Enforce the revision check the way the hosted API does: a replace must name the current sha.
// - Record every call so tests can assert the fetch-then-write ordering.

use super::{FileStore, FileStoreError, PutFile, PutOutcome, StoredFile};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{Mutex, RwLock};
use tokio::time::{Duration, sleep};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStoreCall {
    Get { authenticated: bool },
    Put { sha: Option<String> },
}

#[derive(Default)]
pub struct InMemoryFileStore {
    file: RwLock<Option<StoredFile>>,
    accepted_token: Option<String>,
    private: bool,
    offline: bool,
    revisions: AtomicU64,
    delay_put_ms: AtomicU64,
    calls: Mutex<Vec<FileStoreCall>>,
    writes: Mutex<Vec<PutFile>>,
}

impl InMemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(content: impl Into<String>, sha: impl Into<String>) -> Self {
        Self {
            file: RwLock::new(Some(StoredFile {
                content: content.into(),
                sha: sha.into(),
            })),
            ..Self::default()
        }
    }

    /// Only writes carrying this token are accepted; everything else gets a 401.
    pub fn accept_only(mut self, token: impl Into<String>) -> Self {
        self.accepted_token = Some(token.into());
        self
    }

    /// Unauthenticated reads see no file, the way the hosted API answers 404 for a
    /// private repository.
    pub fn private(mut self) -> Self {
        self.private = true;
        self
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    pub fn set_delay_put_ms(&self, delay: u64) {
        self.delay_put_ms.store(delay, Ordering::SeqCst);
    }

    /// Simulates another editor committing behind our back.
    pub async fn overwrite_externally(&self, content: impl Into<String>) -> String {
        let sha = self.next_sha();
        *self.file.write().await = Some(StoredFile {
            content: content.into(),
            sha: sha.clone(),
        });
        sha
    }

    pub async fn current(&self) -> Option<StoredFile> {
        self.file.read().await.clone()
    }

    pub async fn calls(&self) -> Vec<FileStoreCall> {
        self.calls.lock().await.clone()
    }

    pub async fn writes(&self) -> Vec<PutFile> {
        self.writes.lock().await.clone()
    }

    fn next_sha(&self) -> String {
        let n = self.revisions.fetch_add(1, Ordering::SeqCst) + 1;
        format!("sha-{n:04}")
    }

    fn ensure_online(&self) -> Result<(), FileStoreError> {
        if self.offline {
            return Err(FileStoreError::Transport("file store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl FileStore for InMemoryFileStore {
    async fn get(&self, token: Option<&str>) -> Result<Option<StoredFile>, FileStoreError> {
        self.calls.lock().await.push(FileStoreCall::Get {
            authenticated: token.is_some(),
        });
        self.ensure_online()?;
        if self.private && token.is_none() {
            return Ok(None);
        }
        Ok(self.file.read().await.clone())
    }

    async fn put(&self, file: &PutFile, token: &str) -> Result<PutOutcome, FileStoreError> {
        self.calls.lock().await.push(FileStoreCall::Put {
            sha: file.sha.clone(),
        });
        self.ensure_online()?;

        let delay = self.delay_put_ms.load(Ordering::SeqCst);
        if delay > 0 {
            sleep(Duration::from_millis(delay)).await;
        }

        if let Some(accepted) = &self.accepted_token {
            if accepted != token {
                return Err(FileStoreError::Status {
                    status: 401,
                    message: Some("Bad credentials".into()),
                });
            }
        }

        let mut current = self.file.write().await;
        match (current.as_ref(), file.sha.as_deref()) {
            (Some(_), None) => {
                return Err(FileStoreError::Status {
                    status: 422,
                    message: Some("Invalid request.\n\n\"sha\" wasn't supplied.".into()),
                });
            }
            (Some(existing), Some(sha)) if existing.sha != sha => {
                return Err(FileStoreError::Status {
                    status: 409,
                    message: Some(format!("projects.json does not match {sha}")),
                });
            }
            (None, Some(sha)) => {
                return Err(FileStoreError::Status {
                    status: 409,
                    message: Some(format!("projects.json does not match {sha}")),
                });
            }
            _ => {}
        }

        let sha = self.next_sha();
        *current = Some(StoredFile {
            content: file.content.clone(),
            sha: sha.clone(),
        });
        self.writes.lock().await.push(file.clone());
        Ok(PutOutcome { sha: Some(sha) })
    }
}
