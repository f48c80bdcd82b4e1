use crate::modules::portfolio::core::state::{PortfolioState, SaveStatus};
use crate::modules::portfolio::use_cases::save_snapshot::sync_client::{
    CommitAck, SyncClient, SyncError,
};
use crate::shared::core::primitives::Clock;
use crate::shared::infrastructure::file_store::FileStore;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SaveError {
    #[error("sign in before saving")]
    NotSignedIn,

    #[error("a save is already in progress")]
    SaveInProgress,

    #[error(transparent)]
    Sync(#[from] SyncError),
}

/// Runs one save at a time. The payload is the store as it stands when the save is
/// triggered; edits made while the commit is in flight stay local for the next save.
pub struct SaveSnapshotHandler<TFileStore>
where
    TFileStore: FileStore + ?Sized,
{
    sync_client: Arc<SyncClient<TFileStore>>,
    clock: Arc<dyn Clock>,
    in_flight: Mutex<()>,
}

impl<TFileStore> SaveSnapshotHandler<TFileStore>
where
    TFileStore: FileStore + ?Sized,
{
    pub fn new(sync_client: Arc<SyncClient<TFileStore>>, clock: Arc<dyn Clock>) -> Self {
        Self {
            sync_client,
            clock,
            in_flight: Mutex::new(()),
        }
    }

    pub async fn handle(&self, state: &RwLock<PortfolioState>) -> Result<CommitAck, SaveError> {
        let _in_flight = self
            .in_flight
            .try_lock()
            .map_err(|_| SaveError::SaveInProgress)?;

        let (projects, token) = {
            let mut guard = state.write().await;
            let token = guard
                .session
                .as_ref()
                .map(|s| s.write_token.clone())
                .ok_or(SaveError::NotSignedIn)?;
            guard.save_status = SaveStatus::Saving;
            (guard.store.projects().to_vec(), token)
        };

        let result = self.sync_client.commit_snapshot(&projects, &token).await;

        let mut guard = state.write().await;
        guard.save_status = match &result {
            Ok(ack) => SaveStatus::Saved {
                at: self.clock.now(),
                revision: ack.revision.clone(),
            },
            Err(error) => SaveStatus::Failed {
                message: error.message().to_string(),
            },
        };
        result.map_err(SaveError::from)
    }
}
