use crate::modules::portfolio::core::state::{PortfolioState, SaveStatus};
use crate::modules::portfolio::use_cases::save_snapshot::sync_client::{SyncClient, SyncError};
use crate::shared::infrastructure::file_store::FileStore;
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RevertError {
    #[error("sign in before reloading")]
    NotSignedIn,

    #[error(transparent)]
    Sync(#[from] SyncError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reverted {
    pub count: usize,
    pub revision: Option<String>,
}

/// Throws away unsaved local edits and reloads the store from the file store, reading
/// with the session's token. On failure the local list is kept as it was.
pub async fn revert_to_remote<TFileStore>(
    sync_client: &SyncClient<TFileStore>,
    state: &RwLock<PortfolioState>,
) -> Result<Reverted, RevertError>
where
    TFileStore: FileStore + ?Sized,
{
    let token = state
        .read()
        .await
        .session
        .as_ref()
        .map(|s| s.write_token.clone())
        .ok_or(RevertError::NotSignedIn)?;

    let snapshot = sync_client.fetch_snapshot(Some(&token)).await?;

    let mut guard = state.write().await;
    guard.store.replace_all(snapshot.projects);
    guard.save_status = SaveStatus::Idle;
    tracing::info!(count = guard.store.len(), revision = ?snapshot.revision, "local edits discarded");
    Ok(Reverted {
        count: guard.store.len(),
        revision: snapshot.revision,
    })
}

#[cfg(test)]
mod revert_to_remote_tests {
    use super::*;
    use crate::modules::portfolio::core::project::ProjectDraft;
    use crate::modules::portfolio::core::session::{Session, WriteToken};
    use crate::modules::portfolio::core::snapshot_codec;
    use crate::modules::portfolio::core::store::ProjectStore;
    use crate::shared::core::primitives::FixedClock;
    use crate::shared::infrastructure::file_store::in_memory::InMemoryFileStore;
    use crate::tests::fixtures::projects::{ProjectBuilder, logo_and_poster};
    use rstest::rstest;
    use std::sync::Arc;

    fn client(store: InMemoryFileStore) -> SyncClient<InMemoryFileStore> {
        SyncClient::new(Arc::new(store), Arc::new(FixedClock::at_millis(0)))
    }

    fn edited_state(signed_in: bool) -> RwLock<PortfolioState> {
        let mut state = PortfolioState::new(ProjectStore::from_projects(logo_and_poster()));
        state.store.add(ProjectDraft::default(), 2024);
        if signed_in {
            state.begin_session(Session {
                username: "operator".into(),
                write_token: WriteToken::new("ghp_operator"),
            });
        }
        RwLock::new(state)
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_replace_local_edits_with_the_remote_list() {
        let remote = vec![ProjectBuilder::new().id("p-remote").build()];
        let content = snapshot_codec::encode(&remote).unwrap();
        let sync_client = client(InMemoryFileStore::with_file(content, "sha-remote"));
        let state = edited_state(true);

        let reverted = revert_to_remote(&sync_client, &state).await.expect("revert failed");

        assert_eq!(reverted.count, 1);
        assert_eq!(reverted.revision.as_deref(), Some("sha-remote"));
        assert_eq!(state.read().await.store.projects(), remote.as_slice());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_read_a_private_repository_with_the_session_token() {
        let remote = vec![ProjectBuilder::new().id("p-private").build()];
        let content = snapshot_codec::encode(&remote).unwrap();
        let sync_client = client(InMemoryFileStore::with_file(content, "sha-private").private());
        let state = edited_state(true);

        let reverted = revert_to_remote(&sync_client, &state).await.expect("revert failed");

        assert_eq!(reverted.count, 1);
        assert_eq!(state.read().await.store.projects(), remote.as_slice());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_require_a_session() {
        let sync_client = client(InMemoryFileStore::new());
        let state = edited_state(false);

        let result = revert_to_remote(&sync_client, &state).await;

        assert_eq!(result, Err(RevertError::NotSignedIn));
        assert_eq!(state.read().await.store.len(), 3);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_local_edits_when_the_fetch_fails() {
        let mut store = InMemoryFileStore::new();
        store.toggle_offline();
        let sync_client = client(store);
        let state = edited_state(true);

        let result = revert_to_remote(&sync_client, &state).await;

        assert!(matches!(
            result,
            Err(RevertError::Sync(SyncError::FetchFailed { .. }))
        ));
        assert_eq!(state.read().await.store.len(), 3);
    }
}
