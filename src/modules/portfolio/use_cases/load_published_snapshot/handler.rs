use crate::modules::portfolio::adapters::outbound::published_snapshot::PublishedSnapshot;
use crate::modules::portfolio::core::store::ProjectStore;

/// Startup load for the public gallery. A failed fetch is logged and yields an empty
/// store: the site must come up with an empty gallery rather than not at all.
pub async fn load_published_snapshot(source: &(impl PublishedSnapshot + ?Sized)) -> ProjectStore {
    match source.fetch().await {
        Ok(projects) => {
            let store = ProjectStore::from_projects(projects);
            tracing::info!(count = store.len(), "published projects loaded");
            store
        }
        Err(error) => {
            tracing::warn!(
                error = ?error,
                "error loading projects, starting with an empty gallery"
            );
            ProjectStore::new()
        }
    }
}

#[cfg(test)]
mod load_published_snapshot_tests {
    use super::*;
    use crate::modules::portfolio::adapters::outbound::published_snapshot_in_memory::InMemoryPublishedSnapshot;
    use crate::tests::fixtures::projects::{ProjectBuilder, logo_and_poster};
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_populate_the_store_from_the_published_file() {
        let source = InMemoryPublishedSnapshot::new(logo_and_poster());
        let store = load_published_snapshot(&source).await;
        assert_eq!(store.projects(), logo_and_poster().as_slice());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_degrade_to_an_empty_gallery_on_failure() {
        let store = load_published_snapshot(&InMemoryPublishedSnapshot::unavailable()).await;
        assert!(store.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_drop_duplicate_ids_from_the_published_file() {
        let source = InMemoryPublishedSnapshot::new(vec![
            ProjectBuilder::new().id("same").build(),
            ProjectBuilder::new().id("same").build(),
        ]);
        assert_eq!(load_published_snapshot(&source).await.len(), 1);
    }
}
