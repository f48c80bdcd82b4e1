use crate::modules::portfolio::core::project::Project;
use async_trait::async_trait;

/// Read-only access to the projects file as the public site serves it.
#[async_trait]
pub trait PublishedSnapshot: Send + Sync {
    async fn fetch(&self) -> anyhow::Result<Vec<Project>>;
}
