use crate::modules::portfolio::adapters::outbound::published_snapshot::PublishedSnapshot;
use crate::modules::portfolio::core::project::Project;
use async_trait::async_trait;

/// Serves a fixed project list, or fails every fetch when built with `unavailable`.
#[derive(Default)]
pub struct InMemoryPublishedSnapshot {
    projects: Option<Vec<Project>>,
}

impl InMemoryPublishedSnapshot {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects: Some(projects),
        }
    }

    pub fn unavailable() -> Self {
        Self { projects: None }
    }
}

#[async_trait]
impl PublishedSnapshot for InMemoryPublishedSnapshot {
    async fn fetch(&self) -> anyhow::Result<Vec<Project>> {
        self.projects
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Failed to load projects"))
    }
}
