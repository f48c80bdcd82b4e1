use crate::modules::portfolio::adapters::outbound::published_snapshot::PublishedSnapshot;
use crate::modules::portfolio::core::project::Project;
use crate::modules::portfolio::core::snapshot_codec;
use crate::shared::core::primitives::Clock;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;

/// Fetches the published JSON through its public URL, cache-busted with the current time
/// so a freshly committed file is not hidden behind a CDN copy.
pub struct HttpPublishedSnapshot {
    client: Client,
    url: String,
    clock: Arc<dyn Clock>,
}

impl HttpPublishedSnapshot {
    pub fn new(client: Client, url: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        Self {
            client,
            url: url.into(),
            clock,
        }
    }

    fn cache_busted_url(&self) -> String {
        let separator = if self.url.contains('?') { '&' } else { '?' };
        format!(
            "{}{separator}t={}",
            self.url,
            self.clock.now().timestamp_millis()
        )
    }
}

#[async_trait]
impl PublishedSnapshot for HttpPublishedSnapshot {
    async fn fetch(&self) -> anyhow::Result<Vec<Project>> {
        let url = self.cache_busted_url();
        let bytes = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("requesting {url}"))?
            .error_for_status()
            .context("Failed to load projects")?
            .bytes()
            .await
            .context("reading projects body")?;
        Ok(snapshot_codec::from_json(&bytes)?)
    }
}
