//! FileStore adapter for the GitHub repository contents API.
//!
//! One instance is bound to one `{owner}/{repo}/{path}` resource. Files over 1 MB come
//! back from the contents API without their body; those are read from the git blobs API
//! by sha instead.

use super::{FileStore, FileStoreError, PutFile, PutOutcome, StoredFile};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;

const ACCEPT: &str = "application/vnd.github+json";
const API_VERSION: &str = "2022-11-28";

pub struct GitHubFileStore {
    client: Client,
    contents_url: String,
    blobs_url: String,
}

#[derive(Deserialize)]
struct ContentsResponse {
    #[serde(default)]
    content: String,
    #[serde(default)]
    encoding: Option<String>,
    sha: String,
}

impl ContentsResponse {
    /// The contents API answers `"encoding": "none"` with an empty `content` once the
    /// file is too large to inline.
    fn body_omitted(&self) -> bool {
        self.encoding.as_deref() == Some("none") || self.content.is_empty()
    }
}

#[derive(Deserialize)]
struct BlobResponse {
    content: String,
}

#[derive(Deserialize)]
struct PutResponse {
    content: Option<ContentMeta>,
}

#[derive(Deserialize)]
struct ContentMeta {
    sha: String,
}

#[derive(Deserialize)]
struct ApiMessage {
    message: String,
}

impl GitHubFileStore {
    /// * `api_url` - API base, e.g. `https://api.github.com`.
    pub fn new(client: Client, api_url: &str, owner: &str, repo: &str, path: &str) -> Self {
        let repo_url = format!("{}/repos/{owner}/{repo}", api_url.trim_end_matches('/'));
        Self {
            client,
            contents_url: format!("{repo_url}/contents/{}", path.trim_start_matches('/')),
            blobs_url: format!("{repo_url}/git/blobs"),
        }
    }

    pub fn contents_url(&self) -> &str {
        &self.contents_url
    }

    /// Base64 body of the blob with the given sha.
    async fn blob(&self, sha: &str, token: Option<&str>) -> Result<String, FileStoreError> {
        let response = self
            .request(self.client.get(format!("{}/{sha}", self.blobs_url)), token)
            .send()
            .await
            .map_err(transport)?;
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }
        let body: BlobResponse = response.json().await.map_err(transport)?;
        Ok(body.content)
    }

    fn request(&self, builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        let builder = builder
            .header(reqwest::header::ACCEPT, ACCEPT)
            .header("X-GitHub-Api-Version", API_VERSION);
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Turns a non-success response into a status error carrying GitHub's `message`
    /// when the body has one, or the raw body text otherwise.
    async fn api_error(response: Response) -> FileStoreError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiMessage>(&body)
            .map(|m| m.message)
            .ok()
            .or_else(|| (!body.trim().is_empty()).then(|| body.trim().to_string()));
        FileStoreError::Status { status, message }
    }
}

fn transport(error: reqwest::Error) -> FileStoreError {
    FileStoreError::Transport(error.to_string())
}

#[async_trait]
impl FileStore for GitHubFileStore {
    async fn get(&self, token: Option<&str>) -> Result<Option<StoredFile>, FileStoreError> {
        let response = self
            .request(self.client.get(&self.contents_url), token)
            .send()
            .await
            .map_err(transport)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let body: ContentsResponse = response.json().await.map_err(transport)?;
        let content = if body.body_omitted() {
            tracing::debug!(sha = %body.sha, "contents API omitted the body, reading the blob");
            self.blob(&body.sha, token).await?
        } else {
            body.content
        };
        Ok(Some(StoredFile {
            content,
            sha: body.sha,
        }))
    }

    async fn put(&self, file: &PutFile, token: &str) -> Result<PutOutcome, FileStoreError> {
        let response = self
            .request(self.client.put(&self.contents_url), Some(token))
            .json(file)
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        // A 2xx is success even if the body is not the documented shape.
        let sha = response
            .json::<PutResponse>()
            .await
            .ok()
            .and_then(|body| body.content)
            .map(|content| content.sha);
        Ok(PutOutcome { sha })
    }
}
