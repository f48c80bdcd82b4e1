use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} must be a valid {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Runtime configuration, read once at startup.
///
/// | Env var                  | Default                                                    |
/// |--------------------------|------------------------------------------------------------|
/// | `HOST`                   | `0.0.0.0`                                                  |
/// | `PORT`                   | `8080`                                                     |
/// | `CORS_ORIGINS`           | `http://localhost:5173`                                    |
/// | `GITHUB_API_URL`         | `https://api.github.com`                                   |
/// | `GITHUB_OWNER`           | required                                                   |
/// | `GITHUB_REPO`            | required                                                   |
/// | `PROJECTS_FILE_PATH`     | `projects.json`                                            |
/// | `PUBLISHED_SNAPSHOT_URL` | `https://raw.githubusercontent.com/{owner}/{repo}/HEAD/{path}` |
/// | `OPERATOR_USERNAME`      | required                                                   |
/// | `OPERATOR_PASSWORD`      | required                                                   |
/// | `HTTP_TIMEOUT_SECS`      | `30`                                                       |
/// | `MAX_IMAGE_BYTES`        | `768000`                                                   |
/// | `GEMINI_API_URL`         | `https://generativelanguage.googleapis.com`                |
/// | `GEMINI_API_KEY`         | unset (assistant answers with a fallback)                  |
/// | `GEMINI_MODEL`           | `gemini-2.0-flash`                                         |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub github_api_url: String,
    pub github_owner: String,
    pub github_repo: String,
    pub projects_file_path: String,
    pub published_snapshot_url: String,
    pub operator_username: String,
    pub operator_password: String,
    pub http_timeout_secs: u64,
    pub max_image_bytes: usize,
    pub gemini_api_url: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as `from_env` but reads variables through `lookup`; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let or = |name: &str, default: &str| get(name).unwrap_or_else(|| default.to_string());
        let required = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));

        let github_owner = required("GITHUB_OWNER")?;
        let github_repo = required("GITHUB_REPO")?;
        let projects_file_path = or("PROJECTS_FILE_PATH", "projects.json");
        let published_snapshot_url = get("PUBLISHED_SNAPSHOT_URL").unwrap_or_else(|| {
            format!(
                "https://raw.githubusercontent.com/{github_owner}/{github_repo}/HEAD/{}",
                projects_file_path.trim_start_matches('/')
            )
        });

        Ok(Self {
            host: or("HOST", "0.0.0.0"),
            port: parse(&get, "PORT", "u16", 8080)?,
            cors_origins: or("CORS_ORIGINS", "http://localhost:5173")
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            github_api_url: or("GITHUB_API_URL", "https://api.github.com"),
            github_owner,
            github_repo,
            projects_file_path,
            published_snapshot_url,
            operator_username: required("OPERATOR_USERNAME")?,
            operator_password: required("OPERATOR_PASSWORD")?,
            http_timeout_secs: parse(&get, "HTTP_TIMEOUT_SECS", "u64", 30)?,
            max_image_bytes: parse(&get, "MAX_IMAGE_BYTES", "usize", 768_000)?,
            gemini_api_url: or(
                "GEMINI_API_URL",
                "https://generativelanguage.googleapis.com",
            ),
            gemini_api_key: get("GEMINI_API_KEY"),
            gemini_model: or("GEMINI_MODEL", "gemini-2.0-flash"),
        })
    }
}

fn parse<T: std::str::FromStr>(
    get: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match get(name) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            expected,
            value,
        }),
    }
}
