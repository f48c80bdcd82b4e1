use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

use portfolio_cms::modules::portfolio::adapters::outbound::assistant_gemini::GeminiAssistant;
use portfolio_cms::modules::portfolio::adapters::outbound::published_snapshot_http::HttpPublishedSnapshot;
use portfolio_cms::modules::portfolio::core::session::OperatorIdentity;
use portfolio_cms::modules::portfolio::use_cases::load_published_snapshot::handler::load_published_snapshot;
use portfolio_cms::shared::core::primitives::{Clock, SystemClock};
use portfolio_cms::shared::infrastructure::file_store::github::GitHubFileStore;
use portfolio_cms::shell::config::AppConfig;
use portfolio_cms::shell::http::router;
use portfolio_cms::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let client = reqwest::Client::builder()
        .user_agent(concat!("portfolio_cms/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .build()?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let published = HttpPublishedSnapshot::new(
        client.clone(),
        config.published_snapshot_url.clone(),
        clock.clone(),
    );
    let store = load_published_snapshot(&published).await;

    let file_store = Arc::new(GitHubFileStore::new(
        client.clone(),
        &config.github_api_url,
        &config.github_owner,
        &config.github_repo,
        &config.projects_file_path,
    ));
    tracing::info!(url = %file_store.contents_url(), "committing to GitHub contents API");

    let assistant = Arc::new(GeminiAssistant::new(
        client,
        &config.gemini_api_url,
        &config.gemini_model,
        config.gemini_api_key.clone(),
    ));
    if config.gemini_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY not set, chat will answer with the fallback reply");
    }

    let state = AppState::new(
        store,
        OperatorIdentity {
            username: config.operator_username.clone(),
            password: config.operator_password.clone(),
        },
        file_store,
        assistant,
        clock,
        config.max_image_bytes,
    );
    let app = router(state, &config.cors_origins);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!("Portfolio listening on http://{}", addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
