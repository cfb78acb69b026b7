use std::time::Duration;

use async_trait::async_trait;
use nb_core::{PageFetcher, Result};
use reqwest::Client;
use tracing::debug;

/// Desktop Chrome identity; several news sites refuse obvious bots.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: BROWSER_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!("🌐 GET {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, HeaderMap, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use nb_core::Error;

    /// Serves `/agent` (echoes the User-Agent), `/missing` (404) and
    /// `/broken` (500) on an ephemeral local port.
    async fn local_server() -> String {
        let app = Router::new()
            .route(
                "/agent",
                get(|headers: HeaderMap| async move {
                    headers
                        .get(header::USER_AGENT)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string()
                }),
            )
            .route("/missing", get(|| async { (StatusCode::NOT_FOUND, "gone") }))
            .route("/broken", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        format!("http://{}", addr)
    }

    #[test]
    fn test_default_config() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_build_client() {
        assert!(HttpFetcher::new(FetchConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn test_fetch_invalid_url_fails() {
        let fetcher = HttpFetcher::new(FetchConfig::default()).unwrap();
        assert!(fetcher.fetch("not a url").await.is_err());
    }

    #[tokio::test]
    async fn test_fetch_sends_browser_user_agent() {
        let base = local_server().await;
        let fetcher = HttpFetcher::new(FetchConfig::default()).unwrap();
        let body = fetcher.fetch(&format!("{}/agent", base)).await.unwrap();
        assert_eq!(body, BROWSER_USER_AGENT);

        let custom = HttpFetcher::new(FetchConfig {
            user_agent: "nb-test/1.0".to_string(),
            ..FetchConfig::default()
        })
        .unwrap();
        assert_eq!(custom.fetch(&format!("{}/agent", base)).await.unwrap(), "nb-test/1.0");
    }

    #[tokio::test]
    async fn test_fetch_non_success_status_fails() {
        let base = local_server().await;
        let fetcher = HttpFetcher::new(FetchConfig::default()).unwrap();

        let missing = fetcher.fetch(&format!("{}/missing", base)).await;
        assert!(matches!(
            missing,
            Err(Error::Http(ref e)) if e.status() == Some(reqwest::StatusCode::NOT_FOUND)
        ));

        let broken = fetcher.fetch(&format!("{}/broken", base)).await;
        assert!(matches!(
            broken,
            Err(Error::Http(ref e)) if e.status() == Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR)
        ));
    }
}
