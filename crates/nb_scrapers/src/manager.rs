use std::sync::Arc;

use futures::stream::{self, StreamExt};
use nb_core::{ArticleRecord, PageFetcher, Result};
use tracing::{error, info, warn};

use crate::article::extract_article;
use crate::rules::RuleRegistry;

pub const DEFAULT_CONCURRENCY: usize = 4;

/// Fetches listing and article pages and runs them through the extractors.
///
/// Holds no per-request state; one manager can serve every request.
pub struct ScraperManager {
    fetcher: Arc<dyn PageFetcher>,
    rules: RuleRegistry,
    concurrency: usize,
}

impl ScraperManager {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            fetcher,
            rules: RuleRegistry::default(),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    pub fn with_rules(mut self, rules: RuleRegistry) -> Self {
        self.rules = rules;
        self
    }

    /// Number of article pages fetched at once by [`Self::get_top_news`].
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn rules(&self) -> &RuleRegistry {
        &self.rules
    }

    pub async fn try_get_article_links(&self, url: &str, limit: usize) -> Result<Vec<String>> {
        let html = self.fetcher.fetch(url).await?;
        self.rules.extract_links(url, &html, limit)
    }

    /// Article links found on a listing page. Failures are logged and
    /// yield an empty list.
    pub async fn get_article_links(&self, url: &str, limit: usize) -> Vec<String> {
        match self.try_get_article_links(url, limit).await {
            Ok(links) => {
                info!("🔗 Found {} article links on {}", links.len(), url);
                links
            }
            Err(e) => {
                error!("Error getting top news from {}: {}", url, e);
                Vec::new()
            }
        }
    }

    pub async fn try_scrape_article(&self, url: &str) -> Result<ArticleRecord> {
        let html = self.fetcher.fetch(url).await?;
        extract_article(url, &html)
    }

    /// Scrapes a single article, logging and absorbing any failure.
    pub async fn scrape_article(&self, url: &str) -> Option<ArticleRecord> {
        match self.try_scrape_article(url).await {
            Ok(article) => {
                info!("📰 Scraped article: {}", article.title);
                Some(article)
            }
            Err(nb_core::Error::ExtractionEmpty(_)) => {
                warn!("No content found for URL: {}", url);
                None
            }
            Err(e) => {
                error!("Error scraping {}: {}", url, e);
                None
            }
        }
    }

    /// Scrapes up to `limit` articles linked from a listing page.
    ///
    /// Pages are fetched concurrently but results keep the order of the
    /// link list; articles that fail are left out.
    pub async fn get_top_news(&self, url: &str, limit: usize) -> Vec<ArticleRecord> {
        let links = self.get_article_links(url, limit).await;

        stream::iter(links)
            .map(|link| async move { self.scrape_article(&link).await })
            .buffered(self.concurrency)
            .filter_map(|article| async move { article })
            .collect()
            .await
    }
}
