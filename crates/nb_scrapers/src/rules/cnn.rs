use nb_core::Result;
use scraper::Html;
use url::Url;

use super::{utils, SiteRule};

#[derive(Debug, Clone, Default)]
pub struct CnnRule;

impl CnnRule {
    pub fn new() -> Self {
        Self
    }

    const BASE_URL: &'static str = "https://www.cnn.com";

    // CNN article paths embed the publish year
    fn is_article(url: &str) -> bool {
        url.starts_with("http") && url.contains("/202") && !url.contains("videos")
    }
}

impl SiteRule for CnnRule {
    fn name(&self) -> &str {
        "CNN"
    }

    fn can_handle(&self, url: &str) -> bool {
        url.contains("cnn.com")
    }

    fn extract_links(&self, document: &Html, _listing_url: &Url) -> Result<Vec<String>> {
        Ok(utils::hrefs(document, "a[href]")?
            .into_iter()
            .map(|href| utils::absolutize(Self::BASE_URL, href))
            .filter(|url| Self::is_article(url))
            .collect())
    }
}
