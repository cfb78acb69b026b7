use nb_core::Result;
use scraper::Html;
use url::Url;

use super::{utils, SiteRule};

#[derive(Debug, Clone, Default)]
pub struct BbcRule;

impl BbcRule {
    pub fn new() -> Self {
        Self
    }

    const BASE_URL: &'static str = "https://www.bbc.com";
}

impl SiteRule for BbcRule {
    fn name(&self) -> &str {
        "BBC News"
    }

    fn can_handle(&self, url: &str) -> bool {
        url.contains("bbc.com/news")
    }

    fn extract_links(&self, document: &Html, _listing_url: &Url) -> Result<Vec<String>> {
        Ok(utils::hrefs(document, "a.gs-c-promo-heading[href]")?
            .into_iter()
            .map(|href| {
                if href.starts_with("/news") {
                    format!("{}{}", Self::BASE_URL, href)
                } else {
                    href.to_string()
                }
            })
            .filter(|url| url.starts_with("http"))
            .collect())
    }
}
