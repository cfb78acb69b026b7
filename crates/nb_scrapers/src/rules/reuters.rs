use nb_core::Result;
use scraper::Html;
use url::Url;

use super::{utils, SiteRule};

#[derive(Debug, Clone, Default)]
pub struct ReutersRule;

impl ReutersRule {
    pub fn new() -> Self {
        Self
    }

    const BASE_URL: &'static str = "https://www.reuters.com";
    const SECTIONS: [&'static str; 3] = ["/world", "/business", "/markets"];
}

impl SiteRule for ReutersRule {
    fn name(&self) -> &str {
        "Reuters"
    }

    fn can_handle(&self, url: &str) -> bool {
        url.contains("reuters.com")
    }

    fn extract_links(&self, document: &Html, _listing_url: &Url) -> Result<Vec<String>> {
        Ok(utils::hrefs(document, "a[href]")?
            .into_iter()
            .map(|href| {
                if Self::SECTIONS.iter().any(|section| href.starts_with(section)) {
                    format!("{}{}", Self::BASE_URL, href)
                } else {
                    href.to_string()
                }
            })
            .filter(|url| url.starts_with("http") && url.contains("/article/"))
            .collect())
    }
}
