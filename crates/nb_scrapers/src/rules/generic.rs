use nb_core::Result;
use scraper::Html;
use url::Url;

use super::{utils, SiteRule};

/// Fallback for sites without a dedicated rule: the first link inside each
/// article-like container.
///
/// Only root-relative and absolute hrefs count. Fragments, query-only and
/// path-relative hrefs usually point back at the listing itself.
#[derive(Debug, Clone, Default)]
pub struct GenericRule;

impl GenericRule {
    pub fn new() -> Self {
        Self
    }

    const CONTAINERS: &'static str = "article.article, article.story, article.news-item, article.card, \
         div.article, div.story, div.news-item, div.card";
}

impl SiteRule for GenericRule {
    fn name(&self) -> &str {
        "Generic"
    }

    fn can_handle(&self, _url: &str) -> bool {
        true
    }

    fn extract_links(&self, document: &Html, listing_url: &Url) -> Result<Vec<String>> {
        let containers = utils::selector(Self::CONTAINERS)?;
        let anchor = utils::selector("a[href]")?;

        Ok(document
            .root_element()
            .select(&containers)
            .filter_map(|container| container.select(&anchor).next())
            .filter_map(|link| link.value().attr("href"))
            .map(str::trim)
            .filter(|href| href.starts_with('/') || href.starts_with("http"))
            .filter_map(|href| listing_url.join(href).ok())
            .filter(|url| matches!(url.scheme(), "http" | "https"))
            .map(String::from)
            .collect())
    }
}
