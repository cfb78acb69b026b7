use nb_core::Result;
use scraper::Html;
use url::Url;

use super::{utils, SiteRule};

#[derive(Debug, Clone, Default)]
pub struct GuardianRule;

impl GuardianRule {
    pub fn new() -> Self {
        Self
    }

    const BASE_URL: &'static str = "https://www.theguardian.com";
}

impl SiteRule for GuardianRule {
    fn name(&self) -> &str {
        "The Guardian"
    }

    fn can_handle(&self, url: &str) -> bool {
        url.contains("theguardian.com")
    }

    fn extract_links(&self, document: &Html, _listing_url: &Url) -> Result<Vec<String>> {
        Ok(utils::hrefs(document, "a[href]")?
            .into_iter()
            .map(|href| utils::absolutize(Self::BASE_URL, href))
            .filter(|url| url.starts_with("http") && url.contains("/202"))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dated_links() {
        let html = r#"
            <a href="/world/2024/mar/01/some-story">Story</a>
            <a href="/uk">UK</a>
            <a href="https://www.theguardian.com/sport/2024/feb/29/match-report">Match</a>
        "#;
        let base = Url::parse("https://www.theguardian.com/international").unwrap();
        let links = GuardianRule::new()
            .extract_links(&Html::parse_document(html), &base)
            .unwrap();
        assert_eq!(
            links,
            vec![
                "https://www.theguardian.com/world/2024/mar/01/some-story",
                "https://www.theguardian.com/sport/2024/feb/29/match-report",
            ]
        );
    }
}
