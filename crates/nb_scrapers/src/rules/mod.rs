use nb_core::Result;
use scraper::Html;
use tracing::debug;
use url::Url;

pub mod bbc;
pub mod cnn;
pub mod generic;
pub mod guardian;
pub mod reuters;

pub use bbc::BbcRule;
pub use cnn::CnnRule;
pub use generic::GenericRule;
pub use guardian::GuardianRule;
pub use reuters::ReutersRule;

/// Default number of article links kept per listing page.
pub const DEFAULT_LIMIT: usize = 50;

/// Link extraction strategy for the listing pages of one site.
pub trait SiteRule: Send + Sync {
    /// Returns the name of the rule
    fn name(&self) -> &str;

    /// Returns true if this rule applies to the given listing URL
    fn can_handle(&self, url: &str) -> bool;

    /// Returns candidate article links in document order.
    ///
    /// Duplicates are allowed here; the registry removes them.
    fn extract_links(&self, document: &Html, listing_url: &Url) -> Result<Vec<String>>;
}

/// Ordered set of site rules with a generic fallback.
///
/// Rules are tried in registration order and the first one whose
/// `can_handle` accepts the listing URL wins.
pub struct RuleRegistry {
    rules: Vec<Box<dyn SiteRule>>,
    fallback: GenericRule,
}

impl RuleRegistry {
    /// A registry that only knows the generic fallback.
    pub fn empty() -> Self {
        Self {
            rules: Vec::new(),
            fallback: GenericRule::new(),
        }
    }

    /// Appends a rule after the ones already registered.
    pub fn register(&mut self, rule: Box<dyn SiteRule>) {
        self.rules.push(rule);
    }

    /// All rules in priority order, fallback last.
    pub fn rules(&self) -> impl Iterator<Item = &dyn SiteRule> {
        self.rules
            .iter()
            .map(|r| r.as_ref() as &dyn SiteRule)
            .chain(std::iter::once(&self.fallback as &dyn SiteRule))
    }

    pub fn rule_for(&self, url: &str) -> &dyn SiteRule {
        self.rules
            .iter()
            .find(|r| r.can_handle(url))
            .map(|r| r.as_ref() as &dyn SiteRule)
            .unwrap_or(&self.fallback)
    }

    /// Extracts deduplicated article links from a listing page, keeping
    /// first-seen order and at most `limit` entries.
    pub fn extract_links(&self, listing_url: &str, html: &str, limit: usize) -> Result<Vec<String>> {
        let base = utils::parse_url(listing_url)?;
        let rule = self.rule_for(listing_url);
        debug!("🧭 Using {} rule for {}", rule.name(), listing_url);

        let document = Html::parse_document(html);
        let links = rule.extract_links(&document, &base)?;
        Ok(utils::dedupe_and_limit(links, limit))
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(BbcRule::new()));
        registry.register(Box::new(CnnRule::new()));
        registry.register(Box::new(ReutersRule::new()));
        registry.register(Box::new(GuardianRule::new()));
        registry
    }
}

/// Common utilities for rules and the article extractor
pub(crate) mod utils {
    use std::collections::HashSet;

    use nb_core::{Error, Result};
    use scraper::{ElementRef, Html, Selector};
    use url::Url;

    pub fn parse_url(url: &str) -> Result<Url> {
        Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))
    }

    pub fn selector(css: &str) -> Result<Selector> {
        Selector::parse(css).map_err(|e| Error::Parse(format!("Invalid selector {:?}: {:?}", css, e)))
    }

    /// Trimmed text content of an element.
    pub fn text_of(element: ElementRef<'_>) -> String {
        element.text().collect::<String>().trim().to_string()
    }

    /// `href` values of every element matching `css`, in document order.
    pub fn hrefs<'a>(document: &'a Html, css: &str) -> Result<Vec<&'a str>> {
        let selector = selector(css)?;
        Ok(document
            .root_element()
            .select(&selector)
            .filter_map(|el| el.value().attr("href"))
            .map(str::trim)
            .collect())
    }

    /// Prefixes root-relative paths with `origin`; protocol-relative links
    /// get `https:`. Anything else is returned untouched.
    pub fn absolutize(origin: &str, href: &str) -> String {
        if href.starts_with("//") {
            format!("https:{}", href)
        } else if href.starts_with('/') {
            format!("{}{}", origin, href)
        } else {
            href.to_string()
        }
    }

    pub fn dedupe_and_limit(links: Vec<String>, limit: usize) -> Vec<String> {
        let mut seen = HashSet::new();
        links
            .into_iter()
            .filter(|link| seen.insert(link.clone()))
            .take(limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_selection_order() {
        let registry = RuleRegistry::default();
        assert_eq!(registry.rule_for("https://www.bbc.com/news").name(), "BBC News");
        assert_eq!(registry.rule_for("https://edition.cnn.com/world").name(), "CNN");
        assert_eq!(registry.rule_for("https://www.reuters.com/world/").name(), "Reuters");
        assert_eq!(registry.rule_for("https://www.theguardian.com/international").name(), "The Guardian");
        assert_eq!(registry.rule_for("https://news.example.com/").name(), "Generic");
        // bbc.com outside /news has no dedicated rule
        assert_eq!(registry.rule_for("https://www.bbc.com/sport").name(), "Generic");
    }

    #[test]
    fn test_rules_lists_fallback_last() {
        let registry = RuleRegistry::default();
        let names: Vec<_> = registry.rules().map(|r| r.name().to_string()).collect();
        assert_eq!(names, vec!["BBC News", "CNN", "Reuters", "The Guardian", "Generic"]);
    }

    #[test]
    fn test_register_custom_rule() {
        struct OnlyFirst;

        impl SiteRule for OnlyFirst {
            fn name(&self) -> &str {
                "Only first"
            }

            fn can_handle(&self, url: &str) -> bool {
                url.contains("custom.test")
            }

            fn extract_links(&self, _document: &Html, _listing_url: &Url) -> Result<Vec<String>> {
                Ok(vec!["https://custom.test/a".to_string()])
            }
        }

        let mut registry = RuleRegistry::default();
        registry.register(Box::new(OnlyFirst));
        let links = registry
            .extract_links("https://custom.test/", "<html></html>", 10)
            .unwrap();
        assert_eq!(links, vec!["https://custom.test/a"]);
    }

    #[test]
    fn test_duplicates_keep_first_seen_order() {
        let html = r#"
            <div class="card"><a href="/b">B</a></div>
            <div class="card"><a href="/a">A</a></div>
            <div class="card"><a href="/b">B again</a></div>
        "#;
        let registry = RuleRegistry::default();
        let links = registry.extract_links("https://news.example.com", html, 10).unwrap();
        assert_eq!(links, vec!["https://news.example.com/b", "https://news.example.com/a"]);
    }

    #[test]
    fn test_limit_truncates() {
        let html: String = (0..20)
            .map(|i| format!(r#"<article class="story"><a href="/story-{}">S</a></article>"#, i))
            .collect();
        let registry = RuleRegistry::default();
        let links = registry.extract_links("https://news.example.com", &html, 5).unwrap();
        assert_eq!(links.len(), 5);
        assert_eq!(links[0], "https://news.example.com/story-0");
        assert_eq!(links[4], "https://news.example.com/story-4");

        let links = registry.extract_links("https://news.example.com", &html, 0).unwrap();
        assert!(links.is_empty());
    }

    #[test]
    fn test_invalid_listing_url() {
        let registry = RuleRegistry::default();
        assert!(registry.extract_links("not a url", "<html></html>", 10).is_err());
    }

    #[test]
    fn test_absolutize() {
        assert_eq!(utils::absolutize("https://www.cnn.com", "/2024/a"), "https://www.cnn.com/2024/a");
        assert_eq!(utils::absolutize("https://www.cnn.com", "//cdn.cnn.com/x"), "https://cdn.cnn.com/x");
        assert_eq!(utils::absolutize("https://www.cnn.com", "https://other.com/x"), "https://other.com/x");
        assert_eq!(utils::absolutize("https://www.cnn.com", "mailto:x@y.z"), "mailto:x@y.z");
    }

    #[test]
    fn test_dedupe_and_limit() {
        let links = vec!["a", "b", "a", "c", "b"].into_iter().map(String::from).collect();
        assert_eq!(utils::dedupe_and_limit(links, 10), vec!["a", "b", "c"]);
    }
}
