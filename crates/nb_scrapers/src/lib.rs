pub mod article;
pub mod fetch;
pub mod manager;
pub mod rules;

pub use article::extract_article;
pub use fetch::{FetchConfig, HttpFetcher};
pub use manager::ScraperManager;
pub use rules::{RuleRegistry, SiteRule};

pub mod prelude {
    pub use super::rules::SiteRule;
    pub use nb_core::{ArticleRecord, Error, PageFetcher, Result};
}
