use chrono::Local;
use serde::{Deserialize, Serialize};

/// Placeholder title for pages without a level-1 heading.
pub const NO_TITLE: &str = "No title found";

/// Format used when an article carries no publish date of its own.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const DEFAULT_MAX_LENGTH: usize = 150;
pub const DEFAULT_MIN_LENGTH: usize = 50;

/// An article scraped from a news page.
///
/// `content` is never empty: extraction that finds no paragraph text
/// produces no record at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub title: String,
    pub content: String,
    pub url: String,
    pub date: String,
}

impl ArticleRecord {
    /// Current local time in [`DATE_FORMAT`].
    pub fn timestamp_now() -> String {
        Local::now().format(DATE_FORMAT).to_string()
    }
}

/// An [`ArticleRecord`] together with its bullet-point summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizedRecord {
    #[serde(flatten)]
    pub article: ArticleRecord,
    pub summary: String,
}

/// Length bounds handed to the summarization model, in tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryParams {
    pub max_length: usize,
    pub min_length: usize,
}

impl SummaryParams {
    pub fn new(max_length: Option<usize>, min_length: Option<usize>) -> Self {
        let defaults = Self::default();
        Self {
            max_length: max_length.unwrap_or(defaults.max_length),
            min_length: min_length.unwrap_or(defaults.min_length),
        }
    }
}

impl Default for SummaryParams {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}
