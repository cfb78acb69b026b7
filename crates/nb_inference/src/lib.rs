use std::time::Duration;

pub mod bullets;
pub mod chunker;
pub mod models;
pub mod summarizer;

/// Settings for building a summarization backend.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    /// Backend name, see [`models::create_model`]
    pub model_name: Option<String>,
    /// Model identifier on the hosted inference API
    pub model_id: Option<String>,
    /// Full endpoint URL, for self-hosted deployments
    pub model_url: Option<String>,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model_name: None,
            model_id: None,
            model_url: None,
            timeout: Duration::from_secs(120),
        }
    }
}

pub mod prelude {
    pub use super::models::create_model;
    pub use super::summarizer::NewsSummarizer;
    pub use super::Config;
    pub use nb_core::{ArticleRecord, Error, Result, SummarizedRecord, SummaryParams};
}

pub use models::create_model;
pub use summarizer::NewsSummarizer;
