pub mod error;
pub mod fetch;
pub mod models;
pub mod types;

pub use error::{Error, Result};
pub use fetch::PageFetcher;
pub use models::InferenceModel;
pub use types::{ArticleRecord, SummarizedRecord, SummaryParams};
