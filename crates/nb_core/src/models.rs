use std::fmt;

use async_trait::async_trait;

use crate::types::SummaryParams;
use crate::Result;

#[async_trait]
pub trait InferenceModel: Send + Sync + fmt::Debug {
    /// Human readable backend name
    fn name(&self) -> &str;

    /// Condense `text` into a summary bounded by `params`.
    ///
    /// Implementations may assume the input stays under the model's input
    /// ceiling; splitting longer documents is the caller's job.
    async fn summarize(&self, text: &str, params: SummaryParams) -> Result<String>;
}
