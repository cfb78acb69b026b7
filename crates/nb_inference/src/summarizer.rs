use std::sync::Arc;

use futures::stream::{self, StreamExt};
use nb_core::{ArticleRecord, Error, InferenceModel, Result, SummarizedRecord, SummaryParams};
use tracing::{debug, error, info, warn};

use crate::bullets::to_bullet_points;
use crate::chunker::{chunk, word_count};

/// Longest input, in words, the model accepts in one call.
pub const MODEL_INPUT_LIMIT: usize = 1024;

/// Chunk size used once a document exceeds [`MODEL_INPUT_LIMIT`].
pub const CHUNK_WORDS: usize = 1000;

pub const DEFAULT_CONCURRENCY: usize = 4;

/// Turns articles into bullet-point summaries using an [`InferenceModel`].
///
/// Documents longer than the model's input limit are split into chunks,
/// each chunk is summarized on its own and the partial summaries are
/// joined in order. A failure on any chunk fails the whole article.
#[derive(Debug, Clone)]
pub struct NewsSummarizer {
    model: Arc<dyn InferenceModel>,
    input_limit: usize,
    chunk_words: usize,
    concurrency: usize,
}

impl NewsSummarizer {
    pub fn new(model: Arc<dyn InferenceModel>) -> Self {
        Self {
            model,
            input_limit: MODEL_INPUT_LIMIT,
            chunk_words: CHUNK_WORDS,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    pub fn with_limits(mut self, input_limit: usize, chunk_words: usize) -> Self {
        self.input_limit = input_limit;
        self.chunk_words = chunk_words.max(1);
        self
    }

    /// Number of articles summarized at once by [`Self::summarize_all`].
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Raw model summary of `text`, chunked when it is too long.
    pub async fn summarize_text(&self, text: &str, params: SummaryParams) -> Result<String> {
        let words = word_count(text);
        if words <= self.input_limit {
            return self.model.summarize(text, params).await;
        }

        let chunks = chunk(text, self.chunk_words);
        debug!("✂️ Split {} words into {} chunks", words, chunks.len());

        let mut summaries = Vec::with_capacity(chunks.len());
        for (i, piece) in chunks.iter().enumerate() {
            debug!("🤖 Summarizing chunk {}/{}", i + 1, chunks.len());
            summaries.push(self.model.summarize(piece, params).await?);
        }
        Ok(summaries.join(" "))
    }

    pub async fn try_summarize(&self, article: &ArticleRecord, params: SummaryParams) -> Result<SummarizedRecord> {
        if article.content.trim().is_empty() {
            return Err(Error::ExtractionEmpty(article.url.clone()));
        }

        let summary = self.summarize_text(&article.content, params).await?;
        Ok(SummarizedRecord {
            article: article.clone(),
            summary: to_bullet_points(&summary),
        })
    }

    /// Summarizes one article. Failures are logged and yield `None`.
    pub async fn summarize(&self, article: &ArticleRecord, params: SummaryParams) -> Option<SummarizedRecord> {
        match self.try_summarize(article, params).await {
            Ok(record) => {
                info!("✨ Summary generated for: {}", article.title);
                Some(record)
            }
            Err(Error::ExtractionEmpty(url)) => {
                warn!("Invalid article format: no content for {}", url);
                None
            }
            Err(e) => {
                error!("Error summarizing article {}: {}", article.url, e);
                None
            }
        }
    }

    /// Summarizes a batch concurrently.
    ///
    /// Output follows input order; articles that fail are dropped without
    /// affecting the others.
    pub async fn summarize_all(&self, articles: Vec<ArticleRecord>, params: SummaryParams) -> Vec<SummarizedRecord> {
        stream::iter(articles)
            .map(|article| async move { self.summarize(&article, params).await })
            .buffered(self.concurrency)
            .filter_map(|record| async move { record })
            .collect()
            .await
    }
}
