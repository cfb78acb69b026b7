use std::fmt;

use nb_core::{InferenceModel, Result, SummaryParams};

use crate::bullets::split_sentences;
use crate::chunker::word_count;

/// Offline extractive model: keeps the leading sentences of the input up
/// to `max_length` words.
pub struct DummyModel;

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

impl DummyModel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DummyModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl InferenceModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn summarize(&self, text: &str, params: SummaryParams) -> Result<String> {
        let max_words = params.max_length.max(1);
        let mut lead = Vec::new();
        let mut words = 0;

        for sentence in split_sentences(text) {
            let count = word_count(sentence);
            if words + count > max_words {
                break;
            }
            words += count;
            lead.push(sentence);
        }

        // First sentence alone is too long; fall back to a word cut
        if lead.is_empty() {
            let words: Vec<&str> = text.split_whitespace().take(max_words).collect();
            return Ok(words.join(" "));
        }
        Ok(lead.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dummy_model() {
        let model = DummyModel::new();
        let text = "This is a test article. It has multiple sentences. This is the third sentence.";

        let summary = model.summarize(text, SummaryParams::default()).await.unwrap();
        assert_eq!(summary, text);

        let params = SummaryParams { max_length: 9, min_length: 1 };
        let summary = model.summarize(text, params).await.unwrap();
        assert_eq!(summary, "This is a test article. It has multiple sentences.");
    }

    #[tokio::test]
    async fn test_long_first_sentence_is_cut() {
        let model = DummyModel::new();
        let params = SummaryParams { max_length: 3, min_length: 1 };
        let summary = model.summarize("one two three four five.", params).await.unwrap();
        assert_eq!(summary, "one two three");
    }
}
