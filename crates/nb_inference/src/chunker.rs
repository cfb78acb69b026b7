//! Word-bounded splitting of long documents.

/// Number of whitespace-delimited words in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Splits `text` into chunks of at most `max_words` words.
///
/// Words are never split, chunks keep the original word order and the
/// last chunk may be shorter. A `max_words` of zero is treated as one.
pub fn chunk(text: &str, max_words: usize) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    words
        .chunks(max_words.max(1))
        .map(|chunk| chunk.join(" "))
        .collect()
}
