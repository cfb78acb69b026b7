/// Marker placed in front of every summary sentence.
pub const BULLET: &str = "• ";

/// Splits `text` into sentences.
///
/// A sentence ends at `.`, `!` or `?` followed by whitespace; the
/// punctuation stays with the sentence. Fragments are trimmed and empty
/// ones dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?') {
            if let Some(&(next, ws)) = chars.peek() {
                if ws.is_whitespace() {
                    sentences.push(&text[start..next]);
                    start = next;
                }
            }
        }
    }
    sentences.push(&text[start..]);

    sentences
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Renders a summary as one bulleted line per sentence.
pub fn to_bullet_points(text: &str) -> String {
    split_sentences(text)
        .into_iter()
        .map(|sentence| format!("{}{}", BULLET, sentence))
        .collect::<Vec<_>>()
        .join("\n")
}
