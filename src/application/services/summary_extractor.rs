use crate::domain::Vocabulary;

const ELLIPSIS: &str = "...";

/// First line longer than `summary_min_chars`, cut to `summary_max_chars`.
pub fn extract_summary(text: &str, vocabulary: &Vocabulary) -> String {
    text.split('\n')
        .map(str::trim)
        .find(|line| line.chars().count() > vocabulary.summary_min_chars)
        .map(|line| truncate_chars(line, vocabulary.summary_max_chars))
        .unwrap_or_default()
}

/// Short sentences near the start of the text that mention a feature keyword.
pub fn extract_features(text: &str, vocabulary: &Vocabulary) -> Vec<String> {
    text.split('.')
        .take(vocabulary.feature_sentence_window)
        .map(str::trim)
        .filter(|sentence| {
            !sentence.is_empty()
                && sentence.chars().count() < vocabulary.feature_max_chars
                && vocabulary
                    .feature_keywords
                    .iter()
                    .any(|keyword| sentence.contains(keyword.as_str()))
        })
        .take(vocabulary.field_item_limit)
        .map(str::to_string)
        .collect()
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}{ELLIPSIS}", &text[..byte_idx]),
        None => text.to_string(),
    }
}
