use std::collections::{HashMap, HashSet};

use crate::domain::Vocabulary;

/// Most frequent non-stop-word tokens, highest count first.
///
/// Tokens with equal counts keep the order in which they first appear in
/// `text`. Tokens seen fewer than `keyword_min_frequency` times are dropped.
pub fn extract_keywords(text: &str, vocabulary: &Vocabulary) -> Vec<String> {
    let stop_words: HashSet<String> = vocabulary
        .stop_words
        .iter()
        .map(|w| w.to_lowercase())
        .collect();

    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for token in tokenize(text) {
        if stop_words.contains(&token.to_lowercase()) {
            continue;
        }
        match positions.get(token) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                positions.insert(token, counts.len());
                counts.push((token, 1));
            }
        }
    }

    counts.retain(|(_, count)| *count >= vocabulary.keyword_min_frequency);
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(vocabulary.keyword_limit)
        .map(|(token, _)| token.to_string())
        .collect()
}

/// Splits on anything that is not alphanumeric and drops one-character and
/// purely numeric tokens.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric()).filter(|token| {
        token.chars().nth(1).is_some() && !token.chars().all(|c| c.is_numeric())
    })
}
