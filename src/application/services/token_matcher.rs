/// Returns the first token of `tokens`, in table order, that occurs in `text`.
///
/// Matching is a case-sensitive substring search.
pub fn first_match<'a>(text: &str, tokens: &'a [String]) -> Option<&'a str> {
    tokens
        .iter()
        .find(|token| !token.is_empty() && text.contains(token.as_str()))
        .map(String::as_str)
}
