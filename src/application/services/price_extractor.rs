use regex::Regex;
use std::sync::LazyLock;

// Won amounts ("4,500만원", "3000 천만원") and dollar amounts ("$30,000.50").
static PRICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:\d{1,3}(?:,\d{3})+|\d+)\s*천?만\s*원|\$\s*(?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d+)?",
    )
    .unwrap()
});

/// The leftmost price mention in `text`, verbatim.
pub fn extract_price(text: &str) -> Option<&str> {
    PRICE.find(text).map(|m| m.as_str())
}
