use kia_metadata::application::services::extract_price;

#[test]
fn given_won_amount_when_extracting_then_returns_verbatim_mention() {
    assert_eq!(
        extract_price("2025 EV6 출시, 가격 4,500만원, SUV 전기차"),
        Some("4,500만원")
    );
}

#[test]
fn given_dollar_amount_when_extracting_then_keeps_cents() {
    assert_eq!(extract_price("MSRP $45,000.99 plus tax"), Some("$45,000.99"));
}

#[test]
fn given_cheonman_won_when_extracting_then_matches() {
    assert_eq!(extract_price("예상 가격 3000 천만원"), Some("3000 천만원"));
}

#[test]
fn given_both_currencies_when_extracting_then_leftmost_mention_wins() {
    assert_eq!(
        extract_price("Starting at $42,000 or 5,200만원"),
        Some("$42,000")
    );
    assert_eq!(
        extract_price("5,200만원 (about $42,000)"),
        Some("5,200만원")
    );
}

#[test]
fn given_no_price_when_extracting_then_returns_none() {
    assert_eq!(extract_price("2025년 출시 예정, 100원 할인"), None);
    assert_eq!(extract_price(""), None);
}

#[test]
fn given_same_text_when_extracting_twice_then_results_match() {
    let text = "가격 6,000만원부터";

    assert_eq!(extract_price(text), extract_price(text));
}
