use serde::Deserialize;

/// Token tables and thresholds that drive metadata derivation.
///
/// Every field has a built-in default, so a vocabulary file only needs to
/// name the tables it overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub car_models: Vec<String>,
    pub car_types: Vec<String>,
    pub engine_types: Vec<String>,
    pub feature_keywords: Vec<String>,
    pub specification_labels: Vec<String>,
    pub stop_words: Vec<String>,
    pub keyword_limit: usize,
    pub keyword_min_frequency: usize,
    pub summary_min_chars: usize,
    pub summary_max_chars: usize,
    pub feature_sentence_window: usize,
    pub feature_max_chars: usize,
    pub field_item_limit: usize,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            car_models: strings(&[
                "EV6",
                "EV9",
                "Niro",
                "Soul",
                "Sportage",
                "Sorento",
                "Carnival",
                "Seltos",
                "K5",
                "K8",
                "Stinger",
                "Telluride",
                "K3",
                "Mohave",
                "Ray",
                "Morning",
                "Picanto",
            ]),
            car_types: strings(&[
                "SUV",
                "Sedan",
                "Electric",
                "Hybrid",
                "MPV",
                "Hatchback",
                "Crossover",
                "Minivan",
            ]),
            engine_types: strings(&[
                "Electric",
                "Gasoline",
                "Diesel",
                "Hybrid",
                "Plug-in Hybrid",
                "Battery Electric",
                "EV",
                "ICE",
            ]),
            feature_keywords: strings(&[
                "안전",
                "편의",
                "퍼포먼스",
                "디자인",
                "연비",
                "주행",
                "시스템",
                "기술",
                "Safety",
                "Convenience",
                "Performance",
                "Design",
                "Efficiency",
                "Technology",
                "Smart",
                "Advanced",
            ]),
            specification_labels: strings(&[
                "배터리", "모터", "출력", "토크", "Battery", "Motor", "Power",
            ]),
            stop_words: strings(&[
                "the",
                "and",
                "or",
                "is",
                "in",
                "at",
                "to",
                "of",
                "입니다",
                "있습니다",
                "합니다",
                "하는",
                "되는",
            ]),
            keyword_limit: 10,
            keyword_min_frequency: 2,
            summary_min_chars: 50,
            summary_max_chars: 200,
            feature_sentence_window: 20,
            feature_max_chars: 200,
            field_item_limit: 5,
        }
    }
}
