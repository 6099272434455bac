use regex::Regex;

/// Pulls `label : value` lines out of extracted text.
pub struct SpecificationExtractor {
    patterns: Vec<Regex>,
    limit: usize,
}

impl SpecificationExtractor {
    pub fn new(labels: &[String], limit: usize) -> Result<Self, regex::Error> {
        let patterns = labels
            .iter()
            .filter(|label| !label.trim().is_empty())
            .map(|label| Regex::new(&format!(r"(?i){}\s*:\s*([^\n]+)", regex::escape(label))))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns, limit })
    }

    /// Values in label order, then in order of appearance.
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.patterns
            .iter()
            .flat_map(|pattern| pattern.captures_iter(text))
            .filter_map(|captures| captures.get(1))
            .map(|value| value.as_str().trim().to_string())
            .filter(|value| !value.is_empty())
            .take(self.limit)
            .collect()
    }
}
