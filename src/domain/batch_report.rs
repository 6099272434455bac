use std::collections::HashMap;
use std::fmt::Write as _;
use std::hash::Hash;

use chrono::NaiveDateTime;

use super::document_record::{DocumentRecord, UPLOAD_DATE_FORMAT};
use super::source_type::SourceType;

const RULE_WIDTH: usize = 60;
pub const UNMATCHED_LABEL: &str = "(none)";

/// Summary over the successful records of one run. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub processed: usize,
    pub failed: usize,
    pub by_car_model: Vec<(String, usize)>,
    pub by_source_type: Vec<(SourceType, usize)>,
    pub average_page_count: f64,
}

impl BatchReport {
    pub fn from_records(records: &[DocumentRecord], failed: usize) -> Self {
        let by_car_model = count_by(records.iter().map(|r| {
            if r.car_model.is_empty() {
                UNMATCHED_LABEL.to_string()
            } else {
                r.car_model.clone()
            }
        }));
        let by_source_type = count_by(records.iter().map(|r| r.source_type));

        let average_page_count = if records.is_empty() {
            0.0
        } else {
            let pages: usize = records.iter().map(|r| r.page_count).sum();
            pages as f64 / records.len() as f64
        };

        Self {
            processed: records.len(),
            failed,
            by_car_model,
            by_source_type,
            average_page_count,
        }
    }

    pub fn attempted(&self) -> usize {
        self.processed + self.failed
    }

    pub fn render(&self, generated_at: NaiveDateTime) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut out = String::new();

        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "DOCUMENT METADATA REPORT");
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "Total Documents Processed: {}", self.processed);
        if self.failed > 0 {
            let _ = writeln!(out, "Documents Failed: {}", self.failed);
        }
        let _ = writeln!(
            out,
            "Generation Date: {}",
            generated_at.format(UPLOAD_DATE_FORMAT)
        );

        let _ = writeln!(out, "\nCar Model Distribution:");
        for (model, count) in &self.by_car_model {
            let _ = writeln!(out, "  - {model}: {count}");
        }

        let _ = writeln!(out, "\nSource Type Distribution:");
        for (source, count) in &self.by_source_type {
            let _ = writeln!(out, "  - {source}: {count}");
        }

        let _ = writeln!(out, "\nAverage Page Count: {:.2}", self.average_page_count);
        let _ = write!(out, "{rule}");

        out
    }
}

/// Counts descending; equal counts keep first-seen order.
fn count_by<K, I>(items: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for item in items {
        match positions.get(&item) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                positions.insert(item.clone(), counts.len());
                counts.push((item, 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
