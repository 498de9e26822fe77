// Domain models for the stock tracker.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Item name -> quantity, in insertion order.
///
/// This is also the exact shape of the persisted file: a flat JSON object
/// whose keys are item names and whose values are integers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockLevels(pub IndexMap<String, i64>);

impl StockLevels {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<const N: usize> From<[(&str, i64); N]> for StockLevels {
    fn from(entries: [(&str, i64); N]) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(item, qty)| (item.to_string(), qty))
                .collect(),
        )
    }
}

/// A single "added stock" record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub at: DateTime<Utc>,
    pub item: String,
    pub qty: i64,
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: Added {} of {}", self.at, self.qty, self.item)
    }
}

/// Caller-owned audit trail for additions.
///
/// Lives only as long as the caller keeps it; nothing here is written to disk.
#[derive(Debug, Clone, Default)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, item: &str, qty: i64) {
        self.entries.push(AuditEntry {
            at: Utc::now(),
            item: item.to_string(),
            qty,
        });
    }

    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_entry_format() {
        let mut log = AuditLog::new();
        log.record("apple", 10);

        let line = log.entries()[0].to_string();
        assert!(line.ends_with(": Added 10 of apple"), "got {line}");
    }

    #[test]
    fn test_stock_levels_keep_insertion_order() {
        let levels = StockLevels::from([("pear", 2), ("apple", 7), ("banana", 12)]);
        let names: Vec<&str> = levels.0.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["pear", "apple", "banana"]);
    }
}
