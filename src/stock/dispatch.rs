use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::to_slug;

/// One product line leaving a godown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchLine {
    pub godown: String,
    pub product_id: String,
    pub product_name: String,
    pub brand: String,
    pub cases: u32,
    pub per_case: u32,
}

/// A recorded dispatch, one per delivery challan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchEntry {
    pub challan_number: String,
    pub date: NaiveDate,
    pub customer_name: String,
    pub vehicle_number: Option<String>,
    pub lines: Vec<DispatchLine>,
}

impl DispatchEntry {
    pub fn total_cases(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.cases)).sum()
    }

    /// Whether any line left from `godown` (stored or display name).
    pub fn touches(&self, godown: &str) -> bool {
        let godown = to_slug(&godown.replace('_', " "));
        self.lines.iter().any(|l| l.godown == godown)
    }
}

/// Append-only dispatch history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DispatchLog {
    entries: Vec<DispatchEntry>,
}

impl DispatchLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: DispatchEntry) {
        tracing::debug!(
            challan = %entry.challan_number,
            cases = entry.total_cases(),
            "dispatch recorded"
        );
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[DispatchEntry] {
        &self.entries
    }

    pub fn find(&self, challan_number: &str) -> Option<&DispatchEntry> {
        self.entries
            .iter()
            .find(|e| e.challan_number == challan_number)
    }

    /// Entries that moved stock out of `godown`, given as stored name
    /// (`"main_godown_2"`) or display name (`"Main Godown 2"`).
    pub fn for_godown(&self, godown: &str) -> Vec<&DispatchEntry> {
        self.entries.iter().filter(|e| e.touches(godown)).collect()
    }

    /// Entries dated within `from..=to`.
    pub fn between(&self, from: NaiveDate, to: NaiveDate) -> Vec<&DispatchEntry> {
        self.entries
            .iter()
            .filter(|e| e.date >= from && e.date <= to)
            .collect()
    }

    pub fn total_cases(&self) -> u64 {
        self.entries.iter().map(DispatchEntry::total_cases).sum()
    }

    /// Cases of one product dispatched across all godowns.
    pub fn cases_for_product(&self, product_id: &str) -> u64 {
        self.entries
            .iter()
            .flat_map(|e| &e.lines)
            .filter(|l| l.product_id == product_id)
            .map(|l| u64::from(l.cases))
            .sum()
    }
}
