//! Godown stock, delivery challans and the dispatch log.
//!
//! Stock is counted in whole cases per (godown, product). Godown names and
//! product types are kept in their stored `lower_snake_case` form; use
//! [`crate::core::capitalize`] for display.
//!
//! # Example
//!
//! ```
//! use godown::stock::*;
//! use rust_decimal_macros::dec;
//!
//! let mut stock = StockBook::new();
//! stock.upsert(StockItem::new("main_godown_2", "p-1", "Flower Pot Big", 40, 10, dec!(55)));
//!
//! let line = stock.cart_line("main_godown_2", "p-1", 4, dec!(0)).unwrap();
//! assert_eq!(line.godown.as_deref(), Some("M2"));
//! assert_eq!(stock.available("main_godown_2", "p-1"), 40);
//! ```

mod challan;
mod dispatch;

pub use challan::*;
pub use dispatch::*;

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{GodownError, LineItem, godown_short_code, to_slug};

/// Stock of one product in one godown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    /// Stored godown name, e.g. `"main_godown_2"`.
    pub godown: String,
    pub product_id: String,
    pub product_name: String,
    pub brand: String,
    /// Stored product type, e.g. `"multi_shot"`.
    pub product_type: String,
    /// Cases on hand.
    pub cases: u32,
    pub per_case: u32,
    pub rate_per_box: Decimal,
}

impl StockItem {
    pub fn new(
        godown: impl AsRef<str>,
        product_id: impl Into<String>,
        product_name: impl Into<String>,
        cases: u32,
        per_case: u32,
        rate_per_box: Decimal,
    ) -> Self {
        Self {
            godown: to_slug(&godown.as_ref().replace('_', " ")),
            product_id: product_id.into(),
            product_name: product_name.into(),
            brand: String::new(),
            product_type: String::new(),
            cases,
            per_case,
            rate_per_box,
        }
    }

    pub fn with_brand(mut self, brand: impl AsRef<str>) -> Self {
        self.brand = to_slug(&brand.as_ref().replace('_', " "));
        self
    }

    pub fn with_type(mut self, product_type: impl AsRef<str>) -> Self {
        self.product_type = to_slug(&product_type.as_ref().replace('_', " "));
        self
    }

    /// Boxes on hand.
    pub fn boxes(&self) -> u64 {
        u64::from(self.cases) * u64::from(self.per_case)
    }

    /// Stock value at the list rate.
    pub fn value(&self) -> Decimal {
        Decimal::from(self.boxes()).saturating_mul(self.rate_per_box)
    }

    pub fn is_low(&self, threshold_cases: u32) -> bool {
        self.cases <= threshold_cases
    }
}

/// Per-godown totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GodownSummary {
    pub godown: String,
    /// Short code used on cart lines.
    pub code: String,
    pub product_count: usize,
    pub total_cases: u64,
    pub total_boxes: u64,
    pub total_value: Decimal,
}

/// Cases taken out of a godown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAllocation {
    pub godown: String,
    pub godown_code: String,
    pub product_id: String,
    pub cases: u32,
    /// Cases left in the godown afterwards.
    pub remaining: u32,
}

/// Stock across all godowns, keyed by (godown, product id).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StockBook {
    items: BTreeMap<(String, String), StockItem>,
}

fn key(godown: &str, product_id: &str) -> (String, String) {
    (to_slug(&godown.replace('_', " ")), product_id.to_string())
}

impl StockBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a stock record.
    pub fn upsert(&mut self, item: StockItem) {
        self.items
            .insert((item.godown.clone(), item.product_id.clone()), item);
    }

    pub fn get(&self, godown: &str, product_id: &str) -> Option<&StockItem> {
        self.items.get(&key(godown, product_id))
    }

    /// Cases on hand, 0 for unknown products.
    pub fn available(&self, godown: &str, product_id: &str) -> u32 {
        self.get(godown, product_id).map_or(0, |i| i.cases)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StockItem> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct godown names, sorted.
    pub fn godowns(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.items.keys().map(|(g, _)| g.as_str()).collect();
        names.dedup();
        names
    }

    /// Receive cases into an existing stock record. Returns the new count.
    pub fn receive(&mut self, godown: &str, product_id: &str, cases: u32) -> Result<u32, GodownError> {
        let item = self.items.get_mut(&key(godown, product_id)).ok_or_else(|| {
            GodownError::Stock(format!("product {product_id} is not stocked in {godown}"))
        })?;
        item.cases = item.cases.saturating_add(cases);
        Ok(item.cases)
    }

    /// Take `cases` out of a godown. Stock is left untouched on error.
    pub fn allocate(
        &mut self,
        godown: &str,
        product_id: &str,
        cases: u32,
    ) -> Result<StockAllocation, GodownError> {
        if cases == 0 {
            return Err(GodownError::Stock("cannot allocate 0 cases".into()));
        }
        let item = self.items.get_mut(&key(godown, product_id)).ok_or_else(|| {
            GodownError::Stock(format!("product {product_id} is not stocked in {godown}"))
        })?;
        if item.cases < cases {
            return Err(GodownError::Stock(format!(
                "only {} cases of {} left in {}, {} requested",
                item.cases, item.product_name, item.godown, cases
            )));
        }
        item.cases -= cases;
        tracing::debug!(
            godown = %item.godown,
            product_id,
            cases,
            remaining = item.cases,
            "stock allocated"
        );
        Ok(StockAllocation {
            godown: item.godown.clone(),
            godown_code: godown_short_code(&item.godown),
            product_id: item.product_id.clone(),
            cases,
            remaining: item.cases,
        })
    }

    /// Build a cart line for a stocked product, tagged with the godown's
    /// short code. Checks availability without reserving anything.
    pub fn cart_line(
        &self,
        godown: &str,
        product_id: &str,
        cases: u32,
        discount_percent: Decimal,
    ) -> Result<LineItem, GodownError> {
        let item = self.get(godown, product_id).ok_or_else(|| {
            GodownError::Stock(format!("product {product_id} is not stocked in {godown}"))
        })?;
        let cases = cases.max(1);
        if item.cases < cases {
            return Err(GodownError::Stock(format!(
                "only {} cases of {} left in {}, {} requested",
                item.cases, item.product_name, item.godown, cases
            )));
        }
        Ok(LineItem {
            product_id: item.product_id.clone(),
            product_name: item.product_name.clone(),
            brand: item.brand.clone(),
            cases,
            per_case: item.per_case.max(1),
            rate_per_box: item.rate_per_box,
            discount_percent,
            godown: Some(godown_short_code(&item.godown)),
        })
    }

    /// Case-insensitive search over product name, brand and type.
    pub fn search(&self, query: &str) -> Vec<&StockItem> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.iter().collect();
        }
        let slug = to_slug(&needle);
        self.iter()
            .filter(|i| {
                i.product_name.to_lowercase().contains(&needle)
                    || i.brand.contains(&slug)
                    || i.product_type.contains(&slug)
            })
            .collect()
    }

    /// Records at or below `threshold_cases`, lowest first.
    pub fn low_stock(&self, threshold_cases: u32) -> Vec<&StockItem> {
        let mut low: Vec<&StockItem> = self.iter().filter(|i| i.is_low(threshold_cases)).collect();
        low.sort_by_key(|i| i.cases);
        low
    }

    pub fn summary_by_godown(&self) -> Vec<GodownSummary> {
        let mut by_godown: BTreeMap<&str, GodownSummary> = BTreeMap::new();
        for item in self.iter() {
            let entry = by_godown
                .entry(item.godown.as_str())
                .or_insert_with(|| GodownSummary {
                    godown: item.godown.clone(),
                    code: godown_short_code(&item.godown),
                    product_count: 0,
                    total_cases: 0,
                    total_boxes: 0,
                    total_value: Decimal::ZERO,
                });
            entry.product_count += 1;
            entry.total_cases += u64::from(item.cases);
            entry.total_boxes = entry.total_boxes.saturating_add(item.boxes());
            entry.total_value = entry.total_value.saturating_add(item.value());
        }
        by_godown.into_values().collect()
    }
}
