use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{DispatchEntry, DispatchLine, DispatchLog, StockBook};
use crate::core::{DocumentKind, GodownError, LineItem, Party, to_slug};

/// Delivery challan: the document travelling with dispatched goods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryChallan {
    pub number: String,
    pub date: NaiveDate,
    pub customer: Party,
    pub vehicle_number: Option<String>,
    pub transport: Option<String>,
    /// Lines at list rate, tagged with the godown short code.
    pub items: Vec<LineItem>,
}

impl DeliveryChallan {
    pub fn total_cases(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.cases)).sum()
    }

    /// `Challan_DC-0001.pdf`.
    pub fn pdf_filename(&self) -> String {
        DocumentKind::DeliveryChallan.pdf_filename(&self.number)
    }
}

/// Collects challan lines, then moves stock and logs the dispatch in one step.
pub struct DeliveryChallanBuilder {
    number: String,
    date: NaiveDate,
    customer: Option<Party>,
    vehicle_number: Option<String>,
    transport: Option<String>,
    lines: Vec<(String, String, u32)>,
}

impl DeliveryChallanBuilder {
    pub fn new(number: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            number: number.into(),
            date,
            customer: None,
            vehicle_number: None,
            transport: None,
            lines: Vec::new(),
        }
    }

    pub fn customer(mut self, party: Party) -> Self {
        self.customer = Some(party);
        self
    }

    /// Vehicle registration, upper-cased without spaces.
    pub fn vehicle_number(mut self, vehicle: impl AsRef<str>) -> Self {
        let v: String = vehicle
            .as_ref()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        self.vehicle_number = Some(v.to_uppercase());
        self
    }

    pub fn transport(mut self, name: impl Into<String>) -> Self {
        self.transport = Some(name.into());
        self
    }

    pub fn add_line(mut self, godown: &str, product_id: impl Into<String>, cases: u32) -> Self {
        self.lines
            .push((to_slug(&godown.replace('_', " ")), product_id.into(), cases));
        self
    }

    /// Allocate every line from `stock` and record the dispatch in `log`.
    ///
    /// All-or-nothing: every line is checked before any stock moves, so a
    /// shortage on one line leaves the stock book unchanged.
    pub fn dispatch(
        self,
        stock: &mut StockBook,
        log: &mut DispatchLog,
    ) -> Result<DeliveryChallan, GodownError> {
        let customer = self
            .customer
            .ok_or_else(|| GodownError::Builder("customer is required".into()))?;
        if self.number.trim().is_empty() {
            return Err(GodownError::Builder("challan number is required".into()));
        }
        if self.lines.is_empty() {
            return Err(GodownError::Builder("challan has no lines".into()));
        }
        if log.find(&self.number).is_some() {
            return Err(GodownError::Builder(format!(
                "challan {} was already dispatched",
                self.number
            )));
        }

        // Same product requested twice from one godown counts against one balance.
        let mut demand: BTreeMap<(&str, &str), u32> = BTreeMap::new();
        for (godown, product_id, cases) in &self.lines {
            if *cases == 0 {
                return Err(GodownError::Builder(format!(
                    "line for {product_id} has 0 cases"
                )));
            }
            let total = demand
                .entry((godown.as_str(), product_id.as_str()))
                .or_insert(0);
            *total = total.saturating_add(*cases);
        }
        for ((godown, product_id), cases) in &demand {
            let available = stock.available(godown, product_id);
            if available < *cases {
                return Err(GodownError::Stock(format!(
                    "only {available} cases of {product_id} left in {godown}, {cases} requested"
                )));
            }
        }

        let mut items = Vec::with_capacity(self.lines.len());
        let mut dispatched = Vec::with_capacity(self.lines.len());
        for (godown, product_id, cases) in &self.lines {
            let line = stock.cart_line(godown, product_id, *cases, Decimal::ZERO)?;
            stock.allocate(godown, product_id, *cases)?;
            dispatched.push(DispatchLine {
                godown: godown.clone(),
                product_id: line.product_id.clone(),
                product_name: line.product_name.clone(),
                brand: line.brand.clone(),
                cases: line.cases,
                per_case: line.per_case,
            });
            items.push(line);
        }

        log.record(DispatchEntry {
            challan_number: self.number.clone(),
            date: self.date,
            customer_name: customer.name.clone(),
            vehicle_number: self.vehicle_number.clone(),
            lines: dispatched,
        });

        Ok(DeliveryChallan {
            number: self.number,
            date: self.date,
            customer,
            vehicle_number: self.vehicle_number,
            transport: self.transport,
            items,
        })
    }
}
