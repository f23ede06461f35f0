use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::numbering::{DocumentNumberSequence, FinancialYear};
use super::types::{ChargeConfig, DEFAULT_PACKING_PERCENT, Party, TaxMode};

/// Business-wide billing settings.
///
/// Serializable so it can be stored next to the backend's settings record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingConfig {
    /// The business issuing bills.
    pub seller: Party,
    /// Prefix for tax bills (`"INV/"` → `"INV/2024-25/0001"`).
    pub bill_prefix: String,
    /// Prefix for delivery challans (`"DC-"` → `"DC-0001"`).
    pub challan_prefix: String,
    /// Zero-padding width of document numbers.
    pub number_padding: usize,
    /// Packing & forwarding percentage pre-filled on new bills.
    pub packing_percent: Decimal,
    /// Stock at or below this many cases is reported as low.
    pub low_stock_threshold: u32,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            seller: Party::default(),
            bill_prefix: "INV/".into(),
            challan_prefix: "DC-".into(),
            number_padding: 4,
            packing_percent: DEFAULT_PACKING_PERCENT,
            low_stock_threshold: 10,
        }
    }
}

impl BillingConfig {
    /// Charge settings pre-filled on a new bill. The tax regime follows the
    /// seller's state when the customer's state is known.
    pub fn charge_defaults(&self, customer: Option<&Party>) -> ChargeConfig {
        let tax_mode = match (
            self.seller.effective_state_code(),
            customer.and_then(Party::effective_state_code),
        ) {
            (Some(from), Some(to)) => TaxMode::for_supply(from, to),
            _ => TaxMode::None,
        };
        ChargeConfig {
            packing_percent: self.packing_percent,
            tax_mode,
            ..ChargeConfig::default()
        }
    }

    /// Bill number sequence for the financial year containing `date`.
    pub fn bill_sequence(&self, date: NaiveDate) -> DocumentNumberSequence {
        DocumentNumberSequence::for_financial_year(
            self.bill_prefix.clone(),
            FinancialYear::containing(date),
        )
        .with_padding(self.number_padding)
    }

    /// Delivery challan number sequence.
    pub fn challan_sequence(&self) -> DocumentNumberSequence {
        DocumentNumberSequence::new(self.challan_prefix.clone()).with_padding(self.number_padding)
    }
}
