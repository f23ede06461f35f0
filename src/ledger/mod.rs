//! Customer ledgers: bills, payments and outstanding balances.
//!
//! Balances are plain decimal subtraction of the stored bill total and the
//! amount paid against it.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use godown::ledger::*;
//! use rust_decimal_macros::dec;
//!
//! let day = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap();
//! let mut ledger = CustomerLedger::new("Ganesh Traders");
//! ledger.add_bill(LedgerEntry::new("INV/2024-25/0001", day, dec!(2771)));
//! ledger.record_payment(Payment::new(day, dec!(1000), PaymentMode::Upi)).unwrap();
//!
//! assert_eq!(ledger.outstanding(), dec!(1771));
//! ```

mod payment;

pub use payment::*;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{Booking, ChargeConfig, GodownError, LineItem, calculate_totals, round_display};

/// One bill in a customer's ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub bill_number: String,
    pub date: NaiveDate,
    /// Bill grand total.
    pub total: Decimal,
    /// Amount paid against this bill so far.
    pub paid: Decimal,
}

impl LedgerEntry {
    pub fn new(bill_number: impl Into<String>, date: NaiveDate, total: Decimal) -> Self {
        Self {
            bill_number: bill_number.into(),
            date,
            total,
            paid: Decimal::ZERO,
        }
    }

    /// Ledger line for a booking. Totals are recalculated when missing.
    pub fn from_booking(booking: &Booking) -> Self {
        let total = booking.totals.as_ref().map_or_else(
            || calculate_totals(&booking.items, &booking.charges).grand_total,
            |t| t.grand_total,
        );
        Self::new(booking.bill_number.clone(), booking.date, total)
    }

    /// Replace the total after the bill's cart or charges changed.
    /// Returns the new balance, negative when the bill is now overpaid.
    ///
    /// For a bill held in a [`CustomerLedger`] use
    /// [`CustomerLedger::recompute`], which moves any overpayment to advance.
    pub fn recompute(&mut self, items: &[LineItem], charges: &ChargeConfig) -> Decimal {
        let totals = calculate_totals(items, charges);
        tracing::debug!(
            bill_number = %self.bill_number,
            old = %self.total,
            new = %totals.grand_total,
            "ledger entry recomputed"
        );
        self.total = totals.grand_total;
        self.balance()
    }

    /// Amount still owed on this bill (negative when overpaid).
    pub fn balance(&self) -> Decimal {
        round_display(self.total - self.paid)
    }

    pub fn is_settled(&self) -> bool {
        self.balance() <= Decimal::ZERO
    }
}

/// All bills and payments of one customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerLedger {
    pub customer: String,
    entries: Vec<LedgerEntry>,
    payments: Vec<Payment>,
    /// Payments not yet matched to a bill.
    advance: Decimal,
}

impl CustomerLedger {
    pub fn new(customer: impl Into<String>) -> Self {
        Self {
            customer: customer.into(),
            entries: Vec::new(),
            payments: Vec::new(),
            advance: Decimal::ZERO,
        }
    }

    /// Add a bill. Any advance on account is applied to it straight away.
    pub fn add_bill(&mut self, entry: LedgerEntry) {
        self.entries.push(entry);
        self.entries.sort_by(|a, b| a.date.cmp(&b.date));
        self.apply_advance();
    }

    /// Record a payment, settling the oldest open bills first.
    /// Whatever is left over is kept as advance.
    pub fn record_payment(&mut self, payment: Payment) -> Result<(), GodownError> {
        if payment.amount <= Decimal::ZERO {
            return Err(GodownError::Ledger(format!(
                "payment amount must be positive, got {}",
                payment.amount
            )));
        }

        self.advance += payment.amount;
        self.apply_advance();

        tracing::debug!(
            customer = %self.customer,
            amount = %payment.amount,
            advance = %self.advance,
            "payment recorded"
        );
        self.payments.push(payment);
        Ok(())
    }

    /// Re-total a bill after its cart or charges were edited.
    ///
    /// Money already paid beyond the new total becomes advance and goes to
    /// the oldest open bills. Returns the bill's new balance.
    pub fn recompute(
        &mut self,
        bill_number: &str,
        items: &[LineItem],
        charges: &ChargeConfig,
    ) -> Result<Decimal, GodownError> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.bill_number == bill_number)
            .ok_or_else(|| {
                GodownError::Ledger(format!(
                    "bill {bill_number} is not in the ledger of {}",
                    self.customer
                ))
            })?;

        let entry = &mut self.entries[idx];
        let balance = entry.recompute(items, charges);
        if balance < Decimal::ZERO {
            entry.paid += balance;
            self.advance -= balance;
        }
        self.apply_advance();
        Ok(self.entries[idx].balance())
    }

    /// Spend the advance on open bills, oldest first.
    fn apply_advance(&mut self) {
        for entry in self.entries.iter_mut() {
            if self.advance <= Decimal::ZERO {
                break;
            }
            let due = entry.balance();
            if due <= Decimal::ZERO {
                continue;
            }
            let applied = self.advance.min(due);
            entry.paid += applied;
            self.advance -= applied;
        }
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    pub fn entry(&self, bill_number: &str) -> Option<&LedgerEntry> {
        self.entries.iter().find(|e| e.bill_number == bill_number)
    }

    pub fn advance(&self) -> Decimal {
        self.advance
    }

    pub fn total_billed(&self) -> Decimal {
        self.entries.iter().map(|e| e.total).sum()
    }

    pub fn total_paid(&self) -> Decimal {
        self.payments.iter().map(|p| p.amount).sum()
    }

    /// Total billed minus total paid; negative when the customer is in credit.
    pub fn outstanding(&self) -> Decimal {
        round_display(self.total_billed() - self.total_paid())
    }

    /// Bills with money still owed, oldest first.
    pub fn open_bills(&self) -> Vec<&LedgerEntry> {
        self.entries.iter().filter(|e| !e.is_settled()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, d).unwrap()
    }

    #[test]
    fn balance_is_numeric_subtraction() {
        let mut e = LedgerEntry::new("B1", day(1), dec!(1000.50));
        e.paid = dec!(250.25);
        assert_eq!(e.balance(), dec!(750.25));
        e.paid = dec!(1100);
        assert_eq!(e.balance(), dec!(-99.50));
        assert!(e.is_settled());
    }

    #[test]
    fn payments_settle_oldest_first() {
        let mut l = CustomerLedger::new("Ganesh Traders");
        l.add_bill(LedgerEntry::new("B2", day(5), dec!(500)));
        l.add_bill(LedgerEntry::new("B1", day(1), dec!(300)));
        l.record_payment(Payment::new(day(6), dec!(400), PaymentMode::Cash))
            .unwrap();

        assert_eq!(l.entries()[0].bill_number, "B1");
        assert_eq!(l.entries()[0].balance(), dec!(0));
        assert_eq!(l.entries()[1].balance(), dec!(400));
        assert_eq!(l.outstanding(), dec!(400));
        assert_eq!(l.open_bills().len(), 1);
    }

    #[test]
    fn overpayment_becomes_advance() {
        let mut l = CustomerLedger::new("Ganesh Traders");
        l.add_bill(LedgerEntry::new("B1", day(1), dec!(300)));
        l.record_payment(Payment::new(day(2), dec!(500), PaymentMode::BankTransfer))
            .unwrap();
        assert_eq!(l.advance(), dec!(200));
        assert_eq!(l.outstanding(), dec!(-200));

        l.add_bill(LedgerEntry::new("B2", day(3), dec!(150)));
        assert_eq!(l.advance(), dec!(50));
        assert!(l.entries()[1].is_settled());
    }

    #[test]
    fn lowered_bill_releases_advance() {
        let mut l = CustomerLedger::new("Ganesh Traders");
        l.add_bill(LedgerEntry::new("A", day(1), dec!(1000)));
        l.record_payment(Payment::new(day(2), dec!(1000), PaymentMode::Cash))
            .unwrap();

        // One box at 900, no packing, no tax.
        let items = [LineItem {
            product_id: "p".into(),
            product_name: "Chakkar".into(),
            brand: String::new(),
            cases: 1,
            per_case: 1,
            rate_per_box: dec!(900),
            discount_percent: Decimal::ZERO,
            godown: None,
        }];
        let charges = ChargeConfig {
            apply_processing_fee: false,
            ..ChargeConfig::default()
        };
        assert_eq!(l.recompute("A", &items, &charges).unwrap(), dec!(0));
        assert_eq!(l.advance(), dec!(100));
        assert_eq!(l.entry("A").unwrap().paid, dec!(900));

        l.add_bill(LedgerEntry::new("B", day(3), dec!(500)));
        assert_eq!(l.advance(), dec!(0));
        assert_eq!(l.entry("B").unwrap().balance(), dec!(400));
        assert_eq!(l.outstanding(), dec!(400));
        let open: Decimal = l.open_bills().iter().map(|e| e.balance()).sum();
        assert_eq!(open, l.outstanding());

        assert!(matches!(
            l.recompute("missing", &items, &charges),
            Err(GodownError::Ledger(_))
        ));
    }

    #[test]
    fn non_positive_payment_rejected() {
        let mut l = CustomerLedger::new("X");
        assert!(matches!(
            l.record_payment(Payment::new(day(1), dec!(0), PaymentMode::Cash)),
            Err(GodownError::Ledger(_))
        ));
        assert!(l.payments().is_empty());
    }
}
