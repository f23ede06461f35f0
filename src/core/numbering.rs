use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::GodownError;

/// Indian financial year, 1 April to 31 March.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FinancialYear {
    /// Calendar year in which the financial year starts.
    pub start_year: i32,
}

impl FinancialYear {
    pub fn new(start_year: i32) -> Self {
        Self { start_year }
    }

    /// The financial year a date falls in.
    pub fn containing(date: NaiveDate) -> Self {
        if date.month() >= 4 {
            Self::new(date.year())
        } else {
            Self::new(date.year() - 1)
        }
    }

    /// `"2024-25"`.
    pub fn label(&self) -> String {
        format!(
            "{}-{:02}",
            self.start_year,
            (self.start_year + 1).rem_euclid(100)
        )
    }

    pub fn next(&self) -> Self {
        Self::new(self.start_year + 1)
    }
}

/// Gapless bill / challan number sequence.
///
/// Without a financial year numbers look like `"DC-0001"`; with one they
/// restart every April: `"INV/2024-25/0001"`.
#[derive(Debug, Clone)]
pub struct DocumentNumberSequence {
    prefix: String,
    financial_year: Option<FinancialYear>,
    next_number: u64,
    zero_pad: usize,
}

impl DocumentNumberSequence {
    /// Create a sequence without a year component, starting at 1.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            financial_year: None,
            next_number: 1,
            zero_pad: 4,
        }
    }

    /// Create a sequence that restarts every financial year.
    pub fn for_financial_year(prefix: impl Into<String>, year: FinancialYear) -> Self {
        Self {
            financial_year: Some(year),
            ..Self::new(prefix)
        }
    }

    /// Continue from a given number, e.g. the last bill number known to the backend + 1.
    pub fn starting_at(mut self, next_number: u64) -> Self {
        self.next_number = next_number;
        self
    }

    /// Set zero-padding width (default: 4, so "0001").
    pub fn with_padding(mut self, width: usize) -> Self {
        self.zero_pad = width;
        self
    }

    /// Generate the next number.
    pub fn next_number(&mut self) -> String {
        let formatted = self.format(self.next_number);
        self.next_number += 1;
        formatted
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> String {
        self.format(self.next_number)
    }

    pub fn financial_year(&self) -> Option<FinancialYear> {
        self.financial_year
    }

    /// The next raw counter value.
    pub fn next_raw(&self) -> u64 {
        self.next_number
    }

    /// Move to a later financial year, resetting the counter to 1.
    pub fn advance_year(&mut self, year: FinancialYear) -> Result<(), GodownError> {
        let Some(current) = self.financial_year else {
            return Err(GodownError::Numbering(format!(
                "sequence '{}' has no financial year",
                self.prefix
            )));
        };
        if year <= current {
            return Err(GodownError::Numbering(format!(
                "financial year {} must be later than {}",
                year.label(),
                current.label()
            )));
        }
        self.financial_year = Some(year);
        self.next_number = 1;
        Ok(())
    }

    /// Advance to the financial year of `date` if it is later than the current one.
    /// Returns true if the year was advanced.
    pub fn auto_advance(&mut self, date: NaiveDate) -> bool {
        let target = FinancialYear::containing(date);
        match self.financial_year {
            Some(current) if target > current => {
                tracing::debug!(
                    prefix = %self.prefix,
                    from = %current.label(),
                    to = %target.label(),
                    "sequence rolled over to new financial year"
                );
                self.financial_year = Some(target);
                self.next_number = 1;
                true
            }
            _ => false,
        }
    }

    fn format(&self, number: u64) -> String {
        match self.financial_year {
            Some(fy) => format!(
                "{}{}/{:0>width$}",
                self.prefix,
                fy.label(),
                number,
                width = self.zero_pad
            ),
            None => format!("{}{:0>width$}", self.prefix, number, width = self.zero_pad),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn financial_year_boundaries() {
        assert_eq!(FinancialYear::containing(date(2024, 3, 31)).start_year, 2023);
        assert_eq!(FinancialYear::containing(date(2024, 4, 1)).start_year, 2024);
        assert_eq!(FinancialYear::new(2024).label(), "2024-25");
        assert_eq!(FinancialYear::new(2099).label(), "2099-00");
    }

    #[test]
    fn challan_numbers() {
        let mut seq = DocumentNumberSequence::new("DC-");
        assert_eq!(seq.next_number(), "DC-0001");
        assert_eq!(seq.next_number(), "DC-0002");
    }

    #[test]
    fn peek_does_not_consume() {
        let mut seq = DocumentNumberSequence::new("DC-");
        assert_eq!(seq.peek(), "DC-0001");
        assert_eq!(seq.peek(), "DC-0001");
        assert_eq!(seq.next_number(), "DC-0001");
        assert_eq!(seq.peek(), "DC-0002");
    }

    #[test]
    fn bill_numbers_with_year() {
        let mut seq = DocumentNumberSequence::for_financial_year("INV/", FinancialYear::new(2024))
            .starting_at(42)
            .with_padding(3);
        assert_eq!(seq.next_number(), "INV/2024-25/042");
        assert_eq!(seq.next_raw(), 43);
    }

    #[test]
    fn year_advance() {
        let mut seq = DocumentNumberSequence::for_financial_year("INV/", FinancialYear::new(2024));
        seq.next_number();
        seq.advance_year(FinancialYear::new(2025)).unwrap();
        assert_eq!(seq.next_number(), "INV/2025-26/0001");
        assert!(seq.advance_year(FinancialYear::new(2025)).is_err());
        assert!(seq.advance_year(FinancialYear::new(2023)).is_err());
    }

    #[test]
    fn year_advance_without_year_fails() {
        let mut seq = DocumentNumberSequence::new("DC-");
        assert!(seq.advance_year(FinancialYear::new(2025)).is_err());
        assert!(!seq.auto_advance(date(2030, 1, 1)));
    }

    #[test]
    fn auto_advance_in_april() {
        let mut seq = DocumentNumberSequence::for_financial_year("INV/", FinancialYear::new(2024));
        seq.next_number();
        assert!(!seq.auto_advance(date(2025, 3, 31)));
        assert_eq!(seq.next_number(), "INV/2024-25/0002");
        assert!(seq.auto_advance(date(2025, 4, 1)));
        assert_eq!(seq.next_number(), "INV/2025-26/0001");
    }
}
