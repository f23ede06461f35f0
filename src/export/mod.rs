//! Spreadsheet export.
//!
//! A [`Workbook`] holds one logical table per [`Sheet`]. Column headers are
//! built from the stored snake_case keys (`"current_cases"` → "Current Cases").
//! [`Workbook::to_csv_files`] renders every sheet to a CSV file; binary
//! workbook formats are left to the caller.
//!
//! # Example
//!
//! ```
//! use godown::export::*;
//! use rust_decimal_macros::dec;
//!
//! let mut sheet = Sheet::new("Summary", &["godown", "total_cases", "total_value"]);
//! sheet.push_row(vec![Cell::text("main_godown"), Cell::Integer(120), Cell::Amount(dec!(5400))]).unwrap();
//!
//! let mut book = Workbook::new();
//! book.add_sheet(sheet).unwrap();
//! let files = book.to_csv_files();
//! assert_eq!(files[0].0, "summary.csv");
//! assert!(files[0].1.starts_with("\"Godown\",\"Total Cases\",\"Total Value\"\r\n"));
//! ```

mod sheets;

pub use sheets::*;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{GodownError, capitalize, to_slug};

/// Maximum sheet name length accepted by spreadsheet applications.
pub const MAX_SHEET_NAME: usize = 31;

/// One spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Text(String),
    Integer(i64),
    /// Money, written with 2 decimals.
    Amount(Decimal),
    Empty,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Stored name shown title-cased.
    pub fn label(stored: &str) -> Self {
        Self::Text(capitalize(stored))
    }

    pub fn count(value: u64) -> Self {
        Self::Integer(i64::try_from(value).unwrap_or(i64::MAX))
    }

    fn write_csv(&self, out: &mut String) {
        match self {
            Self::Text(s) => csv_field_str(out, s),
            Self::Integer(n) => out.push_str(&n.to_string()),
            Self::Amount(d) => out.push_str(&format!("{:.2}", crate::core::round_display(*d))),
            Self::Empty => {}
        }
    }
}

/// A named table with human-readable headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    /// Create a sheet; `keys` are snake_case column keys.
    pub fn new(name: impl Into<String>, keys: &[&str]) -> Self {
        Self {
            name: name.into(),
            headers: keys.iter().map(|k| capitalize(k)).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row; it must have one cell per header.
    pub fn push_row(&mut self, row: Vec<Cell>) -> Result<(), GodownError> {
        if row.len() != self.headers.len() {
            return Err(GodownError::Export(format!(
                "sheet '{}' has {} columns, row has {}",
                self.name,
                self.headers.len(),
                row.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        for (i, header) in self.headers.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            csv_field_str(&mut out, header);
        }
        out.push_str("\r\n");
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                cell.write_csv(&mut out);
            }
            out.push_str("\r\n");
        }
        out
    }
}

/// An ordered set of uniquely named sheets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sheet(&mut self, sheet: Sheet) -> Result<(), GodownError> {
        let name = sheet.name.trim();
        if name.is_empty() {
            return Err(GodownError::Export("sheet name must not be empty".into()));
        }
        if name.chars().count() > MAX_SHEET_NAME {
            return Err(GodownError::Export(format!(
                "sheet name '{name}' exceeds {MAX_SHEET_NAME} characters"
            )));
        }
        if self.sheet(name).is_some() {
            return Err(GodownError::Export(format!("duplicate sheet name '{name}'")));
        }
        self.sheets.push(sheet);
        Ok(())
    }

    /// Look up a sheet by name, ignoring case.
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets
            .iter()
            .find(|s| s.name.trim().eq_ignore_ascii_case(name.trim()))
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    /// Render each sheet as `(file name, CSV content)`, file names slugged
    /// from sheet names (`"Low Stock"` → `low_stock.csv`).
    pub fn to_csv_files(&self) -> Vec<(String, String)> {
        self.sheets
            .iter()
            .map(|s| (format!("{}.csv", to_slug(&s.name)), s.to_csv()))
            .collect()
    }
}

fn csv_field_str(out: &mut String, value: &str) {
    out.push('"');
    for ch in value.chars() {
        if ch == '"' {
            out.push_str("\"\"");
        } else {
            out.push(ch);
        }
    }
    out.push('"');
}
