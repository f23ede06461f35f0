//! Ready-made workbooks for the stock, dispatch and ledger screens.

use super::{Cell, Sheet, Workbook};
use crate::core::{GodownError, capitalize, godown_short_code};
use crate::ledger::CustomerLedger;
use crate::stock::{DispatchLog, StockBook, StockItem};

const STOCK_COLUMNS: &[&str] = &[
    "godown",
    "product_id",
    "product_name",
    "brand",
    "product_type",
    "current_cases",
    "per_case",
    "total_boxes",
    "rate_per_box",
    "stock_value",
];

fn stock_row(item: &StockItem) -> Vec<Cell> {
    vec![
        Cell::label(&item.godown),
        Cell::text(&item.product_id),
        Cell::text(&item.product_name),
        Cell::label(&item.brand),
        Cell::label(&item.product_type),
        Cell::count(u64::from(item.cases)),
        Cell::count(u64::from(item.per_case)),
        Cell::count(item.boxes()),
        Cell::Amount(item.rate_per_box),
        Cell::Amount(item.value()),
    ]
}

/// Current Stock, Low Stock and Summary sheets.
pub fn stock_workbook(stock: &StockBook, low_threshold: u32) -> Result<Workbook, GodownError> {
    let mut current = Sheet::new("Current Stock", STOCK_COLUMNS);
    for item in stock.iter() {
        current.push_row(stock_row(item))?;
    }

    let mut low = Sheet::new("Low Stock", STOCK_COLUMNS);
    for item in stock.low_stock(low_threshold) {
        low.push_row(stock_row(item))?;
    }

    let mut summary = Sheet::new(
        "Summary",
        &[
            "godown",
            "code",
            "product_count",
            "total_cases",
            "total_boxes",
            "total_value",
        ],
    );
    for s in stock.summary_by_godown() {
        summary.push_row(vec![
            Cell::label(&s.godown),
            Cell::text(s.code),
            Cell::count(s.product_count as u64),
            Cell::count(s.total_cases),
            Cell::count(s.total_boxes),
            Cell::Amount(s.total_value),
        ])?;
    }

    let mut book = Workbook::new();
    book.add_sheet(current)?;
    book.add_sheet(low)?;
    book.add_sheet(summary)?;
    Ok(book)
}

/// Dispatch history, one row per challan line.
pub fn dispatch_workbook(log: &DispatchLog) -> Result<Workbook, GodownError> {
    let mut history = Sheet::new(
        "History",
        &[
            "date",
            "challan_number",
            "customer",
            "vehicle_number",
            "godown",
            "product_name",
            "brand",
            "cases",
            "per_case",
        ],
    );
    for entry in log.entries() {
        for line in &entry.lines {
            history.push_row(vec![
                Cell::text(entry.date.format("%d-%m-%Y").to_string()),
                Cell::text(&entry.challan_number),
                Cell::text(&entry.customer_name),
                entry
                    .vehicle_number
                    .as_deref()
                    .map_or(Cell::Empty, Cell::text),
                Cell::text(format!(
                    "{} ({})",
                    capitalize(&line.godown),
                    godown_short_code(&line.godown)
                )),
                Cell::text(&line.product_name),
                Cell::label(&line.brand),
                Cell::count(u64::from(line.cases)),
                Cell::count(u64::from(line.per_case)),
            ])?;
        }
    }

    let mut book = Workbook::new();
    book.add_sheet(history)?;
    Ok(book)
}

/// Ledger sheet (one row per bill) and a per-customer Balances sheet.
pub fn ledger_workbook(ledgers: &[CustomerLedger]) -> Result<Workbook, GodownError> {
    let mut bills = Sheet::new(
        "Ledger",
        &["customer", "date", "bill_number", "total", "paid", "balance"],
    );
    let mut balances = Sheet::new(
        "Balances",
        &["customer", "total_billed", "total_paid", "advance", "outstanding"],
    );

    for ledger in ledgers {
        for entry in ledger.entries() {
            bills.push_row(vec![
                Cell::text(&ledger.customer),
                Cell::text(entry.date.format("%d-%m-%Y").to_string()),
                Cell::text(&entry.bill_number),
                Cell::Amount(entry.total),
                Cell::Amount(entry.paid),
                Cell::Amount(entry.balance()),
            ])?;
        }
        balances.push_row(vec![
            Cell::text(&ledger.customer),
            Cell::Amount(ledger.total_billed()),
            Cell::Amount(ledger.total_paid()),
            Cell::Amount(ledger.advance()),
            Cell::Amount(ledger.outstanding()),
        ])?;
    }

    let mut book = Workbook::new();
    book.add_sheet(bills)?;
    book.add_sheet(balances)?;
    Ok(book)
}
