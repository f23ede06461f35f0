#![cfg(feature = "ledger")]

use chrono::NaiveDate;
use godown::core::*;
use godown::ledger::*;
use rust_decimal_macros::dec;

fn day(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, m, d).unwrap()
}

fn bill(number: &str, date: NaiveDate, cases: u32) -> Booking {
    BookingBuilder::new(number, date)
        .customer(PartyBuilder::new("Ganesh Traders").state_code("33").build())
        .add_item(LineItemBuilder::new("p-101", "Flower Pot Deluxe", cases, 12, dec!(100)).build())
        .without_packing()
        .tax_mode(TaxMode::CgstSgst)
        .build()
        .unwrap()
}

#[test]
fn ledger_from_bookings() {
    let mut ledger = CustomerLedger::new("Ganesh Traders");
    ledger.add_bill(LedgerEntry::from_booking(&bill("INV-2", day(10, 12), 2)));
    ledger.add_bill(LedgerEntry::from_booking(&bill("INV-1", day(10, 5), 1)));

    // Sorted by date regardless of insertion order.
    assert_eq!(ledger.entries()[0].bill_number, "INV-1");
    assert_eq!(ledger.entries()[0].total, dec!(1416));
    assert_eq!(ledger.entries()[1].total, dec!(2832));
    assert_eq!(ledger.total_billed(), dec!(4248));
    assert_eq!(ledger.outstanding(), dec!(4248));
}

#[test]
fn payments_settle_oldest_first() {
    let mut ledger = CustomerLedger::new("Ganesh Traders");
    ledger.add_bill(LedgerEntry::from_booking(&bill("INV-1", day(10, 5), 1)));
    ledger.add_bill(LedgerEntry::from_booking(&bill("INV-2", day(10, 12), 2)));

    ledger
        .record_payment(
            Payment::new(day(10, 20), dec!(2000), PaymentMode::Upi).with_reference("UTR4417"),
        )
        .unwrap();

    assert!(ledger.entries()[0].is_settled());
    assert_eq!(ledger.entries()[1].paid, dec!(584));
    assert_eq!(ledger.entries()[1].balance(), dec!(2248));
    assert_eq!(ledger.open_bills().len(), 1);
    assert_eq!(ledger.outstanding(), dec!(2248));
    assert_eq!(ledger.payments()[0].mode.label(), "UPI");
}

#[test]
fn overpayment_becomes_advance() {
    let mut ledger = CustomerLedger::new("Ganesh Traders");
    ledger.add_bill(LedgerEntry::new("INV-1", day(10, 5), dec!(1000)));
    ledger
        .record_payment(Payment::new(day(10, 6), dec!(1500), PaymentMode::Cash))
        .unwrap();
    assert_eq!(ledger.advance(), dec!(500));
    assert_eq!(ledger.outstanding(), dec!(-500));

    ledger.add_bill(LedgerEntry::new("INV-2", day(11, 1), dec!(800)));
    assert_eq!(ledger.advance(), dec!(0));
    assert_eq!(ledger.entries()[1].balance(), dec!(300));
    assert_eq!(ledger.outstanding(), dec!(300));
}

#[test]
fn zero_payment_rejected() {
    let mut ledger = CustomerLedger::new("Ganesh Traders");
    let err = ledger
        .record_payment(Payment::new(day(10, 6), dec!(0), PaymentMode::Cheque))
        .unwrap_err();
    assert!(matches!(err, GodownError::Ledger(_)));
    assert!(ledger.payments().is_empty());
}

#[test]
fn edited_bill_updates_balance() {
    let booking = bill("INV-1", day(10, 5), 1);
    let mut ledger = CustomerLedger::new("Ganesh Traders");
    ledger.add_bill(LedgerEntry::from_booking(&booking));
    ledger
        .record_payment(Payment::new(day(10, 6), dec!(1000), PaymentMode::BankTransfer))
        .unwrap();

    let mut items = booking.items.clone();
    items[0].cases = 3;
    let balance = ledger
        .recompute("INV-1", &items, &booking.charges)
        .unwrap();
    // 3 × 12 × 100 × 1.18 = 4248
    assert_eq!(balance, dec!(3248));
    assert_eq!(ledger.outstanding(), dec!(3248));
}

#[test]
fn reduced_bill_credit_carries_to_next_bill() {
    let booking = bill("INV-1", day(10, 5), 2);
    let mut ledger = CustomerLedger::new("Ganesh Traders");
    ledger.add_bill(LedgerEntry::from_booking(&booking));
    ledger
        .record_payment(Payment::new(day(10, 6), dec!(2832), PaymentMode::Upi))
        .unwrap();

    let mut items = booking.items.clone();
    items[0].cases = 1;
    let balance = ledger
        .recompute("INV-1", &items, &booking.charges)
        .unwrap();
    assert_eq!(balance, dec!(0));
    assert_eq!(ledger.advance(), dec!(1416));
    assert_eq!(ledger.outstanding(), dec!(-1416));

    ledger.add_bill(LedgerEntry::new("INV-2", day(10, 20), dec!(2000)));
    assert_eq!(ledger.advance(), dec!(0));
    assert_eq!(ledger.entry("INV-2").unwrap().balance(), dec!(584));
    let open: rust_decimal::Decimal = ledger.open_bills().iter().map(|e| e.balance()).sum();
    assert_eq!(open, ledger.outstanding());
}
