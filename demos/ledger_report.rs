use chrono::NaiveDate;
use godown::core::*;
use godown::ledger::*;
use rust_decimal_macros::dec;

fn main() {
    let day = |d| NaiveDate::from_ymd_opt(2024, 10, d).unwrap();
    let mut ledger = CustomerLedger::new("Ganesh Traders");

    let bills = [
        ("INV/2024-25/0001", day(5), dec!(2771)),
        ("INV/2024-25/0007", day(12), dec!(1416)),
    ];
    for (number, date, total) in bills {
        ledger.add_bill(LedgerEntry::new(number, date, total));
    }

    ledger
        .record_payment(
            Payment::new(day(15), dec!(3000), PaymentMode::Upi).with_reference("UTR4417"),
        )
        .expect("positive payment");

    println!("Ledger: {}", ledger.customer);
    for entry in ledger.entries() {
        println!(
            "  {} {}  total {}  paid {}  balance {}",
            entry.date.format("%d-%m-%Y"),
            entry.bill_number,
            entry.total,
            entry.paid,
            entry.balance()
        );
    }
    for p in ledger.payments() {
        println!(
            "  payment {} via {} ({})",
            p.amount,
            p.mode.label(),
            p.reference.as_deref().unwrap_or("-")
        );
    }
    println!("Outstanding: {}", ledger.outstanding());
    println!("{}", amount_in_words(ledger.outstanding()));

    if let Err(e) = ledger.record_payment(Payment::new(day(16), dec!(0), PaymentMode::Cash)) {
        println!("Rejected: {e}");
    }
}
