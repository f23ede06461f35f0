use chrono::NaiveDate;
use godown::core::*;
use godown::stock::*;
use rust_decimal_macros::dec;

fn main() {
    let mut stock = StockBook::new();
    stock.upsert(
        StockItem::new("main_godown_2", "p-101", "Flower Pot Deluxe", 30, 12, dec!(100))
            .with_brand("sri_kaliswari")
            .with_type("flower_pots"),
    );
    stock.upsert(
        StockItem::new("east_main_godown_3", "p-204", "Color Matches", 6, 10, dec!(50))
            .with_brand("standard")
            .with_type("sparklers"),
    );

    let mut log = DispatchLog::new();
    let mut numbers = DocumentNumberSequence::new("DC-");
    let date = NaiveDate::from_ymd_opt(2024, 10, 21).unwrap();

    let challan = DeliveryChallanBuilder::new(numbers.next_number(), date)
        .customer(PartyBuilder::new("Ganesh Traders").city("Madurai").build())
        .vehicle_number("tn 67 ab 1234")
        .transport("KPN Parcel Service")
        .add_line("main_godown_2", "p-101", 10)
        .add_line("east_main_godown_3", "p-204", 4)
        .dispatch(&mut stock, &mut log)
        .expect("enough stock");

    println!("Delivery challan {} ({})", challan.number, challan.pdf_filename());
    for item in &challan.items {
        println!(
            "  [{}] {} x {} cases",
            item.godown.as_deref().unwrap_or("-"),
            item.product_name,
            item.cases
        );
    }
    println!("Total cases: {}", challan.total_cases());

    // Asking for more than is left moves nothing.
    let short = DeliveryChallanBuilder::new(numbers.next_number(), date)
        .customer(PartyBuilder::new("Bharat Agencies").build())
        .add_line("east_main_godown_3", "p-204", 5)
        .dispatch(&mut stock, &mut log);
    if let Err(e) = short {
        println!("Rejected: {e}");
    }

    println!("\nStock after dispatch:");
    for s in stock.summary_by_godown() {
        println!(
            "  {} ({}): {} cases, value {}",
            capitalize(&s.godown),
            s.code,
            s.total_cases,
            s.total_value
        );
    }
}
