use chrono::NaiveDate;
use godown::core::*;
use rust_decimal_macros::dec;

fn main() {
    let config = BillingConfig {
        seller: PartyBuilder::new("Sri Lakshmi Fireworks")
            .address("12 Bypass Road")
            .city("Sivakasi")
            .gstin("33ABCDE1234F1Z7")
            .mobile("9876543210")
            .build(),
        ..BillingConfig::default()
    };

    let date = NaiveDate::from_ymd_opt(2024, 10, 20).unwrap();
    let customer = PartyBuilder::new("Ganesh Traders")
        .city("Madurai")
        .state_code("33")
        .build();

    let mut numbers = config.bill_sequence(date);
    let charges = ChargeConfig {
        additional_discount_percent: dec!(5),
        ..config.charge_defaults(Some(&customer))
    };

    let booking = BookingBuilder::new(numbers.next_number(), date)
        .seller(config.seller.clone())
        .customer(customer)
        .add_item(
            LineItemBuilder::new("p-101", "Flower Pot Deluxe", 2, 12, dec!(100))
                .brand("sri_kaliswari")
                .godown("M2")
                .build(),
        )
        // Form fields arrive as text; blanks and junk are tolerated.
        .add_item_input(&LineItemInput {
            product_id: "p-204".into(),
            product_name: "Color Matches".into(),
            brand: "standard".into(),
            cases: "3".into(),
            per_case: "10".into(),
            rate_per_box: "50".into(),
            discount_percent: "ten".into(),
            godown: Some("EM3".into()),
        })
        .charges(charges)
        .note("Goods once sold will not be taken back")
        .build()
        .expect("booking should be valid");

    let totals = booking.totals.as_ref().unwrap();
    println!("{}: {}", booking.kind.title(), booking.bill_number);
    println!("Date:     {}", booking.date.format("%d-%m-%Y"));
    println!("Customer: {}", booking.customer.name);
    println!("---");
    for item in &booking.items {
        println!(
            "  [{}] {} ({}) {} cs x {} @ {} = {}",
            item.godown.as_deref().unwrap_or("-"),
            item.product_name,
            capitalize(&item.brand),
            item.cases,
            item.per_case,
            item.rate_per_box,
            round_display(item.amount())
        );
    }
    println!("---");
    println!("Subtotal:  {}", totals.subtotal);
    println!("Packing:   {}", totals.packing);
    println!("Discount: -{}", totals.discount_amount);
    println!("Taxable:   {}", totals.taxable_amount);
    println!("CGST 9%:   {}", totals.cgst);
    println!("SGST 9%:   {}", totals.sgst);
    println!("Round off: {}", totals.round_off);
    println!("Total:     {}", totals.grand_total);
    println!("{}", amount_in_words(totals.grand_total));
    println!("Cases:     {}", totals.total_cases);
    println!("Saved as:  {}", booking.pdf_filename());
}
