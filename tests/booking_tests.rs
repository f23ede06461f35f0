use chrono::NaiveDate;
use godown::core::*;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn seller() -> Party {
    PartyBuilder::new("Sri Lakshmi Fireworks")
        .address("12 Bypass Road")
        .city("Sivakasi")
        .gstin("33ABCDE1234F1Z7")
        .mobile("9876543210")
        .build()
}

fn local_customer() -> Party {
    PartyBuilder::new("Ganesh Traders")
        .city("Madurai")
        .state_code("33")
        .mobile("+91 94430 12345")
        .build()
}

fn outstation_customer() -> Party {
    PartyBuilder::new("Bharat Agencies")
        .city("Bengaluru")
        .gstin("29aagcb7383j1z4")
        .build()
}

fn flower_pots(cases: u32) -> LineItem {
    LineItemBuilder::new("p-101", "Flower Pot Deluxe", cases, 12, dec!(100))
        .brand("sri_kaliswari")
        .godown("M2")
        .build()
}

// --- Tax invoices ---

#[test]
fn intra_state_tax_invoice() {
    let booking = BookingBuilder::new("INV/2024-25/0001", date(2024, 10, 20))
        .seller(seller())
        .customer(local_customer())
        .add_item(flower_pots(2))
        .packing(dec!(3))
        .additional_discount(dec!(5))
        .tax_mode(TaxMode::CgstSgst)
        .note("Goods once sold will not be taken back")
        .build()
        .unwrap();

    let totals = booking.totals.as_ref().unwrap();
    assert_eq!(totals.cgst, dec!(211.36));
    assert_eq!(totals.grand_total, dec!(2771));
    assert_eq!(booking.pdf_filename(), "INV-2024-25-0001.pdf");
    assert_eq!(booking.items[0].godown.as_deref(), Some("M2"));
}

#[test]
fn inter_state_needs_igst() {
    let err = BookingBuilder::new("INV/2024-25/0002", date(2024, 10, 20))
        .seller(seller())
        .customer(outstation_customer())
        .add_item(flower_pots(1))
        .tax_mode(TaxMode::CgstSgst)
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("use IGST"));

    let ok = BookingBuilder::new("INV/2024-25/0002", date(2024, 10, 20))
        .seller(seller())
        .customer(outstation_customer())
        .add_item(flower_pots(1))
        .tax_mode(TaxMode::Igst)
        .build()
        .unwrap();
    assert_eq!(ok.customer.gstin.as_deref(), Some("29AAGCB7383J1Z4"));
    assert_eq!(ok.totals.unwrap().igst, dec!(222.48));
}

#[test]
fn intra_state_rejects_igst() {
    let err = BookingBuilder::new("INV/2024-25/0003", date(2024, 10, 20))
        .seller(seller())
        .customer(local_customer())
        .add_item(flower_pots(1))
        .tax_mode(TaxMode::Igst)
        .build()
        .unwrap_err();
    assert!(matches!(err, GodownError::Validation(_)));
}

#[test]
fn tax_invoice_requires_tax() {
    let err = BookingBuilder::new("INV/2024-25/0004", date(2024, 10, 20))
        .customer(local_customer())
        .add_item(flower_pots(1))
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("tax invoice"));
}

// --- Bill of supply ---

#[test]
fn bill_of_supply_without_tax() {
    let booking = BookingBuilder::new("BOS-0001", date(2024, 10, 20))
        .kind(DocumentKind::BillOfSupply)
        .customer(local_customer())
        .add_item(flower_pots(1))
        .without_packing()
        .build()
        .unwrap();
    let totals = booking.totals.unwrap();
    assert_eq!(totals.tax_total(), dec!(0));
    assert_eq!(totals.grand_total, dec!(1200));
}

#[test]
fn bill_of_supply_rejects_tax() {
    let result = BookingBuilder::new("BOS-0002", date(2024, 10, 20))
        .kind(DocumentKind::BillOfSupply)
        .customer(local_customer())
        .add_item(flower_pots(1))
        .tax_mode(TaxMode::CgstSgst)
        .build();
    assert!(result.is_err());
}

// --- Validation ---

#[test]
fn empty_cart_and_missing_name_reported_together() {
    let booking = BookingBuilder::new("", date(2024, 10, 20))
        .customer(PartyBuilder::new("  ").build())
        .tax_mode(TaxMode::CgstSgst)
        .build_unchecked()
        .unwrap();
    let errors = validate_booking(&booking);
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert!(fields.contains(&"bill_number"));
    assert!(fields.contains(&"customer.name"));
    assert!(fields.contains(&"items"));
}

#[test]
fn customer_required() {
    let err = BookingBuilder::new("X", date(2024, 10, 20))
        .add_item(flower_pots(1))
        .build()
        .unwrap_err();
    assert!(matches!(err, GodownError::Builder(_)));
}

#[test]
fn bad_gstin_and_mobile_reported() {
    let customer = PartyBuilder::new("Ganesh Traders")
        .gstin("33ABCDE1234F1Z8")
        .mobile("12345")
        .build();
    let booking = BookingBuilder::new("INV-1", date(2024, 10, 20))
        .customer(customer)
        .add_item(flower_pots(1))
        .tax_mode(TaxMode::CgstSgst)
        .build_unchecked()
        .unwrap();
    let errors = validate_booking(&booking);
    assert!(errors.iter().any(|e| e.field == "customer.gstin"));
    assert!(errors.iter().any(|e| e.field == "customer.mobile"));
}

#[test]
fn full_discount_rejected() {
    let item = LineItemBuilder::new("p", "Free Sample", 1, 1, dec!(10))
        .discount(dec!(100))
        .build();
    let errors = validate_cart(&[item]);
    assert_eq!(errors[0].field, "items[0].discount_percent");

    let charges = ChargeConfig {
        additional_discount_percent: dec!(100),
        ..ChargeConfig::default()
    };
    assert_eq!(validate_charges(&charges).len(), 1);
}

// --- Editing ---

#[test]
fn recalculate_after_edit() {
    let mut booking = BookingBuilder::new("INV-2", date(2024, 10, 20))
        .customer(local_customer())
        .add_item(flower_pots(1))
        .without_packing()
        .tax_mode(TaxMode::CgstSgst)
        .build()
        .unwrap();
    assert_eq!(booking.totals.as_ref().unwrap().grand_total, dec!(1416));

    booking.items[0].cases = 2;
    booking.charges.tax_mode = TaxMode::None;
    let totals = booking.recalculate();
    assert_eq!(totals.grand_total, dec!(2400));
}

#[test]
fn add_item_from_form_input() {
    let booking = BookingBuilder::new("INV-3", date(2024, 10, 20))
        .customer(local_customer())
        .add_item_input(&LineItemInput {
            product_id: "p-5".into(),
            product_name: "Rocket".into(),
            cases: "2".into(),
            per_case: "x".into(),
            rate_per_box: "150".into(),
            ..Default::default()
        })
        .without_packing()
        .tax_mode(TaxMode::CgstSgst)
        .build()
        .unwrap();
    assert_eq!(booking.totals.unwrap().subtotal, dec!(300));
}

// --- Numbering & config ---

#[test]
fn config_drives_numbering_and_defaults() {
    let config = BillingConfig {
        seller: seller(),
        ..BillingConfig::default()
    };
    let mut bills = config.bill_sequence(date(2025, 2, 1));
    assert_eq!(bills.next_number(), "INV/2024-25/0001");
    assert!(bills.auto_advance(date(2025, 4, 2)));
    assert_eq!(bills.peek(), "INV/2025-26/0001");

    let charges = config.charge_defaults(Some(&outstation_customer()));
    assert_eq!(charges.tax_mode, TaxMode::Igst);
}

#[test]
fn config_deserializes_with_defaults() {
    let config: BillingConfig =
        serde_json::from_str(r#"{"bill_prefix": "SLF/", "low_stock_threshold": 25}"#).unwrap();
    assert_eq!(config.bill_prefix, "SLF/");
    assert_eq!(config.challan_prefix, "DC-");
    assert_eq!(config.low_stock_threshold, 25);
    assert_eq!(config.packing_percent, dec!(3));
}

// --- Session ---

#[test]
fn session_gates_screens() {
    let staff = Session::from_stored(Some("muthu"), Some("staff")).unwrap();
    assert!(staff.can_access(Screen::Billing));
    assert!(!staff.can_access(Screen::Payments));

    let admin = Session::from_stored(Some("owner"), Some("Admin")).unwrap();
    assert!(admin.can_access(Screen::Users));
}

// --- Display conventions ---

#[test]
fn display_names() {
    assert_eq!(capitalize("multi_shot"), "Multi Shot");
    assert_eq!(to_slug("Multi Shot"), "multi_shot");
    assert_eq!(godown_short_code("main_godown_2"), "M2");
    assert_eq!(states::state_name("33"), Some("Tamil Nadu"));
}
