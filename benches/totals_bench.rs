use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use godown::core::*;

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 20).unwrap()
}

fn cart(lines: u32) -> Vec<LineItem> {
    (1..=lines)
        .map(|i| {
            LineItemBuilder::new(format!("p-{i}"), format!("Item {i}"), i % 7 + 1, 12, dec!(85.50))
                .discount(dec!(50))
                .build()
        })
        .collect()
}

fn charges() -> ChargeConfig {
    ChargeConfig {
        additional_discount_percent: dec!(5),
        extra_taxable_value: Some(dec!(850)),
        tax_mode: TaxMode::CgstSgst,
        ..ChargeConfig::default()
    }
}

fn form_inputs(lines: u32) -> Vec<LineItemInput> {
    (1..=lines)
        .map(|i| LineItemInput {
            product_id: format!("p-{i}"),
            product_name: format!("Item {i}"),
            cases: format!("{}", i % 7 + 1).into(),
            per_case: "12".into(),
            rate_per_box: "85.50".into(),
            discount_percent: if i % 3 == 0 { "n/a".into() } else { "50".into() },
            ..Default::default()
        })
        .collect()
}

fn bench_totals(c: &mut Criterion) {
    let small = cart(10);
    let big = cart(1000);
    let charges = charges();

    c.bench_function("totals_10_lines", |b| {
        b.iter(|| black_box(calculate_totals(black_box(&small), black_box(&charges))));
    });
    c.bench_function("totals_1000_lines", |b| {
        b.iter(|| black_box(calculate_totals(black_box(&big), black_box(&charges))));
    });
}

fn bench_normalize(c: &mut Criterion) {
    let inputs = form_inputs(100);
    c.bench_function("normalize_100_form_lines", |b| {
        b.iter(|| {
            black_box(
                inputs
                    .iter()
                    .map(LineItemInput::normalize)
                    .collect::<Vec<_>>(),
            )
        });
    });
}

fn bench_build_booking(c: &mut Criterion) {
    let items = cart(50);
    c.bench_function("build_booking_50_lines", |b| {
        b.iter(|| {
            let mut builder = BookingBuilder::new("INV/2024-25/0001", test_date())
                .customer(PartyBuilder::new("Ganesh Traders").state_code("33").build())
                .charges(charges());
            for item in &items {
                builder = builder.add_item(item.clone());
            }
            black_box(builder.build())
        });
    });
}

fn bench_text(c: &mut Criterion) {
    c.bench_function("godown_short_code", |b| {
        b.iter(|| black_box(godown_short_code(black_box("east_main_godown_3"))));
    });
    c.bench_function("amount_in_words", |b| {
        b.iter(|| black_box(amount_in_words(black_box(dec!(12345678.90)))));
    });
}

criterion_group!(
    benches,
    bench_totals,
    bench_normalize,
    bench_build_booking,
    bench_text
);
criterion_main!(benches);
