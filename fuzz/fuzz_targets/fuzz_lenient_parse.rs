#![no_main]

use godown::core::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Any text in any numeric field must normalize and total without panicking.
        let input = LineItemInput {
            cases: s.into(),
            per_case: s.into(),
            rate_per_box: s.into(),
            discount_percent: s.into(),
            ..Default::default()
        };
        let item = input.normalize();
        assert!(item.cases >= 1 && item.per_case >= 1);

        let charges = ChargeConfigInput {
            additional_discount: s.into(),
            packing_percent: s.into(),
            extra_taxable_value: s.into(),
            apply_igst: true,
            ..Default::default()
        }
        .normalize();
        let _ = calculate_totals(&[item], &charges);
    }
});
