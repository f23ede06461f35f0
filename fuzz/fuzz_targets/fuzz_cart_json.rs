#![no_main]

use godown::core::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Deserialize → normalize → total must not panic at any step.
    if let Ok(inputs) = serde_json::from_slice::<Vec<LineItemInput>>(data) {
        let items: Vec<LineItem> = inputs.iter().map(LineItemInput::normalize).collect();
        let totals = calculate_totals(&items, &ChargeConfig::default());
        let _ = amount_in_words(totals.grand_total);
    }
});
