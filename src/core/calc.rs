use rust_decimal::{Decimal, RoundingStrategy};

use super::types::{ChargeConfig, InvoiceTotals, LineItem, TaxMode};

/// Compute bill totals for a cart.
///
/// Order of operations:
/// goods value → packing & forwarding → extra taxable value → additional
/// discount → GST → grand total rounded to whole rupees. Intermediate values
/// stay exact; only the returned fields are rounded.
///
/// Never panics: every sum and product saturates at `Decimal::MAX` /
/// `Decimal::MIN`, and the count totals saturate at `u64::MAX`.
pub fn calculate_totals(items: &[LineItem], charges: &ChargeConfig) -> InvoiceTotals {
    let subtotal = items
        .iter()
        .map(LineItem::amount)
        .fold(Decimal::ZERO, Decimal::saturating_add);
    let total_cases = items
        .iter()
        .fold(0u64, |acc, i| acc.saturating_add(u64::from(i.cases)));
    let total_quantity = items
        .iter()
        .fold(0u64, |acc, i| acc.saturating_add(i.quantity()));

    let packing = if charges.apply_processing_fee {
        subtotal.saturating_mul(percent(charges.packing_percent))
    } else {
        Decimal::ZERO
    };
    let extra = charges.extra_taxable_value.unwrap_or(Decimal::ZERO);

    let taxable_before_discount = subtotal.saturating_add(packing).saturating_add(extra);
    let discount_amount =
        taxable_before_discount.saturating_mul(percent(charges.additional_discount_percent));
    let net_taxable = taxable_before_discount.saturating_sub(discount_amount);

    let (cgst, sgst, igst) = match charges.tax_mode {
        TaxMode::Igst => (
            Decimal::ZERO,
            Decimal::ZERO,
            net_taxable.saturating_mul(percent(TaxMode::IGST_RATE)),
        ),
        TaxMode::CgstSgst => (
            net_taxable.saturating_mul(percent(TaxMode::CGST_RATE)),
            net_taxable.saturating_mul(percent(TaxMode::SGST_RATE)),
            Decimal::ZERO,
        ),
        TaxMode::None => (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO),
    };

    let exact_total = net_taxable
        .saturating_add(cgst)
        .saturating_add(sgst)
        .saturating_add(igst);
    let grand_total = round_whole(exact_total);

    let totals = InvoiceTotals {
        subtotal: round_display(subtotal),
        packing: round_display(packing),
        extra_taxable_value: round_display(extra),
        taxable_before_discount: round_display(taxable_before_discount),
        discount_amount: round_display(discount_amount),
        taxable_amount: round_display(net_taxable),
        cgst: round_display(cgst),
        sgst: round_display(sgst),
        igst: round_display(igst),
        round_off: round_display(grand_total.saturating_sub(exact_total)),
        grand_total,
        total_cases,
        total_quantity,
    };

    tracing::trace!(
        lines = items.len(),
        tax_mode = ?charges.tax_mode,
        grand_total = %totals.grand_total,
        "calculated totals"
    );

    totals
}

fn percent(rate: Decimal) -> Decimal {
    rate / Decimal::ONE_HUNDRED
}

/// Round to 2 decimals, half away from zero.
pub fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Round to whole rupees, half away from zero.
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
