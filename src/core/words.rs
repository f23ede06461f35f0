//! Amount in words, Indian numbering (thousand, lakh, crore).

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

const ONES: [&str; 20] = [
    "Zero",
    "One",
    "Two",
    "Three",
    "Four",
    "Five",
    "Six",
    "Seven",
    "Eight",
    "Nine",
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Spell out a rupee amount for the "Amount in words" box of a bill.
///
/// ```
/// use godown::core::amount_in_words;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(amount_in_words(dec!(2771)), "Rupees Two Thousand Seven Hundred Seventy One Only");
/// assert_eq!(amount_in_words(dec!(10.50)), "Rupees Ten and Fifty Paise Only");
/// ```
pub fn amount_in_words(amount: Decimal) -> String {
    let rounded = amount
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let rupees = rounded.trunc().to_u64().unwrap_or(u64::MAX);
    let paise = ((rounded - rounded.trunc()) * Decimal::ONE_HUNDRED)
        .to_u64()
        .unwrap_or(0);

    let mut out = String::new();
    if amount.is_sign_negative() && !rounded.is_zero() {
        out.push_str("Minus ");
    }
    out.push_str("Rupees ");
    out.push_str(&number_in_words(rupees));
    if paise > 0 {
        out.push_str(" and ");
        out.push_str(&number_in_words(paise));
        out.push_str(" Paise");
    }
    out.push_str(" Only");
    out
}

/// Spell out a whole number using the Indian system: `150000` → "One Lakh Fifty Thousand".
pub fn number_in_words(n: u64) -> String {
    if n == 0 {
        return ONES[0].to_string();
    }
    let mut parts: Vec<String> = Vec::new();
    push_indian(n, &mut parts);
    parts.join(" ")
}

fn push_indian(n: u64, parts: &mut Vec<String>) {
    let crore = n / 10_000_000;
    let rest = n % 10_000_000;
    if crore > 0 {
        // Crores above 99 are spelt recursively: "One Hundred Crore".
        push_indian(crore, parts);
        parts.push("Crore".into());
    }
    let lakh = rest / 100_000;
    let thousand = rest % 100_000 / 1_000;
    let hundred = rest % 1_000 / 100;
    let below_hundred = rest % 100;

    if lakh > 0 {
        push_below_hundred(lakh, parts);
        parts.push("Lakh".into());
    }
    if thousand > 0 {
        push_below_hundred(thousand, parts);
        parts.push("Thousand".into());
    }
    if hundred > 0 {
        push_below_hundred(hundred, parts);
        parts.push("Hundred".into());
    }
    if below_hundred > 0 {
        push_below_hundred(below_hundred, parts);
    }
}

fn push_below_hundred(n: u64, parts: &mut Vec<String>) {
    debug_assert!(n < 100);
    if n < 20 {
        parts.push(ONES[n as usize].into());
    } else {
        parts.push(TENS[(n / 10) as usize].into());
        if n % 10 > 0 {
            parts.push(ONES[(n % 10) as usize].into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn small_numbers() {
        assert_eq!(number_in_words(0), "Zero");
        assert_eq!(number_in_words(7), "Seven");
        assert_eq!(number_in_words(19), "Nineteen");
        assert_eq!(number_in_words(40), "Forty");
        assert_eq!(number_in_words(99), "Ninety Nine");
        assert_eq!(number_in_words(105), "One Hundred Five");
    }

    #[test]
    fn indian_grouping() {
        assert_eq!(number_in_words(150_000), "One Lakh Fifty Thousand");
        assert_eq!(
            number_in_words(12_345_678),
            "One Crore Twenty Three Lakh Forty Five Thousand Six Hundred Seventy Eight"
        );
        assert_eq!(number_in_words(1_000_000_000), "One Hundred Crore");
    }

    #[test]
    fn rupees_and_paise() {
        assert_eq!(amount_in_words(dec!(0)), "Rupees Zero Only");
        assert_eq!(amount_in_words(dec!(1)), "Rupees One Only");
        assert_eq!(amount_in_words(dec!(10.5)), "Rupees Ten and Fifty Paise Only");
        assert_eq!(amount_in_words(dec!(-25)), "Minus Rupees Twenty Five Only");
    }
}
