//! Lenient numeric input.
//!
//! Booking forms send numbers as whatever the user typed: `"12"`, `"12 cs"`,
//! `""`, `null`, or a JSON number. None of these may fail a calculation.
//! [`LenientNumber`] keeps the raw text and parses it the way a browser's
//! `parseInt` / `parseFloat` would: skip leading whitespace, read the longest
//! numeric prefix, ignore the rest.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// Upper bound for coerced case / per-case counts.
pub const MAX_COUNT: u32 = 1_000_000;

/// Upper bound for coerced monetary inputs (rates, extra taxable value).
pub const MAX_AMOUNT: Decimal = dec!(1_000_000_000_000);

/// A numeric form field that was never validated.
///
/// Deserializes from numbers, strings, booleans, `null`, or even arrays and
/// objects without ever failing; anything that is not a number or a string
/// is treated as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LenientNumber(Option<String>);

impl LenientNumber {
    /// A field that was absent from the form.
    pub fn missing() -> Self {
        Self(None)
    }

    /// The raw text as received, if any.
    pub fn raw(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Float-prefix parse (`parseFloat` semantics).
    pub fn as_decimal(&self) -> Option<Decimal> {
        self.0.as_deref().and_then(parse_float_prefix)
    }

    /// Integer-prefix parse (`parseInt` semantics, base 10).
    pub fn as_integer(&self) -> Option<i64> {
        self.0.as_deref().and_then(parse_int_prefix)
    }
}

impl From<&str> for LenientNumber {
    fn from(s: &str) -> Self {
        Self(Some(s.to_string()))
    }
}

impl From<String> for LenientNumber {
    fn from(s: String) -> Self {
        Self(Some(s))
    }
}

impl From<Decimal> for LenientNumber {
    fn from(d: Decimal) -> Self {
        Self(Some(d.to_string()))
    }
}

impl From<u32> for LenientNumber {
    fn from(n: u32) -> Self {
        Self(Some(n.to_string()))
    }
}

impl From<i64> for LenientNumber {
    fn from(n: i64) -> Self {
        Self(Some(n.to_string()))
    }
}

impl From<f64> for LenientNumber {
    fn from(n: f64) -> Self {
        if n.is_finite() {
            Self(Some(n.to_string()))
        } else {
            Self(None)
        }
    }
}

impl<T: Into<LenientNumber>> From<Option<T>> for LenientNumber {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl Serialize for LenientNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Some(s) => serializer.serialize_some(s),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for LenientNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LenientVisitor)
    }
}

struct LenientVisitor;

impl<'de> Visitor<'de> for LenientVisitor {
    type Value = LenientNumber;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any value")
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(LenientNumber::missing())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(LenientNumber(Some(v.to_string())))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(LenientNumber(Some(v.to_string())))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(LenientNumber::from(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(LenientNumber(Some(v.to_string())))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(LenientNumber(Some(v)))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(LenientNumber::missing())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(LenientNumber::missing())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(LenientNumber::missing())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(LenientNumber::missing())
    }
}

/// Parse the longest base-10 integer prefix of `input`.
///
/// `"12"` → 12, `" 7 cases"` → 7, `"2.9"` → 2, `"abc"` → `None`.
/// Prefixes beyond the `i64` range saturate to `i64::MAX` / `i64::MIN`.
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    let parsed = s[..end].trim_start_matches('+').parse().unwrap_or(if negative {
        i64::MIN
    } else {
        i64::MAX
    });
    Some(parsed)
}

/// Parse the longest decimal-number prefix of `input`, exponent included.
///
/// `"49.90"` → 49.90, `"12abc"` → 12, `".5"` → 0.5, `"1e3"` → 1000,
/// `"abc"` → `None`. Magnitudes beyond the `Decimal` range saturate to
/// `Decimal::MAX` / `Decimal::MIN`.
pub fn parse_float_prefix(input: &str) -> Option<Decimal> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos = 1;
            true
        }
        Some(b'+') => {
            pos = 1;
            false
        }
        _ => false,
    };

    let int_start = pos;
    while pos < len && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &s[int_start..pos];

    let mut frac_digits = "";
    if pos < len && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut frac_end = frac_start;
        while frac_end < len && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if !int_digits.is_empty() || frac_end > frac_start {
            frac_digits = &s[frac_start..frac_end];
            pos = frac_end;
        }
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mut exponent: i64 = 0;
    if pos < len && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut exp_end = pos + 1;
        if exp_end < len && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            let exp_text = &s[pos + 1..exp_end];
            exponent = exp_text.trim_start_matches('+').parse().unwrap_or(
                if exp_text.starts_with('-') {
                    i64::MIN
                } else {
                    i64::MAX
                },
            );
        }
    }

    let mut canonical = String::with_capacity(int_digits.len() + frac_digits.len() + 3);
    if negative {
        canonical.push('-');
    }
    if int_digits.is_empty() {
        canonical.push('0');
    } else {
        canonical.push_str(int_digits);
    }
    if !frac_digits.is_empty() {
        canonical.push('.');
        canonical.push_str(frac_digits);
    }

    let saturated = if negative { Decimal::MIN } else { Decimal::MAX };
    let Ok(mantissa) = Decimal::from_str(&canonical) else {
        // Only an integer part too wide for Decimal fails to parse here.
        return Some(saturated);
    };
    Some(scale_by_power_of_ten(mantissa, exponent).unwrap_or(saturated))
}

/// `None` when the result overflows `Decimal`.
fn scale_by_power_of_ten(mut value: Decimal, exponent: i64) -> Option<Decimal> {
    if value.is_zero() || exponent < -28 {
        return Some(Decimal::ZERO);
    }
    // The smallest non-zero mantissa is 1e-28, so anything past 1e56 overflows.
    if exponent > 56 {
        return None;
    }
    let ten = Decimal::TEN;
    for _ in 0..exponent.unsigned_abs() {
        value = if exponent > 0 {
            value.checked_mul(ten)?.normalize()
        } else {
            value / ten
        };
    }
    Some(value.normalize())
}

/// Coerce a case / per-case count: unparsable, missing or non-positive → 1.
pub fn count_or_one(value: &LenientNumber, field: &'static str) -> u32 {
    match value.as_integer() {
        Some(n) if n > 0 => u32::try_from(n).map_or(MAX_COUNT, |n| n.min(MAX_COUNT)),
        _ => {
            tracing::debug!(field, raw = ?value.raw(), "count defaulted to 1");
            1
        }
    }
}

/// Coerce a monetary amount: unparsable, missing or negative → 0.
pub fn amount_or_zero(value: &LenientNumber, field: &'static str) -> Decimal {
    match value.as_decimal() {
        Some(d) if d.is_sign_negative() => {
            tracing::debug!(field, raw = ?value.raw(), "negative amount coerced to 0");
            Decimal::ZERO
        }
        Some(d) => d.min(MAX_AMOUNT),
        None => {
            if value.raw().is_some() {
                tracing::debug!(field, raw = ?value.raw(), "unparsable amount defaulted to 0");
            }
            Decimal::ZERO
        }
    }
}

/// Coerce a rate that has no upper bound (packing & forwarding): negative → 0,
/// `default` when unparsable or missing.
pub fn non_negative_or(value: &LenientNumber, default: Decimal, field: &'static str) -> Decimal {
    match value.as_decimal() {
        Some(d) if d.is_sign_negative() => {
            tracing::debug!(field, raw = ?value.raw(), "negative rate coerced to 0");
            Decimal::ZERO
        }
        Some(d) => d,
        None => {
            if value.raw().is_some() {
                tracing::debug!(field, raw = ?value.raw(), %default, "unparsable rate defaulted");
            }
            default
        }
    }
}

/// Coerce a percentage into `[0, 100]`, using `default` when unparsable or missing.
pub fn percent_or(value: &LenientNumber, default: Decimal, field: &'static str) -> Decimal {
    match value.as_decimal() {
        Some(d) => d.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED),
        None => {
            if value.raw().is_some() {
                tracing::debug!(field, raw = ?value.raw(), %default, "unparsable percentage defaulted");
            }
            default
        }
    }
}
