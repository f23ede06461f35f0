use rust_decimal::Decimal;

use super::error::ValidationError;
use super::states::is_known_state_code;
use super::types::*;

const GSTIN_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Validate a booking before it is submitted.
/// Returns all validation errors found (not just the first).
pub fn validate_booking(booking: &Booking) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if booking.bill_number.trim().is_empty() {
        errors.push(ValidationError::new(
            "bill_number",
            "bill number must not be empty",
        ));
    }

    if booking.customer.name.trim().is_empty() {
        errors.push(ValidationError::new(
            "customer.name",
            "customer name is required",
        ));
    }
    validate_party_ids(&booking.customer, "customer", &mut errors);
    if let Some(seller) = &booking.seller {
        validate_party_ids(seller, "seller", &mut errors);
    }

    errors.extend(validate_cart(&booking.items));
    errors.extend(validate_charges(&booking.charges));

    match (booking.kind, booking.charges.tax_mode) {
        (DocumentKind::BillOfSupply, mode) if mode != TaxMode::None => {
            errors.push(ValidationError::new(
                "charges.tax_mode",
                "a bill of supply cannot carry GST",
            ));
        }
        (DocumentKind::TaxInvoice, TaxMode::None) => {
            errors.push(ValidationError::new(
                "charges.tax_mode",
                "a tax invoice needs CGST + SGST or IGST",
            ));
        }
        _ => {}
    }

    if let Some(seller) = &booking.seller {
        validate_place_of_supply(seller, &booking.customer, booking.charges.tax_mode, &mut errors);
    }

    errors
}

/// Validate the cart alone: not empty, every line names a product.
pub fn validate_cart(items: &[LineItem]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if items.is_empty() {
        errors.push(ValidationError::new("items", "cart is empty"));
    }
    for (i, item) in items.iter().enumerate() {
        if item.product_name.trim().is_empty() {
            errors.push(ValidationError::new(
                format!("items[{i}].product_name"),
                "product name is required",
            ));
        }
        if item.discount_percent >= Decimal::ONE_HUNDRED {
            errors.push(ValidationError::new(
                format!("items[{i}].discount_percent"),
                "line discount must be below 100%",
            ));
        }
    }
    errors
}

/// Validate charge settings.
pub fn validate_charges(charges: &ChargeConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if charges.additional_discount_percent.is_sign_negative()
        || charges.additional_discount_percent >= Decimal::ONE_HUNDRED
    {
        errors.push(ValidationError::new(
            "charges.additional_discount_percent",
            "additional discount must be between 0 and 100%",
        ));
    }
    if charges.packing_percent.is_sign_negative() {
        errors.push(ValidationError::new(
            "charges.packing_percent",
            "packing percentage must not be negative",
        ));
    }
    if charges
        .extra_taxable_value
        .is_some_and(|v| v.is_sign_negative())
    {
        errors.push(ValidationError::new(
            "charges.extra_taxable_value",
            "extra taxable value must not be negative",
        ));
    }
    errors
}

/// Validate the format and check character of a GSTIN.
///
/// Layout: 2-digit state code, 10-character PAN, entity number, `Z`,
/// check character (mod-36 over the first 14 characters).
pub fn validate_gstin(gstin: &str) -> Result<(), String> {
    let g = gstin.trim();
    let bytes = g.as_bytes();
    if bytes.len() != 15 {
        return Err(format!("GSTIN must be 15 characters, got {}", bytes.len()));
    }
    if !bytes.iter().all(|b| GSTIN_ALPHABET.contains(b)) {
        return Err("GSTIN may only contain digits and uppercase letters".into());
    }
    if !is_known_state_code(&g[..2]) {
        return Err(format!("unknown state code '{}'", &g[..2]));
    }
    let pan = &bytes[2..12];
    let pan_ok = pan[..5].iter().all(u8::is_ascii_uppercase)
        && pan[5..9].iter().all(u8::is_ascii_digit)
        && pan[9].is_ascii_uppercase();
    if !pan_ok {
        return Err("GSTIN does not contain a valid PAN".into());
    }
    if bytes[12] == b'0' {
        return Err("GSTIN entity number must not be 0".into());
    }
    if bytes[13] != b'Z' {
        return Err("GSTIN 14th character must be 'Z'".into());
    }
    let expected = gstin_check_char(&bytes[..14]);
    if bytes[14] != expected {
        return Err(format!(
            "GSTIN check character should be '{}'",
            expected as char
        ));
    }
    Ok(())
}

fn gstin_check_char(body: &[u8]) -> u8 {
    let sum: usize = body
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let value = GSTIN_ALPHABET.iter().position(|a| a == b).unwrap_or(0);
            let product = value * if i % 2 == 0 { 1 } else { 2 };
            product / 36 + product % 36
        })
        .sum();
    GSTIN_ALPHABET[(36 - sum % 36) % 36]
}

/// Check that a mobile number has exactly 10 digits (spaces and a +91 prefix allowed).
pub fn is_valid_mobile(mobile: &str) -> bool {
    let digits: String = mobile.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = digits
        .strip_prefix("+91")
        .unwrap_or(&digits);
    digits.len() == 10 && digits.chars().all(|c| c.is_ascii_digit())
}

fn validate_party_ids(party: &Party, prefix: &str, errors: &mut Vec<ValidationError>) {
    if let Some(gstin) = party.gstin.as_deref().filter(|g| !g.trim().is_empty()) {
        if let Err(msg) = validate_gstin(gstin) {
            errors.push(ValidationError::new(format!("{prefix}.gstin"), msg));
        }
    }
    if let Some(code) = &party.state_code {
        if !is_known_state_code(code) {
            errors.push(ValidationError::new(
                format!("{prefix}.state_code"),
                format!("unknown state code '{code}'"),
            ));
        }
    }
    if let Some(mobile) = party.mobile.as_deref().filter(|m| !m.trim().is_empty()) {
        if !is_valid_mobile(mobile) {
            errors.push(ValidationError::new(
                format!("{prefix}.mobile"),
                "mobile number must have 10 digits",
            ));
        }
    }
}

fn validate_place_of_supply(
    seller: &Party,
    customer: &Party,
    mode: TaxMode,
    errors: &mut Vec<ValidationError>,
) {
    let (Some(from), Some(to)) = (seller.effective_state_code(), customer.effective_state_code())
    else {
        return;
    };
    let intra_state = from == to;
    match mode {
        TaxMode::Igst if intra_state => errors.push(ValidationError::new(
            "charges.tax_mode",
            "IGST applies to inter-state supply; use CGST + SGST within the state",
        )),
        TaxMode::CgstSgst if !intra_state => errors.push(ValidationError::new(
            "charges.tax_mode",
            "CGST + SGST applies within the state; use IGST for inter-state supply",
        )),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gstin_valid() {
        assert!(validate_gstin("27AAPFU0939F1ZV").is_ok());
        assert!(validate_gstin("33ABCDE1234F1Z7").is_ok());
        assert!(validate_gstin("29AAGCB7383J1Z4").is_ok());
    }

    #[test]
    fn gstin_bad_check_char() {
        let err = validate_gstin("27AAPFU0939F1ZA").unwrap_err();
        assert!(err.contains("'V'"));
    }

    #[test]
    fn gstin_bad_shape() {
        assert!(validate_gstin("27AAPFU0939F1Z").is_err());
        assert!(validate_gstin("27aapfu0939f1zv").is_err());
        assert!(validate_gstin("00AAPFU0939F1ZV").is_err());
        assert!(validate_gstin("27AAPF10939F1ZV").is_err());
        assert!(validate_gstin("27AAPFU0939F1XV").is_err());
    }

    #[test]
    fn mobile_numbers() {
        assert!(is_valid_mobile("9876543210"));
        assert!(is_valid_mobile("+91 98765 43210"));
        assert!(!is_valid_mobile("98765"));
        assert!(!is_valid_mobile("98765abcde"));
    }

    #[test]
    fn empty_cart_rejected() {
        let errors = validate_cart(&[]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "cart is empty");
    }
}
