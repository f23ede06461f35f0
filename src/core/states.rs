//! GST state codes.
//!
//! Two-digit codes that prefix every GSTIN and identify the place of supply.

/// Look up the state / union territory name for a GST state code.
pub fn state_name(code: &str) -> Option<&'static str> {
    STATE_CODES
        .binary_search_by(|(c, _)| c.cmp(&code))
        .ok()
        .map(|i| STATE_CODES[i].1)
}

/// Check whether `code` is a known GST state code.
pub fn is_known_state_code(code: &str) -> bool {
    state_name(code).is_some()
}

/// Sorted for binary search.
static STATE_CODES: &[(&str, &str)] = &[
    ("01", "Jammu and Kashmir"),
    ("02", "Himachal Pradesh"),
    ("03", "Punjab"),
    ("04", "Chandigarh"),
    ("05", "Uttarakhand"),
    ("06", "Haryana"),
    ("07", "Delhi"),
    ("08", "Rajasthan"),
    ("09", "Uttar Pradesh"),
    ("10", "Bihar"),
    ("11", "Sikkim"),
    ("12", "Arunachal Pradesh"),
    ("13", "Nagaland"),
    ("14", "Manipur"),
    ("15", "Mizoram"),
    ("16", "Tripura"),
    ("17", "Meghalaya"),
    ("18", "Assam"),
    ("19", "West Bengal"),
    ("20", "Jharkhand"),
    ("21", "Odisha"),
    ("22", "Chhattisgarh"),
    ("23", "Madhya Pradesh"),
    ("24", "Gujarat"),
    ("26", "Dadra and Nagar Haveli and Daman and Diu"),
    ("27", "Maharashtra"),
    ("29", "Karnataka"),
    ("30", "Goa"),
    ("31", "Lakshadweep"),
    ("32", "Kerala"),
    ("33", "Tamil Nadu"),
    ("34", "Puducherry"),
    ("35", "Andaman and Nicobar Islands"),
    ("36", "Telangana"),
    ("37", "Andhra Pradesh"),
    ("38", "Ladakh"),
    ("97", "Other Territory"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_states() {
        assert_eq!(state_name("33"), Some("Tamil Nadu"));
        assert_eq!(state_name("29"), Some("Karnataka"));
        assert!(is_known_state_code("07"));
        assert!(is_known_state_code("97"));
    }

    #[test]
    fn unknown_states() {
        assert!(!is_known_state_code("00"));
        assert!(!is_known_state_code("25"));
        assert!(!is_known_state_code("3"));
        assert!(!is_known_state_code(""));
    }

    #[test]
    fn table_is_sorted() {
        assert!(STATE_CODES.windows(2).all(|w| w[0].0 < w[1].0));
    }
}
