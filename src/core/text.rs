//! Display conventions for stored names.
//!
//! Product types, brands and godown names are stored as `lower_snake_case`
//! and shown title-cased.

/// `"multi_shot"` → `"Multi Shot"`.
///
/// Splits on `_`, uppercases the first letter of each word, joins with a
/// space. The rest of each word is left as is.
pub fn capitalize(value: &str) -> String {
    value
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `"Multi Shot"` → `"multi_shot"`: the stored form sent back to the backend.
pub fn to_slug(value: &str) -> String {
    value
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// Compact stock-origin tag for a godown: `"main_godown_2"` → `"M2"`.
///
/// `_godown` and `_shop` are removed, the rest is split on `_`. Numeric
/// words are kept verbatim, a word of letters followed by digits keeps its
/// first letter and the digits, any other word contributes its first letter.
pub fn godown_short_code(name: &str) -> String {
    let slug = to_slug(&name.replace(' ', "_"));
    let stripped = slug.replace("_godown", "").replace("_shop", "");

    let mut code = String::new();
    for word in stripped.split('_').filter(|w| !w.is_empty()) {
        if word.chars().all(|c| c.is_ascii_digit()) {
            code.push_str(word);
            continue;
        }
        let Some(first) = word.chars().next() else {
            continue;
        };
        code.extend(first.to_uppercase());
        let digits_at = word.find(|c: char| c.is_ascii_digit());
        if let Some(idx) = digits_at {
            let tail = &word[idx..];
            if tail.chars().all(|c| c.is_ascii_digit()) {
                code.push_str(tail);
            }
        }
    }
    code
}
