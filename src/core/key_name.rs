//! SwiftGen key naming.
//!
//! SwiftGen turns a dotted `.strings` key into a nested accessor path:
//! every namespace segment gets its first letter uppercased (nothing else,
//! so `flashexchange` stays `Flashexchange`), and the final segment goes
//! from snake_case to lowerCamelCase.
//!
//! ```text
//! common.ok                         -> Common.ok
//! market.header.name                -> Market.Header.name
//! futuresrecords.header.amount_usdt -> Futuresrecords.Header.amountUsdt
//! ```

/// Convert an original key into its SwiftGen accessor path (without the
/// `L10n.` namespace).
///
/// # Examples
///
/// ```
/// use stringsctl::core::key_name::transform_key;
///
/// assert_eq!(transform_key("common.ok"), "Common.ok");
/// assert_eq!(
///     transform_key("futuresrecords.header.amount_usdt"),
///     "Futuresrecords.Header.amountUsdt"
/// );
/// ```
pub fn transform_key(original: &str) -> String {
    let parts: Vec<&str> = original.split('.').collect();
    let last = parts.len() - 1;

    parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            if i == last {
                snake_to_lower_camel(part)
            } else {
                upper_first(part)
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

/// Uppercase the first character, keep the rest as-is.
fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercase the first character and lowercase the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn snake_to_lower_camel(segment: &str) -> String {
    if !segment.contains('_') {
        return segment.to_string();
    }

    let mut words = segment.split('_');
    let mut result = words.next().unwrap_or_default().to_string();
    for word in words {
        result.push_str(&capitalize(word));
    }
    result
}
