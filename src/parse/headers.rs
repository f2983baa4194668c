//! Tag-pair extraction from header blocks.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// `[Key "Value"]` tag pairs.
static TAG_PAIR: Lazy<Regex> = Lazy::new(|| Regex::new(r#"\[(\w+)\s+"([^"]*)"\]"#).unwrap());

/// Collects tag pairs from a header block into a key/value mapping.
/// Malformed lines are skipped and duplicate keys keep the last value
/// seen; extraction never fails.
#[must_use]
pub fn extract_headers(block: &str) -> HashMap<String, String> {
    TAG_PAIR
        .captures_iter(block)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}
