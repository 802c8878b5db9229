//! Message generalization: mask volatile tokens to produce stable templates
//! for downstream classification.

use regex::Regex;
use std::sync::LazyLock;

// Octets are 1-3 digits each; no range validation, 999.999.999.999 counts.
static RE_IPV4: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}\b").unwrap());

static RE_HEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"0x[0-9a-f]+").unwrap());

static RE_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d+\b").unwrap());

static RE_SYMBOL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").unwrap());

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Canonicalize a free-text message into a template.
///
/// Rule order is load-bearing: IPs must be masked before the bare-number
/// rule consumes their octets, and hex runs are matched lowercase because
/// the whole message is lowercased first.
pub fn generalize(message: &str) -> String {
    let text = message.to_lowercase();
    let text = RE_IPV4.replace_all(&text, "ip_address");
    let text = RE_HEX.replace_all(&text, "hex_value");
    let text = RE_NUMBER.replace_all(&text, "number");
    let text = RE_SYMBOL.replace_all(&text, " ");
    let text = RE_WHITESPACE.replace_all(&text, " ");
    text.trim().to_string()
}
