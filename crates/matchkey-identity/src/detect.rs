//! Pre-hashed value detection.

use once_cell::sync::Lazy;
use regex::Regex;

static SHA256_HEX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9a-fA-F]{64}$").unwrap());

/// Whether a value already looks like a SHA-256 hex digest.
///
/// Best effort: any 64-character hex string matches, including free text
/// that happens to have that shape.
pub fn is_hashed(value: &str) -> bool {
    SHA256_HEX_RE.is_match(value.trim())
}
