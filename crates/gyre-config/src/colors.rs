//! Color string validation and parsing.
//!
//! Scene colors are `#rrggbb` hex strings. This module validates the
//! format and converts valid strings to normalized float triples for
//! the renderer.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for a 6-digit hex color with a leading `#`.
static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap());

/// Whether `s` is a valid `#rrggbb` color string.
pub fn is_hex_color(s: &str) -> bool {
    HEX_RE.is_match(s.trim())
}

/// Parse a `#rrggbb` string into normalized `[f64; 3]` values in 0.0..=1.0.
///
/// Returns `None` if the string is not a valid 6-digit hex color.
pub fn parse_hex_color(s: &str) -> Option<[f64; 3]> {
    let hex = s.trim().strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    // get() rather than indexing: a 6-byte multibyte string passes the
    // length check but has no char boundary at the slice points
    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
    Some([r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0])
}

// =============================================================================
// Tests
// =============================================================================
