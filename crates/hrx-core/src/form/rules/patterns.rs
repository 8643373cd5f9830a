//! Common regex patterns for DA 2062 field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // NSN candidate shapes, most specific first.
    pub static ref NSN_HYPHENATED: Regex = Regex::new(
        r"\b(\d{4}-\d{2}-\d{3}-\d{4})\b"
    ).unwrap();

    pub static ref NSN_CONTIGUOUS: Regex = Regex::new(
        r"\b(\d{13})\b"
    ).unwrap();

    pub static ref NSN_SPACED: Regex = Regex::new(
        r"\b(\d{4}\s\d{2}\s\d{3}\s\d{4})\b"
    ).unwrap();

    pub static ref NSN_LABELED: Regex = Regex::new(
        r"(?i)\bNSN[\s:#]*([0-9][0-9\s-]{11,18}[0-9])"
    ).unwrap();

    // Canonical NNNN-NN-NNN-NNNN validity check.
    pub static ref NSN_CANONICAL: Regex = Regex::new(
        r"^\d{4}-\d{2}-\d{3}-\d{4}$"
    ).unwrap();

    // LIN candidate shapes.
    pub static ref LIN_LABELED: Regex = Regex::new(
        r"(?i)\bLIN[\s:#]*([A-Z][A-Z0-9]{5})\b"
    ).unwrap();

    pub static ref LIN_PARENS: Regex = Regex::new(
        r"\(([A-Za-z][A-Za-z0-9]{5})\)"
    ).unwrap();

    pub static ref LIN_STANDALONE: Regex = Regex::new(
        r"\b([A-Za-z][A-Za-z0-9]{5})\b"
    ).unwrap();

    // Word token for unit-of-issue vocabulary lookup (optional trailing period).
    pub static ref UNIT_TOKEN: Regex = Regex::new(
        r"\b([A-Za-z]{2,8})\b\.?"
    ).unwrap();

    // Standalone small integer for quantity scanning.
    pub static ref QUANTITY_TOKEN: Regex = Regex::new(
        r"\b(\d{1,3})\b"
    ).unwrap();

    // Serial number label patterns, most specific first.
    pub static ref SERIAL_SN: Regex = Regex::new(
        r"(?i)\bS[\s/\.]*N\b[\s.:#]*([A-Za-z0-9]{4,20})\b"
    ).unwrap();

    pub static ref SERIAL_LABEL: Regex = Regex::new(
        r"(?i)\bSERIAL(?:\s+(?:NO|NUM|NUMBER))?\b[\s.:#]*([A-Za-z0-9]{4,20})\b"
    ).unwrap();

    pub static ref SERIAL_SER_NO: Regex = Regex::new(
        r"(?i)\bSER[\s\.]*NO\b[\s.:#]*([A-Za-z0-9]{4,20})\b"
    ).unwrap();

    // Fallback serial candidate: standalone alphanumeric token, no hyphens.
    pub static ref SERIAL_FALLBACK: Regex = Regex::new(
        r"\b([A-Za-z0-9]{6,20})\b"
    ).unwrap();

    // Form number token (2062 variants).
    pub static ref FORM_NUMBER: Regex = Regex::new(
        r"\b(2062[A-Z0-9-]*)\b"
    ).unwrap();

    // Whitespace collapsing for descriptions.
    pub static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}
