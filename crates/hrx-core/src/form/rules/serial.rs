//! Serial number extraction across an item's line group.
//!
//! Explicit label patterns are tried first across every line in the group,
//! since serial labels often land on a continuation line. The fallback scans
//! for standalone mixed alphanumeric tokens; hyphenated tokens are excluded
//! so an NSN never re-matches as a serial.

use super::patterns::{SERIAL_FALLBACK, SERIAL_LABEL, SERIAL_SER_NO, SERIAL_SN};

/// An extracted serial number.
#[derive(Debug, Clone, PartialEq)]
pub struct SerialMatch {
    /// Uppercased serial value.
    pub value: String,
    /// True when found via an explicit label (S/N:, SERIAL:, SER NO:).
    pub explicit: bool,
}

/// Extract a serial number from the lines of one item group.
pub fn extract_serial<S: AsRef<str>>(lines: &[S]) -> Option<SerialMatch> {
    // Label patterns in priority order, pattern-major so the more specific
    // label always wins regardless of which line it appears on.
    for pattern in [&*SERIAL_SN, &*SERIAL_LABEL, &*SERIAL_SER_NO] {
        for line in lines {
            if let Some(caps) = pattern.captures(line.as_ref()) {
                return Some(SerialMatch {
                    value: caps[1].to_uppercase(),
                    explicit: true,
                });
            }
        }
    }

    // Fallback: first standalone 6-20 char token mixing letters and digits.
    for line in lines {
        let upper = line.as_ref().to_uppercase();
        for caps in SERIAL_FALLBACK.captures_iter(&upper) {
            let token = &caps[1];
            let has_letter = token.chars().any(|c| c.is_ascii_alphabetic());
            let has_digit = token.chars().any(|c| c.is_ascii_digit());
            if has_letter && has_digit {
                return Some(SerialMatch {
                    value: token.to_string(),
                    explicit: false,
                });
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_sn_label() {
        let m = extract_serial(&["S/N: M4123456"]).unwrap();
        assert_eq!(m.value, "M4123456");
        assert!(m.explicit);

        let m = extract_serial(&["SN 12345678"]).unwrap();
        assert_eq!(m.value, "12345678");
        assert!(m.explicit);
    }

    #[test]
    fn test_explicit_serial_label() {
        let m = extract_serial(&["SERIAL NUMBER: WX445566"]).unwrap();
        assert_eq!(m.value, "WX445566");
        assert!(m.explicit);

        let m = extract_serial(&["SER NO: 9A8B7C6D"]).unwrap();
        assert_eq!(m.value, "9A8B7C6D");
        assert!(m.explicit);
    }

    #[test]
    fn test_label_found_on_continuation_line() {
        let group = ["1 5855-01-534-6458 MONOCULAR NIGHT VISION", "S/N: NV778899"];
        let m = extract_serial(&group).unwrap();
        assert_eq!(m.value, "NV778899");
        assert!(m.explicit);
    }

    #[test]
    fn test_fallback_mixed_token() {
        let m = extract_serial(&["MACHETE CASE", "A1B2C3D4"]).unwrap();
        assert_eq!(m.value, "A1B2C3D4");
        assert!(!m.explicit);
    }

    #[test]
    fn test_fallback_skips_digits_only_and_nsn() {
        // NSN segments are digits-only (and hyphen-split), never serials.
        assert_eq!(extract_serial(&["1005-01-584-1079"]), None);
        assert_eq!(extract_serial(&["5180004482362"]), None);
        assert_eq!(extract_serial(&["PLAIN WORDS ONLY HERE"]), None);
    }

    #[test]
    fn test_lowercase_serial_uppercased() {
        let m = extract_serial(&["s/n: ab12cd34"]).unwrap();
        assert_eq!(m.value, "AB12CD34");
        assert!(m.explicit);
    }
}
