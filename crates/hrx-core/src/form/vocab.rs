//! Static vocabularies for DA 2062 extraction.
//!
//! All tables are immutable, process-wide constants; nothing updates them at
//! runtime.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Keywords that mark a line as printed form chrome rather than item data.
pub static HEADER_KEYWORDS: &[&str] = &[
    "HAND RECEIPT",
    "DA FORM",
    "STOCK NUMBER",
    "STOCK NO",
    "ITEM DESCRIPTION",
    "SERIAL NUMBER",
    "UNIT OF ISSUE",
    "QTY",
    "U/I",
    "DODAAC",
    "UIC:",
    "UNIT:",
    "ORGANIZATION:",
    "FROM:",
    "TO:",
    "SIGNATURE",
    "DATE:",
    "PAGE",
];

/// Valid first letters for a Line Item Number.
///
/// I and O are deliberately excluded to avoid digit/letter confusion.
pub fn is_valid_lin_prefix(c: char) -> bool {
    matches!(c, 'E'..='H' | 'J'..='N' | 'P'..='Z')
}

lazy_static! {
    /// Unit-of-issue lookup: canonical codes and full-word equivalents both
    /// map to the canonical 2-3 letter code.
    pub static ref UNIT_OF_ISSUE_TABLE: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        for code in [
            "EA", "PR", "BX", "DZ", "SE", "KT", "RL", "CS", "GL", "PG",
            "BG", "CN", "HD", "RM", "TU", "LB", "QT", "PT", "GP",
        ] {
            m.insert(code, code);
        }
        m.insert("EACH", "EA");
        m.insert("PAIR", "PR");
        m.insert("BOX", "BX");
        m.insert("DOZEN", "DZ");
        m.insert("SET", "SE");
        m.insert("KIT", "KT");
        m.insert("ROLL", "RL");
        m.insert("CASE", "CS");
        m.insert("GALLON", "GL");
        m.insert("PACKAGE", "PG");
        m.insert("BAG", "BG");
        m.insert("CAN", "CN");
        m.insert("HUNDRED", "HD");
        m.insert("REAM", "RM");
        m.insert("TUBE", "TU");
        m.insert("POUND", "LB");
        m.insert("QUART", "QT");
        m.insert("PINT", "PT");
        m.insert("GROUP", "GP");
        m
    };
}

/// Broad equipment category, keyed off NSN federal supply class or
/// description vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquipmentCategory {
    Weapon,
    Optics,
    Communications,
    Protective,
    Medical,
    Vehicle,
    General,
}

/// Curated military terminology, used as a corroborating confidence signal
/// and as a recognition hint list for the external text recognizer.
pub static MILITARY_TERMS: &[(&str, EquipmentCategory)] = &[
    ("RIFLE", EquipmentCategory::Weapon),
    ("CARBINE", EquipmentCategory::Weapon),
    ("PISTOL", EquipmentCategory::Weapon),
    ("MACHINE GUN", EquipmentCategory::Weapon),
    ("LAUNCHER", EquipmentCategory::Weapon),
    ("MORTAR", EquipmentCategory::Weapon),
    ("SHOTGUN", EquipmentCategory::Weapon),
    ("BAYONET", EquipmentCategory::Weapon),
    ("SCOPE", EquipmentCategory::Optics),
    ("SIGHT", EquipmentCategory::Optics),
    ("OPTIC", EquipmentCategory::Optics),
    ("NIGHT VISION", EquipmentCategory::Optics),
    ("NVG", EquipmentCategory::Optics),
    ("BINOCULAR", EquipmentCategory::Optics),
    ("THERMAL", EquipmentCategory::Optics),
    ("RADIO", EquipmentCategory::Communications),
    ("ANTENNA", EquipmentCategory::Communications),
    ("HANDSET", EquipmentCategory::Communications),
    ("SINCGARS", EquipmentCategory::Communications),
    ("HEADSET", EquipmentCategory::Communications),
    ("HELMET", EquipmentCategory::Protective),
    ("VEST", EquipmentCategory::Protective),
    ("ARMOR", EquipmentCategory::Protective),
    ("IOTV", EquipmentCategory::Protective),
    ("PLATE CARRIER", EquipmentCategory::Protective),
    ("PROTECTIVE MASK", EquipmentCategory::Protective),
    ("GOGGLES", EquipmentCategory::Protective),
    ("MEDICAL", EquipmentCategory::Medical),
    ("FIRST AID", EquipmentCategory::Medical),
    ("TOURNIQUET", EquipmentCategory::Medical),
    ("LITTER", EquipmentCategory::Medical),
    ("BANDAGE", EquipmentCategory::Medical),
    ("TRUCK", EquipmentCategory::Vehicle),
    ("HMMWV", EquipmentCategory::Vehicle),
    ("TRAILER", EquipmentCategory::Vehicle),
    ("GENERATOR", EquipmentCategory::Vehicle),
];

/// Count distinct military-term categories present in uppercased text.
pub fn military_category_count(text_upper: &str) -> usize {
    let mut seen = Vec::new();
    for (term, category) in MILITARY_TERMS {
        if text_upper.contains(term) && !seen.contains(category) {
            seen.push(*category);
        }
    }
    seen.len()
}

/// Map an NSN's federal supply class (first four digits) to an equipment
/// category.
pub fn equipment_category(nsn: &str) -> EquipmentCategory {
    match nsn.get(0..4) {
        Some("1005") | Some("1010") | Some("1095") => EquipmentCategory::Weapon,
        Some("5855") => EquipmentCategory::Optics,
        Some("5820") | Some("5965") => EquipmentCategory::Communications,
        Some("8470") => EquipmentCategory::Protective,
        Some("6515") => EquipmentCategory::Medical,
        Some("2320") | Some("2330") => EquipmentCategory::Vehicle,
        _ => EquipmentCategory::General,
    }
}

/// Whether items in this supply class are serial-tracked.
pub fn requires_serial_number(nsn: &str) -> bool {
    matches!(
        equipment_category(nsn),
        EquipmentCategory::Weapon | EquipmentCategory::Optics | EquipmentCategory::Communications
    )
}

/// Vocabulary hint list an external text recognizer may use to bias
/// recognition toward military terminology and field labels.
pub fn recognition_vocabulary() -> Vec<&'static str> {
    let mut terms: Vec<&'static str> = MILITARY_TERMS.iter().map(|(t, _)| *t).collect();
    terms.extend(["NSN", "LIN", "S/N", "SERIAL", "DODAAC", "HAND RECEIPT", "EA", "QTY"]);
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lin_prefix_set() {
        for c in ['E', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'Z'] {
            assert!(is_valid_lin_prefix(c), "{c} should be valid");
        }
        for c in ['A', 'B', 'C', 'D', 'I', 'O', '1'] {
            assert!(!is_valid_lin_prefix(c), "{c} should be invalid");
        }
    }

    #[test]
    fn test_unit_table_normalizes_words() {
        assert_eq!(UNIT_OF_ISSUE_TABLE.get("EACH"), Some(&"EA"));
        assert_eq!(UNIT_OF_ISSUE_TABLE.get("PAIR"), Some(&"PR"));
        assert_eq!(UNIT_OF_ISSUE_TABLE.get("EA"), Some(&"EA"));
        assert_eq!(UNIT_OF_ISSUE_TABLE.get("GLOVES"), None);
    }

    #[test]
    fn test_military_category_count_is_per_category() {
        // Two weapon terms still count as a single category.
        assert_eq!(military_category_count("RIFLE M4 CARBINE"), 1);
        assert_eq!(military_category_count("RIFLE WITH SCOPE"), 2);
        assert_eq!(military_category_count("WRENCH SET"), 0);
    }

    #[test]
    fn test_equipment_category_by_fsc() {
        assert_eq!(equipment_category("1005-01-584-1079"), EquipmentCategory::Weapon);
        assert_eq!(equipment_category("5855-01-534-6458"), EquipmentCategory::Optics);
        assert_eq!(equipment_category("4710-00-000-1234"), EquipmentCategory::General);
        assert!(requires_serial_number("1005-01-584-1079"));
        assert!(!requires_serial_number("4710-00-000-1234"));
    }
}
