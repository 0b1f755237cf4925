//! Reversed-tuple sort keys.

use std::cmp::Ordering;
use std::fmt;

use crate::config::KEY_SEPARATOR;
use crate::error_handling::DumpError;

/// One integer component of an entry key, of unbounded size.
///
/// Stored as a sign plus its decimal digits without leading zeros, so
/// segments longer than any machine integer still compare numerically.
/// Zero is never negative.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyInt {
    negative: bool,
    digits: String,
}

impl KeyInt {
    /// Parses one key segment. Surrounding whitespace and a single leading
    /// `+` or `-` are accepted; anything else must be ASCII digits.
    pub fn parse(segment: &str) -> Option<Self> {
        let trimmed = segment.trim();
        let (negative, digits) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let digits = match digits.trim_start_matches('0') {
            "" => "0",
            significant => significant,
        };
        Some(KeyInt {
            negative: negative && digits != "0",
            digits: digits.to_string(),
        })
    }

    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(&other.digits))
    }
}

impl Ord for KeyInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
        }
    }
}

impl PartialOrd for KeyInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for KeyInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.digits)
    }
}

/// The integer components of an entry key, last component first.
///
/// The derived `Ord` compares component by component and treats a shorter
/// key that is a prefix of a longer one as smaller, so `"1_2"` (2, 1) sorts
/// before `"1_10"` (10, 1) even though it does not as a string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey(Vec<KeyInt>);

impl SortKey {
    /// Parses an underscore-separated key such as `"3_7"`.
    ///
    /// # Errors
    ///
    /// Returns `DumpError::InvalidKey` if any segment (including an empty one)
    /// is not an integer.
    pub fn parse(key: &str) -> Result<Self, DumpError> {
        let mut components = key
            .split(KEY_SEPARATOR)
            .map(|segment| {
                KeyInt::parse(segment).ok_or_else(|| DumpError::InvalidKey {
                    key: key.to_string(),
                    segment: segment.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        components.reverse();
        Ok(SortKey(components))
    }

    /// Components in comparison order.
    pub fn components(&self) -> &[KeyInt] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(key: &str) -> Vec<String> {
        SortKey::parse(key)
            .unwrap()
            .components()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    fn key(key: &str) -> SortKey {
        SortKey::parse(key).unwrap()
    }

    #[test]
    fn test_parse_reverses_components() {
        assert_eq!(rendered("3_7"), vec!["7", "3"]);
        assert_eq!(rendered("1_2_3"), vec!["3", "2", "1"]);
        assert_eq!(rendered("42"), vec!["42"]);
        assert_eq!(rendered("-1_0"), vec!["0", "-1"]);
    }

    #[test]
    fn test_last_component_is_primary() {
        assert!(key("1_2") < key("1_10"));

        // First component only breaks ties
        assert!(key("9_1") < key("0_2"));
        assert!(key("0_5") < key("1_5"));
    }

    #[test]
    fn test_shorter_prefix_sorts_first() {
        // "5" -> (5), "1_5" -> (5, 1)
        assert!(key("5") < key("1_5"));
    }

    #[test]
    fn test_segments_are_trimmed() {
        assert_eq!(rendered("1_ 2"), vec!["2", "1"]);
        assert_eq!(rendered(" 3 _\t4\n"), vec!["4", "3"]);
        assert_eq!(key("1_ 2"), key("1_2"));
        assert!(key("1_ 2") < key("1_10"));
    }

    #[test]
    fn test_signs_and_leading_zeros() {
        assert_eq!(rendered("+7_007"), vec!["7", "7"]);
        assert_eq!(rendered("-0_00"), vec!["0", "0"]);
        assert_eq!(key("-0"), key("0"));
        assert!(key("-10") < key("-9"));
        assert!(key("-1") < key("0"));
    }

    #[test]
    fn test_oversized_segments_compare_numerically() {
        assert_eq!(rendered("1_99999999999999999999"), vec!["99999999999999999999", "1"]);
        assert!(key("9223372036854775807") < key("99999999999999999999"));
        assert!(key("99999999999999999999") < key("100000000000000000000"));
        assert!(key("-100000000000000000000") < key("-99999999999999999999"));
        assert!(key("0_99999999999999999999") < key("1_99999999999999999999"));
    }

    #[test]
    fn test_rejects_non_integer_segments() {
        for key in ["", "1__2", "a_1", "1_2.5", "1_1 2", "1_-", "1_+", "1_+-2", "1_0x10"] {
            match SortKey::parse(key) {
                Err(DumpError::InvalidKey { key: reported, .. }) => assert_eq!(reported, key),
                other => panic!("expected InvalidKey for {key:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_invalid_key_names_segment() {
        match SortKey::parse("3_x_7") {
            Err(DumpError::InvalidKey { segment, .. }) => assert_eq!(segment, "x"),
            other => panic!("expected InvalidKey, got {other:?}"),
        }
    }
}
