//! The input guard: the only gate between raw user input and the
//! external encryption capability, plus truncated display of opaque
//! ciphertext/hash/address strings.
//!
//! Everything here is pure and total. Out-of-range or malformed input
//! yields `false` (or `None` from the typed constructors), never a
//! panic or an error type — surfacing the rejection is the caller's
//! concern.

use serde::Serialize;

/// True iff `value` is a valid mood rating: 1 ≤ value ≤ 5.
pub fn validate_mood_range(value: i64) -> bool {
    (1..=5).contains(&value)
}

/// True iff `value` is a valid habit completion level: 0 ≤ value ≤ 100.
pub fn validate_habit_range(value: i64) -> bool {
    (0..=100).contains(&value)
}

/// Render an opaque token (ciphertext, hash, or address) as
/// `first-6-chars...last-4-chars`. Tokens of 10 or fewer characters are
/// returned unchanged: the head and tail windows would overlap, so the
/// full value is both shorter and less confusing than a fake
/// truncation. Counted in characters, never bytes.
pub fn format_encrypted_value(token: &str) -> String {
    let len = token.chars().count();
    if len <= 10 {
        return token.to_string();
    }
    let head: String = token.chars().take(6).collect();
    let tail: String = token.chars().skip(len - 4).collect();
    format!("{head}...{tail}")
}

/// A mood rating that has passed the range check. The constructor is
/// the only way in (there is deliberately no `Deserialize` impl), so
/// any `MoodValue` handed to the encryption layer is already in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MoodValue(u8);

impl MoodValue {
    pub fn new(value: i64) -> Option<Self> {
        if validate_mood_range(value) {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// A habit completion level that has passed the range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HabitValue(u8);

impl HabitValue {
    pub fn new(value: i64) -> Option<Self> {
        if validate_habit_range(value) {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_range_boundaries() {
        assert!(validate_mood_range(1));
        assert!(validate_mood_range(5));
        assert!(!validate_mood_range(0));
        assert!(!validate_mood_range(6));
    }

    #[test]
    fn test_mood_range_agrees_with_closed_interval() {
        for m in -10..=20 {
            assert_eq!(validate_mood_range(m), (1..=5).contains(&m), "mood {m}");
        }
        assert!(!validate_mood_range(i64::MIN));
        assert!(!validate_mood_range(i64::MAX));
    }

    #[test]
    fn test_habit_range_boundaries() {
        assert!(validate_habit_range(0));
        assert!(validate_habit_range(100));
        assert!(!validate_habit_range(-1));
        assert!(!validate_habit_range(101));
    }

    #[test]
    fn test_habit_range_agrees_with_closed_interval() {
        for h in -200..=400 {
            assert_eq!(validate_habit_range(h), (0..=100).contains(&h), "habit {h}");
        }
    }

    #[test]
    fn test_format_encrypted_value_truncates() {
        assert_eq!(
            format_encrypted_value("0xABCDEF1234567890"),
            "0xABCD...7890"
        );
    }

    #[test]
    fn test_format_encrypted_value_short_inputs_pass_through() {
        assert_eq!(format_encrypted_value(""), "");
        assert_eq!(format_encrypted_value("0xAB"), "0xAB");
        // Exactly 10 chars: head and tail would overlap, so unchanged.
        assert_eq!(format_encrypted_value("0x12345678"), "0x12345678");
        // 11 chars is the first length that truncates.
        assert_eq!(format_encrypted_value("0x123456789"), "0x1234...6789");
    }

    #[test]
    fn test_format_encrypted_value_counts_chars_not_bytes() {
        // 12 multi-byte chars must not panic a byte slice.
        let token = "éééééééééééé";
        let formatted = format_encrypted_value(token);
        assert_eq!(formatted, "éééééé...éééé");
    }

    #[test]
    fn test_typed_constructors_are_the_gate() {
        assert_eq!(MoodValue::new(3).map(MoodValue::get), Some(3));
        assert!(MoodValue::new(0).is_none());
        assert!(MoodValue::new(6).is_none());

        assert_eq!(HabitValue::new(100).map(HabitValue::get), Some(100));
        assert!(HabitValue::new(-1).is_none());
        assert!(HabitValue::new(101).is_none());
    }
}
