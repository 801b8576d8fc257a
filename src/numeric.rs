//! Integer helper exported alongside the CNAME lookup.

use crate::config::INCREMENT_STEP;

/// Returns `value + 3`.
///
/// Wraps on overflow, so it is defined for every input.
///
/// ```
/// assert_eq!(cname_export::increment(3), 6);
/// assert_eq!(cname_export::increment(42), 45);
/// ```
pub fn increment(value: i64) -> i64 {
    value.wrapping_add(INCREMENT_STEP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_adds_three() {
        assert_eq!(increment(3), 6);
        assert_eq!(increment(10), 13);
        assert_eq!(increment(42), 45);
    }

    #[test]
    fn test_increment_negative_values() {
        assert_eq!(increment(-3), 0);
        assert_eq!(increment(-10), -7);
    }

    #[test]
    fn test_increment_wraps_at_max() {
        assert_eq!(increment(i64::MAX), i64::MIN + 2);
    }
}
