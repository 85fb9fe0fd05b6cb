//! Assertion utilities for testing.
//!
//! This module provides helper functions for making assertions in tests,
//! particularly for floating-point comparisons.

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Assert that two floating-point values are approximately equal.
///
/// # Panics
///
/// Panics if the absolute difference between `actual` and `expected` is greater than `epsilon`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that a `YYYY-MM-DD` date lies within `start..=end`.
pub fn assert_date_in_window(date: &str, start: &str, end: &str) {
    assert!(
        date >= start && date <= end,
        "Date outside window: date = {}, window = {}..={}",
        date,
        start,
        end
    );
}

/// Assert that a list of dates is sorted, descending when `descending` is set.
pub fn assert_dates_sorted(dates: &[&str], descending: bool) {
    for pair in dates.windows(2) {
        let ordered = if descending {
            pair[0] >= pair[1]
        } else {
            pair[0] <= pair[1]
        };
        assert!(
            ordered,
            "Dates out of order: {} then {} (descending = {})",
            pair[0],
            pair[1],
            descending
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0, None);
        assert_approx_eq(1.0, 1.001, Some(0.01));
    }

    #[test]
    fn test_assert_date_in_window() {
        assert_date_in_window("2016-08-23", "2016-08-23", "2017-08-23");
        assert_date_in_window("2017-08-23", "2016-08-23", "2017-08-23");
    }

    #[test]
    fn test_assert_dates_sorted() {
        assert_dates_sorted(&["2017-08-23", "2017-08-22", "2017-08-22"], true);
        assert_dates_sorted(&["2016-08-23", "2016-08-24"], false);
    }
}
