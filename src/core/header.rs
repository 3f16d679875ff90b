//! Header row detection by type-profile comparison.

use crate::core::type_asserter::classify;
use crate::domain::model::Kind;
use crate::utils::error::{ProfileError, Result};

pub const DEFAULT_HEADER_WINDOW: usize = 5;

/// Decides whether the first row holds column labels.
///
/// Row 0's kinds form the reference. Each following row inside `window`
/// is compared column by column; the first differing kind means row 0 is
/// a header. Columns past the width of row 0 are not compared.
pub fn is_header_row<S: AsRef<str>>(rows: &[Vec<S>], window: usize) -> Result<bool> {
    let first = rows.first().ok_or(ProfileError::EmptySample)?;
    let window = window.min(rows.len());

    let reference = first
        .iter()
        .map(|field| classify(field.as_ref()).map(|ta| ta.value_type))
        .collect::<Result<Vec<Kind>>>()?;

    for (row_index, row) in rows.iter().enumerate().take(window).skip(1) {
        for (column, (field, expected)) in row.iter().zip(&reference).enumerate() {
            let kind = classify(field.as_ref())?.value_type;
            if kind != *expected {
                tracing::debug!(
                    "Row {} column {} is {} where the first row has {}",
                    row_index,
                    column,
                    kind,
                    expected
                );
                return Ok(true);
            }
        }
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_label_row_is_detected() {
        let sample = rows(&[&["id", "name", "age"], &["1", "Ann", "30"]]);
        assert!(is_header_row(&sample, DEFAULT_HEADER_WINDOW).unwrap());
    }

    #[test]
    fn test_matching_profiles_are_data() {
        let sample = rows(&[&["1", "Ann", "30"], &["2", "Bob", "31"]]);
        assert!(!is_header_row(&sample, DEFAULT_HEADER_WINDOW).unwrap());
    }

    #[test]
    fn test_all_string_columns_cannot_be_told_apart() {
        let sample = rows(&[&["name", "city"], &["Ann", "Oslo"], &["Bob", "Rome"]]);
        assert!(!is_header_row(&sample, DEFAULT_HEADER_WINDOW).unwrap());
    }

    #[test]
    fn test_window_limits_compared_rows() {
        let sample = rows(&[
            &["1", "a"],
            &["2", "b"],
            &["3", "c"],
            &["x", "d"],
        ]);

        assert!(!is_header_row(&sample, 3).unwrap());
        assert!(is_header_row(&sample, 4).unwrap());
        assert!(is_header_row(&sample, 50).unwrap());
    }

    #[test]
    fn test_single_row_is_not_a_header() {
        let sample = rows(&[&["id", "name"]]);
        assert!(!is_header_row(&sample, DEFAULT_HEADER_WINDOW).unwrap());
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let sample = rows(&[&["1", "Ann"], &["2", "Bob", "extra", "7"]]);
        assert!(!is_header_row(&sample, DEFAULT_HEADER_WINDOW).unwrap());
    }

    #[test]
    fn test_short_rows_compare_available_columns() {
        let sample = rows(&[&["1", "Ann", "30"], &["2"]]);
        assert!(!is_header_row(&sample, DEFAULT_HEADER_WINDOW).unwrap());
    }

    #[test]
    fn test_empty_sample_is_rejected() {
        let sample: Vec<Vec<String>> = Vec::new();
        assert!(matches!(
            is_header_row(&sample, DEFAULT_HEADER_WINDOW),
            Err(ProfileError::EmptySample)
        ));
    }
}
