use crate::core::type_asserter::classify;
use crate::domain::model::{RowTypeProfile, TypeTally};
use crate::utils::error::Result;

/// Classifies every field of a row, in column order.
pub fn profile_row<S: AsRef<str>>(row: &[S]) -> Result<(TypeTally, RowTypeProfile)> {
    let mut tally = TypeTally::default();
    let mut profile = Vec::with_capacity(row.len());

    for field in row {
        let assertion = classify(field.as_ref())?;
        tally.record(assertion.value_type);
        profile.push(assertion);
    }

    Ok((tally, profile))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Kind;

    #[test]
    fn test_profile_mixed_row() {
        let row = ["1", "Ann", "30.5", "", "[a,b]", "{}", "true"];
        let (tally, profile) = profile_row(&row).unwrap();

        assert_eq!(tally.int, 1);
        assert_eq!(tally.float, 1);
        assert_eq!(tally.string, 5);
        assert_eq!(tally.total(), row.len());

        let kinds: Vec<Kind> = profile.iter().map(|ta| ta.value_type).collect();
        assert_eq!(
            kinds,
            vec![
                Kind::Int,
                Kind::String,
                Kind::Float,
                Kind::String,
                Kind::String,
                Kind::String,
                Kind::String
            ]
        );
        assert!(profile[4].is_array);
        assert!(profile[5].is_json);
        assert!(profile[6].truthy_value);
    }

    #[test]
    fn test_profile_empty_row() {
        let row: Vec<String> = Vec::new();
        let (tally, profile) = profile_row(&row).unwrap();

        assert_eq!(tally, TypeTally::default());
        assert!(profile.is_empty());
    }
}
