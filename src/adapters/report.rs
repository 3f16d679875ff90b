use crate::domain::model::FileDetails;
use crate::utils::error::{ProfileError, Result};

/// Renders a finished profile.
///
/// The pretty form is meant for people and carries headings; the compact
/// form is a single JSON document and nothing else.
pub fn render_report(details: &FileDetails, pretty: bool) -> Result<String> {
    if !pretty {
        return Ok(serde_json::to_string(details)?);
    }

    let json = serde_json::to_string_pretty(details)?;
    Ok(format!(
        "File Details:\n{}\nTime in Seconds: {}",
        json, details.parse_time_seconds
    ))
}

/// Diagnostic text for a failed run, including the offending row when the
/// reader supplied one.
pub fn render_failure(error: &ProfileError) -> String {
    let mut message = format!(
        "❌ {}\n💡 Suggestion: {}",
        error.user_friendly_message(),
        error.recovery_suggestion()
    );

    if let Some(row) = error.broken_row() {
        let rendered = serde_json::to_string_pretty(row).unwrap_or_else(|_| format!("{:?}", row));
        message.push_str(&format!("\nBroken Row:\n{}", rendered));
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::profile::profile_row;
    use chrono::Utc;
    use std::collections::BTreeMap;

    fn sample_details() -> FileDetails {
        let (column_type_counts, column_type_details) = profile_row(&["7", "x"]).unwrap();
        let now = Utc::now();
        FileDetails {
            total_line_count: 3,
            first_row_are_labels: true,
            columns_counts: BTreeMap::from([(2, 3)]),
            column_type_counts,
            column_type_details,
            parse_start_time: now,
            parse_end_time: now,
            parse_time_seconds: 0.25,
        }
    }

    #[test]
    fn test_compact_report_is_plain_json() {
        let rendered = render_report(&sample_details(), false).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(parsed["total_line_count"], 3);
        assert_eq!(parsed["first_row_are_labels"], true);
        assert_eq!(parsed["columns_counts"]["2"], 3);
        assert_eq!(parsed["column_type_counts"]["int"], 1);
        assert_eq!(parsed["column_type_details"][0]["value_type"], "int");
        assert_eq!(parsed["column_type_details"][0]["converted_value"], 7);
        assert_eq!(parsed["column_type_details"][1]["value"], "x");
        assert_eq!(parsed["parse_time_seconds"], 0.25);
        assert!(!rendered.contains("Time in Seconds"));
    }

    #[test]
    fn test_pretty_report_has_headings() {
        let rendered = render_report(&sample_details(), true).unwrap();

        assert!(rendered.starts_with("File Details:\n{"));
        assert!(rendered.ends_with("Time in Seconds: 0.25"));
    }

    #[test]
    fn test_failure_includes_broken_row() {
        let error = ProfileError::MalformedRow {
            line: 4,
            row: vec!["a".to_string(), "b".to_string()],
            reason: "invalid UTF-8".to_string(),
        };

        let rendered = render_failure(&error);

        assert!(rendered.contains("line 4"));
        assert!(rendered.contains("Broken Row:"));
        assert!(rendered.contains("\"b\""));
        assert!(!render_failure(&ProfileError::EmptySample).contains("Broken Row"));
    }
}
