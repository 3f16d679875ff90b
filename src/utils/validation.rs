use crate::utils::error::{ProfileError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ProfileError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ProfileError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(ProfileError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// Parses a delimiter setting into the single byte the reader expects.
///
/// Accepts one ASCII character, or `\t` / `tab` for tab-separated files.
/// Quotes and line breaks are rejected because the reader gives them
/// structural meaning.
pub fn parse_delimiter(field_name: &str, value: &str) -> Result<u8> {
    let normalized = match value {
        "\\t" | "tab" => "\t",
        other => other,
    };

    let invalid = |reason: &str| ProfileError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let mut chars = normalized.chars();
    let c = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return Err(invalid("Delimiter must be exactly one character")),
    };

    if !c.is_ascii() {
        return Err(invalid("Delimiter must be an ASCII character"));
    }
    if matches!(c, '"' | '\n' | '\r') {
        return Err(invalid("Delimiter cannot be a quote or line break"));
    }

    Ok(c as u8)
}
