//! Truthiness classifiers for scalar values.
//!
//! Each classifier answers two questions: is this value a recognized
//! boolean-like literal, and if so, which boolean does it stand for.

use crate::domain::model::Truthiness;

/// Strings at or above this many characters are never boolean literals.
pub const MAX_TRUTHY_STRING_LEN: usize = 10;

pub fn truthiness_int(value: i64) -> Truthiness {
    match value {
        0 => Truthiness::recognized(false),
        1 => Truthiness::recognized(true),
        _ => Truthiness::UNRECOGNIZED,
    }
}

pub fn truthiness_float(value: f64) -> Truthiness {
    if value == 0.0 {
        Truthiness::recognized(false)
    } else if value == 1.0 {
        Truthiness::recognized(true)
    } else {
        Truthiness::UNRECOGNIZED
    }
}

pub fn truthiness_str(value: &str) -> Truthiness {
    let folded = value.to_lowercase();
    if folded.chars().count() >= MAX_TRUTHY_STRING_LEN {
        return Truthiness::UNRECOGNIZED;
    }

    match folded.as_str() {
        "true" | "t" | "1" => Truthiness::recognized(true),
        "false" | "f" | "" | "0" | "-0" => Truthiness::recognized(false),
        "null" | "nil" | "none" | "undefined" | "nan" => Truthiness::recognized(false),
        _ => Truthiness::UNRECOGNIZED,
    }
}
