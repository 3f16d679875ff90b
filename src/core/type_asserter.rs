//! Type assertion for single field values.
//!
//! Text is first run through [`COERCION_ORDER`]; whatever survives is
//! classified by its representation. The result carries the converted
//! value, a truthiness verdict and, for strings, the shallow
//! array/object flags.

use crate::core::sniff::{looks_like_array, looks_like_object};
use crate::core::truthiness::{truthiness_float, truthiness_int, truthiness_str};
use crate::domain::model::{ConvertedValue, Kind, RawValue, Truthiness, TypeAssertion};
use crate::utils::error::{ProfileError, Result};
use std::fmt::Display;
use std::str::FromStr;

/// A numeric coercion attempted on textual input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    Integer,
    Float,
}

/// Coercions in priority order; the first one that succeeds wins.
pub const COERCION_ORDER: [Coercion; 2] = [Coercion::Integer, Coercion::Float];

impl Coercion {
    pub fn apply(self, text: &str) -> Option<RawValue> {
        match self {
            Coercion::Integer => text.parse::<i64>().ok().map(RawValue::Int),
            Coercion::Float => text.parse::<f64>().ok().map(RawValue::Float),
        }
    }
}

/// Applies [`COERCION_ORDER`] to textual values. Non-textual values and
/// text that no coercion accepts are returned unchanged.
pub fn coerce(value: RawValue) -> RawValue {
    let coerced = match &value {
        RawValue::Text(text) => coerce_text(text),
        RawValue::Bytes(bytes) => std::str::from_utf8(bytes).ok().and_then(coerce_text),
        _ => None,
    };
    coerced.unwrap_or(value)
}

fn coerce_text(text: &str) -> Option<RawValue> {
    COERCION_ORDER.iter().find_map(|coercion| coercion.apply(text))
}

/// Classifies one raw text field.
pub fn classify(raw: &str) -> Result<TypeAssertion> {
    classify_value(RawValue::from(raw))
}

pub fn classify_value(value: RawValue) -> Result<TypeAssertion> {
    let (value_type, converted_value) = convert(coerce(value.clone()))?;

    let mut assertion = TypeAssertion {
        value,
        converted_value,
        value_type,
        is_array: false,
        is_json: false,
        is_truthy: false,
        truthy_value: false,
    };

    let truthiness = match &assertion.converted_value {
        ConvertedValue::Nil => Truthiness::recognized(false),
        ConvertedValue::Bool(b) => Truthiness::recognized(*b),
        ConvertedValue::Int(_) => {
            truthiness_int(reparse(&assertion.converted_value, value_type)?)
        }
        ConvertedValue::Float(_) => {
            truthiness_float(reparse(&assertion.converted_value, value_type)?)
        }
        ConvertedValue::Text(text) => {
            assertion.is_array = looks_like_array(text);
            assertion.is_json = looks_like_object(text);
            truthiness_str(text)
        }
        ConvertedValue::Json(_) => Truthiness::UNRECOGNIZED,
    };

    assertion.is_truthy = truthiness.recognized;
    assertion.truthy_value = truthiness.value;

    Ok(assertion)
}

fn convert(value: RawValue) -> Result<(Kind, ConvertedValue)> {
    match value {
        RawValue::Nil => Ok((Kind::Nil, ConvertedValue::Nil)),
        RawValue::Bool(b) => Ok((Kind::Bool, ConvertedValue::Bool(b))),
        RawValue::Int(i) => Ok((Kind::Int, ConvertedValue::Int(i))),
        RawValue::Float(f) => Ok((Kind::Float, ConvertedValue::Float(f))),
        RawValue::Text(text) => Ok((Kind::String, ConvertedValue::Text(text))),
        RawValue::Bytes(bytes) => match String::from_utf8(bytes) {
            Ok(text) => Ok((Kind::String, ConvertedValue::Text(text))),
            Err(e) => Err(ProfileError::UnsupportedValue {
                description: format!("byte sequence is not valid UTF-8: {}", e),
            }),
        },
        RawValue::Json(json) => convert_json(json),
    }
}

fn convert_json(json: serde_json::Value) -> Result<(Kind, ConvertedValue)> {
    use serde_json::Value;

    match json {
        Value::Null => Ok((Kind::Nil, ConvertedValue::Nil)),
        Value::Bool(b) => Ok((Kind::Bool, ConvertedValue::Bool(b))),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => Ok((Kind::Int, ConvertedValue::Int(i))),
            (None, Some(f)) => Ok((Kind::Float, ConvertedValue::Float(f))),
            (None, None) => Err(ProfileError::UnsupportedValue {
                description: format!("JSON number {} has no 64-bit representation", n),
            }),
        },
        Value::String(text) => Ok((Kind::String, ConvertedValue::Text(text))),
        array @ Value::Array(_) => Ok((Kind::Array, ConvertedValue::Json(array))),
        object @ Value::Object(_) => Ok((Kind::JsonObject, ConvertedValue::Json(object))),
    }
}

/// Renders a numeric value and parses it back. A failure here means the
/// coercion and the rendering disagree, which is a defect.
fn reparse<T>(converted: &ConvertedValue, kind: Kind) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let rendered = converted.render();
    rendered
        .parse::<T>()
        .map_err(|e| ProfileError::ClassifierInconsistency {
            raw: rendered.clone(),
            kind: kind.to_string(),
            reason: e.to_string(),
        })
}
