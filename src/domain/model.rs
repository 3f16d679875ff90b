use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Input representations the type asserter understands.
///
/// Fields read from a delimited file always arrive as `Text`; the other
/// variants cover values that were already decoded upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Json(serde_json::Value),
}

// Floats compare by bit pattern so a value always equals itself, NaN included.
impl PartialEq for RawValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (RawValue::Nil, RawValue::Nil) => true,
            (RawValue::Bool(a), RawValue::Bool(b)) => a == b,
            (RawValue::Int(a), RawValue::Int(b)) => a == b,
            (RawValue::Float(a), RawValue::Float(b)) => a.to_bits() == b.to_bits(),
            (RawValue::Text(a), RawValue::Text(b)) => a == b,
            (RawValue::Bytes(a), RawValue::Bytes(b)) => a == b,
            (RawValue::Json(a), RawValue::Json(b)) => a == b,
            _ => false,
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Kind {
    Nil,
    Bool,
    Int,
    Float,
    String,
    Array,
    JsonObject,
}

impl Kind {
    pub const ALL: [Kind; 7] = [
        Kind::Nil,
        Kind::Bool,
        Kind::Int,
        Kind::Float,
        Kind::String,
        Kind::Array,
        Kind::JsonObject,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Nil => "nil",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::JsonObject => "json-object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field value in the native representation of its kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConvertedValue {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Json(serde_json::Value),
}

impl PartialEq for ConvertedValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ConvertedValue::Nil, ConvertedValue::Nil) => true,
            (ConvertedValue::Bool(a), ConvertedValue::Bool(b)) => a == b,
            (ConvertedValue::Int(a), ConvertedValue::Int(b)) => a == b,
            (ConvertedValue::Float(a), ConvertedValue::Float(b)) => a.to_bits() == b.to_bits(),
            (ConvertedValue::Text(a), ConvertedValue::Text(b)) => a == b,
            (ConvertedValue::Json(a), ConvertedValue::Json(b)) => a == b,
            _ => false,
        }
    }
}

impl ConvertedValue {
    /// Renders the value back to text.
    ///
    /// Floats use the `Debug` form, which always carries a fraction,
    /// exponent, `NaN` or `inf`, so the text never reads as an integer.
    pub fn render(&self) -> String {
        match self {
            ConvertedValue::Nil => String::new(),
            ConvertedValue::Bool(b) => b.to_string(),
            ConvertedValue::Int(i) => i.to_string(),
            ConvertedValue::Float(f) => format!("{:?}", f),
            ConvertedValue::Text(s) => s.clone(),
            ConvertedValue::Json(v) => v.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Truthiness {
    pub recognized: bool,
    pub value: bool,
}

impl Truthiness {
    pub const UNRECOGNIZED: Truthiness = Truthiness {
        recognized: false,
        value: false,
    };

    pub fn recognized(value: bool) -> Self {
        Self {
            recognized: true,
            value,
        }
    }
}

/// Classification of a single field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeAssertion {
    pub value: RawValue,
    pub converted_value: ConvertedValue,
    pub value_type: Kind,
    pub is_array: bool,
    pub is_json: bool,
    pub is_truthy: bool,
    pub truthy_value: bool,
}

impl TypeAssertion {
    pub fn truthiness(&self) -> Truthiness {
        Truthiness {
            recognized: self.is_truthy,
            value: self.truthy_value,
        }
    }
}

/// Column-aligned classifications for one row.
pub type RowTypeProfile = Vec<TypeAssertion>;

/// Per-kind field counts for one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TypeTally {
    pub nil: usize,
    pub bool: usize,
    pub int: usize,
    pub float: usize,
    pub string: usize,
    pub json: usize,
    pub array: usize,
}

impl TypeTally {
    pub fn record(&mut self, kind: Kind) {
        match kind {
            Kind::Nil => self.nil += 1,
            Kind::Bool => self.bool += 1,
            Kind::Int => self.int += 1,
            Kind::Float => self.float += 1,
            Kind::String => self.string += 1,
            Kind::Array => self.array += 1,
            Kind::JsonObject => self.json += 1,
        }
    }

    pub fn count(&self, kind: Kind) -> usize {
        match kind {
            Kind::Nil => self.nil,
            Kind::Bool => self.bool,
            Kind::Int => self.int,
            Kind::Float => self.float,
            Kind::String => self.string,
            Kind::Array => self.array,
            Kind::JsonObject => self.json,
        }
    }

    pub fn total(&self) -> usize {
        Kind::ALL.iter().map(|k| self.count(*k)).sum()
    }
}

/// One event yielded by a row source.
#[derive(Debug, Clone, PartialEq)]
pub enum RowEvent {
    Record(Vec<String>),
    /// The row parsed, but its field count differs from the file's.
    FieldCountMismatch {
        row: Vec<String>,
        expected: usize,
    },
}

/// Structural and type profile of one file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileDetails {
    pub total_line_count: usize,
    pub first_row_are_labels: bool,
    pub columns_counts: BTreeMap<usize, usize>,
    pub column_type_counts: TypeTally,
    pub column_type_details: RowTypeProfile,
    pub parse_start_time: DateTime<Utc>,
    pub parse_end_time: DateTime<Utc>,
    pub parse_time_seconds: f64,
}
