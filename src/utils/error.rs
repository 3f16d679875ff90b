use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow {
        line: u64,
        row: Vec<String>,
        reason: String,
    },

    #[error("Classifier inconsistency for {kind} value '{raw}': {reason}")]
    ClassifierInconsistency {
        raw: String,
        kind: String,
        reason: String,
    },

    #[error("Unsupported value representation: {description}")]
    UnsupportedValue { description: String },

    #[error("Header detection needs at least one sample row")]
    EmptySample,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration parse error in {field}: {message}")]
    ConfigParseError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Classification,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit status for a run that failed with this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl ProfileError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ProfileError::CsvError(_)
            | ProfileError::MalformedRow { .. }
            | ProfileError::EmptySample => ErrorCategory::Input,
            ProfileError::ConfigError { .. }
            | ProfileError::ConfigParseError { .. }
            | ProfileError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ProfileError::ClassifierInconsistency { .. } | ProfileError::UnsupportedValue { .. } => {
                ErrorCategory::Classification
            }
            ProfileError::IoError(_) | ProfileError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Classification | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ProfileError::CsvError(e) => format!("Could not read the delimited file: {}", e),
            ProfileError::IoError(e) => format!("Could not access the input: {}", e),
            ProfileError::SerializationError(e) => format!("Could not render the report: {}", e),
            ProfileError::MalformedRow { line, reason, .. } => {
                format!("Row at line {} could not be parsed: {}", line, reason)
            }
            ProfileError::ClassifierInconsistency { raw, kind, .. } => {
                format!("Internal error while classifying '{}' as {}", raw, kind)
            }
            ProfileError::UnsupportedValue { description } => {
                format!("Value cannot be classified: {}", description)
            }
            ProfileError::EmptySample => "The file contains no usable data rows".to_string(),
            ProfileError::ConfigError { message } => format!("Configuration problem: {}", message),
            ProfileError::ConfigParseError { field, message } => {
                format!("Configuration file is invalid ({}): {}", field, message)
            }
            ProfileError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Setting {} = '{}' is invalid: {}", field, value, reason),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ProfileError::CsvError(_) | ProfileError::MalformedRow { .. } => {
                "Check the delimiter setting and the quoting of the reported row"
            }
            ProfileError::IoError(_) => "Make sure the path exists and is readable",
            ProfileError::SerializationError(_) => "Retry with --compact output",
            ProfileError::EmptySample => "Make sure the file contains at least one non-blank row",
            ProfileError::ClassifierInconsistency { .. } | ProfileError::UnsupportedValue { .. } => {
                "Report the value that triggered this error"
            }
            ProfileError::ConfigError { .. }
            | ProfileError::ConfigParseError { .. }
            | ProfileError::InvalidConfigValueError { .. } => {
                "Fix the reported setting and run again"
            }
        }
    }

    /// The offending row for reader-level failures.
    pub fn broken_row(&self) -> Option<&[String]> {
        match self {
            ProfileError::MalformedRow { row, .. } => Some(row),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProfileError>;
