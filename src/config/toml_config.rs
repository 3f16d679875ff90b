use crate::core::header::DEFAULT_HEADER_WINDOW;
use crate::core::scanner::DEFAULT_SAMPLE_ROW_INDEX;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ProfileError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub input: InputConfig,
    pub sampling: Option<SamplingConfig>,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: String,
    pub delimiter: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingConfig {
    pub header_window: Option<usize>,
    pub sample_row: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub pretty: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub json: Option<bool>,
    pub verbose: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ProfileError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration after expanding `${VAR}` placeholders.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ProfileError::ConfigParseError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    // Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ProfileError::ConfigError {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_path("input.path", &self.input.path)?;
        self.delimiter()?;
        validation::validate_positive_number("sampling.header_window", self.header_window(), 1)?;
        Ok(())
    }

    pub fn delimiter_setting(&self) -> &str {
        self.input.delimiter.as_deref().unwrap_or(",")
    }

    pub fn json_logging(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    pub fn verbose_logging(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.verbose).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.input.path
    }

    fn delimiter(&self) -> Result<u8> {
        validation::parse_delimiter("input.delimiter", self.delimiter_setting())
    }

    fn header_window(&self) -> usize {
        self.sampling
            .as_ref()
            .and_then(|s| s.header_window)
            .unwrap_or(DEFAULT_HEADER_WINDOW)
    }

    fn sample_row_index(&self) -> usize {
        self.sampling
            .as_ref()
            .and_then(|s| s.sample_row)
            .unwrap_or(DEFAULT_SAMPLE_ROW_INDEX)
    }

    fn pretty_output(&self) -> bool {
        self.output.as_ref().and_then(|o| o.pretty).unwrap_or(true)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
