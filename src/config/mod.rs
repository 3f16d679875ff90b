pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::header::DEFAULT_HEADER_WINDOW;
#[cfg(feature = "cli")]
use crate::core::scanner::DEFAULT_SAMPLE_ROW_INDEX;
#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "csv-profile")]
#[command(about = "Infer the structure and field types of a delimited text file")]
pub struct CliConfig {
    /// Delimited text file to profile
    pub path: String,

    #[arg(long, default_value = ",", help = "Field delimiter (one character, or \"tab\")")]
    pub delimiter: String,

    #[arg(long, default_value_t = DEFAULT_HEADER_WINDOW, help = "Rows compared when detecting a header")]
    pub header_window: usize,

    #[arg(long, default_value_t = DEFAULT_SAMPLE_ROW_INDEX, help = "Zero-based index of the row to profile")]
    pub sample_row: usize,

    #[arg(long, help = "Print the report as single-line JSON")]
    pub compact: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.path
    }

    fn delimiter(&self) -> Result<u8> {
        validation::parse_delimiter("delimiter", &self.delimiter)
    }

    fn header_window(&self) -> usize {
        self.header_window
    }

    fn sample_row_index(&self) -> usize {
        self.sample_row
    }

    fn pretty_output(&self) -> bool {
        !self.compact
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("path", &self.path)?;
        self.delimiter()?;
        validation::validate_positive_number("header_window", self.header_window, 1)?;
        Ok(())
    }
}
