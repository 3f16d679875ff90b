pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TomlConfig;
pub use crate::adapters::csv_reader::CsvRowSource;
pub use crate::core::engine::ProfileEngine;
pub use crate::core::header::is_header_row;
pub use crate::core::profile::profile_row;
pub use crate::core::scanner::{scan, ScanOptions, ScanOutcome};
pub use crate::core::type_asserter::{classify, classify_value};
pub use domain::model::{
    ConvertedValue, FileDetails, Kind, RawValue, RowEvent, RowTypeProfile, Truthiness,
    TypeAssertion, TypeTally,
};
pub use domain::ports::{ConfigProvider, RowSource};
pub use utils::error::{ProfileError, Result};
