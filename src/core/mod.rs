pub mod engine;
pub mod header;
pub mod profile;
pub mod scanner;
pub mod sniff;
pub mod truthiness;
pub mod type_asserter;

pub use crate::domain::model::{FileDetails, Kind, RowEvent, TypeAssertion, TypeTally};
pub use crate::domain::ports::{ConfigProvider, RowSource};
pub use crate::utils::error::Result;
