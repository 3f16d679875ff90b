use crate::adapters::csv_reader::CsvRowSource;
use crate::core::scanner::{scan, ScanOptions, ScanOutcome};
use crate::domain::model::FileDetails;
use crate::domain::ports::{ConfigProvider, RowSource};
use crate::utils::error::Result;
use chrono::Utc;
use std::time::Instant;

pub struct ProfileEngine<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> ProfileEngine<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            header_window: self.config.header_window(),
            sample_row_index: self.config.sample_row_index(),
        }
    }

    /// Opens the configured file and profiles it.
    pub fn run(&self) -> Result<FileDetails> {
        let path = self.config.input_path();
        tracing::info!("Profiling {}", path);

        self.timed(|| {
            let source = CsvRowSource::from_path(path, self.config.delimiter()?)?;
            scan(source, &self.scan_options())
        })
    }

    /// Profiles rows from an already open source.
    pub fn run_source<R: RowSource>(&self, source: R) -> Result<FileDetails> {
        self.timed(|| scan(source, &self.scan_options()))
    }

    fn timed<F>(&self, scan_fn: F) -> Result<FileDetails>
    where
        F: FnOnce() -> Result<ScanOutcome>,
    {
        let parse_start_time = Utc::now();
        let started = Instant::now();

        let outcome = scan_fn()?;

        let parse_time = started.elapsed();
        let parse_end_time = Utc::now();

        tracing::info!(
            "Profiled {} rows in {:?} (header row: {})",
            outcome.total_line_count,
            parse_time,
            outcome.first_row_are_labels
        );

        Ok(FileDetails {
            total_line_count: outcome.total_line_count,
            first_row_are_labels: outcome.first_row_are_labels,
            columns_counts: outcome.columns_counts,
            column_type_counts: outcome.column_type_counts,
            column_type_details: outcome.column_type_details,
            parse_start_time,
            parse_end_time,
            parse_time_seconds: parse_time.as_secs_f64(),
        })
    }
}
