//! Structure scan over a row stream.

use crate::core::header::{is_header_row, DEFAULT_HEADER_WINDOW};
use crate::core::profile::profile_row;
use crate::domain::model::{RowEvent, RowTypeProfile, TypeTally};
use crate::domain::ports::RowSource;
use crate::utils::error::Result;
use std::collections::BTreeMap;

/// Index (by total row count) of the representative row; the third row.
pub const DEFAULT_SAMPLE_ROW_INDEX: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    pub header_window: usize,
    pub sample_row_index: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            header_window: DEFAULT_HEADER_WINDOW,
            sample_row_index: DEFAULT_SAMPLE_ROW_INDEX,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub total_line_count: usize,
    pub columns_counts: BTreeMap<usize, usize>,
    pub first_row_are_labels: bool,
    pub column_type_counts: TypeTally,
    pub column_type_details: RowTypeProfile,
}

/// Consumes `source` to the end and profiles what it saw.
///
/// Blank rows are skipped. Rows with a mismatched field count count toward
/// the total only. Any error from the source ends the scan.
pub fn scan<R: RowSource>(mut source: R, options: &ScanOptions) -> Result<ScanOutcome> {
    let mut total_line_count = 0usize;
    let mut mismatched = 0usize;
    let mut columns_counts: BTreeMap<usize, usize> = BTreeMap::new();
    let mut header_sample: Vec<Vec<String>> = Vec::new();
    let mut sample_row: Vec<String> = Vec::new();

    while let Some(event) = source.next_row()? {
        match event {
            RowEvent::Record(row) => {
                if row.is_empty() {
                    continue;
                }
                *columns_counts.entry(row.len()).or_insert(0) += 1;

                if total_line_count < options.header_window {
                    header_sample.push(row.clone());
                }
                if total_line_count <= options.sample_row_index {
                    sample_row = row;
                }
                total_line_count += 1;
            }
            RowEvent::FieldCountMismatch { row, .. } => {
                if row.is_empty() {
                    continue;
                }
                mismatched += 1;
                total_line_count += 1;
            }
        }
    }

    tracing::debug!(
        "Scanned {} rows ({} with a mismatched field count), {} distinct widths",
        total_line_count,
        mismatched,
        columns_counts.len()
    );

    let first_row_are_labels = is_header_row(&header_sample, options.header_window)?;
    let (column_type_counts, column_type_details) = profile_row(&sample_row)?;

    Ok(ScanOutcome {
        total_line_count,
        columns_counts,
        first_row_are_labels,
        column_type_counts,
        column_type_details,
    })
}
