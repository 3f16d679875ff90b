// Adapters layer: the csv-backed row source and report rendering.

pub mod csv_reader;
pub mod report;
