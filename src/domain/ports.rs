use crate::domain::model::RowEvent;
use crate::utils::error::Result;

/// A sequential supplier of rows, usually a delimited-text reader.
pub trait RowSource {
    /// Returns the next row, `Ok(None)` at end of input, or a fatal reader error.
    fn next_row(&mut self) -> Result<Option<RowEvent>>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn delimiter(&self) -> Result<u8>;
    fn header_window(&self) -> usize;
    fn sample_row_index(&self) -> usize;
    fn pretty_output(&self) -> bool;
}

impl<R: RowSource + ?Sized> RowSource for &mut R {
    fn next_row(&mut self) -> Result<Option<RowEvent>> {
        (**self).next_row()
    }
}
