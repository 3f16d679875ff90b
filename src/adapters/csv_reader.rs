use crate::domain::model::RowEvent;
use crate::domain::ports::RowSource;
use crate::utils::error::{ProfileError, Result};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Row source backed by the `csv` crate.
///
/// The reader is flexible: the field count of the first non-empty record
/// becomes the expected width, and later records of another width are
/// reported as [`RowEvent::FieldCountMismatch`] instead of failing.
/// Blanks at the start of a field are dropped before quotes are
/// recognized; content inside quotes is never trimmed.
pub struct CsvRowSource<R: Read> {
    reader: csv::Reader<LeadingSpaceTrim<R>>,
    record: csv::ByteRecord,
    expected_len: Option<usize>,
}

impl CsvRowSource<File> {
    pub fn from_path<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            ProfileError::IoError(io::Error::new(
                e.kind(),
                format!("{}: {}", path.display(), e),
            ))
        })?;
        Ok(Self::from_reader(file, delimiter))
    }
}

impl<R: Read> CsvRowSource<R> {
    pub fn from_reader(rdr: R, delimiter: u8) -> Self {
        let reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .flexible(true)
            .quoting(true)
            .double_quote(true)
            .from_reader(LeadingSpaceTrim::new(rdr, delimiter));

        Self {
            reader,
            record: csv::ByteRecord::new(),
            expected_len: None,
        }
    }

    fn decode(&self) -> Result<Vec<String>> {
        let mut row = Vec::with_capacity(self.record.len());
        for field in self.record.iter() {
            match std::str::from_utf8(field) {
                Ok(text) => row.push(text.to_string()),
                Err(e) => {
                    return Err(ProfileError::MalformedRow {
                        line: self.record.position().map(|p| p.line()).unwrap_or(0),
                        row: self
                            .record
                            .iter()
                            .map(|f| String::from_utf8_lossy(f).into_owned())
                            .collect(),
                        reason: format!("invalid UTF-8 in field {}: {}", row.len() + 1, e),
                    })
                }
            }
        }
        Ok(row)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldState {
    Start,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

/// Drops spaces and tabs at the start of each field, outside quotes.
///
/// Tracks just enough of the quoting rules to know where a field starts:
/// a quote only opens a field when it is the first kept byte, and `""`
/// inside a quoted field is an escaped quote. The delimiter itself is
/// never dropped, even when it is a tab.
struct LeadingSpaceTrim<R> {
    inner: R,
    delimiter: u8,
    state: FieldState,
}

impl<R: Read> LeadingSpaceTrim<R> {
    fn new(inner: R, delimiter: u8) -> Self {
        Self {
            inner,
            delimiter,
            state: FieldState::Start,
        }
    }

    fn keep(&mut self, byte: u8) -> bool {
        let is_boundary = byte == self.delimiter || byte == b'\n' || byte == b'\r';

        match self.state {
            FieldState::Start => {
                if is_boundary {
                    return true;
                }
                if byte == b' ' || byte == b'\t' {
                    return false;
                }
                self.state = if byte == b'"' {
                    FieldState::Quoted
                } else {
                    FieldState::Unquoted
                };
            }
            FieldState::Quoted => {
                if byte == b'"' {
                    self.state = FieldState::QuoteInQuoted;
                }
            }
            FieldState::QuoteInQuoted => {
                self.state = if byte == b'"' {
                    FieldState::Quoted
                } else if is_boundary {
                    FieldState::Start
                } else {
                    FieldState::Unquoted
                };
            }
            FieldState::Unquoted => {
                if is_boundary {
                    self.state = FieldState::Start;
                }
            }
        }
        true
    }
}

impl<R: Read> Read for LeadingSpaceTrim<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            let n = self.inner.read(buf)?;
            if n == 0 {
                return Ok(0);
            }

            let mut kept = 0;
            for i in 0..n {
                let byte = buf[i];
                if self.keep(byte) {
                    buf[kept] = byte;
                    kept += 1;
                }
            }
            // A chunk of nothing but leading blanks must not look like EOF.
            if kept > 0 {
                return Ok(kept);
            }
        }
    }
}

impl<R: Read> RowSource for CsvRowSource<R> {
    fn next_row(&mut self) -> Result<Option<RowEvent>> {
        if !self.reader.read_byte_record(&mut self.record)? {
            return Ok(None);
        }

        let row = self.decode()?;
        if row.is_empty() {
            return Ok(Some(RowEvent::Record(row)));
        }

        match self.expected_len {
            None => {
                self.expected_len = Some(row.len());
                Ok(Some(RowEvent::Record(row)))
            }
            Some(expected) if expected == row.len() => Ok(Some(RowEvent::Record(row))),
            Some(expected) => Ok(Some(RowEvent::FieldCountMismatch { row, expected })),
        }
    }
}
