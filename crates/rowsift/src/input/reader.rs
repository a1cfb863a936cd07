//! Line-based record reader.

use std::io::{BufRead, Split};
use std::path::PathBuf;

use crate::error::{Result, RowsiftError};
use crate::validation::Record;

/// Field delimiter for input rows.
pub const DELIMITER: char = ',';

/// Split a raw line into fields by position.
///
/// Quotes get no special treatment, so a comma inside a quoted field still
/// splits it. Trailing empty fields are kept.
pub fn split_fields(line: &str) -> Vec<String> {
    line.split(DELIMITER).map(str::to_string).collect()
}

/// A data line together with its parsed record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// The line's bytes as read, without its line terminator.
    pub raw: Vec<u8>,
    pub record: Record,
}

/// Decode a line for validation; invalid UTF-8 becomes U+FFFD.
pub fn decode_line(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

/// Reads a header line and then one record per line.
///
/// Lines are kept as bytes so rows that are not valid UTF-8 still reach the
/// validator and the sinks unchanged.
pub struct RecordReader<R> {
    path: PathBuf,
    lines: Split<R>,
    header_read: bool,
    row_number: usize,
}

impl<R: BufRead> RecordReader<R> {
    /// Wrap a reader; `path` is used in error messages.
    pub fn new(reader: R, path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lines: reader.split(b'\n'),
            header_read: false,
            row_number: 0,
        }
    }

    /// Read the header line. Returns `None` for empty input.
    ///
    /// Must be called before iterating records; calling it again returns `None`.
    pub fn header(&mut self) -> Result<Option<Vec<u8>>> {
        if self.header_read {
            return Ok(None);
        }
        self.header_read = true;
        self.next_line()
    }

    fn next_line(&mut self) -> Result<Option<Vec<u8>>> {
        match self.lines.next() {
            Some(Ok(mut line)) => {
                if line.last() == Some(&b'\r') {
                    line.pop();
                }
                Ok(Some(line))
            }
            Some(Err(e)) => Err(RowsiftError::io(&self.path, e)),
            None => Ok(None),
        }
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<RawRow>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.header_read {
            if let Err(e) = self.header() {
                return Some(Err(e));
            }
        }

        match self.next_line() {
            Ok(Some(raw)) => {
                self.row_number += 1;
                let record = Record::new(self.row_number, split_fields(&decode_line(&raw)));
                Some(Ok(RawRow { raw, record }))
            }
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
