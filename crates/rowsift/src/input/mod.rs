//! Input reading: source files and positional record splitting.

mod reader;
mod source;

pub use reader::{decode_line, split_fields, RawRow, RecordReader, DELIMITER};
pub use source::{InputSource, SourceMetadata};
