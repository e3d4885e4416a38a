use std::fmt::Formatter;

use crate::geocode::error::GeocodeError;

#[derive(Debug)]
pub enum RunError {
    /// A file could not be opened or created
    FileAccess { path: String, source: Box<dyn std::fmt::Debug + Send> },
    /// A data row's field count does not match the header
    MalformedRow { line: Option<u64>, expected: u64, found: u64 },
    /// A row could not be decoded into the expected columns
    InvalidRecord(Box<dyn std::fmt::Debug + Send>),
    /// The output file rejected a write
    Write(Box<dyn std::fmt::Debug + Send>),
    /// A write was attempted after the writer was closed
    WriterClosed,
    /// A geocode failure escalated by the fail-fast policy
    Geocode { row: u64, query: String, source: GeocodeError }
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let msg = match self {
            RunError::FileAccess { path, source } => {
                format!("could not open {}: {:?}", path, source)
            },
            RunError::MalformedRow { line: Some(line), expected, found } => {
                format!("malformed row at line {}: expected {} fields, found {}", line, expected, found)
            },
            RunError::MalformedRow { line: None, expected, found } => {
                format!("malformed row: expected {} fields, found {}", expected, found)
            },
            RunError::InvalidRecord(inner) => {
                format!("could not decode row: {:?}", inner)
            },
            RunError::Write(inner) => {
                format!("could not write output row: {:?}", inner)
            },
            RunError::WriterClosed => {
                "output writer is already closed".into()
            },
            RunError::Geocode { row, query, source } => {
                format!("row {} (\"{}\"): {}", row, query, source)
            }
        };
        write!(f, "Run error: {}", msg)
    }
}

impl From<csv::Error> for RunError {
    fn from(error: csv::Error) -> Self {
        if let csv::ErrorKind::UnequalLengths { pos, expected_len, len } = error.kind() {
            return RunError::MalformedRow {
                line: pos.as_ref().map(|p| p.line()),
                expected: *expected_len,
                found: *len
            };
        }
        RunError::InvalidRecord(Box::new(error))
    }
}
