use std::fs::File;
use std::io;
use std::path::Path;

use crate::pipeline::error::RunError;
use crate::records::{OutputRecord, OUTPUT_COLUMNS};

enum WriterState {
    Created,
    HeaderWritten,
    Closed
}

/// Writer for the enriched output file. Writes the header exactly once
/// before any row, then one line per record in the fixed column order.
/// Once closed, further writes are rejected.
pub struct RecordWriter<W: io::Write> {
    writer: csv::Writer<W>,
    state: WriterState
}

impl RecordWriter<File> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RunError> {
        let file = File::create(&path).map_err(|err| RunError::FileAccess {
            path: path.as_ref().display().to_string(),
            source: Box::new(err)
        })?;
        Ok(Self::from_writer(file))
    }
}

impl<W: io::Write> RecordWriter<W> {
    pub fn from_writer(writer: W) -> Self {
        RecordWriter {
            // The header is written from OUTPUT_COLUMNS, not inferred from
            // the serialized struct.
            writer: csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(writer),
            state: WriterState::Created
        }
    }

    pub fn write(&mut self, record: &OutputRecord) -> Result<(), RunError> {
        match self.state {
            WriterState::Closed => return Err(RunError::WriterClosed),
            WriterState::Created => self.write_header()?,
            WriterState::HeaderWritten => {}
        }
        self.writer
            .serialize(record)
            .map_err(|err| RunError::Write(Box::new(err)))
    }

    /// Flushes and seals the writer. A run with no rows still gets its
    /// header.
    pub fn close(&mut self) -> Result<(), RunError> {
        match self.state {
            WriterState::Closed => return Ok(()),
            WriterState::Created => self.write_header()?,
            WriterState::HeaderWritten => {}
        }
        self.state = WriterState::Closed;
        self.writer
            .flush()
            .map_err(|err| RunError::Write(Box::new(err)))
    }

    fn write_header(&mut self) -> Result<(), RunError> {
        self.writer
            .write_record(&OUTPUT_COLUMNS)
            .map_err(|err| RunError::Write(Box::new(err)))?;
        self.state = WriterState::HeaderWritten;
        Ok(())
    }
}
