use std::fs::File;
use std::io;
use std::path::Path;

use crate::pipeline::error::RunError;
use crate::records::InputRecord;

/// Lazy reader over a delimited input file. The first line is the header;
/// every following line becomes one `InputRecord`, in file order.
pub struct RecordReader<R: io::Read> {
    records: csv::DeserializeRecordsIntoIter<R, InputRecord>
}

impl RecordReader<File> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RunError> {
        let file = File::open(&path).map_err(|err| RunError::FileAccess {
            path: path.as_ref().display().to_string(),
            source: Box::new(err)
        })?;
        Ok(Self::from_reader(file))
    }
}

impl<R: io::Read> RecordReader<R> {
    pub fn from_reader(reader: R) -> Self {
        RecordReader {
            records: csv::Reader::from_reader(reader).into_deserialize()
        }
    }
}

impl<R: io::Read> Iterator for RecordReader<R> {
    type Item = Result<InputRecord, RunError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.records
            .next()
            .map(|record| record.map_err(RunError::from))
    }
}
