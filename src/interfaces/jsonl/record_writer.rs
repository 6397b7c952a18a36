use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Writes labeled sections of records as JSON lines.
///
/// Each section is an empty line, the label, then one JSON object per record.
pub struct RecordWriter<W: Write> {
    writer: W,
}

impl<W: Write> RecordWriter<W> {
    /// Creates a new `RecordWriter` from any `Write` sink (e.g., Stdout, Vec<u8>).
    pub fn new(sink: W) -> Self {
        Self { writer: sink }
    }

    pub fn write_section<T: Serialize>(&mut self, label: &str, records: &[T]) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{label}")?;
        for record in records {
            serde_json::to_writer(&mut self.writer, record)?;
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
