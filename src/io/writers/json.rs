use crate::core::ResultRecord;
use crate::errors::Result;
use crate::io::output::ResultWriter;
use std::io::Write;

/// Full nested record, two-space indent, non-ASCII kept as-is
pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ResultWriter for JsonWriter<W> {
    fn write_record(&mut self, record: &ResultRecord) -> Result<()> {
        let json = serde_json::to_string_pretty(record)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}
