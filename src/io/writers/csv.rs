use crate::core::ResultRecord;
use crate::errors::Result;
use crate::io::output::ResultWriter;
use std::io::Write;

/// `Field,Value` rows in record order.
///
/// Each answer expands in place into `Question`, `Answer` and `Score` rows.
pub struct CsvWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new()
                .terminator(csv::Terminator::CRLF)
                .from_writer(writer),
        }
    }
}

impl<W: Write> ResultWriter for CsvWriter<W> {
    fn write_record(&mut self, record: &ResultRecord) -> Result<()> {
        self.writer.write_record(["Field", "Value"])?;

        for (field, value) in record.scalar_fields_before_answers() {
            self.writer.write_record([field, value.as_str()])?;
        }

        for answer in &record.answers {
            self.writer.write_record(["Question", answer.question.as_str()])?;
            self.writer.write_record(["Answer", answer.answer.as_str()])?;
            self.writer
                .write_record(["Score", answer.score.to_string().as_str()])?;
        }

        for (field, value) in record.scalar_fields_after_answers() {
            self.writer.write_record([field, value.as_str()])?;
        }

        self.writer.flush()?;
        Ok(())
    }
}
