use crate::core::ResultRecord;
use crate::errors::Result;
use crate::io::output::ResultWriter;
use std::io::Write;

/// `key: value` lines followed by an `Answers:` block
pub struct TextWriter<W: Write> {
    writer: W,
}

impl<W: Write> TextWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ResultWriter for TextWriter<W> {
    fn write_record(&mut self, record: &ResultRecord) -> Result<()> {
        let scalars = record
            .scalar_fields_before_answers()
            .into_iter()
            .chain(record.scalar_fields_after_answers());
        for (field, value) in scalars {
            writeln!(self.writer, "{field}: {value}")?;
        }

        writeln!(self.writer, "Answers:")?;
        for (i, answer) in record.answers.iter().enumerate() {
            writeln!(
                self.writer,
                "  {}. {} -> {} ({})",
                i + 1,
                answer.question,
                answer.answer,
                answer.score
            )?;
        }

        self.writer.flush()?;
        Ok(())
    }
}
