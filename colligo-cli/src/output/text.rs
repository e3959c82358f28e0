//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use colligo_registry::Report;
use std::io::Write;

/// Plain text formatter
///
/// Successes take one line; a failure is followed by one indented line per
/// message.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn write_report(&mut self, report: &Report) -> Result<()> {
        if report.success {
            writeln!(
                self.writer,
                "✓ {}: {}",
                report.subject,
                report.messages.join("; ")
            )?;
        } else {
            writeln!(self.writer, "✗ {}", report.subject)?;
            for message in &report.messages {
                writeln!(self.writer, "    - {message}")?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
