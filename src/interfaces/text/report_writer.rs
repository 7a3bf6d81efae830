use crate::application::report::{PayLine, PayReport};
use crate::config::ReportHeader;
use crate::error::{PayReportError, Result};
use std::io::Write;

const RULE: &str = "=========================";

/// Writes a `PayReport` as fixed-width text.
pub struct PayReportWriter<W: Write> {
    sink: W,
    header: ReportHeader,
}

impl<W: Write> PayReportWriter<W> {
    pub fn new(sink: W, header: ReportHeader) -> Self {
        Self { sink, header }
    }

    /// Writes the header, one line per record, the closing rule and the total,
    /// then flushes the sink.
    pub fn write_report(&mut self, report: &PayReport) -> Result<()> {
        self.write_all(report).map_err(PayReportError::WriteOutput)
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    fn write_all(&mut self, report: &PayReport) -> std::io::Result<()> {
        writeln!(self.sink, "{}", self.header.title)?;
        writeln!(self.sink, "{}", self.header.subtitle)?;
        writeln!(self.sink, "{RULE}")?;
        for line in report.lines() {
            writeln!(self.sink, "{}", format_line(line))?;
        }
        writeln!(self.sink, "{RULE}")?;
        writeln!(self.sink, "{:>15} $ {}", "Total: ", report.total())?;
        self.sink.flush()
    }
}

fn format_line(line: &PayLine) -> String {
    format!(
        "{:>2}. {:>8}{:>6}{}",
        line.record.initial(),
        line.record.last_name,
        " $ ",
        line.pay
    )
}
