use crate::application::report::PayReport;
use crate::config::ReportConfig;
use crate::domain::Pay;
use crate::error::{PayReportError, Result};
use crate::interfaces::text::record_reader::PayRecordReader;
use crate::interfaces::text::report_writer::PayReportWriter;
use std::fs::File;
use std::io::BufWriter;

/// What a successful run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    pub records: usize,
    pub total: Pay,
}

/// Turns the input file into a pay report file.
///
/// The input is opened, read completely and closed before the output file is
/// created, so a missing or malformed input never touches the output.
pub struct ReportEngine {
    config: ReportConfig,
}

impl ReportEngine {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<ReportSummary> {
        let report = self.load()?;
        self.write(&report)?;

        Ok(ReportSummary {
            records: report.len(),
            total: report.total(),
        })
    }

    fn load(&self) -> Result<PayReport> {
        let path = &self.config.input_path;
        let file = File::open(path).map_err(|source| PayReportError::OpenInput {
            path: path.clone(),
            source,
        })?;
        tracing::info!("Reading pay records from {}", path.display());

        let records = PayRecordReader::new(file).read_all()?;
        for record in &records {
            tracing::debug!(
                first_name = %record.first_name,
                last_name = %record.last_name,
                hours_worked = %record.hours_worked,
                wage_per_hour = %record.wage_per_hour,
                "Parsed pay record"
            );
        }
        tracing::info!("Read {} pay records", records.len());

        PayReport::from_records(records)
    }

    fn write(&self, report: &PayReport) -> Result<()> {
        let path = &self.config.output_path;
        let file = File::create(path).map_err(|source| PayReportError::OpenOutput {
            path: path.clone(),
            source,
        })?;

        let mut writer = PayReportWriter::new(BufWriter::new(file), self.config.header.clone());
        writer.write_report(report)?;
        tracing::info!(
            "Wrote pay report to {} (total {})",
            path.display(),
            report.total()
        );
        Ok(())
    }
}
