use payreport::application::engine::ReportEngine;
use payreport::config::ReportConfig;
use payreport::logging;
use std::process::ExitCode;

const OPEN_FAILURE_MESSAGE: &str =
    "\nThe file was not successfully opened\n Please check that the file currently exists.";
const SUCCESS_MESSAGE: &str = "The report has been successfully created!";

fn main() -> ExitCode {
    logging::init_logger();

    let engine = ReportEngine::new(ReportConfig::default());
    match engine.run() {
        Ok(summary) => {
            tracing::info!(
                records = summary.records,
                total = %summary.total,
                "Pay report created"
            );
            println!("{SUCCESS_MESSAGE}");
            println!();
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Pay report failed: {}", e);
            if e.is_open_failure() {
                println!("{OPEN_FAILURE_MESSAGE}");
            } else {
                println!("{:?}", miette::Report::new(e));
            }
            ExitCode::FAILURE
        }
    }
}
