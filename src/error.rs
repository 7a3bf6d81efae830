use miette::Diagnostic;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Which numeric column of a pay record a token was read for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    HoursWorked,
    WagePerHour,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::HoursWorked => write!(f, "hours worked"),
            Field::WagePerHour => write!(f, "wage per hour"),
        }
    }
}

#[derive(Error, Diagnostic, Debug)]
pub enum PayReportError {
    #[error("could not open input file {}", path.display())]
    #[diagnostic(code(payreport::open_input))]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not open output file {}", path.display())]
    #[diagnostic(code(payreport::open_output))]
    OpenOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read pay records: {0}")]
    #[diagnostic(code(payreport::read_input))]
    ReadInput(#[source] io::Error),

    #[error("failed to write pay report: {0}")]
    #[diagnostic(code(payreport::write_output))]
    WriteOutput(#[source] io::Error),

    #[error("line {line}: {field} is not a number: `{token}`")]
    #[diagnostic(
        code(payreport::invalid_number),
        help("records are `<first name> <last name> <hours worked> <wage per hour>`")
    )]
    InvalidNumber {
        line: usize,
        field: Field,
        token: String,
    },

    #[error("line {line}: {field} is out of range: `{token}`")]
    #[diagnostic(
        code(payreport::number_out_of_range),
        help("numbers must fit in 28 significant digits")
    )]
    NumberOutOfRange {
        line: usize,
        field: Field,
        token: String,
    },

    #[error("line {line}: input ends inside a record ({fields} of 4 fields)")]
    #[diagnostic(
        code(payreport::incomplete_record),
        help("every record needs exactly four whitespace-separated fields")
    )]
    IncompleteRecord { line: usize, fields: usize },

    #[error("record {record}: pay is out of range")]
    #[diagnostic(code(payreport::pay_overflow))]
    PayOverflow { record: usize },
}

impl PayReportError {
    /// True when one of the two report files could not be opened.
    pub fn is_open_failure(&self) -> bool {
        matches!(
            self,
            PayReportError::OpenInput { .. } | PayReportError::OpenOutput { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PayReportError>;
