use crate::domain::PayRecord;
use crate::error::{Field, PayReportError, Result};
use rust_decimal::Decimal;
use std::collections::VecDeque;
use std::io::{self, BufRead, BufReader, Lines, Read};
use std::str::FromStr;

const FIELDS_PER_RECORD: usize = 4;

/// A whitespace-delimited token and the 1-based line it was found on.
#[derive(Debug, PartialEq)]
struct Token {
    line: usize,
    text: String,
}

/// Splits a source into whitespace-separated tokens, one line at a time.
struct Tokens<R: Read> {
    lines: Lines<BufReader<R>>,
    line: usize,
    pending: VecDeque<String>,
}

impl<R: Read> Tokens<R> {
    fn new(source: R) -> Self {
        Self {
            lines: BufReader::new(source).lines(),
            line: 0,
            pending: VecDeque::new(),
        }
    }
}

impl<R: Read> Iterator for Tokens<R> {
    type Item = io::Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(text) = self.pending.pop_front() {
                return Some(Ok(Token {
                    line: self.line,
                    text,
                }));
            }
            match self.lines.next()? {
                Ok(line) => {
                    self.line += 1;
                    self.pending
                        .extend(line.split_whitespace().map(str::to_owned));
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Reads pay records from a text source.
///
/// The source is a flat stream of tokens taken four at a time:
/// `<first name> <last name> <hours worked> <wage per hour>`. Line breaks only
/// matter for error messages.
pub struct PayRecordReader<R: Read> {
    tokens: Tokens<R>,
}

impl<R: Read> PayRecordReader<R> {
    /// Creates a new `PayRecordReader` from any `Read` source (e.g., File, a byte slice).
    pub fn new(source: R) -> Self {
        Self {
            tokens: Tokens::new(source),
        }
    }

    /// Returns an iterator that lazily parses records in input order.
    ///
    /// The iterator stops after the first error, so a malformed record is
    /// never followed by records parsed from a misaligned token stream.
    pub fn records(self) -> Records<R> {
        Records {
            tokens: self.tokens,
            failed: false,
        }
    }

    /// Reads every record, failing on the first malformed one.
    pub fn read_all(self) -> Result<Vec<PayRecord>> {
        self.records().collect()
    }
}

pub struct Records<R: Read> {
    tokens: Tokens<R>,
    failed: bool,
}

impl<R: Read> Records<R> {
    fn next_field(&mut self, line: usize, fields: usize) -> Result<Token> {
        match self.tokens.next() {
            Some(Ok(token)) => Ok(token),
            Some(Err(e)) => Err(PayReportError::ReadInput(e)),
            None => Err(PayReportError::IncompleteRecord { line, fields }),
        }
    }

    fn finish_record(&mut self, first_name: Token) -> Result<PayRecord> {
        let line = first_name.line;
        let last_name = self.next_field(line, 1)?;
        let hours = self.next_field(last_name.line, 2)?;
        let wage = self.next_field(hours.line, FIELDS_PER_RECORD - 1)?;

        Ok(PayRecord::new(
            first_name.text,
            last_name.text,
            parse_number(&hours, Field::HoursWorked)?,
            parse_number(&wage, Field::WagePerHour)?,
        ))
    }
}

impl<R: Read> Iterator for Records<R> {
    type Item = Result<PayRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let result = match self.tokens.next()? {
            Ok(first_name) => self.finish_record(first_name),
            Err(e) => Err(PayReportError::ReadInput(e)),
        };
        self.failed = result.is_err();
        Some(result)
    }
}

fn unsigned(text: &str) -> &str {
    text.strip_prefix(['+', '-']).unwrap_or(text)
}

fn all_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

/// `[+-]digits[.digits][(e|E)[+-]digits]`, where either side of the point may
/// be empty but not both.
fn is_plain_number(text: &str) -> bool {
    let (mantissa, exponent) = match text.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (text, None),
    };

    let digits = unsigned(mantissa);
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    let mantissa_ok =
        !(whole.is_empty() && fraction.is_empty()) && all_digits(whole) && all_digits(fraction);

    let exponent_ok = exponent.is_none_or(|exponent| {
        let digits = unsigned(exponent);
        !digits.is_empty() && all_digits(digits)
    });

    mantissa_ok && exponent_ok
}

fn parse_number(token: &Token, field: Field) -> Result<Decimal> {
    if !is_plain_number(&token.text) {
        return Err(PayReportError::InvalidNumber {
            line: token.line,
            field,
            token: token.text.clone(),
        });
    }

    Decimal::from_str(&token.text)
        .or_else(|_| Decimal::from_scientific(&token.text))
        .map_err(|_| PayReportError::NumberOutOfRange {
            line: token.line,
            field,
            token: token.text.clone(),
        })
}
