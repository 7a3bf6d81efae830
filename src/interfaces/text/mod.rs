//! Plain-text adapters: the whitespace-delimited record format and the
//! fixed-width report layout.

pub mod record_reader;
pub mod report_writer;
