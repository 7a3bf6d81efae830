//! Application layer: computing the report from parsed records and running
//! the read-compute-write pass over the two report files.

pub mod engine;
pub mod report;
