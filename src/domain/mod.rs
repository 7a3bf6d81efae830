//! Domain types: the pay record read from input and the pay value computed from it.

pub mod pay;
pub mod record;

pub use pay::Pay;
pub use record::PayRecord;
