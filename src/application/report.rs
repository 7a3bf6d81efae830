use crate::domain::{Pay, PayRecord};
use crate::error::{PayReportError, Result};

/// One record together with the pay computed for it.
#[derive(Debug, PartialEq, Clone)]
pub struct PayLine {
    pub record: PayRecord,
    pub pay: Pay,
}

/// Pay for every record, in input order, and their total.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct PayReport {
    lines: Vec<PayLine>,
    total: Pay,
}

impl PayReport {
    /// Computes each record's pay once and sums the total in sequence order.
    pub fn from_records(records: Vec<PayRecord>) -> Result<Self> {
        let mut lines = Vec::with_capacity(records.len());
        let mut total = Pay::ZERO;

        for (index, record) in records.into_iter().enumerate() {
            let overflow = || PayReportError::PayOverflow { record: index + 1 };
            let pay = record.pay().ok_or_else(overflow)?;
            total = total.checked_add(pay).ok_or_else(overflow)?;
            lines.push(PayLine { record, pay });
        }

        Ok(Self { lines, total })
    }

    pub fn lines(&self) -> &[PayLine] {
        &self.lines
    }

    pub fn total(&self) -> Pay {
        self.total
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
