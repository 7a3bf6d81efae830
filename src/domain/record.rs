use super::pay::Pay;
use rust_decimal::Decimal;

/// One employee's hours and wage for the reporting period.
#[derive(Debug, PartialEq, Clone)]
pub struct PayRecord {
    pub first_name: String,
    pub last_name: String,
    pub hours_worked: Decimal,
    pub wage_per_hour: Decimal,
}

impl PayRecord {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        hours_worked: Decimal,
        wage_per_hour: Decimal,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            hours_worked,
            wage_per_hour,
        }
    }

    /// First character of the first name, or a blank for an empty name.
    pub fn initial(&self) -> char {
        self.first_name.chars().next().unwrap_or(' ')
    }

    pub fn pay(&self) -> Option<Pay> {
        Pay::compute(self.hours_worked, self.wage_per_hour)
    }
}
