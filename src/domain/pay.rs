use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// A monetary amount earned by an employee.
///
/// Wraps `rust_decimal::Decimal` so pay arithmetic is exact; rounding only
/// happens when the value is displayed, always to two fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Pay(Decimal);

impl Pay {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Pay for `hours_worked` at `wage_per_hour`, or `None` if the product
    /// does not fit in a `Decimal`.
    pub fn compute(hours_worked: Decimal, wage_per_hour: Decimal) -> Option<Self> {
        hours_worked.checked_mul(wage_per_hour).map(Self)
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }
}

/// Fixed-point with exactly two decimals, ties rounded to even.
impl fmt::Display for Pay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
        write!(f, "{rounded:.2}")
    }
}
