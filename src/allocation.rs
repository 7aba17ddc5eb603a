use crate::category::TransactionCategory;
use log::error;
use rust_decimal::{prelude::FromPrimitive, Decimal};
use thiserror::Error;

/// The declared share of net income for each category.
///
/// An `Allocation` by itself is unchecked. It only becomes the allocation of a `Plan`
/// once it has passed an `AllocationCheck`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Allocation {
    pub fixed_cost: f64,
    pub investment: f64,
    pub savings: f64,
    pub discretionary: f64,
}

/// How the shares of an `Allocation` are tested for summing to one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AllocationCheck {
    /// Sum the shares as `f64` and require the result to equal `1.0` exactly.
    /// Shares such as 0.7, 0.1, 0.1, 0.1 are rejected by this check because of binary
    /// representation error.
    Exact,
    /// Convert each share to the shortest `Decimal` that round-trips to the same `f64`,
    /// then require the decimal sum to equal one.
    Decimal,
}

#[derive(Error, Debug, PartialEq)]
pub enum AllocationError {
    #[error("allocation shares sum to {0}, expected exactly 1")]
    InvalidAllocation(f64),
}

impl Default for AllocationCheck {
    fn default() -> Self {
        AllocationCheck::Exact
    }
}

impl Allocation {
    pub fn new(fixed_cost: f64, investment: f64, savings: f64, discretionary: f64) -> Self {
        Allocation {
            fixed_cost,
            investment,
            savings,
            discretionary,
        }
    }

    /// Returns the declared share for `category`
    pub fn share(&self, category: TransactionCategory) -> f64 {
        match category {
            TransactionCategory::FixedCost => self.fixed_cost,
            TransactionCategory::Investment => self.investment,
            TransactionCategory::Savings => self.savings,
            TransactionCategory::Discretionary => self.discretionary,
        }
    }

    /// The `f64` sum of every share, added in category order.
    pub fn total(&self) -> f64 {
        self.fixed_cost + self.investment + self.savings + self.discretionary
    }

    /// Ensure the shares form a complete partition of income under `check`.
    pub fn validate(&self, check: AllocationCheck) -> Result<(), AllocationError> {
        let total = self.total();

        let valid = match check {
            AllocationCheck::Exact => total == 1.0,
            AllocationCheck::Decimal => self.decimal_total() == Some(Decimal::ONE),
        };

        if !valid {
            error!(
                "rejecting allocation {:?} under {:?} check: shares sum to {}",
                self, check, total
            );
            return Err(AllocationError::InvalidAllocation(total));
        }

        Ok(())
    }

    // Returns `None` if any share can't be represented as a `Decimal` (NaN, infinite or
    // out of range), or if the sum overflows.
    fn decimal_total(&self) -> Option<Decimal> {
        TransactionCategory::ALL
            .iter()
            .try_fold(Decimal::ZERO, |total, category| {
                total.checked_add(Decimal::from_f64(self.share(*category))?)
            })
    }
}
