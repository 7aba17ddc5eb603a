use crate::{allocation::Allocation, category::TransactionCategory};

/// Observed spending per category as a fraction of net income.
///
/// A summary is a plain report. It is not normalised against the plan's declared
/// shares; use `variance` to compare the two.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpendingSummary {
    pub fixed_cost: f64,
    pub investment: f64,
    pub savings: f64,
    pub discretionary: f64,
}

impl SpendingSummary {
    /// Returns the ratio for `category`
    pub fn ratio(&self, category: TransactionCategory) -> f64 {
        match category {
            TransactionCategory::FixedCost => self.fixed_cost,
            TransactionCategory::Investment => self.investment,
            TransactionCategory::Savings => self.savings,
            TransactionCategory::Discretionary => self.discretionary,
        }
    }

    /// Sum of all four ratios, i.e. total spend as a fraction of net income
    pub fn total(&self) -> f64 {
        self.fixed_cost + self.investment + self.savings + self.discretionary
    }

    /// Returns false if any ratio is NaN or infinite, which happens when net income is
    /// zero.
    pub fn is_finite(&self) -> bool {
        TransactionCategory::ALL
            .iter()
            .all(|c| self.ratio(*c).is_finite())
    }

    /// Observed ratio minus declared share for each category. Positive values mean a
    /// category has consumed more than it was allocated.
    pub fn variance(&self, allocation: &Allocation) -> SpendingSummary {
        SpendingSummary {
            fixed_cost: self.fixed_cost - allocation.fixed_cost,
            investment: self.investment - allocation.investment,
            savings: self.savings - allocation.savings,
            discretionary: self.discretionary - allocation.discretionary,
        }
    }

    pub(crate) fn accumulate(&mut self, category: TransactionCategory, amount: f64) {
        match category {
            TransactionCategory::FixedCost => self.fixed_cost += amount,
            TransactionCategory::Investment => self.investment += amount,
            TransactionCategory::Savings => self.savings += amount,
            TransactionCategory::Discretionary => self.discretionary += amount,
        }
    }

    pub(crate) fn divide(self, divisor: f64) -> SpendingSummary {
        SpendingSummary {
            fixed_cost: self.fixed_cost / divisor,
            investment: self.investment / divisor,
            savings: self.savings / divisor,
            discretionary: self.discretionary / divisor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> SpendingSummary {
        SpendingSummary {
            fixed_cost: 0.5,
            investment: 0.125,
            savings: 0.0,
            discretionary: 0.25,
        }
    }

    #[test]
    fn ratio_by_category() {
        let s = summary();
        assert_eq!(s.ratio(TransactionCategory::FixedCost), 0.5);
        assert_eq!(s.ratio(TransactionCategory::Investment), 0.125);
        assert_eq!(s.ratio(TransactionCategory::Savings), 0.0);
        assert_eq!(s.ratio(TransactionCategory::Discretionary), 0.25);
    }

    #[test]
    fn summary_total() {
        assert_eq!(summary().total(), 0.875);
    }

    #[test]
    fn summary_is_finite() {
        assert!(summary().is_finite());

        let mut s = summary();
        s.savings = f64::NAN;
        assert!(!s.is_finite());

        let mut s = summary();
        s.fixed_cost = f64::INFINITY;
        assert!(!s.is_finite());
    }

    #[test]
    fn summary_variance() {
        let allocation = Allocation::new(0.5, 0.25, 0.125, 0.125);
        assert_eq!(
            summary().variance(&allocation),
            SpendingSummary {
                fixed_cost: 0.0,
                investment: -0.125,
                savings: -0.125,
                discretionary: 0.125,
            }
        );
    }

    #[test]
    fn accumulate_and_divide() {
        let mut s = SpendingSummary::default();
        s.accumulate(TransactionCategory::FixedCost, 300.0);
        s.accumulate(TransactionCategory::FixedCost, 200.0);
        s.accumulate(TransactionCategory::Savings, 50.0);
        assert_eq!(
            s.divide(1000.0),
            SpendingSummary {
                fixed_cost: 0.5,
                investment: 0.0,
                savings: 0.05,
                discretionary: 0.0,
            }
        );
    }
}
