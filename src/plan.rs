use crate::{
    allocation::{Allocation, AllocationCheck, AllocationError},
    category::TransactionCategory,
    summary::SpendingSummary,
    transaction::Transaction,
};
use log::{debug, trace};
use thiserror::Error;

/// A budget plan.
///
/// A `Plan` declares how net income should be split between categories and records the
/// transactions actually made against each one. The declared shares are only enforced
/// at construction. Recorded spending is free to diverge from them and `summarize_spending`
/// reports by how much.
#[derive(Clone, Debug, PartialEq)]
pub struct Plan {
    net_income: f64,
    allocation: Allocation,
    transactions: Vec<Transaction>,
}

#[derive(Error, Debug, PartialEq)]
pub enum PlanError {
    #[error("invalid allocation")]
    InvalidAllocation(#[from] AllocationError),
}

impl Plan {
    /// Create a new `Plan`, requiring the four shares to sum to exactly `1.0`.
    pub fn new(
        net_income: f64,
        fixed_cost: f64,
        investment: f64,
        savings: f64,
        discretionary: f64,
    ) -> Result<Self, PlanError> {
        Plan::with_check(
            net_income,
            Allocation::new(fixed_cost, investment, savings, discretionary),
            AllocationCheck::default(),
        )
    }

    /// Create a new `Plan`, validating `allocation` with the given check.
    pub fn with_check(
        net_income: f64,
        allocation: Allocation,
        check: AllocationCheck,
    ) -> Result<Self, PlanError> {
        allocation.validate(check)?;

        debug!(
            "created plan with net income {} and allocation {:?}",
            net_income, allocation
        );

        Ok(Plan {
            net_income,
            allocation,
            transactions: Vec::new(),
        })
    }

    pub fn net_income(&self) -> f64 {
        self.net_income
    }

    pub fn allocation(&self) -> &Allocation {
        &self.allocation
    }

    /// Returns the declared share of net income for `category`
    pub fn share(&self, category: TransactionCategory) -> f64 {
        self.allocation.share(category)
    }

    /// Recorded transactions, in the order they were added
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Append a transaction for `category`. Amounts are not validated, so negative
    /// values are recorded as given.
    pub fn record(&mut self, category: TransactionCategory, amount: f64) {
        trace!("recording {} transaction of {}", category, amount);
        self.transactions.push(Transaction::new(amount, category));
    }

    pub fn add_fixed_cost(&mut self, amount: f64) {
        self.record(TransactionCategory::FixedCost, amount);
    }

    pub fn add_investment(&mut self, amount: f64) {
        self.record(TransactionCategory::Investment, amount);
    }

    pub fn add_savings(&mut self, amount: f64) {
        self.record(TransactionCategory::Savings, amount);
    }

    pub fn add_discretionary(&mut self, amount: f64) {
        self.record(TransactionCategory::Discretionary, amount);
    }

    /// Computes the spending in each category as a fraction of net income.
    ///
    /// A net income of zero is not special-cased: every ratio becomes NaN (no spend) or
    /// infinite, per IEEE 754 division.
    pub fn summarize_spending(&self) -> SpendingSummary {
        let totals = self
            .transactions
            .iter()
            .fold(SpendingSummary::default(), |mut totals, t| {
                totals.accumulate(t.category(), t.amount());
                totals
            });

        let summary = totals.divide(self.net_income);

        if !summary.is_finite() {
            debug!(
                "spending summary is not finite for net income {}: {:?}",
                self.net_income, summary
            );
        }

        debug!(
            "summarised {} transactions: {:?}",
            self.transactions.len(),
            summary
        );

        summary
    }
}
