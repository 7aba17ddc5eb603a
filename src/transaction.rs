use crate::category::TransactionCategory;

/// A single amount recorded against a budget category.
///
/// `Transaction`s are immutable once created. A `Plan` owns its transactions and only
/// ever appends to them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transaction {
    amount: f64,
    category: TransactionCategory,
}

impl Transaction {
    pub fn new(amount: f64, category: TransactionCategory) -> Self {
        Transaction { amount, category }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> TransactionCategory {
        self.category
    }
}
