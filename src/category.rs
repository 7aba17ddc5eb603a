use std::fmt;

/// The budget bucket a transaction is charged against.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TransactionCategory {
    FixedCost,
    Investment,
    Savings,
    Discretionary,
}

impl TransactionCategory {
    /// Every category, in declaration order.
    pub const ALL: [TransactionCategory; 4] = [
        TransactionCategory::FixedCost,
        TransactionCategory::Investment,
        TransactionCategory::Savings,
        TransactionCategory::Discretionary,
    ];
}

impl fmt::Display for TransactionCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            TransactionCategory::FixedCost => "fixed cost",
            TransactionCategory::Investment => "investment",
            TransactionCategory::Savings => "savings",
            TransactionCategory::Discretionary => "discretionary",
        };
        f.write_str(name)
    }
}
