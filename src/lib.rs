mod allocation;
mod category;
mod plan;
mod summary;
mod transaction;

pub use allocation::{Allocation, AllocationCheck, AllocationError};
pub use category::TransactionCategory;
pub use plan::{Plan, PlanError};
pub use summary::SpendingSummary;
pub use transaction::Transaction;
