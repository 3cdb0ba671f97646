//! Transaction domain models and the owned store.

pub mod store;
pub mod transaction;

pub use store::TransactionStore;
pub use transaction::{Transaction, TransactionInput, TransactionKind, SUGGESTED_CATEGORIES};
