//! Concrete record variants: transactions and workers
//!
//! One shape per variant, shared by every view that lists it. Drafts
//! carry raw form input and validate before a record is built.

pub mod transaction;
pub mod worker;

pub use transaction::{Category, Transaction, TransactionDraft, TransactionStatus};
pub use worker::{Role, Worker, WorkerDraft, WorkerStatus};
