//! Draft validation support
//!
//! Drafts run every field through the validators here and collect the
//! failures; the store is only touched when the collected list is empty.

pub mod filters;
pub mod validators;

pub use validators::{amount, email, required};
