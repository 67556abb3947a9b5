//! # Paydesk
//!
//! An in-memory payroll and staffing administration core for building
//! dashboard-style applications in Rust.
//!
//! ## Features
//!
//! - **Record Stores**: insertion-ordered, view-owned collections of typed
//!   records (transactions, workers) behind an async service trait
//! - **List Pipeline**: pure filter → sort → paginate stages driven by an
//!   explicit, serializable per-view state
//! - **Display-Faithful Search**: free-text search matches the formatted
//!   currency and date strings a user actually sees
//! - **Validated Mutations**: create/update drafts collect field errors
//!   before the store is touched; unknown ids are silent no-ops
//! - **Payment Workflows**: payroll and bonus batches with selection,
//!   per-worker bonus amounts, and a pluggable async processor
//! - **Typed Errors**: one error hierarchy with stable error codes
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use paydesk::prelude::*;
//!
//! let store = Arc::new(InMemoryStore::<Worker>::new());
//! let mut view = ListView::new(store, &DashboardConfig::default_config());
//!
//! view.set_search("smith");
//! view.set_filter("role", "Developer");
//! view.set_sort("salary");
//!
//! let page = view.page().await?;
//! for worker in &page.items {
//!     println!("{} — {}", worker.name, format_currency(worker.salary));
//! }
//! ```

pub mod config;
pub mod core;
pub mod payment;
pub mod pipeline;
pub mod records;
pub mod storage;
pub mod view;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits & Types ===
    pub use crate::core::{
        error::{
            ConfigError, FieldValidationError, FormatError, PaydeskError, PaymentError,
            RecordError, ValidationError,
        },
        field::{FieldFormat, SortValue},
        format::{display_amount, format_currency, format_date, parse_amount},
        page::{Page, PageMeta},
        record::Record,
        state::{DateRange, FILTER_ALL, ListState, SortDirection, SortKey},
    };

    // === Pipeline ===
    pub use crate::pipeline::{apply_filters, apply_sort, paginate, run_pipeline};

    // === Records ===
    pub use crate::records::{
        transaction::{Category, Transaction, TransactionDraft, TransactionStatus},
        worker::{Role, Worker, WorkerDraft, WorkerStatus},
    };

    // === Storage ===
    pub use crate::storage::{InMemoryStore, RecordStore};

    // === View ===
    pub use crate::view::{Confirmation, ExportFormat, ExportSummary, ListView, add_validated};

    // === Payment ===
    pub use crate::payment::{
        PaymentBatch, PaymentKind, PaymentProcessor, PaymentReceipt, SimulatedProcessor,
    };

    // === Config ===
    pub use crate::config::DashboardConfig;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use std::sync::Arc;
    pub use uuid::Uuid;
}
