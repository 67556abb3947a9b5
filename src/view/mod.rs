//! List views: one store, one state, and the intent surface
//!
//! A [`ListView`] is the programmatic equivalent of one dashboard screen:
//! it owns a record store and a [`ListState`], accepts the same intents
//! the UI raises (search text, filter selection, sort column click, page
//! button click), and produces pages for rendering.

use crate::config::DashboardConfig;
use crate::core::error::ValidationError;
use crate::core::page::Page;
use crate::core::record::Record;
use crate::core::state::{DateRange, ListState};
use crate::pipeline;
use crate::storage::RecordStore;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// Outcome of the delete confirmation dialog
///
/// Deletion is destructive, so the intent carries the user's answer
/// explicitly instead of assuming it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

/// Export file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
}

/// Receipt for a (stubbed) list export
///
/// No file is produced; the summary is what a presentation layer would
/// show in its success toast.
#[derive(Debug, Clone, Serialize)]
pub struct ExportSummary {
    pub record_type: &'static str,
    pub records: usize,
    pub format: ExportFormat,
    pub exported_at: DateTime<Utc>,
}

/// One view over one record store
pub struct ListView<R: Record> {
    store: Arc<dyn RecordStore<R>>,
    state: ListState,
    page_size: usize,
}

impl<R: Record> ListView<R> {
    /// Create a view over a store, configured from the dashboard config
    pub fn new(store: Arc<dyn RecordStore<R>>, config: &DashboardConfig) -> Self {
        let mut state = ListState::new(R::default_sort_field());
        state.date_range = config.date_range;
        Self {
            store,
            state,
            page_size: config.page_size,
        }
    }

    /// The current filter/sort/page state
    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// The store behind this view
    pub fn store(&self) -> &Arc<dyn RecordStore<R>> {
        &self.store
    }

    // === Intents ===

    /// Intent: set the free-text search query
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.state.set_search(query);
    }

    /// Intent: set a categorical filter (`"all"` disables it)
    pub fn set_filter(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.state.set_filter(field, value);
    }

    /// Intent: set the date-range window
    pub fn set_date_range(&mut self, range: DateRange) {
        self.state.set_date_range(range);
    }

    /// Intent: select a sort field (toggles direction on repeat)
    pub fn set_sort(&mut self, field: impl Into<String>) {
        self.state.set_sort(field);
    }

    /// Intent: request a page
    pub fn set_page(&mut self, page: usize) {
        self.state.set_page(page);
    }

    // === Pipeline ===

    /// Run the pipeline against the current store contents
    pub async fn page(&self) -> Result<Page<R>> {
        self.page_at(Utc::now()).await
    }

    /// Run the pipeline with an explicit `now` (deterministic for tests)
    pub async fn page_at(&self, now: DateTime<Utc>) -> Result<Page<R>> {
        let records = self.store.list().await?;
        Ok(pipeline::run_pipeline(records, &self.state, self.page_size, now))
    }

    // === Mutations ===

    /// Append a freshly built record to the store
    pub async fn add_record(&self, record: R) -> Result<R> {
        self.store.insert(record).await
    }

    /// Replace the record with the given id
    ///
    /// Returns the previous record, or `None` when no record matched.
    pub async fn update_record(&self, id: &Uuid, record: R) -> Result<Option<R>> {
        self.store.replace(id, record).await
    }

    /// Remove the record with the given id after confirmation
    ///
    /// A cancelled confirmation or an unknown id is a no-op.
    pub async fn delete_record(&self, id: &Uuid, confirmation: Confirmation) -> Result<bool> {
        if confirmation == Confirmation::Cancelled {
            tracing::debug!(record_type = R::record_type(), id = %id, "delete cancelled");
            return Ok(false);
        }
        self.store.remove(id).await
    }

    /// Export the current filtered list
    ///
    /// Stubbed: counts the records the current filters select and returns
    /// a summary without producing a file.
    pub async fn export_list(&self) -> Result<ExportSummary> {
        let page = self.page().await?;
        let summary = ExportSummary {
            record_type: R::record_type(),
            records: page.meta.total,
            format: ExportFormat::Csv,
            exported_at: Utc::now(),
        };
        tracing::info!(
            record_type = summary.record_type,
            records = summary.records,
            "export requested (stub, no file produced)"
        );
        Ok(summary)
    }
}

/// Validate-then-add convenience for draft-based callers
///
/// Kept as a free function so the validation error stays typed instead of
/// being flattened into `anyhow`.
pub async fn add_validated<R: Record>(
    view: &ListView<R>,
    built: Result<R, ValidationError>,
) -> Result<std::result::Result<R, ValidationError>> {
    match built {
        Ok(record) => Ok(Ok(view.add_record(record).await?)),
        Err(validation) => {
            tracing::debug!(
                record_type = R::record_type(),
                error = %validation,
                "draft rejected"
            );
            Ok(Err(validation))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::worker::{Role, Worker, WorkerDraft, WorkerStatus};
    use crate::storage::InMemoryStore;

    fn worker(name: &str, salary: &str, role: Role) -> Worker {
        WorkerDraft {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            role: Some(role),
            salary: salary.to_string(),
            bank_name: "Chase Bank".to_string(),
            account_number: "****5678".to_string(),
            ..WorkerDraft::default()
        }
        .build(Utc::now())
        .unwrap()
    }

    fn roster() -> Vec<Worker> {
        vec![
            worker("John Smith", "2500", Role::Developer),
            worker("Sarah Johnson", "3200", Role::Designer),
            worker("Michael Chen", "2800", Role::Developer),
            worker("Emily Rodriguez", "4000", Role::Manager),
            worker("David Kim", "2200", Role::Marketing),
        ]
    }

    fn view() -> ListView<Worker> {
        let store = Arc::new(InMemoryStore::with_records(roster()));
        ListView::new(store, &DashboardConfig::default_config())
    }

    #[tokio::test]
    async fn test_search_intent_narrows_page() {
        let mut view = view();
        view.set_search("developer");

        let page = view.page().await.unwrap();
        assert_eq!(page.meta.total, 2);
        assert!(page.items.iter().all(|w| w.role == Role::Developer));
    }

    #[tokio::test]
    async fn test_role_filter_and_all_sentinel() {
        let mut view = view();
        view.set_filter("role", "Manager");
        assert_eq!(view.page().await.unwrap().meta.total, 1);

        view.set_filter("role", "all");
        assert_eq!(view.page().await.unwrap().meta.total, 5);
    }

    #[tokio::test]
    async fn test_sort_intent_orders_by_salary() {
        let mut view = view();
        view.set_sort("salary"); // descending by default
        let page = view.page().await.unwrap();
        let salaries: Vec<f64> = page.items.iter().map(|w| w.salary).collect();
        assert_eq!(salaries, vec![4000.0, 3200.0, 2800.0, 2500.0, 2200.0]);

        view.set_sort("salary"); // toggles to ascending
        let page = view.page().await.unwrap();
        let salaries: Vec<f64> = page.items.iter().map(|w| w.salary).collect();
        assert_eq!(salaries, vec![2200.0, 2500.0, 2800.0, 3200.0, 4000.0]);
    }

    #[tokio::test]
    async fn test_delete_requires_confirmation() {
        let view = view();
        let listed = view.store().list().await.unwrap();
        let target = listed[2].id;

        assert!(!view
            .delete_record(&target, Confirmation::Cancelled)
            .await
            .unwrap());
        assert_eq!(view.store().len().await.unwrap(), 5);

        assert!(view
            .delete_record(&target, Confirmation::Confirmed)
            .await
            .unwrap());
        assert_eq!(view.store().len().await.unwrap(), 4);
        assert!(view.store().get(&target).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_missing_id_is_noop() {
        let view = view();
        let ghost = worker("Ghost", "1", Role::Support);
        let ghost_id = ghost.id.clone();
        let result = view.update_record(&ghost_id, ghost).await.unwrap();
        assert!(result.is_none());
        assert_eq!(view.store().len().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_invalid_draft_leaves_store_unchanged() {
        let view = view();
        let bad = WorkerDraft {
            name: String::new(),
            ..WorkerDraft::default()
        };

        let outcome = add_validated(&view, bad.build(Utc::now())).await.unwrap();
        assert!(outcome.is_err());
        assert_eq!(view.store().len().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_export_counts_filtered_records() {
        let mut view = view();
        view.set_filter("role", "Developer");

        let summary = view.export_list().await.unwrap();
        assert_eq!(summary.record_type, "worker");
        assert_eq!(summary.records, 2);
        assert_eq!(summary.format, ExportFormat::Csv);
    }

    #[tokio::test]
    async fn test_new_worker_defaults_surface_in_status_filter() {
        let mut view = view();
        let added = view
            .add_record(worker("Lena Park", "2600", Role::Support))
            .await
            .unwrap();
        assert_eq!(added.status, WorkerStatus::Invited);

        view.set_filter("status", "invited");
        let page = view.page().await.unwrap();
        assert_eq!(page.meta.total, 6); // fixtures all start invited too
    }
}
