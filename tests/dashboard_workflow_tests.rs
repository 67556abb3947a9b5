//! End-to-end workflow tests for the view, mutation, and payment layers
//!
//! These drive the same intent surface a presentation layer would:
//! search/filter/sort/page over a worker roster, draft-validated
//! mutations, confirmed deletes, the export stub, and payment batches.

use chrono::Utc;
use paydesk::prelude::*;
use std::sync::Arc;
use std::time::Duration;

fn draft(name: &str, email: &str, role: Role, salary: &str) -> WorkerDraft {
    WorkerDraft {
        name: name.to_string(),
        email: email.to_string(),
        role: Some(role),
        salary: salary.to_string(),
        bank_name: "Chase Bank".to_string(),
        account_number: "****5678".to_string(),
        ..WorkerDraft::default()
    }
}

fn roster() -> Vec<Worker> {
    vec![
        draft("John Smith", "john.smith@example.com", Role::Developer, "2500"),
        draft("Sarah Johnson", "sarah.j@example.com", Role::Designer, "3200"),
        draft("Michael Chen", "m.chen@example.com", Role::Developer, "2800"),
        draft("Emily Rodriguez", "e.rodriguez@example.com", Role::Manager, "4000"),
        draft("David Kim", "d.kim@example.com", Role::Marketing, "2200"),
    ]
    .into_iter()
    .map(|d| d.build(Utc::now()).expect("roster fixtures are valid"))
    .collect()
}

fn staffing_view() -> ListView<Worker> {
    let store = Arc::new(InMemoryStore::with_records(roster()));
    ListView::new(store, &DashboardConfig::default_config())
}

mod roster_browsing {
    use super::*;

    #[tokio::test]
    async fn test_search_matches_name_email_and_bank() {
        let mut view = staffing_view();

        view.set_search("sarah");
        assert_eq!(view.page().await.unwrap().meta.total, 1);

        view.set_search("example.com");
        assert_eq!(view.page().await.unwrap().meta.total, 5);

        view.set_search("chase");
        assert_eq!(view.page().await.unwrap().meta.total, 5);

        view.set_search("$2,500.00");
        let page = view.page().await.unwrap();
        assert_eq!(page.meta.total, 1);
        assert_eq!(page.items[0].name, "John Smith");
    }

    #[tokio::test]
    async fn test_no_match_is_empty_state() {
        let mut view = staffing_view();
        view.set_search("nobody at all");

        let page = view.page().await.unwrap();
        assert!(page.is_empty_state());
        assert_eq!(page.meta.total_pages, 0);
    }

    #[tokio::test]
    async fn test_role_filter_combines_with_search() {
        let mut view = staffing_view();
        view.set_filter("role", "Developer");
        view.set_search("chen");

        let page = view.page().await.unwrap();
        assert_eq!(page.meta.total, 1);
        assert_eq!(page.items[0].name, "Michael Chen");
    }

    #[tokio::test]
    async fn test_pagination_over_a_grown_roster() {
        let view = staffing_view();
        for i in 0..18 {
            let worker = draft(
                &format!("Extra Worker {}", i),
                &format!("extra{}@example.com", i),
                Role::Support,
                "2000",
            )
            .build(Utc::now())
            .unwrap();
            view.add_record(worker).await.unwrap();
        }

        // 23 workers at 10 per page
        let mut view = view;
        view.set_page(3);
        let page = view.page().await.unwrap();
        assert_eq!(page.meta.total, 23);
        assert_eq!(page.meta.total_pages, 3);
        assert_eq!(page.items.len(), 3);
        assert!(page.meta.has_prev);
        assert!(!page.meta.has_next);
    }

    #[tokio::test]
    async fn test_changing_filter_resets_to_first_page() {
        let mut view = staffing_view();
        view.set_page(2);
        view.set_filter("role", "Developer");

        assert_eq!(view.state().page, 1);
        let page = view.page().await.unwrap();
        assert_eq!(page.meta.page, 1);
    }
}

mod roster_mutations {
    use super::*;

    #[tokio::test]
    async fn test_add_worker_with_empty_name_is_rejected() {
        let view = staffing_view();
        let mut bad = draft("", "new@example.com", Role::Support, "2000");
        bad.name = String::new();

        let outcome = add_validated(&view, bad.build(Utc::now())).await.unwrap();
        let err = outcome.unwrap_err();
        assert!(matches!(err, ValidationError::FieldErrors(_)));
        assert_eq!(err.fields(), vec!["name"]);
        assert_eq!(view.store().len().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_added_worker_is_invited_and_listed_last() {
        let view = staffing_view();
        let worker = draft("Lena Park", "lena@example.com", Role::Support, "2600")
            .build(Utc::now())
            .unwrap();
        view.add_record(worker.clone()).await.unwrap();

        let listed = view.store().list().await.unwrap();
        assert_eq!(listed.len(), 6);
        assert_eq!(listed[5].id, worker.id);
        assert_eq!(listed[5].status, WorkerStatus::Invited);
    }

    #[tokio::test]
    async fn test_edit_worker_via_draft() {
        let view = staffing_view();
        let listed = view.store().list().await.unwrap();
        let john = &listed[0];

        let edited = draft("John Smith", "john.smith@example.com", Role::Manager, "2750")
            .apply_to(john)
            .unwrap();
        let previous = view.update_record(&john.id, edited).await.unwrap();
        assert_eq!(previous.unwrap().salary, 2500.0);

        let reread = view.store().get(&john.id).await.unwrap().unwrap();
        assert_eq!(reread.salary, 2750.0);
        assert_eq!(reread.role, Role::Manager);
        assert_eq!(reread.joined_at, john.joined_at);
    }

    #[tokio::test]
    async fn test_delete_third_worker_of_five() {
        let view = staffing_view();
        let listed = view.store().list().await.unwrap();
        let third = listed[2].id;

        assert!(view
            .delete_record(&third, Confirmation::Confirmed)
            .await
            .unwrap());

        let remaining = view.store().list().await.unwrap();
        assert_eq!(remaining.len(), 4);
        assert!(remaining.iter().all(|w| w.id != third));
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_noop() {
        let view = staffing_view();
        let ghost = Uuid::new_v4();
        assert!(!view
            .delete_record(&ghost, Confirmation::Confirmed)
            .await
            .unwrap());
        assert_eq!(view.store().len().await.unwrap(), 5);
    }
}

mod payments {
    use super::*;

    #[tokio::test]
    async fn test_payroll_run_over_filtered_selection() {
        let mut view = staffing_view();
        view.set_filter("role", "Developer");
        let page = view.page().await.unwrap();

        let mut batch = PaymentBatch::new(PaymentKind::Payroll);
        batch.select_all(page.items.iter().map(|w| w.id));

        let workers = view.store().list().await.unwrap();
        assert_eq!(batch.total(&workers), 5300.0);

        let processor = SimulatedProcessor::new(Duration::from_millis(1));
        let receipt = processor.process(&batch, &workers).await.unwrap();
        assert_eq!(receipt.workers_paid, 2);
        assert_eq!(receipt.total, 5300.0);
    }

    #[tokio::test]
    async fn test_bonus_run_needs_amounts_for_every_selected_worker() {
        let view = staffing_view();
        let workers = view.store().list().await.unwrap();

        let mut batch = PaymentBatch::new(PaymentKind::Bonus);
        batch.toggle(workers[0].id);
        batch.toggle(workers[1].id);
        batch.set_bonus(workers[0].id, 300.0);

        let processor = SimulatedProcessor::new(Duration::from_millis(1));
        let err = processor.process(&batch, &workers).await.unwrap_err();
        assert!(matches!(err, PaymentError::InvalidBonus { .. }));

        batch.set_bonus(workers[1].id, 200.0);
        let receipt = processor.process(&batch, &workers).await.unwrap();
        assert_eq!(receipt.total, 500.0);
        assert_eq!(receipt.kind, PaymentKind::Bonus);
    }

    #[tokio::test]
    async fn test_export_stub_reports_filtered_count() {
        let mut view = staffing_view();
        view.set_filter("role", "Developer");

        let summary = view.export_list().await.unwrap();
        assert_eq!(summary.records, 2);
        assert_eq!(summary.record_type, "worker");
    }
}
