//! Demo walking a transaction-history view through its intents

use paydesk::prelude::*;
use std::sync::Arc;

fn seed(now: DateTime<Utc>) -> Vec<Transaction> {
    let rows: [(&str, f64, TransactionStatus, Category, &str, Option<&str>, i64); 6] = [
        (
            "Monthly Payroll",
            1250.0,
            TransactionStatus::Completed,
            Category::Payroll,
            "REF-482910",
            Some("John Smith"),
            2,
        ),
        (
            "Quarterly Bonus",
            500.0,
            TransactionStatus::Completed,
            Category::Bonus,
            "REF-113374",
            Some("Sarah Johnson"),
            5,
        ),
        (
            "Tax Payment",
            -1250.0,
            TransactionStatus::Failed,
            Category::Tax,
            "REF-551200",
            None,
            9,
        ),
        (
            "Contractor Payment",
            1250.0,
            TransactionStatus::Pending,
            Category::Other,
            "REF-660018",
            Some("Michael Chen"),
            12,
        ),
        (
            "Benefits Payment",
            750.0,
            TransactionStatus::Completed,
            Category::Other,
            "REF-774421",
            Some("Emily Rodriguez"),
            35,
        ),
        (
            "Salary Advance",
            900.0,
            TransactionStatus::Pending,
            Category::Payroll,
            "REF-880533",
            Some("David Kim"),
            70,
        ),
    ];

    rows.into_iter()
        .map(
            |(description, amount, status, category, reference, recipient, days_ago)| Transaction {
                id: Uuid::new_v4(),
                occurred_at: now - chrono::Duration::days(days_ago),
                description: description.to_string(),
                amount,
                status,
                category,
                reference: reference.to_string(),
                recipient: recipient.map(str::to_string),
                tx_hash: None,
            },
        )
        .collect()
}

fn print_page(title: &str, page: &Page<Transaction>) {
    println!("\n== {} ==", title);
    if page.is_empty_state() {
        println!("(no transactions match)");
        return;
    }
    for tx in &page.items {
        println!(
            "{:<12} {:<20} {:>12}  [{}] {}",
            format_date(tx.occurred_at),
            tx.description,
            format_currency(tx.amount),
            tx.status,
            tx.reference,
        );
    }
    println!(
        "page {}/{} — {} transactions",
        page.meta.page, page.meta.total_pages, page.meta.total
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = DashboardConfig::from_yaml_str("page_size: 4\n")?;
    let now = Utc::now();

    let store = Arc::new(InMemoryStore::with_records(seed(now)));
    let mut view: ListView<Transaction> = ListView::new(store, &config);

    print_page("All transactions (newest first)", &view.page_at(now).await?);

    view.set_filter("status", "completed");
    print_page("Completed only", &view.page_at(now).await?);

    view.set_filter("status", "all");
    view.set_date_range(DateRange::Last30Days);
    print_page("Last 30 days", &view.page_at(now).await?);

    view.set_date_range(DateRange::AllTime);
    view.set_sort("amount");
    print_page("Largest amounts first", &view.page_at(now).await?);

    view.set_sort("amount");
    print_page("Smallest amounts first", &view.page_at(now).await?);

    view.set_search("$1,250.00");
    print_page("Searching the rendered amount", &view.page_at(now).await?);

    view.set_search("");
    view.set_page(2);
    print_page("Second page", &view.page_at(now).await?);

    let summary = view.export_list().await?;
    println!(
        "\nExported {} {} records as {:?} (stub)",
        summary.records, summary.record_type, summary.format
    );

    Ok(())
}
