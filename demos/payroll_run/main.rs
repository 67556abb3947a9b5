//! Demo running a payroll batch and a bonus batch over a small roster

use paydesk::prelude::*;
use std::sync::Arc;

fn roster() -> Vec<Worker> {
    let rows: [(&str, &str, Role, &str, &str, &str); 4] = [
        (
            "John Smith",
            "john.smith@example.com",
            Role::Developer,
            "2500",
            "Chase Bank",
            "****5678",
        ),
        (
            "Sarah Johnson",
            "sarah.j@example.com",
            Role::Designer,
            "3200",
            "Bank of America",
            "****1234",
        ),
        (
            "Michael Chen",
            "m.chen@example.com",
            Role::Developer,
            "2800",
            "Wells Fargo",
            "****9012",
        ),
        (
            "Emily Rodriguez",
            "e.rodriguez@example.com",
            Role::Manager,
            "4000",
            "Citibank",
            "****3456",
        ),
    ];

    rows.into_iter()
        .map(|(name, email, role, salary, bank_name, account_number)| {
            WorkerDraft {
                name: name.to_string(),
                email: email.to_string(),
                role: Some(role),
                salary: salary.to_string(),
                bank_name: bank_name.to_string(),
                account_number: account_number.to_string(),
                ..WorkerDraft::default()
            }
            .build(Utc::now())
            .expect("fixture drafts are valid")
        })
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = DashboardConfig::from_yaml_str("payment_delay_ms: 200\n")?;
    let store = Arc::new(InMemoryStore::with_records(roster()));
    let view: ListView<Worker> = ListView::new(store, &config);

    let workers = view.store().list().await?;
    let processor = SimulatedProcessor::from_config(&config);

    // Regular payroll for everyone
    let mut payroll = PaymentBatch::new(PaymentKind::Payroll);
    payroll.select_all(workers.iter().map(|w| w.id));
    println!(
        "Processing payroll for {} workers: {}",
        payroll.selected().len(),
        format_currency(payroll.total(&workers))
    );
    let receipt = processor.process(&payroll, &workers).await?;
    println!(
        "Payroll complete — {} paid {}",
        receipt.workers_paid,
        format_currency(receipt.total)
    );

    // Bonus run for the two developers
    let mut bonus = PaymentBatch::new(PaymentKind::Bonus);
    for w in workers.iter().filter(|w| w.role == Role::Developer) {
        bonus.toggle(w.id);
        bonus.set_bonus(w.id, 400.0);
    }

    match bonus.validate(&workers) {
        Ok(()) => {
            let receipt = processor.process(&bonus, &workers).await?;
            println!(
                "Bonus run complete — {} paid {}",
                receipt.workers_paid,
                format_currency(receipt.total)
            );
        }
        Err(e) => println!("Bonus run rejected: {}", e),
    }

    Ok(())
}
