//! Payroll and bonus payment batches
//!
//! Mirrors the dashboard's pay-all workflow: select workers, for bonus
//! runs enter a per-worker amount, review the summary, then hand the
//! batch to a processor. The processor is an async trait so the simulated
//! implementation can later be swapped for a real payment backend without
//! touching the batch logic.

use crate::core::error::PaymentError;
use crate::core::format::format_currency;
use crate::records::worker::Worker;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

/// Kind of payment run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentKind {
    /// Regular payroll: each selected worker receives their salary
    Payroll,
    /// Bonus run: each selected worker receives an entered amount
    Bonus,
}

impl fmt::Display for PaymentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentKind::Payroll => f.write_str("payroll"),
            PaymentKind::Bonus => f.write_str("bonus"),
        }
    }
}

/// A payment batch under construction
#[derive(Debug, Clone)]
pub struct PaymentBatch {
    kind: PaymentKind,
    selected: Vec<Uuid>,
    bonus_amounts: HashMap<Uuid, f64>,
}

impl PaymentBatch {
    /// Start an empty batch
    pub fn new(kind: PaymentKind) -> Self {
        Self {
            kind,
            selected: Vec::new(),
            bonus_amounts: HashMap::new(),
        }
    }

    pub fn kind(&self) -> PaymentKind {
        self.kind
    }

    /// Selected worker ids, in selection order
    pub fn selected(&self) -> &[Uuid] {
        &self.selected
    }

    /// Toggle one worker's selection
    pub fn toggle(&mut self, worker_id: Uuid) {
        if let Some(pos) = self.selected.iter().position(|id| *id == worker_id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(worker_id);
        }
    }

    /// Select every listed worker (the select-all checkbox)
    pub fn select_all(&mut self, worker_ids: impl IntoIterator<Item = Uuid>) {
        self.selected.clear();
        for id in worker_ids {
            if !self.selected.contains(&id) {
                self.selected.push(id);
            }
        }
    }

    /// Clear the selection (and bonus amounts for a bonus run)
    pub fn clear(&mut self) {
        self.selected.clear();
        self.bonus_amounts.clear();
    }

    /// Set the bonus amount for one worker
    ///
    /// Non-finite input is stored as zero, which validation then rejects
    /// for a selected worker.
    pub fn set_bonus(&mut self, worker_id: Uuid, amount: f64) {
        let amount = if amount.is_finite() { amount } else { 0.0 };
        self.bonus_amounts.insert(worker_id, amount);
    }

    pub fn bonus_for(&self, worker_id: &Uuid) -> Option<f64> {
        self.bonus_amounts.get(worker_id).copied()
    }

    /// The amount this batch would pay out
    pub fn total(&self, roster: &[Worker]) -> f64 {
        match self.kind {
            PaymentKind::Payroll => self
                .selected
                .iter()
                .filter_map(|id| roster.iter().find(|w| w.id == *id))
                .map(|w| w.salary)
                .sum(),
            PaymentKind::Bonus => self
                .selected
                .iter()
                .filter_map(|id| self.bonus_amounts.get(id))
                .sum(),
        }
    }

    /// Check the batch is payable against a roster
    pub fn validate(&self, roster: &[Worker]) -> Result<(), PaymentError> {
        if self.selected.is_empty() {
            return Err(PaymentError::EmptySelection);
        }
        for id in &self.selected {
            if !roster.iter().any(|w| w.id == *id) {
                return Err(PaymentError::UnknownWorker { worker_id: *id });
            }
            if self.kind == PaymentKind::Bonus
                && self.bonus_amounts.get(id).copied().unwrap_or(0.0) <= 0.0
            {
                return Err(PaymentError::InvalidBonus { worker_id: *id });
            }
        }
        Ok(())
    }
}

/// Receipt for a completed batch
#[derive(Debug, Clone, Serialize)]
pub struct PaymentReceipt {
    pub kind: PaymentKind,
    pub total: f64,
    pub workers_paid: usize,
    pub completed_at: DateTime<Utc>,
}

/// Service trait for executing payment batches
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Validate and execute a batch against a roster snapshot
    async fn process(
        &self,
        batch: &PaymentBatch,
        roster: &[Worker],
    ) -> Result<PaymentReceipt, PaymentError>;
}

/// Simulated processor
///
/// Sleeps for the configured delay, then always succeeds. No money moves;
/// the delay stands in for a real payment API round-trip.
pub struct SimulatedProcessor {
    delay: Duration,
}

impl SimulatedProcessor {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Processor with the delay from the dashboard config
    pub fn from_config(config: &crate::config::DashboardConfig) -> Self {
        Self::new(Duration::from_millis(config.payment_delay_ms))
    }
}

#[async_trait]
impl PaymentProcessor for SimulatedProcessor {
    async fn process(
        &self,
        batch: &PaymentBatch,
        roster: &[Worker],
    ) -> Result<PaymentReceipt, PaymentError> {
        batch.validate(roster)?;

        tokio::time::sleep(self.delay).await;

        let receipt = PaymentReceipt {
            kind: batch.kind(),
            total: batch.total(roster),
            workers_paid: batch.selected().len(),
            completed_at: Utc::now(),
        };
        tracing::info!(
            kind = %receipt.kind,
            total = %format_currency(receipt.total),
            workers_paid = receipt.workers_paid,
            "simulated payment batch completed"
        );
        Ok(receipt)
    }
}
