//! The transaction record and its draft

use crate::core::error::{FieldValidationError, ValidationError};
use crate::core::field::SortValue;
use crate::core::format::{format_currency, format_date};
use crate::core::record::Record;
use crate::core::validation::{filters, validators};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Processing status of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "completed",
            TransactionStatus::Pending => "pending",
            TransactionStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment category; `Tax` amounts are recorded as outflows (negative)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Payroll,
    Bonus,
    Tax,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Payroll => "payroll",
            Category::Bonus => "bonus",
            Category::Tax => "tax",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A financial transaction row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, stable for the record's lifetime
    pub id: Uuid,

    /// When the transaction occurred
    pub occurred_at: DateTime<Utc>,

    /// Human-readable description (e.g. "Monthly Payroll")
    pub description: String,

    /// Signed amount; negative encodes an outflow such as tax
    pub amount: f64,

    pub status: TransactionStatus,

    pub category: Category,

    /// Reference code (e.g. "REF-482910")
    pub reference: String,

    /// Recipient name, present for payroll and bonus payments
    pub recipient: Option<String>,

    /// Long-form settlement hash, when one exists
    pub tx_hash: Option<String>,
}

impl Record for Transaction {
    fn record_type() -> &'static str {
        "transaction"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn searchable_fields(&self) -> Vec<String> {
        let mut fields = vec![
            self.description.clone(),
            self.reference.clone(),
            format_currency(self.amount),
            format_date(self.occurred_at),
        ];
        if let Some(recipient) = &self.recipient {
            fields.push(recipient.clone());
        }
        fields
    }

    fn sortable_fields() -> &'static [&'static str] {
        &[
            "date",
            "description",
            "amount",
            "status",
            "category",
            "reference",
            "recipient",
        ]
    }

    fn default_sort_field() -> &'static str {
        "date"
    }

    fn sort_key(&self, field: &str) -> SortValue {
        match field {
            "date" => SortValue::Instant(self.occurred_at),
            "description" => SortValue::Text(self.description.clone()),
            "amount" => SortValue::Number(self.amount),
            "status" => SortValue::Text(self.status.as_str().to_string()),
            "category" => SortValue::Text(self.category.as_str().to_string()),
            "reference" => SortValue::Text(self.reference.clone()),
            "recipient" => self
                .recipient
                .clone()
                .map(SortValue::Text)
                .unwrap_or(SortValue::Missing),
            _ => SortValue::Missing,
        }
    }

    fn field_text(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.as_str().to_string()),
            "category" => Some(self.category.as_str().to_string()),
            _ => None,
        }
    }
}

/// Raw form input for creating or editing a transaction
///
/// `amount` is carried as the string the user typed; validation parses it
/// leniently the same way the display layer does.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionDraft {
    pub description: String,
    pub amount: String,
    pub category: Option<Category>,
    pub reference: String,
    pub recipient: Option<String>,
}

impl TransactionDraft {
    /// Validate the draft and build a new transaction
    ///
    /// New transactions start `Pending` and are stamped with `now`. On
    /// failure every failing field is reported and nothing is built.
    pub fn build(self, now: DateTime<Utc>) -> Result<Transaction, ValidationError> {
        let (amount, category) = self.validate()?;

        Ok(Transaction {
            id: Uuid::new_v4(),
            occurred_at: now,
            description: filters::trim(&self.description),
            amount,
            status: TransactionStatus::Pending,
            category,
            reference: filters::trim(&self.reference),
            recipient: self.recipient.as_deref().map(filters::trim).filter(|r| !r.is_empty()),
            tx_hash: None,
        })
    }

    /// Validate the draft and apply it onto an existing transaction
    ///
    /// Identifier, status, settlement hash, and occurrence time are kept.
    pub fn apply_to(self, existing: &Transaction) -> Result<Transaction, ValidationError> {
        let (amount, category) = self.validate()?;

        Ok(Transaction {
            id: existing.id,
            occurred_at: existing.occurred_at,
            description: filters::trim(&self.description),
            amount,
            status: existing.status,
            category,
            reference: filters::trim(&self.reference),
            recipient: self.recipient.as_deref().map(filters::trim).filter(|r| !r.is_empty()),
            tx_hash: existing.tx_hash.clone(),
        })
    }

    fn validate(&self) -> Result<(f64, Category), ValidationError> {
        let mut errors: Vec<FieldValidationError> = Vec::new();

        if let Err(e) = validators::required("description", &self.description) {
            errors.push(e);
        }
        if let Err(e) = validators::required("reference", &self.reference) {
            errors.push(e);
        }
        let amount = match validators::amount("amount", &self.amount) {
            Ok(n) => Some(n),
            Err(e) => {
                errors.push(e);
                None
            }
        };
        if self.category.is_none() {
            errors.push(FieldValidationError {
                field: "category".to_string(),
                message: "is required".to_string(),
            });
        }

        match (amount, self.category) {
            (Some(amount), Some(category)) if errors.is_empty() => Ok((amount, category)),
            _ => Err(ValidationError::FieldErrors(errors)),
        }
    }
}
