//! The worker record and its draft

use crate::core::error::{FieldValidationError, ValidationError};
use crate::core::field::SortValue;
use crate::core::format::format_currency;
use crate::core::record::Record;
use crate::core::validation::{filters, validators};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Roster status of a worker; fresh workers start `Invited`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkerStatus {
    Active,
    Invited,
    Inactive,
}

impl WorkerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkerStatus::Active => "active",
            WorkerStatus::Invited => "invited",
            WorkerStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for WorkerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Worker role, from the fixed set the roster form offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Developer,
    Designer,
    Manager,
    Marketing,
    Support,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Developer => "Developer",
            Role::Designer => "Designer",
            Role::Manager => "Manager",
            Role::Marketing => "Marketing",
            Role::Support => "Support",
        }
    }

    /// Parse a role label from form input
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Developer" => Some(Role::Developer),
            "Designer" => Some(Role::Designer),
            "Manager" => Some(Role::Manager),
            "Marketing" => Some(Role::Marketing),
            "Support" => Some(Role::Support),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A worker roster row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worker {
    /// Unique identifier, stable for the record's lifetime
    pub id: Uuid,

    pub name: String,

    pub email: String,

    pub role: Role,

    /// Monthly salary in USD
    pub salary: f64,

    pub bank_name: String,

    /// Masked account number (e.g. `****5678`)
    pub account_number: String,

    pub status: WorkerStatus,

    pub department: Option<String>,

    pub position: Option<String>,

    pub note: Option<String>,

    /// When the worker joined the roster
    pub joined_at: DateTime<Utc>,
}

impl Record for Worker {
    fn record_type() -> &'static str {
        "worker"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.joined_at
    }

    fn searchable_fields(&self) -> Vec<String> {
        let mut fields = vec![
            self.name.clone(),
            self.email.clone(),
            self.role.as_str().to_string(),
            self.bank_name.clone(),
            format_currency(self.salary),
        ];
        if let Some(department) = &self.department {
            fields.push(department.clone());
        }
        if let Some(position) = &self.position {
            fields.push(position.clone());
        }
        fields
    }

    fn sortable_fields() -> &'static [&'static str] {
        &[
            "name",
            "email",
            "role",
            "salary",
            "status",
            "department",
            "position",
            "joined",
        ]
    }

    fn default_sort_field() -> &'static str {
        "name"
    }

    fn sort_key(&self, field: &str) -> SortValue {
        match field {
            "name" => SortValue::Text(self.name.clone()),
            "email" => SortValue::Text(self.email.clone()),
            "role" => SortValue::Text(self.role.as_str().to_string()),
            "salary" => SortValue::Number(self.salary),
            "status" => SortValue::Text(self.status.as_str().to_string()),
            "department" => self
                .department
                .clone()
                .map(SortValue::Text)
                .unwrap_or(SortValue::Missing),
            "position" => self
                .position
                .clone()
                .map(SortValue::Text)
                .unwrap_or(SortValue::Missing),
            "joined" => SortValue::Instant(self.joined_at),
            _ => SortValue::Missing,
        }
    }

    fn field_text(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.as_str().to_string()),
            "role" => Some(self.role.as_str().to_string()),
            "department" => self.department.clone(),
            _ => None,
        }
    }
}

/// Raw form input for creating or editing a worker
///
/// `salary` is carried as the string the user typed; validation parses it
/// leniently the same way the display layer does.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkerDraft {
    pub name: String,
    pub email: String,
    pub role: Option<Role>,
    pub salary: String,
    pub bank_name: String,
    pub account_number: String,
    pub department: Option<String>,
    pub position: Option<String>,
    pub note: Option<String>,
}

impl WorkerDraft {
    /// Validate the draft and build a new worker
    ///
    /// New workers start `Invited` and join at `now`. On failure every
    /// failing field is reported and nothing is built.
    pub fn build(self, now: DateTime<Utc>) -> Result<Worker, ValidationError> {
        let (salary, role) = self.validate()?;

        Ok(Worker {
            id: Uuid::new_v4(),
            name: filters::trim(&self.name),
            email: filters::lowercase(&filters::trim(&self.email)),
            role,
            salary,
            bank_name: filters::trim(&self.bank_name),
            account_number: filters::trim(&self.account_number),
            status: WorkerStatus::Invited,
            department: normalize_optional(self.department),
            position: normalize_optional(self.position),
            note: normalize_optional(self.note),
            joined_at: now,
        })
    }

    /// Validate the draft and apply it onto an existing worker
    ///
    /// Identifier, status, and join date are kept.
    pub fn apply_to(self, existing: &Worker) -> Result<Worker, ValidationError> {
        let (salary, role) = self.validate()?;

        Ok(Worker {
            id: existing.id,
            name: filters::trim(&self.name),
            email: filters::lowercase(&filters::trim(&self.email)),
            role,
            salary,
            bank_name: filters::trim(&self.bank_name),
            account_number: filters::trim(&self.account_number),
            status: existing.status,
            department: normalize_optional(self.department),
            position: normalize_optional(self.position),
            note: normalize_optional(self.note),
            joined_at: existing.joined_at,
        })
    }

    fn validate(&self) -> Result<(f64, Role), ValidationError> {
        let mut errors: Vec<FieldValidationError> = Vec::new();

        if let Err(e) = validators::required("name", &self.name) {
            errors.push(e);
        }
        match validators::required("email", &self.email) {
            Err(e) => errors.push(e),
            Ok(()) => {
                if let Err(e) = validators::email("email", self.email.trim()) {
                    errors.push(e);
                }
            }
        }
        if let Err(e) = validators::required("bank_name", &self.bank_name) {
            errors.push(e);
        }
        if let Err(e) = validators::required("account_number", &self.account_number) {
            errors.push(e);
        }
        let salary = match validators::amount("salary", &self.salary) {
            Ok(n) => Some(n),
            Err(e) => {
                errors.push(e);
                None
            }
        };
        if self.role.is_none() {
            errors.push(FieldValidationError {
                field: "role".to_string(),
                message: "is required".to_string(),
            });
        }

        match (salary, self.role) {
            (Some(salary), Some(role)) if errors.is_empty() => Ok((salary, role)),
            _ => Err(ValidationError::FieldErrors(errors)),
        }
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value.map(|v| filters::trim(&v)).filter(|v| !v.is_empty())
}
