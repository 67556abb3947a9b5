//! Typed error handling for the paydesk crate
//!
//! This module provides an error type hierarchy that enables callers to
//! handle failures specifically rather than dealing with generic
//! `anyhow::Error` values.
//!
//! # Error Categories
//!
//! - [`RecordError`]: Errors related to record operations (CRUD)
//! - [`ValidationError`]: Errors related to draft/input validation
//! - [`FormatError`]: Errors related to display-value parsing
//! - [`ConfigError`]: Errors related to configuration loading
//! - [`PaymentError`]: Errors related to payment batches
//!
//! # Example
//!
//! ```rust,ignore
//! match draft.build(Utc::now()) {
//!     Ok(worker) => store.insert(worker).await?,
//!     Err(ValidationError::FieldErrors(errors)) => {
//!         for e in errors {
//!             eprintln!("{}: {}", e.field, e.message);
//!         }
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// The main error type for the paydesk crate
///
/// This enum encompasses all possible errors that can occur within the
/// crate. Each variant contains a more specific error type for that
/// category.
#[derive(Debug)]
pub enum PaydeskError {
    /// Record-related errors (CRUD operations)
    Record(RecordError),

    /// Validation errors
    Validation(ValidationError),

    /// Display-value parsing errors
    Format(FormatError),

    /// Configuration errors
    Config(ConfigError),

    /// Payment batch errors
    Payment(PaymentError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for PaydeskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaydeskError::Record(e) => write!(f, "{}", e),
            PaydeskError::Validation(e) => write!(f, "{}", e),
            PaydeskError::Format(e) => write!(f, "{}", e),
            PaydeskError::Config(e) => write!(f, "{}", e),
            PaydeskError::Payment(e) => write!(f, "{}", e),
            PaydeskError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for PaydeskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaydeskError::Record(e) => Some(e),
            PaydeskError::Validation(e) => Some(e),
            PaydeskError::Format(e) => Some(e),
            PaydeskError::Config(e) => Some(e),
            PaydeskError::Payment(e) => Some(e),
            PaydeskError::Internal(_) => None,
        }
    }
}

impl PaydeskError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            PaydeskError::Record(e) => e.error_code(),
            PaydeskError::Validation(_) => "VALIDATION_ERROR",
            PaydeskError::Format(_) => "FORMAT_ERROR",
            PaydeskError::Config(_) => "CONFIG_ERROR",
            PaydeskError::Payment(e) => e.error_code(),
            PaydeskError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

// =============================================================================
// Record Errors
// =============================================================================

/// Errors related to record operations
#[derive(Debug)]
pub enum RecordError {
    /// Record was not found
    ///
    /// Update and delete treat a missing id as a silent no-op; this
    /// variant exists for callers that need a hard failure instead.
    NotFound { record_type: String, id: Uuid },

    /// Record already exists (identifier conflict)
    AlreadyExists { record_type: String, id: Uuid },

    /// Record operation failed
    OperationFailed {
        record_type: String,
        operation: String,
        message: String,
    },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::NotFound { record_type, id } => {
                write!(f, "{} with id '{}' not found", record_type, id)
            }
            RecordError::AlreadyExists { record_type, id } => {
                write!(f, "{} with id '{}' already exists", record_type, id)
            }
            RecordError::OperationFailed {
                record_type,
                operation,
                message,
            } => {
                write!(f, "Failed to {} {}: {}", operation, record_type, message)
            }
        }
    }
}

impl std::error::Error for RecordError {}

impl RecordError {
    pub fn error_code(&self) -> &'static str {
        match self {
            RecordError::NotFound { .. } => "RECORD_NOT_FOUND",
            RecordError::AlreadyExists { .. } => "RECORD_ALREADY_EXISTS",
            RecordError::OperationFailed { .. } => "RECORD_OPERATION_FAILED",
        }
    }
}

impl From<RecordError> for PaydeskError {
    fn from(err: RecordError) -> Self {
        PaydeskError::Record(err)
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to draft/input validation
#[derive(Debug)]
pub enum ValidationError {
    /// Single field validation error
    FieldError { field: String, message: String },

    /// Multiple field validation errors
    FieldErrors(Vec<FieldValidationError>),
}

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldError { field, message } => {
                write!(f, "Validation error for field '{}': {}", field, message)
            }
            ValidationError::FieldErrors(errors) => {
                let msgs: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                write!(f, "Validation errors: {}", msgs.join(", "))
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    /// Fields that failed validation, in declaration order
    pub fn fields(&self) -> Vec<&str> {
        match self {
            ValidationError::FieldError { field, .. } => vec![field.as_str()],
            ValidationError::FieldErrors(errors) => {
                errors.iter().map(|e| e.field.as_str()).collect()
            }
        }
    }
}

impl From<ValidationError> for PaydeskError {
    fn from(err: ValidationError) -> Self {
        PaydeskError::Validation(err)
    }
}

// =============================================================================
// Format Errors
// =============================================================================

/// Errors related to parsing display values
///
/// Display paths never surface these directly; an unparseable amount
/// degrades to the `Invalid Amount` sentinel string instead.
#[derive(Debug)]
pub enum FormatError {
    /// Amount string could not be parsed as a finite number
    UnparseableAmount { value: String },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnparseableAmount { value } => {
                write!(f, "Cannot parse '{}' as a monetary amount", value)
            }
        }
    }
}

impl std::error::Error for FormatError {}

impl From<FormatError> for PaydeskError {
    fn from(err: FormatError) -> Self {
        PaydeskError::Format(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration loading
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration content
    ParseError { message: String },

    /// Configuration file not found
    FileNotFound { path: String },

    /// IO error while reading configuration
    IoError { message: String },

    /// Invalid value in configuration
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { message } => {
                write!(f, "Failed to parse config: {}", message)
            }
            ConfigError::FileNotFound { path } => {
                write!(f, "Configuration file not found: {}", path)
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
            ConfigError::InvalidValue {
                field,
                value,
                message,
            } => {
                write!(
                    f,
                    "Invalid value '{}' for field '{}': {}",
                    value, field, message
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for PaydeskError {
    fn from(err: ConfigError) -> Self {
        PaydeskError::Config(err)
    }
}

// =============================================================================
// Payment Errors
// =============================================================================

/// Errors related to payment batches
#[derive(Debug)]
pub enum PaymentError {
    /// No workers selected for the batch
    EmptySelection,

    /// A selected worker has no positive bonus amount
    InvalidBonus { worker_id: Uuid },

    /// A selected worker id is not in the roster
    UnknownWorker { worker_id: Uuid },

    /// The processor failed to complete the batch
    ProcessingFailed { message: String },
}

impl fmt::Display for PaymentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentError::EmptySelection => {
                write!(f, "No workers selected for payment")
            }
            PaymentError::InvalidBonus { worker_id } => {
                write!(
                    f,
                    "Worker '{}' needs a bonus amount greater than zero",
                    worker_id
                )
            }
            PaymentError::UnknownWorker { worker_id } => {
                write!(f, "Worker '{}' is not in the roster", worker_id)
            }
            PaymentError::ProcessingFailed { message } => {
                write!(f, "Payment processing failed: {}", message)
            }
        }
    }
}

impl std::error::Error for PaymentError {}

impl PaymentError {
    pub fn error_code(&self) -> &'static str {
        match self {
            PaymentError::EmptySelection => "PAYMENT_EMPTY_SELECTION",
            PaymentError::InvalidBonus { .. } => "PAYMENT_INVALID_BONUS",
            PaymentError::UnknownWorker { .. } => "PAYMENT_UNKNOWN_WORKER",
            PaymentError::ProcessingFailed { .. } => "PAYMENT_PROCESSING_FAILED",
        }
    }
}

impl From<PaymentError> for PaydeskError {
    fn from(err: PaymentError) -> Self {
        PaydeskError::Payment(err)
    }
}
