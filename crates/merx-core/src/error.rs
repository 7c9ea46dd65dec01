//! # Error Types
//!
//! Domain-specific error types for merx-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  merx-core errors (this file)                                          │
//! │  ├── CoreError        - Rejected mutations / domain rule violations    │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  merx-draft errors (separate crate)                                    │
//! │  └── ApiError         - What the host UI sees (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Host UI                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item id, available qty, etc.)
//! 3. Errors are enum variants, never String
//! 4. A rejected mutation NEVER leaves the draft inconsistent

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Domain rule violations raised by draft mutation operations.
///
/// Every variant corresponds to a rejected operation: the draft keeps its
/// prior valid state and the caller surfaces the reason.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// No line item with this id exists in the draft.
    #[error("Line item not found: {0}")]
    ItemNotFound(String),

    /// The catalog entity is already present as a line item.
    ///
    /// ## When This Occurs
    /// The item picker allows re-selecting an entity that was already
    /// added; the draft rejects the add rather than silently merging
    /// quantities.
    #[error("'{name}' is already in the draft")]
    DuplicateItem { itemable_id: String, name: String },

    /// Requested quantity exceeds the stock snapshotted at add-time.
    ///
    /// ## User Workflow
    /// ```text
    /// Edit quantity (qty: 5)
    ///      │
    ///      ▼
    /// Check snapshot: available=3
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Widget", available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// UI shows: "Only 3 Widget available"
    /// ```
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Draft has exceeded the maximum allowed line items.
    #[error("Draft cannot have more than {max} items")]
    DraftTooLarge { max: usize },

    /// Submission attempted on a draft with no line items.
    #[error("Draft has no items")]
    EmptyDraft,

    /// Submission attempted without the required counterparty.
    ///
    /// Orders need a payer, purchases a supplier, consignments a
    /// consignor; the engine only knows "a partner must be set".
    #[error("A partner must be selected before submission")]
    MissingPartner,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a value doesn't meet requirements.
/// Used for early validation before domain logic runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
