//! # API Error Type
//!
//! Unified error type for draft session operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Error Flow in Merx                                 │
//! │                                                                         │
//! │  Host UI                        Session Shell                           │
//! │  ───────                        ─────────────                           │
//! │                                                                         │
//! │  update_quantity(item, 5)                                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Operation                                                       │  │
//! │  │  Result<DraftResponse, ApiError>                                 │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Stock ceiling? ─── CoreError::InsufficientStock ──┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Validation? ────── CoreError::Validation ─────── ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  // e.message = "Insufficient stock for Widget: available 3, ..."      │
//! │  // e.code = "INSUFFICIENT_STOCK"                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The draft keeps its prior valid state on every rejection: the operation
//! is refused, not partially applied.

use merx_core::CoreError;
use serde::Serialize;

/// API error returned from draft session operations.
///
/// ## Serialization
/// This is what the host UI receives when an operation fails:
/// ```json
/// {
///   "code": "DUPLICATE_ITEM",
///   "message": "'Widget' is already in the draft"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for session responses.
///
/// ## Usage in Frontend
/// ```typescript
/// try {
///   await draft.updateQuantity(itemId, qty);
/// } catch (e) {
///   switch (e.code) {
///     case 'INSUFFICIENT_STOCK':
///       showNotification(e.message);
///       break;
///     case 'VALIDATION_ERROR':
///       markField(e.message);
///       break;
///     default:
///       showError('An error occurred');
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Line item not found in the draft
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Catalog entity already present as a line item
    DuplicateItem,

    /// Quantity exceeds the stock snapshot
    InsufficientStock,

    /// Draft-level limits exceeded (item count cap)
    DraftError,

    /// Draft is not ready for submission (empty, missing partner)
    IncompleteDraft,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts engine errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::ItemNotFound(_) => ErrorCode::NotFound,
            CoreError::DuplicateItem { .. } => ErrorCode::DuplicateItem,
            CoreError::InsufficientStock { .. } => ErrorCode::InsufficientStock,
            CoreError::DraftTooLarge { .. } => ErrorCode::DraftError,
            CoreError::EmptyDraft | CoreError::MissingPartner => ErrorCode::IncompleteDraft,
            CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        ApiError::new(code, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_codes() {
        let err: ApiError = CoreError::InsufficientStock {
            name: "Widget".to_string(),
            available: 3,
            requested: 5,
        }
        .into();
        assert_eq!(err.code, ErrorCode::InsufficientStock);
        assert!(err.message.contains("Widget"));

        let err: ApiError = CoreError::EmptyDraft.into();
        assert_eq!(err.code, ErrorCode::IncompleteDraft);

        let err: ApiError = CoreError::DuplicateItem {
            itemable_id: "a".to_string(),
            name: "Widget".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::DuplicateItem);
    }

    #[test]
    fn serializes_with_screaming_snake_code() {
        let err = ApiError::validation("quantity must be positive");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "quantity must be positive");
    }
}
