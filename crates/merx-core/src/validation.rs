//! # Validation Module
//!
//! Input validation utilities for the Merx pricing engine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Host UI                                                      │
//! │  ├── Keystroke-level checks, transient invalid states tolerated        │
//! │  └── Commit-time coercion (blur): coerce_quantity                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - value validation                               │
//! │  ├── Ranges, signs, required fields                                    │
//! │  └── Rejected values never reach the aggregator                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Server-side recompute on submission (out of scope)           │
//! │                                                                         │
//! │  Defense in depth: client-derived totals are display-only              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use merx_core::validation::{validate_quantity, coerce_quantity};
//!
//! // Validate quantity before a draft mutation
//! validate_quantity(5).unwrap();
//!
//! // Coerce committed input (an emptied field parses to 0 → floor at 1)
//! assert_eq!(coerce_quantity(0), 1);
//! ```

use crate::error::ValidationError;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Quantity
// =============================================================================

/// Coerces committed quantity input to the valid floor.
///
/// The host UI tolerates transient invalid keystroke states (an emptied
/// numeric field, a stray minus sign) mid-edit; on blur/commit the parsed
/// value goes through this before entering the aggregator. Anything below
/// 1 - including the 0 an unparsable field normalizes to - commits as 1.
#[inline]
pub const fn coerce_quantity(raw: i64) -> i64 {
    if raw < 1 {
        1
    } else {
        raw
    }
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Draft: Edit Quantity                                                   │
/// │                                                                         │
/// │  User commits quantity: 5                                              │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_quantity(5) ← THIS FUNCTION                                  │
/// │       │                                                                 │
/// │       ├── qty <= 0? → Error: "quantity must be positive"               │
/// │       │                                                                 │
/// │       ├── qty > 999? → Error: "quantity must be between 1 and 999"     │
/// │       │                                                                 │
/// │       └── OK → Proceed with the mutation (stock ceiling checked there) │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// Money
// =============================================================================

/// Validates a unit price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use merx_core::validation::validate_unit_price_cents;
///
/// assert!(validate_unit_price_cents(1099).is_ok());  // 10.99
/// assert!(validate_unit_price_cents(0).is_ok());     // free item
/// assert!(validate_unit_price_cents(-100).is_err()); // invalid
/// ```
pub fn validate_unit_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "unit price".to_string(),
        });
    }

    Ok(())
}

/// Validates a percentage rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_percent_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "percentage".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

// =============================================================================
// UUID Validators
// =============================================================================

/// Validates a UUID string format.
///
/// ## Example
/// ```rust
/// use merx_core::validation::validate_uuid;
///
/// assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_uuid("not-a-uuid").is_err());
/// ```
pub fn validate_uuid(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_quantity() {
        assert_eq!(coerce_quantity(5), 5);
        assert_eq!(coerce_quantity(1), 1);
        assert_eq!(coerce_quantity(0), 1);
        assert_eq!(coerce_quantity(-3), 1);
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(100).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_unit_price_cents() {
        assert!(validate_unit_price_cents(0).is_ok());
        assert!(validate_unit_price_cents(1099).is_ok());
        assert!(validate_unit_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_percent_bps() {
        assert!(validate_percent_bps(0).is_ok());
        assert!(validate_percent_bps(1000).is_ok());
        assert!(validate_percent_bps(10000).is_ok());
        assert!(validate_percent_bps(10001).is_err());
    }

    #[test]
    fn test_validate_uuid() {
        assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_uuid("").is_err());
        assert!(validate_uuid("not-a-uuid").is_err());
    }
}
