//! # merx-core: Pure Pricing Engine for Merx
//!
//! This crate is the **heart** of Merx. It contains the draft pricing and
//! discount aggregation logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Merx Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Host UI (forms/tables)                     │   │
//! │  │    Item Picker ──► Draft Form ──► Totals Panel ──► Submit      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  merx-draft (session shell)                     │   │
//! │  │    add_item, update_quantity, set_discount, submission          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ merx-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ discount  │  │ document  │  │   │
//! │  │   │ Snapshot  │  │   Money   │  │ resolver  │  │  Draft    │  │   │
//! │  │   │   Rule    │  │  Percent  │  │eligibility│  │aggregator │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CatalogSnapshot, DiscountRule, kind tags)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`discount`] - Discount resolver (eligibility, caps, clamping)
//! - [`item`] - Line item and its aggregator
//! - [`document`] - Draft document, mutation operations, document aggregator
//! - [`submit`] - Normalized submission payload for the creation API
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation and commit-time coercion
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in minor units (i64), never floats
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//! 5. **Derived fields never drift**: every mutation path re-runs the aggregator
//!
//! ## Example Usage
//!
//! ```rust
//! use merx_core::money::{Money, Percent};
//! use merx_core::types::{DiscountRule, DiscountValue};
//! use merx_core::discount::resolve;
//!
//! // 10% off, capped at 50.00
//! let rule = DiscountRule {
//!     id: "promo-10".to_string(),
//!     name: "Ten percent".to_string(),
//!     value: DiscountValue::Percentage(Percent::from_percentage(10.0)),
//!     min_total: None,
//!     max_discount: Some(Money::from_cents(5000)),
//! };
//!
//! let resolution = resolve(Money::from_cents(100_000), Some(&rule));
//! assert!(resolution.eligible);
//! assert_eq!(resolution.amount.cents(), 5000); // capped, not 10000
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod discount;
pub mod document;
pub mod error;
pub mod item;
pub mod money;
pub mod submit;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use merx_core::Money` instead of
// `use merx_core::money::Money`

pub use discount::{resolve, Resolution};
pub use document::{DocumentTotals, DraftDocument};
pub use error::{CoreError, CoreResult, ValidationError};
pub use item::LineItem;
pub use money::{Money, Percent};
pub use submit::{DraftSubmission, SubmissionItem};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum line items allowed in a single draft document
///
/// ## Business Reason
/// Prevents runaway drafts and ensures reasonable document sizes.
/// Can be made configurable per-tenant in future versions.
pub const MAX_DRAFT_ITEMS: usize = 100;

/// Maximum quantity of a single line item
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10)
/// Configurable per-tenant in future versions.
pub const MAX_ITEM_QUANTITY: i64 = 999;
