//! # Domain Types
//!
//! Core domain types used throughout the Merx pricing engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ CatalogSnapshot │   │  DiscountRule   │   │  ItemableKind   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  Product        │       │
//! │  │  name           │   │  value (enum)   │   │  Service        │       │
//! │  │  unit_price     │   │  min_total      │   │  Course         │       │
//! │  │  available_qty  │   │  max_discount   │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │  DocumentKind   │   │  DiscountValue  │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  Order          │   │  Fixed(Money)   │                             │
//! │  │  Purchase       │   │  Percentage(%)  │                             │
//! │  │  Consignment    │   └─────────────────┘                             │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! Catalog data is fetched by an external lookup collaborator and handed in
//! as a `CatalogSnapshot`. The engine freezes unit price and available
//! quantity into the line item at add-time; later catalog changes do not
//! ripple into an open draft.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{Money, Percent};

// =============================================================================
// Kind Tags
// =============================================================================

/// The kind of catalog entity a line item points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ItemableKind {
    /// Physical stock - quantity is bounded by availability at add-time.
    Product,
    /// A service - no stock tracking.
    Service,
    /// A course enrollment - no stock tracking.
    Course,
}

/// The kind of draft document being assembled.
///
/// Structurally identical for pricing purposes; the tag exists so the
/// submission payload routes to the right creation API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Order,
    Purchase,
    Consignment,
}

impl Default for DocumentKind {
    fn default() -> Self {
        DocumentKind::Order
    }
}

// =============================================================================
// Catalog Snapshot
// =============================================================================

/// A flat snapshot of a catalog entity at lookup time.
///
/// This is the engine's entire view of the catalog domain: the lookup
/// collaborator resolves a search into one of these before anything enters
/// a draft.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    /// Catalog entity identifier (UUID).
    pub id: String,

    /// Display name shown in the draft form and on the document.
    pub name: String,

    /// Unit price in cents at lookup time.
    pub unit_price_cents: i64,

    /// Available stock at lookup time. `Some` only for stock-tracked
    /// entities (products); services and courses carry `None`.
    pub available_quantity: Option<i64>,

    /// Optional description for detail views.
    pub description: Option<String>,
}

impl CatalogSnapshot {
    /// Returns the unit price as a Money type.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }
}

// =============================================================================
// Discount Rule
// =============================================================================

/// The value a discount rule carries: an absolute amount or a rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum DiscountValue {
    /// Absolute currency amount ("20.00 off").
    Fixed(Money),
    /// Rate applied to the qualifying subtotal ("10% off").
    Percentage(Percent),
}

/// A reusable promotional rule.
///
/// Immutable once fetched; owned by a discount catalog external to this
/// engine. A rule can be attached to a single line item or to the whole
/// document; the resolver semantics are identical either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DiscountRule {
    /// Rule identifier (UUID) - the only part of the rule that survives
    /// into the submission payload.
    pub id: String,

    /// Display name ("Summer promo").
    pub name: String,

    /// Fixed amount or percentage rate.
    pub value: DiscountValue,

    /// Qualifying-subtotal threshold. Below it the rule is not eligible
    /// and contributes nothing.
    pub min_total: Option<Money>,

    /// Upper bound on the computed discount amount.
    pub max_discount: Option<Money>,
}

impl DiscountRule {
    /// Convenience constructor for a fixed-amount rule.
    pub fn fixed(id: impl Into<String>, name: impl Into<String>, amount: Money) -> Self {
        DiscountRule {
            id: id.into(),
            name: name.into(),
            value: DiscountValue::Fixed(amount),
            min_total: None,
            max_discount: None,
        }
    }

    /// Convenience constructor for a percentage rule.
    pub fn percentage(id: impl Into<String>, name: impl Into<String>, rate: Percent) -> Self {
        DiscountRule {
            id: id.into(),
            name: name.into(),
            value: DiscountValue::Percentage(rate),
            min_total: None,
            max_discount: None,
        }
    }

    /// Sets the minimum qualifying subtotal.
    pub fn with_min_total(mut self, min_total: Money) -> Self {
        self.min_total = Some(min_total);
        self
    }

    /// Sets the maximum discount cap.
    pub fn with_max_discount(mut self, max_discount: Money) -> Self {
        self.max_discount = Some(max_discount);
        self
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
