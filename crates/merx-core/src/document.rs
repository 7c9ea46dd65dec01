//! # Draft Document
//!
//! The in-progress, unsaved Order/Purchase/Consignment being assembled.
//!
//! ## Mutation → Recompute Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Draft Document Operations                               │
//! │                                                                         │
//! │  UI Action               Operation                Recompute Path        │
//! │  ─────────               ─────────                ──────────────        │
//! │                                                                         │
//! │  Pick catalog entity ──► add_item() ────────────► item + document      │
//! │  Edit quantity ────────► update_quantity() ─────► item + document      │
//! │  Edit unit price ──────► update_unit_price() ───► item + document      │
//! │  Attach item promo ────► set_item_discount() ───► item + document      │
//! │  Detach item promo ────► clear_item_discount() ─► item + document      │
//! │  Click remove ─────────► remove_item() ─────────► document             │
//! │  Attach doc promo ─────► set_discount() ────────► document             │
//! │  Detach doc promo ─────► clear_discount() ──────► document             │
//! │                                                                         │
//! │  Every operation either completes both passes or rejects without       │
//! │  touching state; no intermediate inconsistent draft is observable.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Items are unique by `itemable_id` (re-adding is a rejected operation)
//! - `quantity` = Σ item quantities
//! - `net_subtotal` = max(Σ item net totals, 0)
//! - `final_amount` = max(net_subtotal − document discount, 0)
//! - Every derived field is a pure function of `items` and `discount`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::discount::resolve;
use crate::error::{CoreError, CoreResult};
use crate::item::LineItem;
use crate::money::Money;
use crate::types::{CatalogSnapshot, DiscountRule, DocumentKind, ItemableKind};
use crate::MAX_DRAFT_ITEMS;

/// An in-progress draft document.
///
/// Exclusively owned by the form session that created it; discarded on
/// submit or cancel. Holds no hidden state: the derived totals are always
/// recomputable from `items` and `discount` alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DraftDocument {
    /// Draft identifier (UUID) - purely a session handle, never persisted.
    pub id: String,

    /// Order, Purchase, or Consignment. Pricing is identical across kinds.
    pub kind: DocumentKind,

    /// Line items, in insertion order (display order; not significant to
    /// totals).
    pub items: Vec<LineItem>,

    /// Optional document-level discount, applied on top of the net line
    /// total.
    pub discount: Option<DiscountRule>,

    /// Counterparty (customer/supplier/consignor). Required at submission.
    pub partner_id: Option<String>,

    /// Free-text note forwarded on submission.
    pub note: Option<String>,

    /// Derived: sum of item quantities.
    pub quantity: i64,

    /// Derived: sum of item subtotals, before any discount.
    pub subtotal_cents: i64,

    /// Derived: item discounts plus the eligible document discount.
    pub discount_amount_cents: i64,

    /// Derived: the amount the document-level rule contributed (part of
    /// `discount_amount_cents`; kept separate for the totals panel).
    pub document_discount_cents: i64,

    /// Derived: max(net subtotal − document discount, 0). What the UI
    /// shows as the total; the server recomputes it on submission.
    pub final_amount_cents: i64,

    /// When the draft was started.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl DraftDocument {
    /// Creates a new empty draft of the given kind.
    pub fn new(kind: DocumentKind) -> Self {
        DraftDocument {
            id: Uuid::new_v4().to_string(),
            kind,
            items: Vec::new(),
            discount: None,
            partner_id: None,
            note: None,
            quantity: 0,
            subtotal_cents: 0,
            discount_amount_cents: 0,
            document_discount_cents: 0,
            final_amount_cents: 0,
            created_at: Utc::now(),
        }
    }

    // =========================================================================
    // Mutation Operations
    // =========================================================================

    /// Adds a catalog entity as a new line item.
    ///
    /// ## Behavior
    /// - Entity already present: rejected with `DuplicateItem` (the form
    ///   edits the existing line instead of merging quantities)
    /// - Draft at capacity: rejected with `DraftTooLarge`
    /// - Quantity beyond product stock: rejected with `InsufficientStock`
    ///
    /// Returns the id of the new line item.
    pub fn add_item(
        &mut self,
        kind: ItemableKind,
        snapshot: &CatalogSnapshot,
        quantity: i64,
    ) -> CoreResult<String> {
        if let Some(existing) = self.items.iter().find(|i| i.itemable_id == snapshot.id) {
            return Err(CoreError::DuplicateItem {
                itemable_id: snapshot.id.clone(),
                name: existing.name.clone(),
            });
        }

        if self.items.len() >= MAX_DRAFT_ITEMS {
            return Err(CoreError::DraftTooLarge {
                max: MAX_DRAFT_ITEMS,
            });
        }

        let item = LineItem::from_snapshot(kind, snapshot, quantity)?;
        let item_id = item.id.clone();
        self.items.push(item);
        self.recompute();
        Ok(item_id)
    }

    /// Updates a line item's quantity.
    ///
    /// The value must be a committed (coerced) quantity; 0 is out of range
    /// here, removal is only ever explicit via [`remove_item`].
    ///
    /// [`remove_item`]: DraftDocument::remove_item
    pub fn update_quantity(&mut self, item_id: &str, quantity: i64) -> CoreResult<()> {
        let item = self.find_item_mut(item_id)?;
        item.set_quantity(quantity)?;
        self.recompute();
        Ok(())
    }

    /// Updates a line item's unit price.
    pub fn update_unit_price(&mut self, item_id: &str, cents: i64) -> CoreResult<()> {
        let item = self.find_item_mut(item_id)?;
        item.set_unit_price_cents(cents)?;
        self.recompute();
        Ok(())
    }

    /// Attaches (or replaces) a discount rule on a line item.
    pub fn set_item_discount(&mut self, item_id: &str, rule: DiscountRule) -> CoreResult<()> {
        let item = self.find_item_mut(item_id)?;
        item.set_discount(rule);
        self.recompute();
        Ok(())
    }

    /// Detaches the discount rule from a line item.
    pub fn clear_item_discount(&mut self, item_id: &str) -> CoreResult<()> {
        let item = self.find_item_mut(item_id)?;
        item.clear_discount();
        self.recompute();
        Ok(())
    }

    /// Removes a line item from the draft.
    pub fn remove_item(&mut self, item_id: &str) -> CoreResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.id != item_id);

        if self.items.len() == initial_len {
            return Err(CoreError::ItemNotFound(item_id.to_string()));
        }
        self.recompute();
        Ok(())
    }

    /// Attaches (or replaces) the document-level discount.
    pub fn set_discount(&mut self, rule: DiscountRule) {
        self.discount = Some(rule);
        self.recompute();
    }

    /// Detaches the document-level discount.
    pub fn clear_discount(&mut self) {
        self.discount = None;
        self.recompute();
    }

    /// Sets the counterparty.
    pub fn set_partner(&mut self, partner_id: impl Into<String>) {
        self.partner_id = Some(partner_id.into());
    }

    /// Sets the free-text note.
    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = Some(note.into());
    }

    /// Clears all items and the document discount.
    ///
    /// ## When Used
    /// - User cancels the form
    /// - After a submission payload is handed off (new draft)
    pub fn clear(&mut self) {
        self.items.clear();
        self.discount = None;
        self.created_at = Utc::now();
        self.recompute();
    }

    // =========================================================================
    // Document Aggregator
    // =========================================================================

    /// Recomputes all document-level derived fields from the item set and
    /// the document discount.
    ///
    /// Idempotent and total: the same inputs always produce the same
    /// derived state, and nothing here can fail or go negative.
    pub fn recompute(&mut self) {
        self.quantity = self.items.iter().map(|i| i.quantity).sum();
        self.subtotal_cents = self.items.iter().map(|i| i.subtotal_cents).sum();

        // Item net totals are individually floored, so the sum is >= 0.
        let net_subtotal: Money = self.items.iter().map(|i| i.net_total()).sum();

        let document_discount = resolve(net_subtotal, self.discount.as_ref()).amount;

        let item_discounts: i64 = self.items.iter().map(|i| i.discount_amount_cents).sum();
        self.document_discount_cents = document_discount.cents();
        self.discount_amount_cents = item_discounts + document_discount.cents();
        self.final_amount_cents = net_subtotal.sub_floor_zero(document_discount).cents();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Looks up a line item by id.
    pub fn find_item(&self, item_id: &str) -> CoreResult<&LineItem> {
        self.items
            .iter()
            .find(|i| i.id == item_id)
            .ok_or_else(|| CoreError::ItemNotFound(item_id.to_string()))
    }

    fn find_item_mut(&mut self, item_id: &str) -> CoreResult<&mut LineItem> {
        self.items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| CoreError::ItemNotFound(item_id.to_string()))
    }

    /// Sum of item subtotals minus item discounts, floored at zero.
    #[inline]
    pub fn net_subtotal(&self) -> Money {
        self.items.iter().map(|i| i.net_total()).sum()
    }

    /// Returns the final amount as Money.
    #[inline]
    pub fn final_amount(&self) -> Money {
        Money::from_cents(self.final_amount_cents)
    }

    /// Number of line items.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Checks if the draft has no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for DraftDocument {
    fn default() -> Self {
        DraftDocument::new(DocumentKind::default())
    }
}

// =============================================================================
// Document Totals
// =============================================================================

/// Totals summary for the UI totals panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTotals {
    pub item_count: usize,
    pub quantity: i64,
    pub subtotal_cents: i64,
    pub discount_amount_cents: i64,
    pub document_discount_cents: i64,
    pub final_amount_cents: i64,
}

impl From<&DraftDocument> for DocumentTotals {
    fn from(doc: &DraftDocument) -> Self {
        DocumentTotals {
            item_count: doc.item_count(),
            quantity: doc.quantity,
            subtotal_cents: doc.subtotal_cents,
            discount_amount_cents: doc.discount_amount_cents,
            document_discount_cents: doc.document_discount_cents,
            final_amount_cents: doc.final_amount_cents,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
