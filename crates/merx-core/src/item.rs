//! # Line Item
//!
//! One purchasable unit inside a draft document.
//!
//! ## Snapshot & Recompute
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Line Item Lifecycle                                  │
//! │                                                                         │
//! │  CatalogSnapshot ──► LineItem::from_snapshot  (price/stock frozen)     │
//! │                           │                                             │
//! │          set_quantity ────┤                                             │
//! │          set_unit_price ──┼──► recompute()                              │
//! │          set_discount ────┤      subtotal = qty × unit_price            │
//! │          clear_discount ──┘      discount = resolve(subtotal, rule)     │
//! │                           │                                             │
//! │                           ▼                                             │
//! │          document aggregator re-runs immediately after                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The derived fields (`subtotal_cents`, `discount_amount_cents`) are stored
//! for serialization to the UI but are never hand-edited: every mutation
//! path funnels through [`LineItem::recompute`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::discount::resolve;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CatalogSnapshot, DiscountRule, ItemableKind};
use crate::validation::{validate_quantity, validate_unit_price_cents};

/// A line item in a draft document.
///
/// Uses the snapshot pattern to freeze catalog data at add-time: the name,
/// unit price, and available quantity displayed in the draft stay stable
/// even if the catalog changes underneath an open form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Line item identifier within the draft (UUID).
    pub id: String,

    /// Kind of catalog entity this line points at.
    pub itemable_kind: ItemableKind,

    /// Catalog entity identifier.
    pub itemable_id: String,

    /// Name at add-time (frozen, display only).
    pub name: String,

    /// Quantity in the draft. Always >= 1.
    pub quantity: i64,

    /// Unit price in cents at add-time (frozen, but editable afterward).
    pub unit_price_cents: i64,

    /// Available stock at add-time (frozen). `Some` only for products;
    /// the quantity ceiling for the lifetime of this line.
    pub available_quantity: Option<i64>,

    /// Optional attached discount rule.
    pub discount: Option<DiscountRule>,

    /// Derived: quantity × unit price. Recomputed, never hand-edited.
    pub subtotal_cents: i64,

    /// Derived via the resolver. Always in `[0, subtotal_cents]`.
    pub discount_amount_cents: i64,

    /// Derived: whether the attached rule's qualifying condition held on
    /// the last recompute. `true` when no rule is attached.
    pub discount_eligible: bool,

    /// When this item was added to the draft.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Creates a line item from a catalog snapshot.
    ///
    /// ## Price Freezing
    /// The unit price and available quantity are captured at this moment.
    /// If the catalog changes afterward, this line retains its snapshot.
    ///
    /// The quantity must already be validated by the caller; for products
    /// the stock ceiling is checked here against the snapshot.
    pub fn from_snapshot(
        kind: ItemableKind,
        snapshot: &CatalogSnapshot,
        quantity: i64,
    ) -> CoreResult<Self> {
        validate_quantity(quantity)?;
        validate_unit_price_cents(snapshot.unit_price_cents)?;
        check_stock(&snapshot.name, snapshot.available_quantity, quantity)?;

        let mut item = LineItem {
            id: Uuid::new_v4().to_string(),
            itemable_kind: kind,
            itemable_id: snapshot.id.clone(),
            name: snapshot.name.clone(),
            quantity,
            unit_price_cents: snapshot.unit_price_cents,
            available_quantity: snapshot.available_quantity,
            discount: None,
            subtotal_cents: 0,
            discount_amount_cents: 0,
            discount_eligible: true,
            added_at: Utc::now(),
        };
        item.recompute();
        Ok(item)
    }

    /// Recomputes the derived fields from quantity, unit price, and the
    /// attached discount.
    ///
    /// Idempotent: running it twice on the same inputs yields the same
    /// derived state.
    pub fn recompute(&mut self) {
        let subtotal = self.unit_price().multiply_quantity(self.quantity);
        let resolution = resolve(subtotal, self.discount.as_ref());

        self.subtotal_cents = subtotal.cents();
        self.discount_amount_cents = resolution.amount.cents();
        self.discount_eligible = resolution.eligible;
    }

    /// Sets a new quantity, enforcing the range and the stock ceiling.
    ///
    /// The committed value must already be through `coerce_quantity`; a
    /// quantity above the add-time stock snapshot is a rejected operation,
    /// never a silent clamp.
    pub fn set_quantity(&mut self, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;
        check_stock(&self.name, self.available_quantity, quantity)?;

        self.quantity = quantity;
        self.recompute();
        Ok(())
    }

    /// Sets a new unit price.
    pub fn set_unit_price_cents(&mut self, cents: i64) -> CoreResult<()> {
        validate_unit_price_cents(cents)?;

        self.unit_price_cents = cents;
        self.recompute();
        Ok(())
    }

    /// Attaches (or replaces) the discount rule.
    pub fn set_discount(&mut self, rule: DiscountRule) {
        self.discount = Some(rule);
        self.recompute();
    }

    /// Detaches the discount rule, forcing the discount amount to zero.
    pub fn clear_discount(&mut self) {
        self.discount = None;
        self.recompute();
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }

    /// Returns the discount amount as Money.
    #[inline]
    pub fn discount_amount(&self) -> Money {
        Money::from_cents(self.discount_amount_cents)
    }

    /// Subtotal minus item discount (this line's contribution to the
    /// document's net subtotal).
    #[inline]
    pub fn net_total(&self) -> Money {
        self.subtotal().sub_floor_zero(self.discount_amount())
    }
}

/// Stock ceiling check against the add-time snapshot.
///
/// `None` means the entity is not stock-tracked (services, courses) and
/// any valid quantity passes.
fn check_stock(name: &str, available: Option<i64>, requested: i64) -> CoreResult<()> {
    if let Some(available) = available {
        if requested > available {
            return Err(CoreError::InsufficientStock {
                name: name.to_string(),
                available,
                requested,
            });
        }
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Percent;

    fn product_snapshot(id: &str, price_cents: i64, stock: i64) -> CatalogSnapshot {
        CatalogSnapshot {
            id: id.to_string(),
            name: format!("Product {}", id),
            unit_price_cents: price_cents,
            available_quantity: Some(stock),
            description: None,
        }
    }

    fn service_snapshot(id: &str, price_cents: i64) -> CatalogSnapshot {
        CatalogSnapshot {
            id: id.to_string(),
            name: format!("Service {}", id),
            unit_price_cents: price_cents,
            available_quantity: None,
            description: None,
        }
    }

    #[test]
    fn from_snapshot_freezes_and_computes() {
        let snap = product_snapshot("1", 10_000, 5);
        let item = LineItem::from_snapshot(ItemableKind::Product, &snap, 2).unwrap();

        assert_eq!(item.unit_price_cents, 10_000);
        assert_eq!(item.available_quantity, Some(5));
        assert_eq!(item.subtotal_cents, 20_000);
        assert_eq!(item.discount_amount_cents, 0);
        assert!(item.discount_eligible);
    }

    #[test]
    fn add_beyond_stock_is_rejected() {
        let snap = product_snapshot("1", 10_000, 3);
        let err = LineItem::from_snapshot(ItemableKind::Product, &snap, 5).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientStock {
                available: 3,
                requested: 5,
                ..
            }
        ));
    }

    #[test]
    fn services_have_no_stock_ceiling() {
        let snap = service_snapshot("s1", 5000);
        let item = LineItem::from_snapshot(ItemableKind::Service, &snap, 500).unwrap();
        assert_eq!(item.subtotal_cents, 2_500_000);
    }

    #[test]
    fn set_quantity_recomputes() {
        let snap = product_snapshot("1", 10_000, 10);
        let mut item = LineItem::from_snapshot(ItemableKind::Product, &snap, 1).unwrap();

        item.set_quantity(3).unwrap();
        assert_eq!(item.subtotal_cents, 30_000);
    }

    #[test]
    fn set_quantity_beyond_snapshot_stock_rejected_and_state_kept() {
        let snap = product_snapshot("1", 10_000, 3);
        let mut item = LineItem::from_snapshot(ItemableKind::Product, &snap, 2).unwrap();

        let err = item.set_quantity(4).unwrap_err();
        assert!(matches!(err, CoreError::InsufficientStock { .. }));
        // prior valid state intact
        assert_eq!(item.quantity, 2);
        assert_eq!(item.subtotal_cents, 20_000);
    }

    #[test]
    fn set_unit_price_recomputes_discount() {
        let snap = service_snapshot("s1", 10_000);
        let mut item = LineItem::from_snapshot(ItemableKind::Service, &snap, 1).unwrap();
        item.set_discount(DiscountRule::percentage(
            "d",
            "10%",
            Percent::from_bps(1000),
        ));
        assert_eq!(item.discount_amount_cents, 1000);

        item.set_unit_price_cents(20_000).unwrap();
        assert_eq!(item.subtotal_cents, 20_000);
        assert_eq!(item.discount_amount_cents, 2000);
    }

    #[test]
    fn negative_unit_price_rejected() {
        let snap = service_snapshot("s1", 10_000);
        let mut item = LineItem::from_snapshot(ItemableKind::Service, &snap, 1).unwrap();
        assert!(item.set_unit_price_cents(-1).is_err());
        assert_eq!(item.unit_price_cents, 10_000);
    }

    #[test]
    fn detach_forces_zero_discount() {
        let snap = service_snapshot("s1", 10_000);
        let mut item = LineItem::from_snapshot(ItemableKind::Service, &snap, 1).unwrap();
        item.set_discount(DiscountRule::fixed("d", "flat", Money::from_cents(500)));
        assert_eq!(item.discount_amount_cents, 500);

        item.clear_discount();
        assert_eq!(item.discount_amount_cents, 0);
        assert!(item.discount_eligible);
    }

    #[test]
    fn ineligible_discount_contributes_zero_but_keeps_subtotal() {
        let snap = service_snapshot("s1", 50_000);
        let mut item = LineItem::from_snapshot(ItemableKind::Service, &snap, 1).unwrap();
        item.set_discount(
            DiscountRule::percentage("d", "10%", Percent::from_bps(1000))
                .with_min_total(Money::from_cents(100_000)),
        );

        assert!(!item.discount_eligible);
        assert_eq!(item.discount_amount_cents, 0);
        assert_eq!(item.subtotal_cents, 50_000);
    }

    #[test]
    fn recompute_is_idempotent() {
        let snap = product_snapshot("1", 10_000, 5);
        let mut item = LineItem::from_snapshot(ItemableKind::Product, &snap, 2).unwrap();
        item.set_discount(DiscountRule::percentage(
            "d",
            "10%",
            Percent::from_bps(1000),
        ));

        let once = item.clone();
        item.recompute();
        assert_eq!(item, once);
    }

    #[test]
    fn extreme_unit_price_saturates_without_panicking() {
        // A price is only validated non-negative; the aggregator must stay
        // total even for absurd values.
        let snap = service_snapshot("s1", i64::MAX / 2);
        let item = LineItem::from_snapshot(ItemableKind::Service, &snap, 3).unwrap();
        assert_eq!(item.subtotal_cents, i64::MAX);
        assert!(item.subtotal_cents >= 0);
        assert_eq!(item.discount_amount_cents, 0);
    }

    #[test]
    fn discount_never_exceeds_subtotal() {
        let snap = service_snapshot("s1", 15_000);
        let mut item = LineItem::from_snapshot(ItemableKind::Service, &snap, 1).unwrap();
        item.set_discount(DiscountRule::fixed("d", "big", Money::from_cents(20_000)));

        assert!(item.discount_amount_cents <= item.subtotal_cents);
        assert_eq!(item.net_total().cents(), 0);
    }
}
