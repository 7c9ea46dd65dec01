//! # Draft Operations
//!
//! One function per user mutation. Each operation validates, mutates the
//! draft under the lock (both recompute passes included), and returns a
//! fresh snapshot for rendering - or an [`ApiError`] with the draft left
//! in its prior valid state.
//!
//! ## Draft Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Draft Lifecycle                                    │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│  Items   │────►│  Ready   │────►│ Submitted│       │
//! │  │  Draft   │     │  Added   │     │ (partner)│     │ (payload)│       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   add_item          build_submission                   │
//! │                   update_quantity                                       │
//! │                   set_item_discount                                     │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_draft ─────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Catalog and discount lookups happen in the host *before* these calls;
//! operations receive ready-made snapshots, never identifiers to resolve.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::DraftState;
use merx_core::validation::coerce_quantity;
use merx_core::{
    CatalogSnapshot, DiscountRule, DocumentTotals, DraftSubmission, ItemableKind, LineItem,
};

/// Draft snapshot returned by every operation: items plus totals, ready
/// for the UI to render.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftResponse {
    pub items: Vec<LineItem>,
    pub totals: DocumentTotals,
}

impl From<&merx_core::DraftDocument> for DraftResponse {
    fn from(doc: &merx_core::DraftDocument) -> Self {
        DraftResponse {
            items: doc.items.clone(),
            totals: DocumentTotals::from(doc),
        }
    }
}

/// Gets the current draft contents.
pub fn get_draft(state: &DraftState) -> DraftResponse {
    debug!("get_draft");
    state.with_draft(|d| DraftResponse::from(d))
}

/// Adds a catalog entity to the draft.
///
/// The snapshot comes from the host's lookup collaborator; price and
/// availability freeze into the line item here.
pub fn add_item(
    state: &DraftState,
    kind: ItemableKind,
    snapshot: &CatalogSnapshot,
    quantity: i64,
) -> Result<DraftResponse, ApiError> {
    debug!(itemable_id = %snapshot.id, ?kind, quantity, "add_item");

    state.with_draft_mut(|d| {
        d.add_item(kind, snapshot, quantity)?;
        Ok(DraftResponse::from(&*d))
    })
}

/// Updates the committed quantity of a line item.
///
/// The raw value goes through `coerce_quantity` first: an emptied or
/// malformed input field commits as 1; a value above the product's stock
/// snapshot is rejected.
pub fn update_quantity(
    state: &DraftState,
    item_id: &str,
    raw_quantity: i64,
) -> Result<DraftResponse, ApiError> {
    let quantity = coerce_quantity(raw_quantity);
    debug!(item_id, raw_quantity, quantity, "update_quantity");

    state.with_draft_mut(|d| {
        d.update_quantity(item_id, quantity)?;
        Ok(DraftResponse::from(&*d))
    })
}

/// Updates the unit price of a line item.
pub fn update_unit_price(
    state: &DraftState,
    item_id: &str,
    cents: i64,
) -> Result<DraftResponse, ApiError> {
    debug!(item_id, cents, "update_unit_price");

    state.with_draft_mut(|d| {
        d.update_unit_price(item_id, cents)?;
        Ok(DraftResponse::from(&*d))
    })
}

/// Attaches a discount rule to a line item.
pub fn set_item_discount(
    state: &DraftState,
    item_id: &str,
    rule: DiscountRule,
) -> Result<DraftResponse, ApiError> {
    debug!(item_id, rule_id = %rule.id, "set_item_discount");

    state.with_draft_mut(|d| {
        d.set_item_discount(item_id, rule)?;
        Ok(DraftResponse::from(&*d))
    })
}

/// Detaches the discount rule from a line item.
pub fn clear_item_discount(state: &DraftState, item_id: &str) -> Result<DraftResponse, ApiError> {
    debug!(item_id, "clear_item_discount");

    state.with_draft_mut(|d| {
        d.clear_item_discount(item_id)?;
        Ok(DraftResponse::from(&*d))
    })
}

/// Removes a line item from the draft.
pub fn remove_item(state: &DraftState, item_id: &str) -> Result<DraftResponse, ApiError> {
    debug!(item_id, "remove_item");

    state.with_draft_mut(|d| {
        d.remove_item(item_id)?;
        Ok(DraftResponse::from(&*d))
    })
}

/// Attaches the document-level discount.
pub fn set_discount(state: &DraftState, rule: DiscountRule) -> DraftResponse {
    debug!(rule_id = %rule.id, "set_discount");

    state.with_draft_mut(|d| {
        d.set_discount(rule);
        DraftResponse::from(&*d)
    })
}

/// Detaches the document-level discount.
pub fn clear_discount(state: &DraftState) -> DraftResponse {
    debug!("clear_discount");

    state.with_draft_mut(|d| {
        d.clear_discount();
        DraftResponse::from(&*d)
    })
}

/// Sets the counterparty for the draft.
pub fn set_partner(state: &DraftState, partner_id: &str) -> DraftResponse {
    debug!(partner_id, "set_partner");

    state.with_draft_mut(|d| {
        d.set_partner(partner_id);
        DraftResponse::from(&*d)
    })
}

/// Sets the free-text note.
pub fn set_note(state: &DraftState, note: &str) -> DraftResponse {
    debug!("set_note");

    state.with_draft_mut(|d| {
        d.set_note(note);
        DraftResponse::from(&*d)
    })
}

/// Clears the draft.
///
/// ## When Used
/// - User cancels the form
/// - After the submission payload is handed off (new draft)
pub fn clear_draft(state: &DraftState) -> DraftResponse {
    debug!("clear_draft");

    state.with_draft_mut(|d| {
        d.clear();
        DraftResponse::from(&*d)
    })
}

/// Builds the normalized submission payload.
///
/// Read-only: the draft is untouched either way. The host hands the
/// payload to the creation API and then clears or drops the session.
pub fn build_submission(state: &DraftState) -> Result<DraftSubmission, ApiError> {
    let payload = state.with_draft(|d| DraftSubmission::from_draft(d))?;

    info!(
        kind = ?payload.kind,
        items = payload.items.len(),
        "submission payload built"
    );
    Ok(payload)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use merx_core::money::{Money, Percent};
    use merx_core::DocumentKind;

    fn product(id: &str, price_cents: i64, stock: i64) -> CatalogSnapshot {
        CatalogSnapshot {
            id: id.to_string(),
            name: format!("Product {}", id),
            unit_price_cents: price_cents,
            available_quantity: Some(stock),
            description: None,
        }
    }

    fn order_state() -> DraftState {
        DraftState::new(DocumentKind::Order)
    }

    #[test]
    fn get_draft_on_empty_session() {
        let state = order_state();
        let resp = get_draft(&state);
        assert!(resp.items.is_empty());
        assert_eq!(resp.totals.final_amount_cents, 0);
    }

    #[test]
    fn add_then_get_roundtrip() {
        let state = order_state();
        let resp = add_item(&state, ItemableKind::Product, &product("a", 999, 10), 2).unwrap();
        assert_eq!(resp.totals.quantity, 2);
        assert_eq!(resp.totals.subtotal_cents, 1998);

        let again = get_draft(&state);
        assert_eq!(again.totals.subtotal_cents, 1998);
    }

    #[test]
    fn update_quantity_coerces_committed_input() {
        let state = order_state();
        let resp = add_item(&state, ItemableKind::Product, &product("a", 1000, 10), 2).unwrap();
        let item_id = resp.items[0].id.clone();

        // An emptied field parses to 0; it commits as 1, not removal.
        let resp = update_quantity(&state, &item_id, 0).unwrap();
        assert_eq!(resp.items[0].quantity, 1);
        assert_eq!(resp.totals.quantity, 1);
    }

    #[test]
    fn stock_ceiling_rejection_keeps_prior_state() {
        let state = order_state();
        let resp = add_item(&state, ItemableKind::Product, &product("a", 1000, 3), 2).unwrap();
        let item_id = resp.items[0].id.clone();

        let err = update_quantity(&state, &item_id, 5).unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientStock);

        let resp = get_draft(&state);
        assert_eq!(resp.items[0].quantity, 2);
        assert_eq!(resp.totals.subtotal_cents, 2000);
    }

    #[test]
    fn duplicate_add_maps_to_code() {
        let state = order_state();
        add_item(&state, ItemableKind::Product, &product("a", 1000, 10), 1).unwrap();
        let err = add_item(&state, ItemableKind::Product, &product("a", 1000, 10), 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateItem);
    }

    #[test]
    fn discount_attach_detach_flow() {
        let state = order_state();
        let resp = add_item(&state, ItemableKind::Product, &product("a", 10_000, 10), 1).unwrap();
        let item_id = resp.items[0].id.clone();

        let rule = DiscountRule::percentage("d", "10%", Percent::from_bps(1000));
        let resp = set_item_discount(&state, &item_id, rule).unwrap();
        assert_eq!(resp.items[0].discount_amount_cents, 1000);
        assert_eq!(resp.totals.final_amount_cents, 9000);

        let resp = clear_item_discount(&state, &item_id).unwrap();
        assert_eq!(resp.items[0].discount_amount_cents, 0);
        assert_eq!(resp.totals.final_amount_cents, 10_000);
    }

    #[test]
    fn document_discount_on_net_total() {
        let state = order_state();
        add_item(&state, ItemableKind::Product, &product("a", 10_000, 10), 1).unwrap();

        let rule =
            DiscountRule::fixed("doc-d", "flat", Money::from_cents(2000));
        let resp = set_discount(&state, rule);
        assert_eq!(resp.totals.document_discount_cents, 2000);
        assert_eq!(resp.totals.final_amount_cents, 8000);

        let resp = clear_discount(&state);
        assert_eq!(resp.totals.final_amount_cents, 10_000);
    }

    #[test]
    fn submission_requires_partner() {
        let state = order_state();
        add_item(&state, ItemableKind::Product, &product("a", 1000, 10), 1).unwrap();

        let err = build_submission(&state).unwrap_err();
        assert_eq!(err.code, ErrorCode::IncompleteDraft);

        set_partner(&state, "partner-1");
        let payload = build_submission(&state).unwrap();
        assert_eq!(payload.partner_id, "partner-1");
        assert_eq!(payload.items.len(), 1);
    }

    #[test]
    fn clear_draft_resets_everything() {
        let state = order_state();
        add_item(&state, ItemableKind::Product, &product("a", 1000, 10), 1).unwrap();
        set_discount(
            &state,
            DiscountRule::percentage("d", "10%", Percent::from_bps(1000)),
        );

        let resp = clear_draft(&state);
        assert!(resp.items.is_empty());
        assert_eq!(resp.totals.final_amount_cents, 0);
    }
}
