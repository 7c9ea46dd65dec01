//! # Submission Payload
//!
//! The normalized payload handed to the external creation API when the
//! user submits a draft.
//!
//! ## The Client/Server Asymmetry
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Client (this engine)            Server (creation API, out of scope)   │
//! │  ────────────────────            ──────────────────────────────────    │
//! │  computes subtotal,              recomputes everything from the        │
//! │  discounts, final amount         normalized rows — SOURCE OF TRUTH     │
//! │  → drives the UI only                                                   │
//! │                                                                         │
//! │  The payload deliberately carries NO derived totals. A client that     │
//! │  sent them would be trusted with monetary values it derived itself.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Discounts travel as rule ids only; the server re-fetches the rule and
//! re-runs eligibility against its own recomputed subtotals.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::document::DraftDocument;
use crate::error::{CoreError, CoreResult};
use crate::types::{DocumentKind, ItemableKind};

/// One normalized line item row for the creation API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionItem {
    pub itemable_id: String,
    pub itemable_kind: ItemableKind,
    pub quantity: i64,
    pub unit_price_cents: i64,
    /// Attached rule id, if any. The amount is NOT sent.
    pub discount_id: Option<String>,
}

/// The full submission payload for a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DraftSubmission {
    pub kind: DocumentKind,
    pub partner_id: String,
    pub note: Option<String>,
    /// Document-level rule id, if any.
    pub discount_id: Option<String>,
    pub items: Vec<SubmissionItem>,
}

impl DraftSubmission {
    /// Builds the submission payload from a draft.
    ///
    /// ## Pre-submit checks
    /// - The draft must have at least one line item
    /// - A partner must be selected
    ///
    /// Both reject without touching the draft; the form stays open with
    /// its state intact.
    pub fn from_draft(doc: &DraftDocument) -> CoreResult<Self> {
        if doc.is_empty() {
            return Err(CoreError::EmptyDraft);
        }

        let partner_id = doc
            .partner_id
            .clone()
            .filter(|p| !p.trim().is_empty())
            .ok_or(CoreError::MissingPartner)?;

        let items = doc
            .items
            .iter()
            .map(|item| SubmissionItem {
                itemable_id: item.itemable_id.clone(),
                itemable_kind: item.itemable_kind,
                quantity: item.quantity,
                unit_price_cents: item.unit_price_cents,
                discount_id: item.discount.as_ref().map(|d| d.id.clone()),
            })
            .collect();

        Ok(DraftSubmission {
            kind: doc.kind,
            partner_id,
            note: doc.note.clone(),
            discount_id: doc.discount.as_ref().map(|d| d.id.clone()),
            items,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Percent;
    use crate::types::{CatalogSnapshot, DiscountRule};

    fn product(id: &str, price_cents: i64) -> CatalogSnapshot {
        CatalogSnapshot {
            id: id.to_string(),
            name: format!("Product {}", id),
            unit_price_cents: price_cents,
            available_quantity: Some(10),
            description: None,
        }
    }

    fn draft_with_item() -> (DraftDocument, String) {
        let mut doc = DraftDocument::new(DocumentKind::Order);
        let item_id = doc
            .add_item(ItemableKind::Product, &product("a", 10_000), 2)
            .unwrap();
        doc.set_partner("partner-1");
        (doc, item_id)
    }

    #[test]
    fn payload_carries_normalized_rows() {
        let (mut doc, item_id) = draft_with_item();
        doc.set_item_discount(
            &item_id,
            DiscountRule::percentage("rule-7", "10%", Percent::from_bps(1000)),
        )
        .unwrap();
        doc.set_note("deliver friday");

        let payload = DraftSubmission::from_draft(&doc).unwrap();

        assert_eq!(payload.kind, DocumentKind::Order);
        assert_eq!(payload.partner_id, "partner-1");
        assert_eq!(payload.note.as_deref(), Some("deliver friday"));
        assert_eq!(payload.items.len(), 1);

        let row = &payload.items[0];
        assert_eq!(row.itemable_id, "a");
        assert_eq!(row.quantity, 2);
        assert_eq!(row.unit_price_cents, 10_000);
        assert_eq!(row.discount_id.as_deref(), Some("rule-7"));
    }

    #[test]
    fn payload_has_no_derived_totals() {
        let (doc, _) = draft_with_item();
        let payload = DraftSubmission::from_draft(&doc).unwrap();

        // The serialized payload must not leak client-derived amounts.
        let json = serde_json::to_value(&payload).unwrap();
        let text = json.to_string();
        assert!(!text.contains("subtotal"));
        assert!(!text.contains("discountAmount"));
        assert!(!text.contains("finalAmount"));
    }

    #[test]
    fn empty_draft_is_rejected() {
        let mut doc = DraftDocument::new(DocumentKind::Order);
        doc.set_partner("partner-1");
        assert!(matches!(
            DraftSubmission::from_draft(&doc).unwrap_err(),
            CoreError::EmptyDraft
        ));
    }

    #[test]
    fn missing_partner_is_rejected() {
        let (mut doc, _) = draft_with_item();
        doc.partner_id = None;
        assert!(matches!(
            DraftSubmission::from_draft(&doc).unwrap_err(),
            CoreError::MissingPartner
        ));

        doc.partner_id = Some("   ".to_string());
        assert!(matches!(
            DraftSubmission::from_draft(&doc).unwrap_err(),
            CoreError::MissingPartner
        ));
    }

    #[test]
    fn document_discount_travels_as_id_only() {
        let (mut doc, _) = draft_with_item();
        doc.set_discount(DiscountRule::percentage(
            "doc-rule",
            "10%",
            Percent::from_bps(1000),
        ));

        let payload = DraftSubmission::from_draft(&doc).unwrap();
        assert_eq!(payload.discount_id.as_deref(), Some("doc-rule"));
    }
}
