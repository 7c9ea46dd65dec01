//! # Discount Resolver
//!
//! The single place where a discount rule is turned into an amount.
//!
//! ## Resolution Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     resolve(subtotal, rule)                             │
//! │                                                                         │
//! │  rule absent? ──────────────────────────► { amount: 0, eligible: true } │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  min_total set AND subtotal < min_total?                                │
//! │       │ yes ───────────────────────────► { amount: 0, eligible: false } │
//! │       ▼ no                                                              │
//! │  raw amount:  Fixed(v)        → v                                       │
//! │               Percentage(p)   → subtotal × p (rounded)                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  cap:   max_discount set? → min(raw, max_discount)                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  clamp to [0, subtotal] ───────────────► { amount, eligible: true }     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Eligibility Rule
//! The minimum-qualifying check applies whenever `min_total` is set,
//! regardless of whether `max_discount` is also set. (Historical rule sets
//! disagreed on whether a cap-less rule skipped the minimum check; that was
//! never a deliberate behavior, and this engine resolves it one way for
//! every call site.)

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{DiscountRule, DiscountValue};

/// The outcome of resolving a rule against a subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    /// The discount amount to subtract. Always in `[0, subtotal]`.
    pub amount: Money,

    /// Whether the rule's qualifying condition was satisfied.
    ///
    /// An absent rule counts as eligible (there was nothing to fail);
    /// an ineligible rule contributes a zero amount but leaves the
    /// subtotal itself untouched.
    pub eligible: bool,
}

impl Resolution {
    /// The no-rule / no-discount resolution.
    pub const NONE: Resolution = Resolution {
        amount: Money::zero(),
        eligible: true,
    };
}

/// Resolves the applicable discount amount for a subtotal.
///
/// Total over its input domain: never panics, never returns a negative
/// amount, never returns more than `subtotal`.
///
/// ## Example
/// ```rust
/// use merx_core::discount::resolve;
/// use merx_core::money::{Money, Percent};
/// use merx_core::types::DiscountRule;
///
/// let rule = DiscountRule::percentage("d", "10% off", Percent::from_bps(1000))
///     .with_max_discount(Money::from_cents(5000));
///
/// let r = resolve(Money::from_cents(100_000), Some(&rule));
/// assert!(r.eligible);
/// assert_eq!(r.amount.cents(), 5000); // capped
/// ```
pub fn resolve(subtotal: Money, rule: Option<&DiscountRule>) -> Resolution {
    let Some(rule) = rule else {
        return Resolution::NONE;
    };

    // Minimum qualifying subtotal. Applies whenever set; see module docs.
    if let Some(min_total) = rule.min_total {
        if subtotal < min_total {
            return Resolution {
                amount: Money::zero(),
                eligible: false,
            };
        }
    }

    let raw = match rule.value {
        DiscountValue::Fixed(amount) => amount,
        DiscountValue::Percentage(rate) => subtotal.percentage_of(rate),
    };

    let capped = match rule.max_discount {
        Some(cap) => raw.min(cap),
        None => raw,
    };

    Resolution {
        amount: capped.clamp_to(subtotal),
        eligible: true,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
