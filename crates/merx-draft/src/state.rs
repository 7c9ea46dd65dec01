//! # Draft State
//!
//! Owns the live draft document for one form session.
//!
//! ## Thread Safety
//! The draft is wrapped in `Arc<Mutex<T>>` because:
//! 1. Host frameworks may invoke operations from multiple threads
//! 2. Only one operation should modify the draft at a time
//! 3. Each operation completes both recompute passes before releasing
//!    the lock, so no intermediate inconsistent state is observable
//!
//! Within one session the flow is still effectively single-threaded and
//! synchronous: every mutation is handled to completion before the next
//! user input is processed.

use std::sync::{Arc, Mutex};

use merx_core::{DocumentKind, DraftDocument};

/// Host-managed draft state for one form session.
///
/// Created when the form opens, discarded on submit or cancel. One
/// `DraftState` per draft; documents are never shared across sessions.
///
/// ## Why Not RwLock?
/// Draft operations are quick and most of them modify state. A RwLock
/// would add complexity with minimal benefit.
#[derive(Debug)]
pub struct DraftState {
    draft: Arc<Mutex<DraftDocument>>,
}

impl DraftState {
    /// Creates a new empty draft session of the given kind.
    pub fn new(kind: DocumentKind) -> Self {
        DraftState {
            draft: Arc::new(Mutex::new(DraftDocument::new(kind))),
        }
    }

    /// Executes a function with read access to the draft.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = state.with_draft(|d| DocumentTotals::from(d));
    /// ```
    pub fn with_draft<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&DraftDocument) -> R,
    {
        let draft = self.draft.lock().expect("Draft mutex poisoned");
        f(&draft)
    }

    /// Executes a function with write access to the draft.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_draft_mut(|d| d.update_quantity(&item_id, 3))?;
    /// ```
    pub fn with_draft_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut DraftDocument) -> R,
    {
        let mut draft = self.draft.lock().expect("Draft mutex poisoned");
        f(&mut draft)
    }
}

impl Default for DraftState {
    fn default() -> Self {
        Self::new(DocumentKind::default())
    }
}
