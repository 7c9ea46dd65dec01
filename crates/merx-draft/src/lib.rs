//! # merx-draft: Draft Session Shell
//!
//! The thin state-management layer between a host UI and the pure pricing
//! engine in `merx-core`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Host UI (out of scope)                             │
//! │     item picker · quantity inputs · discount picker · totals panel     │
//! └─────────────────────────────┬───────────────────────────────────────────┘
//! │                             │ one call per user mutation               │
//! ┌─────────────────────────────▼───────────────────────────────────────────┐
//! │                  ★ merx-draft (THIS CRATE) ★                            │
//! │                                                                         │
//! │   ┌───────────┐      ┌───────────┐      ┌───────────┐                  │
//! │   │   state   │      │    ops    │      │   error   │                  │
//! │   │DraftState │      │ add_item  │      │ ApiError  │                  │
//! │   │Arc<Mutex> │      │ update_.. │      │ ErrorCode │                  │
//! │   └───────────┘      └───────────┘      └───────────┘                  │
//! └─────────────────────────────┬───────────────────────────────────────────┘
//! │                             │                                           │
//! ┌─────────────────────────────▼───────────────────────────────────────────┐
//! │                   merx-core (pure engine)                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Capability/permission checks belong to the host: it decides whether the
//! current user may mutate the draft *before* calling into this crate. The
//! engine itself never consults ambient auth state.

pub mod error;
pub mod ops;
pub mod state;

pub use error::{ApiError, ErrorCode};
pub use ops::DraftResponse;
pub use state::DraftState;
