//! Canonical delivery ledger for the Scorebook Ledger (SBK).
//!
//! This crate is the single source of truth for what happened on the
//! field. It provides:
//! - [`Delivery`] — the canonical, authoritative record for one ball slot
//! - [`Over`] — an ordered group of deliveries bowled by one bowler
//! - [`Innings`] — the fold over the ledger deriving running totals,
//!   strike rotation, extras breakdown, all-out, and the current run rate
//!
//! The ledger has a single writer: the live-scoring path appends in play
//! order and nothing else mutates it. The concurrent multi-scorer intake
//! lives in `sbk-reconcile`, layered on top as an audit stream.

pub mod delivery;
pub mod error;
pub mod innings;
pub mod over;

pub use delivery::Delivery;
pub use error::LedgerError;
pub use innings::{ExtrasBreakdown, Innings};
pub use over::Over;
