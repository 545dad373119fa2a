//! High-level SDK for the Scorebook Ledger (SBK).
//!
//! [`Scorebook`] wires the subsystems together: the roster registry, the
//! format rules, the canonical innings ledger, and the multi-scorer
//! reconciliation engine. Presentation and transport layers talk to this
//! facade and nothing below it.

pub mod error;
pub mod report;
pub mod scorebook;

pub use error::{ScorebookError, ScorebookResult};
pub use report::{DeliveryInput, InningsLine, ScorebookSummary};
pub use scorebook::Scorebook;
