//! Reconciliation engine for the Scorebook Ledger (SBK).
//!
//! Multiple independent scorers submit observations of the same delivery;
//! this crate detects disagreement, quarantines it in a [`Conflict`]
//! record, and applies a deterministic resolution policy before the
//! disputed coordinate's observation record is considered settled.
//!
//! The pipeline on every submission:
//! submit → append to intake → reduce to each scorer's latest entry →
//! pairwise agreement check → (on disagreement) conflict record, reported
//! back to the caller. Resolution — an authoritative override, optionally
//! guided by an advisory majority vote — is a separate, explicit step.
//!
//! Everything is in-memory and synchronous. Submissions for one coordinate
//! are linearizable; submissions for different coordinates run in
//! parallel.

pub mod conflict;
pub mod error;
pub mod observation;
pub mod resolve;
pub mod store;

pub use conflict::{Conflict, Resolution};
pub use error::ReconcileError;
pub use observation::{Observation, VoteSignature};
pub use store::{ConflictStats, ObservationStore, ScorerSummary, SubmitReceipt};
