//! Foundation types for the Scorebook Ledger (SBK).
//!
//! This crate provides the core identity, coordinate, and taxonomy types
//! used throughout the SBK system. Every other SBK crate depends on
//! `sbk-types`.
//!
//! # Key Types
//!
//! - [`ScorerId`] / [`PlayerId`] / [`TeamId`] — Stable string keys resolved
//!   through owning registries
//! - [`MatchId`] — UUID v7 match identifier
//! - [`BallCoordinate`] — (over, ball) pair identifying a delivery slot
//! - [`BallOutcome`] — What happened off the delivery
//! - [`WicketKind`] — How a batsman was dismissed
//! - [`PlayerRole`] — Role flags held as a set on a player
//! - [`Timestamp`] — Wall-clock milliseconds with total order

pub mod coordinate;
pub mod error;
pub mod ids;
pub mod outcome;
pub mod role;
pub mod temporal;

pub use coordinate::BallCoordinate;
pub use error::TypeError;
pub use ids::{MatchId, PlayerId, ScorerId, TeamId};
pub use outcome::{BallOutcome, WicketKind};
pub use role::PlayerRole;
pub use temporal::Timestamp;
