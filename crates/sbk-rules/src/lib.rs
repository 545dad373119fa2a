//! Match-format rules for the Scorebook Ledger (SBK).
//!
//! Format-specific behavior (over caps, innings counts, declaration) is
//! modeled as a capability interface: [`MatchRules`] is selected once at
//! match creation and held by the scorebook as a trait object. The scoring
//! core consults it after every recorded delivery and never switches on
//! the format anywhere else.

pub mod formats;
pub mod rules;

pub use formats::{FirstClassRules, OdiRules, T20Rules, TestRules};
pub use rules::{MatchFormat, MatchRules};

/// The rules implementation for a format.
pub fn rules_for(format: MatchFormat) -> Box<dyn MatchRules> {
    match format {
        MatchFormat::Odi => Box::new(OdiRules),
        MatchFormat::T20 => Box::new(T20Rules),
        MatchFormat::Test => Box::new(TestRules),
        MatchFormat::FirstClass => Box::new(FirstClassRules),
    }
}
