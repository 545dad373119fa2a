use crate::rules::{MatchFormat, MatchRules};

/// 50 overs a side, one innings each.
pub struct OdiRules;

impl MatchRules for OdiRules {
    fn format(&self) -> MatchFormat {
        MatchFormat::Odi
    }

    fn max_overs(&self) -> Option<u32> {
        Some(50)
    }

    fn innings_per_side(&self) -> u8 {
        1
    }
}

/// 20 overs a side, one innings each.
pub struct T20Rules;

impl MatchRules for T20Rules {
    fn format(&self) -> MatchFormat {
        MatchFormat::T20
    }

    fn max_overs(&self) -> Option<u32> {
        Some(20)
    }

    fn innings_per_side(&self) -> u8 {
        1
    }
}

/// Uncapped overs, two innings a side; completion by all-out or
/// declaration only.
pub struct TestRules;

impl MatchRules for TestRules {
    fn format(&self) -> MatchFormat {
        MatchFormat::Test
    }

    fn max_overs(&self) -> Option<u32> {
        None
    }

    fn innings_per_side(&self) -> u8 {
        2
    }
}

/// Uncapped overs, two innings a side.
pub struct FirstClassRules;

impl MatchRules for FirstClassRules {
    fn format(&self) -> MatchFormat {
        MatchFormat::FirstClass
    }

    fn max_overs(&self) -> Option<u32> {
        None
    }

    fn innings_per_side(&self) -> u8 {
        2
    }
}
