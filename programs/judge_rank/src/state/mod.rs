// =============================================================================
// JUDGE RANK STATE MODULE
// =============================================================================
//
// Architecture:
// - ScoringConfig: admin authority and id counters
// - Judge / Fighter: registry records, one PDA per id
// - Fight: match definition plus every judge's round-by-round scorecard
//
// Verdicts are never stored; see `crate::verdict`.
// =============================================================================

pub mod config;
pub mod fight;
pub mod registry;

pub use config::*;
pub use fight::*;
pub use registry::*;
