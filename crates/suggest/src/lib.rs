//! Suggestion engine for the veneer desk plugin.
//!
//! A pure function of the current settings snapshot: four independent
//! analyzer passes each emit zero or more canned suggestions, which are
//! concatenated and grouped by category and priority. A failing pass is
//! logged and skipped so one bad analyzer never blanks the whole report.

pub mod error;
pub mod passes;
pub mod report;
pub mod snapshot;

pub use error::{Result, SuggestError};
pub use passes::PassFn;
pub use report::{PriorityBuckets, SuggestionReport, filter};
pub use snapshot::SettingsSnapshot;

use tracing::warn;
use veneer_types::Suggestion;

use crate::passes::analyzer_passes;

/// Run every analyzer pass over the snapshot and group the results.
/// Deterministic: identical snapshots produce identical reports.
pub fn generate(snapshot: &SettingsSnapshot) -> SuggestionReport {
    SuggestionReport::new(run_passes(&analyzer_passes(), snapshot))
}

/// Run a set of passes in order. A failing pass is logged and skipped;
/// the surviving passes still contribute their suggestions.
pub fn run_passes(passes: &[(&str, PassFn)], snapshot: &SettingsSnapshot) -> Vec<Suggestion> {
    let mut suggestions: Vec<Suggestion> = Vec::new();

    for &(name, pass) in passes {
        match pass(snapshot) {
            Ok(mut items) => suggestions.append(&mut items),
            Err(e) => warn!(pass = name, error = %e, "analyzer pass failed, skipping"),
        }
    }

    suggestions
}
