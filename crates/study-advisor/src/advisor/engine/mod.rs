mod rules;

use std::cmp::Reverse;

use super::domain::{Recommendation, StudentState};

/// Stateless, single-use inference engine.
///
/// One evaluation pass declares the state fact, runs every rule condition
/// against it, and ranks whatever fired. There is no working-memory loop:
/// rules never consume other rules' output, so one pass is complete. The
/// engine holds no state across runs; concurrent callers simply construct
/// independent instances.
#[derive(Debug, Default)]
pub struct InferenceEngine;

impl InferenceEngine {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate every rule against the state and return the fired
    /// recommendations sorted by (priority ascending, confidence descending).
    /// The sort is stable, so ties keep rule declaration order. An empty list
    /// is a valid outcome meaning no rule matched (balanced state).
    pub fn evaluate(&self, state: &StudentState) -> Vec<Recommendation> {
        let mut fired: Vec<Recommendation> = rules::RULES
            .iter()
            .filter_map(|rule| rule(state))
            .collect();

        fired.sort_by_key(|rec| (rec.priority, Reverse(rec.confidence)));
        fired
    }
}
