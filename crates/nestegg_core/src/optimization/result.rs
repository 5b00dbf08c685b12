//! Result types shared by the goal-seek solvers.

use serde::{Deserialize, Serialize};

/// One probe of the simulator during a search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbeRecord {
    pub candidate: f64,
    pub feasible: bool,
}

/// Outcome of a bounded goal-seek.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Best feasible candidate found, or the fallback bound when no probe
    /// was feasible.
    pub value: f64,
    /// Whether any probed candidate satisfied the goal.
    pub feasible: bool,
    /// Number of bisection steps performed.
    pub iterations: u32,
    /// Every candidate probed, in order.
    pub probes: Vec<ProbeRecord>,
}
