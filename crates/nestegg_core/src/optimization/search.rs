//! Bounded bisection over a feasibility predicate.

use super::result::{ProbeRecord, SearchOutcome};

/// Fixed bisection depth for every goal-seek. Thirty halvings of a
/// 50,000-wide bracket resolve to a few hundred-thousandths.
pub const SEARCH_ITERATIONS: u32 = 30;

/// Which side of the feasibility boundary the solver wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchGoal {
    /// Largest feasible value; feasibility holds below the boundary.
    MaximizeFeasible,
    /// Smallest feasible value; feasibility holds above the boundary.
    MinimizeFeasible,
}

/// Bisect `[low, high]` for the boundary of `feasible`.
///
/// Tracks the best feasible candidate seen. When no probe is feasible the
/// returned value falls back to the bracket end the goal favours (low for
/// maximization, high for minimization) so callers always get a usable
/// number.
pub(crate) fn bisect(
    mut low: f64,
    mut high: f64,
    goal: SearchGoal,
    mut feasible: impl FnMut(f64) -> bool,
) -> SearchOutcome {
    let fallback = match goal {
        SearchGoal::MaximizeFeasible => low,
        SearchGoal::MinimizeFeasible => high,
    };
    let mut probes = Vec::with_capacity(SEARCH_ITERATIONS as usize);
    let mut best: Option<f64> = None;

    for _ in 0..SEARCH_ITERATIONS {
        let mid = f64::midpoint(low, high);
        let ok = feasible(mid);
        probes.push(ProbeRecord {
            candidate: mid,
            feasible: ok,
        });
        match goal {
            SearchGoal::MaximizeFeasible => {
                if ok {
                    best = Some(mid);
                    low = mid;
                } else {
                    high = mid;
                }
            }
            SearchGoal::MinimizeFeasible => {
                if ok {
                    best = Some(mid);
                    high = mid;
                } else {
                    low = mid;
                }
            }
        }
    }

    SearchOutcome {
        value: best.unwrap_or(fallback),
        feasible: best.is_some(),
        iterations: SEARCH_ITERATIONS,
        probes,
    }
}
