//! Integration tests for the nestegg projection engines
//!
//! Tests are organized by topic:
//! - `amortization` - Fixed-window schedule mechanics, phases, refinance
//! - `superannuation` - Accumulation, contribution solve, drawdown
//! - `sale` - CGT assessment and proceeds depletion
//! - `optimization` - Goal-seek solvers over the amortization simulator

mod amortization;
