//! Core projection engines for household finance planning.
//!
//! Three independent simulators plus a goal-seek layer:
//!
//! - [`amortization`] walks a loan with an offset account across a fixed
//!   15-year monthly window.
//! - [`superannuation`] accumulates two people's super to their target ages
//!   and walks the combined retirement drawdown.
//! - [`sale`] assesses the capital-gains position of a property sale and
//!   depletes the net proceeds.
//! - [`optimization`] bisects amortization inputs for spend, income, and
//!   offset goals.
//!
//! Every entry point is a pure function over plain serde records: no I/O,
//! no global state, bounded loops. Input edits go through [`bounds`] so
//! values stay inside their supported ranges.

#![warn(clippy::all)]

// ============================================================================
// Engine modules
// ============================================================================

pub mod amortization;
pub mod bounds;
pub mod optimization;
pub mod sale;
pub mod superannuation;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod error;
pub mod model;
pub mod month;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use month::Month;
