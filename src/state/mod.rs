//! Observed State Module
//!
//! Tracks the most recently observed election record together with when it
//! was observed, so electors can reason about staleness.

mod observed;

pub use observed::ObservedState;
