//! Application layer: the three pipeline stages and the orchestrator that runs
//! them in order.
//!
//! Fetching is the only stage that touches I/O. Annotation and settlement are
//! pure functions over snapshots, which keeps them trivially testable.

pub mod annotator;
pub mod fetcher;
pub mod pipeline;
pub mod settlement;
