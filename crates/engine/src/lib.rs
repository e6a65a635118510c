//! `vansplit-engine`: email validation join/classify engine.
//!
//! Pure engine crate: receives pre-loaded tables, returns categorized partitions.
//! No CLI or IO dependencies.

pub mod classify;
pub mod engine;
pub mod error;
pub mod hash;
pub mod index;
pub mod model;
pub mod report;
pub mod status;

pub use engine::run;
pub use error::SplitError;
pub use model::{Category, JoinedRecord, OutputRow, Partitions, SplitOutcome, SplitResult, Table};
pub use report::{Download, RunReport};
