//! Visitors: the per-visitor record, lifecycle process, and arrival stream

pub mod generator;
pub mod process;
#[allow(clippy::module_inception)]
pub mod visitor;

pub use generator::{rate_multiplier, ArrivalGenerator};
pub use process::VisitorProcess;
pub use visitor::{Visitor, FATIGUE_LIMIT, SATISFACTION_EXIT_THRESHOLD};
