//! Collected simulation output: visit records, journey log, statistics

pub mod collector;

pub use collector::{DataCollector, JourneyEntry, VisitRecord};
