//! Simulation orchestration and control
//!
//! The driver that composes engine and park and runs the day
//! ([`ParkSimulation`]), error handling ([`SimulationError`]), and logging
//! setup ([`LoggingConfig`]).

pub mod error;
pub mod logging;
pub mod orchestrator;

pub use error::{SimulationError, SimulationResult};
pub use logging::LoggingConfig;
pub use orchestrator::{ParkSimulation, Process, SimContext};
