//! Error types and handling
//!
//! Two classes of failure exist: configuration errors, which are fatal at
//! construction and never produce a partial simulation, and task faults,
//! which are caught at the scheduler's task boundary, logged, and end only
//! the faulting task. There are no retries; this is a simulation, and a
//! failed admission is a recorded outcome, not an exception.

use crate::types::ConfigValidationError;
use thiserror::Error;

/// Errors that can occur while building or running a simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Configuration validation failed; no simulation object is produced
    #[error("Configuration validation failed: {0}")]
    ConfigurationError(#[from] ConfigValidationError),

    /// The arrival generator could not produce a gap
    #[error("Arrival generation failed: {0}")]
    ArrivalError(String),

    /// A task hit an unexpected state and was discarded
    #[error("Task fault: {0}")]
    TaskError(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// CSV export or parsing error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl SimulationError {
    /// Create an arrival generation error
    pub fn arrival_error(msg: impl Into<String>) -> Self {
        Self::ArrivalError(msg.into())
    }

    /// Create a task fault
    pub fn task_error(msg: impl Into<String>) -> Self {
        Self::TaskError(msg.into())
    }

    /// Whether the simulation can keep running past this error.
    /// Configuration problems are fatal; a fault inside a single task is
    /// contained at the task boundary.
    pub fn is_recoverable(&self) -> bool {
        match self {
            SimulationError::ConfigurationError(_) => false,
            SimulationError::ArrivalError(_) => true,
            SimulationError::TaskError(_) => true,
            SimulationError::IoError(_) => true,
            SimulationError::SerializationError(_) => true,
            SimulationError::CsvError(_) => true,
        }
    }
}

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;
