//! Core types and identifiers for the park simulator
//!
//! Foundational data types used throughout the simulation:
//!
//! - **Identifiers**: monotonic integer identifiers for visitors, tasks,
//!   pools, and attractions
//! - **Enums**: visitor categories, admission channels, attraction status
//! - **Configuration**: park configuration with validation and CLI support

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
