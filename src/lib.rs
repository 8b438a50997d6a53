//! Theme Park Simulator
//!
//! A discrete-event simulation of a single day of theme-park operation:
//! visitors arrive stochastically, buy admission at the ticket office, tour
//! capacity-limited attractions while fatigue builds and satisfaction
//! drops, and leave. The whole day is logically single-threaded over
//! virtual time: "concurrent" visitors are interleaved suspendable tasks
//! sharing one clock, which makes every run byte-for-byte reproducible
//! under a fixed random seed.
//!
//! # Overview
//!
//! The core is a small discrete-event engine: a virtual clock with a
//! FIFO-tie-broken event queue, and capacity-limited resource pools that
//! serve acquire requests in strict arrival order (including an atomic
//! two-pool acquisition used to hold a ride slot and a staff member
//! together). Park behaviors (the ticket office's admission policy,
//! attraction maintenance cycles, the visitor lifecycle, and the
//! time-varying arrival stream) are expressed as explicit state machines
//! resumed by the scheduler.
//!
//! ## Quick Start
//!
//! ```rust
//! use parksim::{ParkConfig, ParkSimulation};
//!
//! let config = ParkConfig { seed: Some(42), ..ParkConfig::default() };
//! let mut sim = ParkSimulation::new(config)?;
//! sim.run();
//!
//! println!("{} visitors completed their day", sim.collector().visits().len());
//! # Ok::<(), parksim::SimulationError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: identifiers, enums, and configuration
//! - [`engine`]: virtual clock, event queue, and resource pools
//! - [`park`]: attractions and the ticket office
//! - [`visitor`]: the visitor record, lifecycle process, and arrival stream
//! - [`data`]: visit records and the statistics collector
//! - [`simulation`]: the driver, error handling, and logging setup
//! - [`analysis`]: console summaries of collected statistics

#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

pub mod analysis;
pub mod data;
pub mod engine;
pub mod park;
pub mod simulation;
pub mod types;
pub mod visitor;

// Core types and identifiers
pub use types::{
    AdmissionChannel,
    AttractionConfig,
    AttractionId,
    AttractionStatus,
    ConfigError,
    ConfigValidationError,
    // Configuration
    ParkConfig,
    PoolId,
    TaskId,
    // Enums
    VisitorCategory,
    // Identifiers
    VisitorId,
};

// Engine primitives
pub use engine::{Acquisition, PoolStore, ResourcePool, Scheduler, SimTime, Step};

// Park facilities
pub use park::{Attraction, AttractionStats, RideRecord, TicketOffice};

// Visitors
pub use visitor::{ArrivalGenerator, Visitor, VisitorProcess};

// Collected output
pub use data::{DataCollector, JourneyEntry, VisitRecord};

// Simulation driver
pub use simulation::{LoggingConfig, ParkSimulation, SimulationError, SimulationResult};
