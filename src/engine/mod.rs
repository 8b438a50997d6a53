//! Discrete-event engine: virtual clock, event queue, and resource pools
//!
//! The engine knows nothing about the park. It provides the two primitives
//! every behavior in the simulation suspends on: timers (through the
//! [`Scheduler`]) and capacity-limited FIFO resource pools (through the
//! [`PoolStore`]). Everything else runs to completion between those
//! suspension points.

pub mod resource;
pub mod scheduler;

pub use resource::{Acquisition, PoolStore, ResourcePool};
pub use scheduler::{EventPayload, ScheduledEvent, Scheduler, SimTime};

/// How a task leaves a `resume` call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Suspend for a timer; the scheduler resumes the task after the delay
    Sleep(SimTime),
    /// Parked on a resource-pool queue; the grant resumes the task
    Wait,
    /// The task is finished and will not run again
    Done,
}
