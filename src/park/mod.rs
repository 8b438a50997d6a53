//! Park facilities: attractions and the ticket office
//!
//! Each facility exclusively owns its resource pools (registered in the
//! shared [`PoolStore`](crate::engine::PoolStore)) and the policy around
//! them: eligibility and maintenance for attractions, admission and
//! abandonment for the ticket office.

pub mod attraction;
pub mod ticket_office;

pub use attraction::{Attraction, AttractionStats, RideRecord, BOARDING_DELAY};
pub use ticket_office::{
    TicketOffice, ABANDON_SATISFACTION_FLOOR, COUNTER_SERVICE_RANGE, LONG_QUEUE_PENALTY,
    ONLINE_TRANSIT, QUEUE_ABANDON_THRESHOLD, TURNSTILE_TRANSIT_RANGE,
};
