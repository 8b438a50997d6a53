//! Ticket office: sale counters, turnstiles, and the admission policy
//!
//! The office owns two independent resource pools. Online buyers skip the
//! counters entirely and only transit a turnstile; walk-ups face the
//! abandonment policy, buy at a counter, then transit a turnstile. The
//! policy is evaluated exactly once, at the moment the visitor would join
//! the counter queue; a visitor already in line is never evicted.

use crate::engine::{PoolStore, SimTime};
use crate::types::PoolId;
use crate::visitor::Visitor;
use tracing::debug;

/// Pending counter requests above which a visitor gets annoyed
pub const QUEUE_ABANDON_THRESHOLD: usize = 10;

/// Satisfaction below which an annoyed visitor gives up and leaves
pub const ABANDON_SATISFACTION_FLOOR: i32 = 30;

/// Satisfaction penalty for facing a long counter queue
pub const LONG_QUEUE_PENALTY: i32 = 20;

/// Fixed turnstile transit for pre-purchased tickets, minutes
pub const ONLINE_TRANSIT: SimTime = 0.5;

/// Uniform range for counter service time, minutes
pub const COUNTER_SERVICE_RANGE: (f64, f64) = (0.5, 2.0);

/// Uniform range for walk-up turnstile transit, minutes
pub const TURNSTILE_TRANSIT_RANGE: (f64, f64) = (0.2, 1.0);

/// The park's ticket office
#[derive(Debug)]
pub struct TicketOffice {
    counter_pool: PoolId,
    turnstile_pool: PoolId,
    entry_price: f64,
    revenue: f64,
}

impl TicketOffice {
    /// Build the office, registering its counter and turnstile pools
    pub fn new(
        pools: &mut PoolStore,
        counter_capacity: u32,
        turnstile_capacity: u32,
        entry_price: f64,
    ) -> Self {
        Self {
            counter_pool: pools.create(counter_capacity),
            turnstile_pool: pools.create(turnstile_capacity),
            entry_price,
            revenue: 0.0,
        }
    }

    /// Pool of sale counters
    pub fn counter_pool(&self) -> PoolId {
        self.counter_pool
    }

    /// Pool of entry turnstiles
    pub fn turnstile_pool(&self) -> PoolId {
        self.turnstile_pool
    }

    /// Price of a walk-up ticket
    pub fn entry_price(&self) -> f64 {
        self.entry_price
    }

    /// Revenue collected at the counters so far. Only ever grows; prepaid
    /// online revenue is accounted for downstream, not here.
    pub fn revenue(&self) -> f64 {
        self.revenue
    }

    /// Record one counter sale
    pub fn record_sale(&mut self) {
        self.revenue += self.entry_price;
    }

    /// Admission policy for a walk-up visitor about to join the counter
    /// queue. A queue longer than [`QUEUE_ABANDON_THRESHOLD`] costs the
    /// visitor [`LONG_QUEUE_PENALTY`] satisfaction; if that drops them
    /// below [`ABANDON_SATISFACTION_FLOOR`] they abandon without queueing.
    /// Exactly at the floor they stay.
    pub fn abandons_before_queueing(&self, pools: &PoolStore, visitor: &mut Visitor) -> bool {
        let pending = pools.queue_len(self.counter_pool);
        if pending <= QUEUE_ABANDON_THRESHOLD {
            return false;
        }

        visitor.decay_satisfaction(LONG_QUEUE_PENALTY);
        let abandons = visitor.satisfaction() < ABANDON_SATISFACTION_FLOOR;
        debug!(
            visitor = %visitor.id,
            pending,
            satisfaction = visitor.satisfaction(),
            abandons,
            "long counter queue"
        );
        abandons
    }
}
