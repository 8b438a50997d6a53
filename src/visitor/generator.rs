//! The arrival generator
//!
//! One long-lived task produces the day's visitors. Each cycle it reads the
//! arrival rate in effect *now*, draws the next inter-arrival gap from an
//! exponential distribution at that rate, and sleeps for the gap; the rate
//! is deliberately not re-evaluated mid-wait. On waking it mints one
//! visitor (category uniform over the closed set, admission channel online
//! with a configured probability) and spawns their lifecycle. An online
//! buyer may turn out to be a no-show, which consumes no visitor id.

use crate::engine::{SimTime, Step};
use crate::simulation::orchestrator::SimContext;
use crate::simulation::{SimulationError, SimulationResult};
use crate::types::{AdmissionChannel, VisitorCategory};
use crate::visitor::{Visitor, VisitorProcess};
use rand::Rng;
use rand_distr::{Distribution, Exp};
use tracing::debug;

/// The long-lived arrival task
#[derive(Debug)]
pub struct ArrivalGenerator {
    base_rate: f64,
    online_probability: f64,
    no_show_probability: f64,
    close_at: SimTime,
    state: ArrivalState,
}

/// Whether the generator owes the park an arrival on its next wake-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArrivalState {
    /// First wake-up at opening; nothing has been drawn yet
    Opening,
    /// An inter-arrival gap has elapsed; someone is at the gates
    GapElapsed,
}

impl ArrivalGenerator {
    /// Build the generator for a day closing at `close_at` minutes
    pub fn new(
        base_rate: f64,
        online_probability: f64,
        no_show_probability: f64,
        close_at: SimTime,
    ) -> Self {
        Self {
            base_rate,
            online_probability,
            no_show_probability,
            close_at,
            state: ArrivalState::Opening,
        }
    }

    /// Handle one wake-up: admit whoever the elapsed gap announced, then
    /// draw the next gap at the rate in effect right now and sleep for it.
    pub(crate) fn resume(&mut self, ctx: &mut SimContext<'_>) -> SimulationResult<Step> {
        match self.state {
            ArrivalState::Opening => self.state = ArrivalState::GapElapsed,
            ArrivalState::GapElapsed => self.admit_arrival(ctx),
        }

        let rate = self.base_rate * rate_multiplier(ctx.now(), self.close_at);
        let gap = Exp::new(rate)
            .map_err(|e| {
                SimulationError::arrival_error(format!("invalid arrival rate {}: {}", rate, e))
            })?
            .sample(ctx.rng);
        Ok(Step::Sleep(gap))
    }

    /// Mint one visitor (or record an online no-show) and spawn the lifecycle
    fn admit_arrival(&mut self, ctx: &mut SimContext<'_>) {
        let online = ctx.rng.gen_bool(self.online_probability);
        if online && ctx.rng.gen_bool(self.no_show_probability) {
            ctx.collector.register_prepaid_sale(false);
            debug!("online ticket sold but never redeemed");
            return;
        }

        let category = VisitorCategory::ALL[ctx.rng.gen_range(0..VisitorCategory::ALL.len())];
        let channel =
            if online { AdmissionChannel::Online } else { AdmissionChannel::WalkUp };
        let id = ctx.allocate_visitor_id();
        if online {
            ctx.collector.register_prepaid_sale(true);
        }

        debug!(visitor = %id, %category, %channel, "visitor arriving");
        ctx.spawn_visitor(VisitorProcess::new(Visitor::new(id, category, channel)));
    }
}

/// Arrival-rate multiplier for the instant a gap is drawn.
///
/// The opening rush doubles the base rate for the first hour and carries at
/// 1.5x through the second; the last two hours before close trickle at
/// 0.2x. The early-day windows win when a short day makes them overlap the
/// closing window.
pub fn rate_multiplier(elapsed: SimTime, close_at: SimTime) -> f64 {
    if elapsed < 60.0 {
        2.0
    } else if elapsed < 120.0 {
        1.5
    } else if elapsed >= close_at - 120.0 {
        0.2
    } else {
        1.0
    }
}
