//! The visitor lifecycle state machine
//!
//! One `VisitorProcess` drives one visitor from arrival to departure:
//! admission through the ticket office, then the tour loop over
//! attractions, then the final visit record. The process is a tagged state
//! enum advanced by [`resume`](VisitorProcess::resume); between the two
//! suspension kinds, a timer or a resource-pool grant, it runs to
//! completion, so no other task can observe it mid-transition.
//!
//! State flow:
//!
//! ```text
//! Arriving ──(online)──────────────► AwaitingTurnstile ─► PassingTurnstile ─┐
//!    │ (walk-up, may abandon)                ▲                              │
//!    ▼                                       │                              ▼
//! AwaitingCounter ─► AtCounter ──────────────┘                   ChoosingAttraction ◄─┐
//!                                                                    │         │     │
//!                                                   (none eligible,  │         ▼     │
//!                                                    tired, or fed   │   AwaitingRide│
//!                                                    up: Departed)   │         │     │
//!                                                                    ▼         ▼     │
//!                                                                 Riding ─► Resting ─┘
//! ```

use crate::engine::{Acquisition, SimTime, Step};
use crate::park::{BOARDING_DELAY, COUNTER_SERVICE_RANGE, ONLINE_TRANSIT, TURNSTILE_TRANSIT_RANGE};
use crate::simulation::orchestrator::SimContext;
use crate::simulation::SimulationResult;
use crate::types::{AdmissionChannel, AttractionId, TaskId};
use crate::visitor::Visitor;
use rand::Rng;
use tracing::{debug, info};

/// Per-visitor accumulated tour figures and the current lifecycle state
#[derive(Debug)]
pub struct VisitorProcess {
    visitor: Visitor,
    state: VisitorState,
    interactions: u64,
    total_wait: f64,
    total_usage: f64,
}

/// Where in the lifecycle a visitor currently is
#[derive(Debug, Clone, Copy, PartialEq)]
enum VisitorState {
    /// Just arrived at the park gates
    Arriving,
    /// Queued for a sale counter since `queued_at`
    AwaitingCounter { queued_at: SimTime },
    /// Holding a counter, being served
    AtCounter,
    /// Queued for a turnstile
    AwaitingTurnstile,
    /// Holding a turnstile, walking through
    PassingTurnstile,
    /// Inside the park, picking the next attraction
    ChoosingAttraction,
    /// Queued for a ride slot and staff member since `queued_at`
    AwaitingRide { attraction: AttractionId, queued_at: SimTime },
    /// On the ride, holding one module and one staff unit
    Riding { attraction: AttractionId, wait: f64 },
    /// Wandering between attractions
    Resting,
    /// Gone; the task is finished
    Departed,
}

impl VisitorProcess {
    /// Start a lifecycle for a freshly arrived visitor
    pub fn new(visitor: Visitor) -> Self {
        Self {
            visitor,
            state: VisitorState::Arriving,
            interactions: 0,
            total_wait: 0.0,
            total_usage: 0.0,
        }
    }

    /// The visitor this process drives
    pub fn visitor(&self) -> &Visitor {
        &self.visitor
    }

    /// Advance the lifecycle until the next suspension point.
    ///
    /// Each wake-up lands in exactly one state arm: timer states were woken
    /// by their timer, waiting states by a pool grant. Arms either suspend
    /// (return a [`Step`]) or transition and loop.
    pub(crate) fn resume(
        &mut self,
        ctx: &mut SimContext<'_>,
        self_id: TaskId,
    ) -> SimulationResult<Step> {
        loop {
            match self.state {
                VisitorState::Arriving => match self.visitor.channel {
                    AdmissionChannel::Online => {
                        let turnstiles = ctx.office.turnstile_pool();
                        match ctx.acquire(turnstiles, self_id, 1) {
                            Acquisition::Granted => {
                                self.state = VisitorState::PassingTurnstile;
                                return Ok(Step::Sleep(ONLINE_TRANSIT));
                            }
                            Acquisition::Queued => {
                                self.state = VisitorState::AwaitingTurnstile;
                                return Ok(Step::Wait);
                            }
                        }
                    }
                    AdmissionChannel::WalkUp => {
                        if ctx.office.abandons_before_queueing(ctx.pools, &mut self.visitor) {
                            info!(
                                visitor = %self.visitor.id,
                                satisfaction = self.visitor.satisfaction(),
                                "visitor abandoned at the ticket queue"
                            );
                            ctx.collector.register_admission_failure();
                            ctx.journey(self.visitor.id, "abandoned at ticket queue");
                            ctx.collector.register_visit(self.visit_record());
                            self.state = VisitorState::Departed;
                            return Ok(Step::Done);
                        }
                        let counters = ctx.office.counter_pool();
                        match ctx.acquire(counters, self_id, 1) {
                            Acquisition::Granted => {
                                ctx.collector.register_counter_wait(0.0);
                                self.state = VisitorState::AtCounter;
                                return Ok(Step::Sleep(uniform(ctx, COUNTER_SERVICE_RANGE)));
                            }
                            Acquisition::Queued => {
                                self.state =
                                    VisitorState::AwaitingCounter { queued_at: ctx.now() };
                                return Ok(Step::Wait);
                            }
                        }
                    }
                },

                VisitorState::AwaitingCounter { queued_at } => {
                    ctx.collector.register_counter_wait(ctx.now() - queued_at);
                    self.state = VisitorState::AtCounter;
                    return Ok(Step::Sleep(uniform(ctx, COUNTER_SERVICE_RANGE)));
                }

                VisitorState::AtCounter => {
                    ctx.office.record_sale();
                    debug!(visitor = %self.visitor.id, "ticket bought at counter");
                    let counters = ctx.office.counter_pool();
                    ctx.release(counters, 1);
                    let turnstiles = ctx.office.turnstile_pool();
                    match ctx.acquire(turnstiles, self_id, 1) {
                        Acquisition::Granted => {
                            self.state = VisitorState::PassingTurnstile;
                            return Ok(Step::Sleep(uniform(ctx, TURNSTILE_TRANSIT_RANGE)));
                        }
                        Acquisition::Queued => {
                            self.state = VisitorState::AwaitingTurnstile;
                            return Ok(Step::Wait);
                        }
                    }
                }

                VisitorState::AwaitingTurnstile => {
                    let transit = match self.visitor.channel {
                        AdmissionChannel::Online => ONLINE_TRANSIT,
                        AdmissionChannel::WalkUp => uniform(ctx, TURNSTILE_TRANSIT_RANGE),
                    };
                    self.state = VisitorState::PassingTurnstile;
                    return Ok(Step::Sleep(transit));
                }

                VisitorState::PassingTurnstile => {
                    let turnstiles = ctx.office.turnstile_pool();
                    ctx.release(turnstiles, 1);
                    self.visitor.mark_entered(ctx.now());
                    debug!(visitor = %self.visitor.id, "entered the park");
                    ctx.journey(self.visitor.id, "entered park");
                    self.state = VisitorState::ChoosingAttraction;
                }

                VisitorState::ChoosingAttraction => {
                    if !self.visitor.wants_to_keep_touring() {
                        return Ok(self.depart(ctx));
                    }
                    let eligible: Vec<AttractionId> = ctx
                        .attractions
                        .iter()
                        .filter(|a| a.can_board(self.visitor.category))
                        .map(|a| a.id())
                        .collect();
                    if eligible.is_empty() {
                        return Ok(self.depart(ctx));
                    }
                    let pick = eligible[ctx.rng.gen_range(0..eligible.len())];

                    let attraction = &ctx.attractions[pick.index()];
                    let modules = attraction.module_pool();
                    let staff = attraction.staff_pool();
                    match ctx.acquire_joint(modules, staff, self_id, 1, 1) {
                        Acquisition::Granted => {
                            let attraction = &mut ctx.attractions[pick.index()];
                            attraction.record_wait(0.0);
                            let duration = attraction.ride_duration();
                            self.state = VisitorState::Riding { attraction: pick, wait: 0.0 };
                            return Ok(Step::Sleep(BOARDING_DELAY + duration));
                        }
                        Acquisition::Queued => {
                            self.state = VisitorState::AwaitingRide {
                                attraction: pick,
                                queued_at: ctx.now(),
                            };
                            return Ok(Step::Wait);
                        }
                    }
                }

                VisitorState::AwaitingRide { attraction, queued_at } => {
                    let wait = ctx.now() - queued_at;
                    let entry = &mut ctx.attractions[attraction.index()];
                    entry.record_wait(wait);
                    if wait > 5.0 {
                        self.visitor.decay_satisfaction((wait / 5.0).floor() as i32 * 2);
                    }
                    let duration = entry.ride_duration();
                    self.state = VisitorState::Riding { attraction, wait };
                    return Ok(Step::Sleep(BOARDING_DELAY + duration));
                }

                VisitorState::Riding { attraction, wait } => {
                    let entry = &mut ctx.attractions[attraction.index()];
                    let modules = entry.module_pool();
                    let staff = entry.staff_pool();
                    let (record, maintenance) = entry.finish_ride(wait);
                    debug!(visitor = %self.visitor.id, attraction = %record.attraction, "enjoyed a ride");
                    ctx.release_joint(modules, staff, 1, 1);
                    if let Some(window) = maintenance {
                        ctx.schedule_reopen(attraction, window);
                    }

                    self.interactions += 1;
                    self.total_wait += record.wait;
                    self.total_usage += record.usage;
                    ctx.journey(self.visitor.id, &format!("rode {}", record.attraction));

                    // The turn costs fatigue and mood whatever the ride was like
                    self.visitor.add_fatigue();
                    let decay = ctx.rng.gen_range(5..=15);
                    self.visitor.decay_satisfaction(decay);
                    self.state = VisitorState::Resting;
                    return Ok(Step::Sleep(ctx.rng.gen_range(1..=3) as f64));
                }

                VisitorState::Resting => {
                    self.state = VisitorState::ChoosingAttraction;
                }

                VisitorState::Departed => {
                    // A grant for a discarded lifecycle; nothing left to do
                    return Ok(Step::Done);
                }
            }
        }
    }

    /// Leave the park and emit the final visit summary
    fn depart(&mut self, ctx: &mut SimContext<'_>) -> Step {
        self.visitor.mark_exited(ctx.now());
        let record = self.visit_record();
        info!(
            visitor = %self.visitor.id,
            rides = record.attractions_visited,
            satisfaction = record.final_satisfaction,
            "visitor leaving the park"
        );
        ctx.journey(self.visitor.id, "left park");
        ctx.collector.register_visit(record);
        self.state = VisitorState::Departed;
        Step::Done
    }

    /// The final per-visitor summary, derived from accumulated figures
    fn visit_record(&self) -> crate::data::VisitRecord {
        let entered = self.visitor.entry_time().is_some();
        let total_time = match (self.visitor.entry_time(), self.visitor.exit_time()) {
            (Some(entry), Some(exit)) => exit - entry,
            _ => 0.0,
        };
        let per_ride = |total: f64| {
            if self.interactions > 0 {
                total / self.interactions as f64
            } else {
                0.0
            }
        };
        crate::data::VisitRecord {
            id: self.visitor.id,
            category: self.visitor.category,
            channel: self.visitor.channel,
            attractions_visited: self.interactions,
            total_time,
            avg_wait: per_ride(self.total_wait),
            avg_usage: per_ride(self.total_usage),
            final_satisfaction: self.visitor.reported_satisfaction(),
            entered,
        }
    }
}

fn uniform(ctx: &mut SimContext<'_>, range: (f64, f64)) -> f64 {
    ctx.rng.gen_range(range.0..=range.1)
}
