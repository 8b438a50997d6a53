//! The park simulation driver
//!
//! `ParkSimulation` composes the engine (scheduler + pool store) with the
//! park (attractions, ticket office), the task table, the seeded random
//! number generator, and the data collector, and drives virtual time
//! forward event by event. A task that returns an error is caught right
//! here at its boundary, logged, and discarded; the clock and every other
//! task keep going.

use crate::data::{DataCollector, JourneyEntry};
use crate::engine::{Acquisition, EventPayload, PoolStore, Scheduler, SimTime, Step};
use crate::park::{Attraction, AttractionStats, TicketOffice};
use crate::simulation::SimulationResult;
use crate::types::{
    AdmissionChannel, AttractionId, ParkConfig, PoolId, TaskId, VisitorCategory, VisitorId,
};
use crate::visitor::{ArrivalGenerator, Visitor, VisitorProcess};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// A suspendable task owned by the simulation
#[derive(Debug)]
pub enum Process {
    /// One visitor's lifecycle
    Visitor(VisitorProcess),
    /// The long-lived arrival stream
    Arrivals(ArrivalGenerator),
}

impl Process {
    fn resume(&mut self, ctx: &mut SimContext<'_>, id: TaskId) -> SimulationResult<Step> {
        match self {
            Process::Visitor(process) => process.resume(ctx, id),
            Process::Arrivals(generator) => generator.resume(ctx),
        }
    }
}

/// Everything a resumed task may touch.
///
/// Wrapping the split borrows of the simulation keeps the suspension
/// contract explicit: a task may inspect and mutate shared park state
/// freely while it runs, but it can only suspend by returning a
/// [`Step`]; pool wake-ups and timers both arrive through the scheduler.
#[derive(Debug)]
pub struct SimContext<'a> {
    /// The virtual clock and event queue
    pub scheduler: &'a mut Scheduler,
    /// Every resource pool in the park
    pub pools: &'a mut PoolStore,
    /// The park's attractions, indexed by [`AttractionId`]
    pub attractions: &'a mut Vec<Attraction>,
    /// The ticket office
    pub office: &'a mut TicketOffice,
    /// The shared seeded random source
    pub rng: &'a mut StdRng,
    /// The statistics sink
    pub collector: &'a mut DataCollector,
    tasks: &'a mut HashMap<TaskId, Process>,
    next_task_id: &'a mut u64,
    next_visitor_id: &'a mut u64,
}

impl SimContext<'_> {
    /// Current virtual time
    pub fn now(&self) -> SimTime {
        self.scheduler.now()
    }

    /// Hand out the next monotonic visitor id
    pub fn allocate_visitor_id(&mut self) -> VisitorId {
        let id = VisitorId(*self.next_visitor_id);
        *self.next_visitor_id += 1;
        id
    }

    /// Register a new visitor lifecycle and schedule its first wake-up at
    /// the current instant
    pub fn spawn_visitor(&mut self, process: VisitorProcess) -> TaskId {
        let id = TaskId(*self.next_task_id);
        *self.next_task_id += 1;
        self.tasks.insert(id, Process::Visitor(process));
        self.scheduler.schedule_in(0.0, EventPayload::Resume(id));
        id
    }

    /// Request units from one pool; on `Queued` the task must return
    /// [`Step::Wait`] and will be woken on grant
    pub fn acquire(&mut self, pool: PoolId, task: TaskId, units: u32) -> Acquisition {
        self.pools.acquire(pool, task, units)
    }

    /// Atomically request units from two pools (see
    /// [`PoolStore::acquire_joint`])
    pub fn acquire_joint(
        &mut self,
        a: PoolId,
        b: PoolId,
        task: TaskId,
        units_a: u32,
        units_b: u32,
    ) -> Acquisition {
        self.pools.acquire_joint(a, b, task, units_a, units_b)
    }

    /// Return units to a pool and wake whoever that grants, in the same
    /// scheduler step
    pub fn release(&mut self, pool: PoolId, units: u32) {
        let granted = self.pools.release(pool, units);
        self.wake(granted);
    }

    /// Return both halves of a joint acquisition together
    pub fn release_joint(&mut self, a: PoolId, b: PoolId, units_a: u32, units_b: u32) {
        let granted = self.pools.release_joint(a, b, units_a, units_b);
        self.wake(granted);
    }

    /// Schedule the end of an attraction's maintenance window
    pub fn schedule_reopen(&mut self, attraction: AttractionId, window: SimTime) {
        self.scheduler.schedule_in(window, EventPayload::ReopenAttraction(attraction));
    }

    /// Append a fine-grained journey entry stamped with the current instant
    pub fn journey(&mut self, visitor: VisitorId, event: &str) {
        let time = self.scheduler.now();
        self.collector.log_event(JourneyEntry { time, visitor, event: event.to_string() });
    }

    fn wake(&mut self, granted: Vec<TaskId>) {
        for task in granted {
            self.scheduler.schedule_in(0.0, EventPayload::Resume(task));
        }
    }
}

/// One day of park operation as a discrete-event simulation
#[derive(Debug)]
pub struct ParkSimulation {
    config: ParkConfig,
    scheduler: Scheduler,
    pools: PoolStore,
    attractions: Vec<Attraction>,
    office: TicketOffice,
    tasks: HashMap<TaskId, Process>,
    next_task_id: u64,
    next_visitor_id: u64,
    rng: StdRng,
    collector: DataCollector,
}

impl ParkSimulation {
    /// Build a simulation with the stochastic arrival stream running.
    /// Fails fast on an invalid configuration; no partial object escapes.
    pub fn new(config: ParkConfig) -> SimulationResult<Self> {
        Self::build(config, true)
    }

    /// Build a simulation without the arrival stream, for scripted
    /// scenarios that inject visitors with [`spawn_visitor`](Self::spawn_visitor)
    pub fn without_arrivals(config: ParkConfig) -> SimulationResult<Self> {
        Self::build(config, false)
    }

    fn build(config: ParkConfig, with_arrivals: bool) -> SimulationResult<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => {
                info!("Using deterministic seed: {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => {
                debug!("Using entropy-based random seed");
                StdRng::from_entropy()
            }
        };

        let mut pools = PoolStore::new();
        let attractions: Vec<Attraction> = config
            .attractions
            .iter()
            .enumerate()
            .map(|(index, attraction_config)| {
                Attraction::new(
                    AttractionId(index),
                    attraction_config,
                    &mut pools,
                    config.maintenance_threshold_range,
                    config.maintenance_duration_range,
                    &mut rng,
                )
            })
            .collect();
        let office = TicketOffice::new(
            &mut pools,
            config.counter_capacity,
            config.turnstile_capacity,
            config.entry_price,
        );

        info!(
            attractions = attractions.len(),
            counters = config.counter_capacity,
            turnstiles = config.turnstile_capacity,
            "park ready to open"
        );

        let mut sim = Self {
            scheduler: Scheduler::new(),
            pools,
            attractions,
            office,
            tasks: HashMap::new(),
            next_task_id: 0,
            next_visitor_id: 0,
            rng,
            collector: DataCollector::new(),
            config,
        };

        if with_arrivals {
            let generator = ArrivalGenerator::new(
                sim.config.base_arrival_rate,
                sim.config.online_probability,
                sim.config.no_show_probability,
                sim.config.sim_duration,
            );
            sim.insert_task(Process::Arrivals(generator));
        }

        Ok(sim)
    }

    fn insert_task(&mut self, process: Process) -> TaskId {
        let id = TaskId(self.next_task_id);
        self.next_task_id += 1;
        self.tasks.insert(id, process);
        self.scheduler.schedule_in(0.0, EventPayload::Resume(id));
        id
    }

    /// Inject one visitor at the current instant. Intended for scripted
    /// scenarios built with [`without_arrivals`](Self::without_arrivals).
    pub fn spawn_visitor(
        &mut self,
        category: VisitorCategory,
        channel: AdmissionChannel,
    ) -> VisitorId {
        let id = VisitorId(self.next_visitor_id);
        self.next_visitor_id += 1;
        let process = VisitorProcess::new(Visitor::new(id, category, channel));
        self.insert_task(Process::Visitor(process));
        id
    }

    /// Run the whole configured day
    pub fn run(&mut self) {
        let limit = self.config.sim_duration;
        self.run_until(limit);
    }

    /// Drive virtual time forward until the clock reaches `limit` or no
    /// events remain before it. Tasks still in flight at the cutoff are
    /// abandoned without a final record, the end-of-day hard stop.
    pub fn run_until(&mut self, limit: SimTime) {
        while let Some(event) = self.scheduler.pop_next_before(limit) {
            match event.payload {
                EventPayload::ReopenAttraction(id) => self.attractions[id.index()].reopen(),
                EventPayload::Resume(task_id) => self.resume_task(task_id),
            }
        }
        if !self.tasks.is_empty() {
            debug!(in_flight = self.tasks.len(), "tasks abandoned at the day's cutoff");
        }
    }

    fn resume_task(&mut self, task_id: TaskId) {
        let Some(mut process) = self.tasks.remove(&task_id) else {
            warn!(task = %task_id, "wake-up for an unknown task ignored");
            return;
        };

        let mut ctx = SimContext {
            scheduler: &mut self.scheduler,
            pools: &mut self.pools,
            attractions: &mut self.attractions,
            office: &mut self.office,
            rng: &mut self.rng,
            collector: &mut self.collector,
            tasks: &mut self.tasks,
            next_task_id: &mut self.next_task_id,
            next_visitor_id: &mut self.next_visitor_id,
        };

        match process.resume(&mut ctx, task_id) {
            Ok(Step::Done) => {}
            Ok(Step::Sleep(delay)) => {
                self.scheduler.schedule_in(delay, EventPayload::Resume(task_id));
                self.tasks.insert(task_id, process);
            }
            Ok(Step::Wait) => {
                self.tasks.insert(task_id, process);
            }
            Err(error) => {
                // Contained at the task boundary: any units the task held
                // stay held, which is why the leak is worth a log line
                warn!(task = %task_id, %error, "task fault; task discarded");
            }
        }
    }

    /// Current virtual time
    pub fn now(&self) -> SimTime {
        self.scheduler.now()
    }

    /// The configuration this simulation was built from
    pub fn config(&self) -> &ParkConfig {
        &self.config
    }

    /// The park's attractions
    pub fn attractions(&self) -> &[Attraction] {
        &self.attractions
    }

    /// Derived statistics for every attraction
    pub fn attraction_stats(&self) -> Vec<AttractionStats> {
        self.attractions.iter().map(Attraction::statistics).collect()
    }

    /// The ticket office
    pub fn office(&self) -> &TicketOffice {
        &self.office
    }

    /// The resource pools, for inspection
    pub fn pools(&self) -> &PoolStore {
        &self.pools
    }

    /// Everything collected so far
    pub fn collector(&self) -> &DataCollector {
        &self.collector
    }

    /// Consume the simulation, keeping only the collected output
    pub fn into_collector(self) -> DataCollector {
        self.collector
    }

    /// Number of tasks still suspended or runnable
    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted_config() -> ParkConfig {
        ParkConfig { seed: Some(11), ..ParkConfig::default() }
    }

    #[test]
    fn test_invalid_config_produces_no_simulation() {
        let mut config = ParkConfig::default();
        config.counter_capacity = 0;
        assert!(ParkSimulation::new(config).is_err());
    }

    #[test]
    fn test_single_scripted_visitor_completes_a_visit() {
        let mut sim = ParkSimulation::without_arrivals(scripted_config()).unwrap();
        sim.spawn_visitor(VisitorCategory::Adult, AdmissionChannel::WalkUp);
        sim.run();

        let visits = sim.collector().visits();
        assert_eq!(visits.len(), 1);
        assert!(visits[0].entered);
        assert!(visits[0].attractions_visited > 0);
        assert_eq!(sim.pending_tasks(), 0);
    }

    #[test]
    fn test_online_visitor_skips_the_counters() {
        let mut sim = ParkSimulation::without_arrivals(scripted_config()).unwrap();
        sim.spawn_visitor(VisitorCategory::Senior, AdmissionChannel::Online);
        sim.run();

        let visits = sim.collector().visits();
        assert_eq!(visits.len(), 1);
        assert!(visits[0].entered);
        // No counter interaction, no revenue
        assert_eq!(sim.office().revenue(), 0.0);
        assert!(sim.collector().avg_counter_wait().is_none());
    }

    #[test]
    fn test_run_until_abandons_in_flight_tasks() {
        let mut sim = ParkSimulation::without_arrivals(scripted_config()).unwrap();
        sim.spawn_visitor(VisitorCategory::Adult, AdmissionChannel::WalkUp);
        // A ride lasts several minutes; half a minute in, the visitor is
        // still mid-admission
        sim.run_until(0.25);
        assert!(sim.collector().visits().is_empty());
        assert_eq!(sim.pending_tasks(), 1);
    }
}
