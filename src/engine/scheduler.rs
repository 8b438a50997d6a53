//! Virtual clock and event queue
//!
//! The scheduler owns simulated time. Time only moves when an event is
//! popped: `pop_next_before` advances the clock to the earliest due event
//! and hands it back to the driver. Events scheduled for the same virtual
//! instant are returned in the order they were scheduled (FIFO tie-break
//! on a monotonic sequence number), which is what makes runs reproducible
//! under a fixed seed.

use crate::types::{AttractionId, TaskId};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Virtual time, in simulated minutes since park opening
pub type SimTime = f64;

/// What a scheduled event does when it comes due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventPayload {
    /// Resume a suspended task
    Resume(TaskId),
    /// End an attraction's maintenance window
    ReopenAttraction(AttractionId),
}

/// An event queued for a future virtual instant
#[derive(Debug, Clone, Copy)]
pub struct ScheduledEvent {
    /// Virtual instant the event comes due
    pub time: SimTime,
    /// Scheduling order, used as the tie-break at equal instants
    seq: u64,
    /// What to do when the event fires
    pub payload: EventPayload,
}

impl PartialEq for ScheduledEvent {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for ScheduledEvent {}

impl PartialOrd for ScheduledEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScheduledEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        self.time.total_cmp(&other.time).then(self.seq.cmp(&other.seq))
    }
}

/// The virtual clock and its pending-event queue
#[derive(Debug)]
pub struct Scheduler {
    now: SimTime,
    next_seq: u64,
    queue: BinaryHeap<Reverse<ScheduledEvent>>,
}

impl Scheduler {
    /// Create a scheduler with the clock at park opening (minute 0)
    pub fn new() -> Self {
        Self { now: 0.0, next_seq: 0, queue: BinaryHeap::new() }
    }

    /// Current virtual time
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Schedule `payload` to fire `delay` minutes from now.
    ///
    /// A zero delay fires at the current instant, after everything already
    /// scheduled for it. Negative delays are clamped to zero so time can
    /// never run backward.
    pub fn schedule_in(&mut self, delay: SimTime, payload: EventPayload) {
        let time = self.now + delay.max(0.0);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse(ScheduledEvent { time, seq, payload }));
    }

    /// Pop the earliest event due strictly before `limit`, advancing the
    /// clock to its instant. Returns `None` once the clock has reached the
    /// limit or no events remain before it; later events stay queued and
    /// are simply never delivered.
    pub fn pop_next_before(&mut self, limit: SimTime) -> Option<ScheduledEvent> {
        if self.now >= limit {
            return None;
        }
        let Reverse(next) = self.queue.peek()?;
        if next.time >= limit {
            return None;
        }
        let Reverse(event) = self.queue.pop()?;
        debug_assert!(event.time >= self.now, "event queue produced a past instant");
        self.now = event.time;
        Some(event)
    }

    /// Number of events still queued
    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    /// Virtual instant of the earliest queued event, if any
    pub fn peek_time(&self) -> Option<SimTime> {
        self.queue.peek().map(|Reverse(event)| event.time)
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
