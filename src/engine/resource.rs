//! Capacity-limited, FIFO-fair resource pools
//!
//! A [`ResourcePool`] models a bank of identical units (ticket counters,
//! turnstiles, ride modules, staff). Requests are served in strict arrival
//! order: a later request never jumps ahead of an earlier one, even when it
//! asks for fewer units, so starvation is impossible by construction.
//!
//! Pools live in a [`PoolStore`] arena and are addressed by [`PoolId`].
//! The arena is what makes the compound [`PoolStore::acquire_joint`]
//! expressible: a joint request enqueues one half in each pool and is
//! granted only when both halves head their queues with units available,
//! both-or-neither, never a partial grant. Because no task ever waits on
//! pools of two different components at once, circular wait cannot arise.

use crate::types::{PoolId, TaskId};
use std::collections::VecDeque;

/// Outcome of an acquire call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acquisition {
    /// Units were free and are now held by the caller
    Granted,
    /// The request joined the wait queue; the task will be woken on grant
    Queued,
}

/// One pending acquire request
#[derive(Debug, Clone, Copy)]
struct PendingRequest {
    task: TaskId,
    units: u32,
    /// For a joint request, the pool holding the other half
    partner: Option<PoolId>,
}

/// A bank of identical capacity units with a FIFO wait list
#[derive(Debug)]
pub struct ResourcePool {
    capacity: u32,
    in_use: u32,
    queue: VecDeque<PendingRequest>,
}

impl ResourcePool {
    fn new(capacity: u32) -> Self {
        debug_assert!(capacity > 0, "pool capacity validated at configuration time");
        Self { capacity, in_use: 0, queue: VecDeque::new() }
    }

    /// Total units in the pool
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Units currently held
    pub fn in_use(&self) -> u32 {
        self.in_use
    }

    /// Units currently free
    pub fn available(&self) -> u32 {
        self.capacity - self.in_use
    }

    /// Number of pending (not yet granted) requests
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }
}

/// Arena owning every resource pool in the simulation
#[derive(Debug, Default)]
pub struct PoolStore {
    pools: Vec<ResourcePool>,
}

impl PoolStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new pool of `capacity` units
    pub fn create(&mut self, capacity: u32) -> PoolId {
        let id = PoolId(self.pools.len());
        self.pools.push(ResourcePool::new(capacity));
        id
    }

    /// Borrow a pool for inspection
    pub fn pool(&self, id: PoolId) -> &ResourcePool {
        &self.pools[id.index()]
    }

    /// Number of pending requests on a pool
    pub fn queue_len(&self, id: PoolId) -> usize {
        self.pools[id.index()].queue_len()
    }

    /// Request `units` from a pool for `task`.
    ///
    /// Granted immediately only when nobody is queued ahead and the units
    /// are free; otherwise the request joins the back of the queue.
    pub fn acquire(&mut self, id: PoolId, task: TaskId, units: u32) -> Acquisition {
        let pool = &mut self.pools[id.index()];
        debug_assert!(units > 0 && units <= pool.capacity);
        if pool.queue.is_empty() && pool.available() >= units {
            pool.in_use += units;
            Acquisition::Granted
        } else {
            pool.queue.push_back(PendingRequest { task, units, partner: None });
            Acquisition::Queued
        }
    }

    /// Request `units_a` from pool `a` and `units_b` from pool `b` as one
    /// atomic operation. The caller holds nothing until both pools can
    /// satisfy the request at the same instant.
    pub fn acquire_joint(
        &mut self,
        a: PoolId,
        b: PoolId,
        task: TaskId,
        units_a: u32,
        units_b: u32,
    ) -> Acquisition {
        assert_ne!(a, b, "joint acquisition requires two distinct pools");
        let immediate = {
            let pool_a = &self.pools[a.index()];
            let pool_b = &self.pools[b.index()];
            pool_a.queue.is_empty()
                && pool_b.queue.is_empty()
                && pool_a.available() >= units_a
                && pool_b.available() >= units_b
        };
        if immediate {
            self.pools[a.index()].in_use += units_a;
            self.pools[b.index()].in_use += units_b;
            Acquisition::Granted
        } else {
            self.pools[a.index()].queue.push_back(PendingRequest {
                task,
                units: units_a,
                partner: Some(b),
            });
            self.pools[b.index()].queue.push_back(PendingRequest {
                task,
                units: units_b,
                partner: Some(a),
            });
            Acquisition::Queued
        }
    }

    /// Return `units` to a pool. Newly grantable queued requests (on any
    /// pool, for joint halves) are granted in FIFO order; the returned
    /// tasks must be woken by the caller in the same scheduler step.
    pub fn release(&mut self, id: PoolId, units: u32) -> Vec<TaskId> {
        let pool = &mut self.pools[id.index()];
        debug_assert!(pool.in_use >= units, "released more units than were held");
        pool.in_use = pool.in_use.saturating_sub(units);
        self.drain()
    }

    /// Return the two halves of a joint acquisition together
    pub fn release_joint(
        &mut self,
        a: PoolId,
        b: PoolId,
        units_a: u32,
        units_b: u32,
    ) -> Vec<TaskId> {
        debug_assert!(self.pools[a.index()].in_use >= units_a);
        debug_assert!(self.pools[b.index()].in_use >= units_b);
        self.pools[a.index()].in_use = self.pools[a.index()].in_use.saturating_sub(units_a);
        self.pools[b.index()].in_use = self.pools[b.index()].in_use.saturating_sub(units_b);
        self.drain()
    }

    /// Grant queued requests until no further grant is possible.
    ///
    /// Only queue fronts are considered (strict head-of-line). A joint
    /// front is granted when its other half also heads its own queue and
    /// both pools have the units; granting it pops both halves, which may
    /// unblock the partner pool, so draining repeats to a fixpoint. Pool
    /// order makes the grant sequence deterministic.
    fn drain(&mut self) -> Vec<TaskId> {
        let mut granted = Vec::new();
        loop {
            let mut progressed = false;
            for index in 0..self.pools.len() {
                loop {
                    let Some(front) = self.pools[index].queue.front().copied() else {
                        break;
                    };
                    match front.partner {
                        None => {
                            let pool = &mut self.pools[index];
                            if pool.available() < front.units {
                                break;
                            }
                            pool.in_use += front.units;
                            pool.queue.pop_front();
                            granted.push(front.task);
                            progressed = true;
                        }
                        Some(partner) => {
                            let partner_front =
                                self.pools[partner.index()].queue.front().copied();
                            let half = match partner_front {
                                Some(half)
                                    if half.task == front.task
                                        && half.partner == Some(PoolId(index)) =>
                                {
                                    half
                                }
                                _ => break,
                            };
                            if self.pools[index].available() < front.units
                                || self.pools[partner.index()].available() < half.units
                            {
                                break;
                            }
                            self.pools[index].in_use += front.units;
                            self.pools[partner.index()].in_use += half.units;
                            self.pools[index].queue.pop_front();
                            self.pools[partner.index()].queue.pop_front();
                            granted.push(front.task);
                            progressed = true;
                        }
                    }
                }
            }
            if !progressed {
                break;
            }
        }
        granted
    }
}
