//! Attractions: ride modules, staffing, and the maintenance cycle
//!
//! An attraction owns two resource pools, ride modules and staff, that a
//! visitor acquires jointly for the whole span of boarding plus the ride.
//! Status and usage counters are mutated only from the attraction's own
//! ride handling; after every completed ride the usage count is checked
//! against a threshold drawn at construction, and hitting a multiple of it
//! closes the attraction for a maintenance window of fixed (also drawn)
//! length.

use crate::engine::{PoolStore, SimTime};
use crate::types::{AttractionConfig, AttractionId, AttractionStatus, PoolId, VisitorCategory};
use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

/// Minutes spent boarding before a ride turn starts
pub const BOARDING_DELAY: SimTime = 0.5;

/// What a visitor takes away from one completed ride
#[derive(Debug, Clone, PartialEq)]
pub struct RideRecord {
    /// Name of the attraction ridden
    pub attraction: String,
    /// Minutes spent queueing for the ride
    pub wait: f64,
    /// Minutes spent on the ride itself
    pub usage: f64,
}

/// Derived statistics snapshot for one attraction
#[derive(Debug, Clone, Serialize)]
pub struct AttractionStats {
    /// Attraction name
    pub name: String,
    /// Completed rides
    pub visitors: u64,
    /// Mean queueing time over all completed rides
    pub avg_wait: f64,
    /// Mean ride time over all completed rides
    pub avg_usage: f64,
    /// Popularity counter
    pub popularity: u64,
    /// Status at the moment of the query
    pub status: AttractionStatus,
}

/// A capacity-limited attraction with a maintenance state machine
#[derive(Debug)]
pub struct Attraction {
    id: AttractionId,
    name: String,
    module_pool: PoolId,
    staff_pool: PoolId,
    ride_duration: f64,
    eligible_categories: Vec<VisitorCategory>,
    status: AttractionStatus,
    usage_count: u64,
    popularity: u64,
    maintenance_threshold: u64,
    maintenance_duration: f64,
    wait_samples: Vec<f64>,
    usage_samples: Vec<f64>,
}

impl Attraction {
    /// Build an attraction from its configuration, registering its module
    /// and staff pools and drawing the maintenance threshold and duration
    /// from the configured ranges. Draws happen once, here.
    pub fn new(
        id: AttractionId,
        config: &AttractionConfig,
        pools: &mut PoolStore,
        threshold_range: (u64, u64),
        duration_range: (f64, f64),
        rng: &mut StdRng,
    ) -> Self {
        let module_pool = pools.create(config.module_capacity);
        let staff_pool = pools.create(config.staff_capacity);
        let maintenance_threshold = rng.gen_range(threshold_range.0..=threshold_range.1);
        let maintenance_duration = rng.gen_range(duration_range.0..=duration_range.1);

        debug!(
            attraction = %config.name,
            threshold = maintenance_threshold,
            duration = maintenance_duration,
            "attraction configured"
        );

        Self {
            id,
            name: config.name.clone(),
            module_pool,
            staff_pool,
            ride_duration: config.ride_duration,
            eligible_categories: config.eligible_categories.clone(),
            status: AttractionStatus::Operational,
            usage_count: 0,
            popularity: 0,
            maintenance_threshold,
            maintenance_duration,
            wait_samples: Vec::new(),
            usage_samples: Vec::new(),
        }
    }

    /// Attraction handle
    pub fn id(&self) -> AttractionId {
        self.id
    }

    /// Attraction name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pool of concurrent ride slots
    pub fn module_pool(&self) -> PoolId {
        self.module_pool
    }

    /// Pool of concurrent staff slots
    pub fn staff_pool(&self) -> PoolId {
        self.staff_pool
    }

    /// Minutes one ride turn lasts
    pub fn ride_duration(&self) -> f64 {
        self.ride_duration
    }

    /// Current operating status
    pub fn status(&self) -> AttractionStatus {
        self.status
    }

    /// Completed rides so far
    pub fn usage_count(&self) -> u64 {
        self.usage_count
    }

    /// Ride count that triggers a maintenance window
    pub fn maintenance_threshold(&self) -> u64 {
        self.maintenance_threshold
    }

    /// Length of one maintenance window, minutes
    pub fn maintenance_duration(&self) -> f64 {
        self.maintenance_duration
    }

    /// Synchronous precondition for `use`: the attraction is operational
    /// and the category is allowed. Checked without suspension; a `false`
    /// means the ride request is unavailable right now, not a queue
    /// failure.
    pub fn can_board(&self, category: VisitorCategory) -> bool {
        self.status == AttractionStatus::Operational
            && self.eligible_categories.contains(&category)
    }

    /// Record the queueing time of a rider who was just granted a slot
    pub fn record_wait(&mut self, wait: f64) {
        self.wait_samples.push(wait);
    }

    /// Complete one ride turn: record the usage sample, bump the counters,
    /// and evaluate the maintenance trigger. Returns the ride record and,
    /// when this ride hit a threshold multiple, the length of the
    /// maintenance window the caller must schedule the reopening after.
    pub fn finish_ride(&mut self, wait: f64) -> (RideRecord, Option<SimTime>) {
        let usage = self.ride_duration;
        self.usage_samples.push(usage);
        self.usage_count += 1;
        self.popularity += 1;

        let record = RideRecord { attraction: self.name.clone(), wait, usage };

        // Riders granted before a window opened may still finish during it;
        // only an operational attraction can start a new window, so at most
        // one reopening is ever pending.
        if self.status == AttractionStatus::Operational
            && self.usage_count % self.maintenance_threshold == 0
        {
            self.status = AttractionStatus::Maintenance;
            info!(
                attraction = %self.name,
                rides = self.usage_count,
                window = self.maintenance_duration,
                "attraction entering maintenance"
            );
            (record, Some(self.maintenance_duration))
        } else {
            (record, None)
        }
    }

    /// End the maintenance window and accept riders again
    pub fn reopen(&mut self) {
        debug_assert_eq!(self.status, AttractionStatus::Maintenance);
        self.status = AttractionStatus::Operational;
        info!(attraction = %self.name, "attraction back in operation");
    }

    /// Derived statistics; nothing here is stored redundantly
    pub fn statistics(&self) -> AttractionStats {
        AttractionStats {
            name: self.name.clone(),
            visitors: self.usage_count,
            avg_wait: mean(&self.wait_samples),
            avg_usage: mean(&self.usage_samples),
            popularity: self.popularity,
            status: self.status,
        }
    }
}

fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        0.0
    } else {
        samples.iter().sum::<f64>() / samples.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn test_attraction(threshold: u64) -> (Attraction, PoolStore) {
        let mut pools = PoolStore::new();
        let mut rng = StdRng::seed_from_u64(7);
        let config = AttractionConfig {
            name: "Test Coaster".to_string(),
            module_capacity: 1,
            staff_capacity: 1,
            ride_duration: 10.0,
            eligible_categories: vec![VisitorCategory::Adult],
        };
        let attraction = Attraction::new(
            AttractionId(0),
            &config,
            &mut pools,
            (threshold, threshold),
            (30.0, 30.0),
            &mut rng,
        );
        (attraction, pools)
    }

    #[test]
    fn test_eligibility_gate() {
        let (attraction, _pools) = test_attraction(5);
        assert!(attraction.can_board(VisitorCategory::Adult));
        assert!(!attraction.can_board(VisitorCategory::Child));
        assert!(!attraction.can_board(VisitorCategory::Senior));
    }

    #[test]
    fn test_maintenance_triggers_on_threshold_multiples() {
        let (mut attraction, _pools) = test_attraction(5);

        for ride in 1..=4 {
            let (_, window) = attraction.finish_ride(0.0);
            assert!(window.is_none(), "ride {} should not trigger maintenance", ride);
            assert_eq!(attraction.status(), AttractionStatus::Operational);
        }

        let (_, window) = attraction.finish_ride(0.0);
        assert_eq!(window, Some(30.0));
        assert_eq!(attraction.status(), AttractionStatus::Maintenance);
        assert!(!attraction.can_board(VisitorCategory::Adult));

        attraction.reopen();
        assert_eq!(attraction.status(), AttractionStatus::Operational);
        assert!(attraction.can_board(VisitorCategory::Adult));

        // Rides 6..=9 stay open, the 10th flips again
        for _ in 6..=9 {
            let (_, window) = attraction.finish_ride(0.0);
            assert!(window.is_none());
        }
        let (_, window) = attraction.finish_ride(0.0);
        assert_eq!(window, Some(30.0));
        assert_eq!(attraction.usage_count(), 10);
    }

    #[test]
    fn test_ride_record_contents() {
        let (mut attraction, _pools) = test_attraction(100);
        let (record, window) = attraction.finish_ride(7.5);
        assert_eq!(record.attraction, "Test Coaster");
        assert_eq!(record.wait, 7.5);
        assert_eq!(record.usage, 10.0);
        assert!(window.is_none());
    }

    #[test]
    fn test_statistics_are_derived() {
        let (mut attraction, _pools) = test_attraction(100);

        attraction.record_wait(4.0);
        attraction.finish_ride(4.0);
        attraction.record_wait(8.0);
        attraction.finish_ride(8.0);

        let stats = attraction.statistics();
        assert_eq!(stats.visitors, 2);
        assert_eq!(stats.avg_wait, 6.0);
        assert_eq!(stats.avg_usage, 10.0);
        assert_eq!(stats.popularity, 2);
        assert_eq!(stats.status, AttractionStatus::Operational);
    }

    #[test]
    fn test_empty_statistics() {
        let (attraction, _pools) = test_attraction(5);
        let stats = attraction.statistics();
        assert_eq!(stats.visitors, 0);
        assert_eq!(stats.avg_wait, 0.0);
        assert_eq!(stats.avg_usage, 0.0);
    }
}
