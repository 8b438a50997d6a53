//! The visitor record
//!
//! A visitor carries the mutable state the day acts on: satisfaction,
//! fatigue, and the entry/exit timestamps. Satisfaction may go negative
//! internally, since penalties are applied without a floor, but is always
//! reported clamped to [0, 100]. Fatigue only ever grows.

use crate::engine::SimTime;
use crate::types::{AdmissionChannel, VisitorCategory, VisitorId};

/// Fatigue level at which a visitor stops touring
pub const FATIGUE_LIMIT: u32 = 10;

/// Satisfaction at or below which a visitor stops touring
pub const SATISFACTION_EXIT_THRESHOLD: i32 = 30;

const STARTING_SATISFACTION: i32 = 100;

/// One visitor's working state for the day
#[derive(Debug, Clone)]
pub struct Visitor {
    /// Unique id, assigned in arrival order
    pub id: VisitorId,
    /// Age category, gates attraction eligibility
    pub category: VisitorCategory,
    /// How admission was obtained
    pub channel: AdmissionChannel,
    satisfaction: i32,
    fatigue: u32,
    entry_time: Option<SimTime>,
    exit_time: Option<SimTime>,
}

impl Visitor {
    /// A fresh visitor: full satisfaction, no fatigue, not yet inside
    pub fn new(id: VisitorId, category: VisitorCategory, channel: AdmissionChannel) -> Self {
        Self {
            id,
            category,
            channel,
            satisfaction: STARTING_SATISFACTION,
            fatigue: 0,
            entry_time: None,
            exit_time: None,
        }
    }

    /// Raw satisfaction, possibly negative
    pub fn satisfaction(&self) -> i32 {
        self.satisfaction
    }

    /// Satisfaction as reported externally, clamped to [0, 100]
    pub fn reported_satisfaction(&self) -> u32 {
        self.satisfaction.clamp(0, 100) as u32
    }

    /// Current fatigue level
    pub fn fatigue(&self) -> u32 {
        self.fatigue
    }

    /// Lower satisfaction by `amount`, without a floor
    pub fn decay_satisfaction(&mut self, amount: i32) {
        self.satisfaction -= amount;
    }

    /// One more attraction turn's worth of tiredness
    pub fn add_fatigue(&mut self) {
        self.fatigue += 1;
    }

    /// Whether the tour loop should continue another turn
    pub fn wants_to_keep_touring(&self) -> bool {
        self.fatigue < FATIGUE_LIMIT && self.satisfaction > SATISFACTION_EXIT_THRESHOLD
    }

    /// Stamp the moment the visitor passed a turnstile into the park
    pub fn mark_entered(&mut self, now: SimTime) {
        debug_assert!(self.entry_time.is_none(), "entry time is set once");
        self.entry_time = Some(now);
    }

    /// Stamp the moment the visitor left
    pub fn mark_exited(&mut self, now: SimTime) {
        debug_assert!(self.exit_time.is_none(), "exit time is set once");
        self.exit_time = Some(now);
    }

    /// When the visitor entered the park, if they did
    pub fn entry_time(&self) -> Option<SimTime> {
        self.entry_time
    }

    /// When the visitor left, if they have
    pub fn exit_time(&self) -> Option<SimTime> {
        self.exit_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visitor() -> Visitor {
        Visitor::new(VisitorId(0), VisitorCategory::Adult, AdmissionChannel::WalkUp)
    }

    #[test]
    fn test_fresh_visitor() {
        let v = visitor();
        assert_eq!(v.satisfaction(), 100);
        assert_eq!(v.fatigue(), 0);
        assert!(v.wants_to_keep_touring());
        assert!(v.entry_time().is_none());
    }

    #[test]
    fn test_satisfaction_can_go_negative_internally() {
        let mut v = visitor();
        v.decay_satisfaction(130);
        assert_eq!(v.satisfaction(), -30);
        assert_eq!(v.reported_satisfaction(), 0);
    }

    #[test]
    fn test_reported_satisfaction_is_clamped() {
        let mut v = visitor();
        assert_eq!(v.reported_satisfaction(), 100);
        v.decay_satisfaction(55);
        assert_eq!(v.reported_satisfaction(), 45);
        v.decay_satisfaction(100);
        assert_eq!(v.reported_satisfaction(), 0);
    }

    #[test]
    fn test_tour_stops_at_fatigue_limit() {
        let mut v = visitor();
        for _ in 0..FATIGUE_LIMIT - 1 {
            v.add_fatigue();
        }
        assert!(v.wants_to_keep_touring());
        v.add_fatigue();
        assert!(!v.wants_to_keep_touring());
    }

    #[test]
    fn test_tour_stops_at_satisfaction_threshold() {
        let mut v = visitor();
        v.decay_satisfaction(69);
        assert!(v.wants_to_keep_touring());
        // Exactly at the threshold the tour ends
        v.decay_satisfaction(1);
        assert_eq!(v.satisfaction(), SATISFACTION_EXIT_THRESHOLD);
        assert!(!v.wants_to_keep_touring());
    }

    #[test]
    fn test_entry_exit_stamps() {
        let mut v = visitor();
        v.mark_entered(12.5);
        v.mark_exited(300.0);
        assert_eq!(v.entry_time(), Some(12.5));
        assert_eq!(v.exit_time(), Some(300.0));
    }
}
