//! Visit records and the statistics collector
//!
//! The `DataCollector` is the downstream consumer of everything the core
//! reports: final visit summaries, admission failures, prepaid sales,
//! counter waits, and an optional fine-grained journey log. It stores and
//! derives; it never feeds back into the simulation. Collectors from
//! several simulated days can be merged for a combined report, and visit
//! records export to CSV.

use crate::engine::SimTime;
use crate::types::{AdmissionChannel, VisitorCategory, VisitorId};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Final per-visitor summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitRecord {
    /// Visitor id
    pub id: VisitorId,
    /// Visitor category
    pub category: VisitorCategory,
    /// Admission channel
    pub channel: AdmissionChannel,
    /// Completed rides
    pub attractions_visited: u64,
    /// Minutes between entering and leaving; zero when never admitted
    pub total_time: f64,
    /// Mean ride queueing time, minutes
    pub avg_wait: f64,
    /// Mean ride time, minutes
    pub avg_usage: f64,
    /// Satisfaction on leaving, clamped to [0, 100]
    pub final_satisfaction: u32,
    /// Whether the visitor made it into the park
    pub entered: bool,
}

/// One fine-grained journey log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneyEntry {
    /// Virtual instant of the event
    pub time: SimTime,
    /// Visitor the event belongs to
    pub visitor: VisitorId,
    /// What happened
    pub event: String,
}

/// Collects everything the simulation core reports
#[derive(Debug, Clone, Default, Serialize)]
pub struct DataCollector {
    visits: Vec<VisitRecord>,
    journey_log: Vec<JourneyEntry>,
    admission_failures: u64,
    prepaid_sales: u64,
    prepaid_redeemed: u64,
    counter_waits: Vec<f64>,
}

impl DataCollector {
    /// An empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a final per-visitor summary
    pub fn register_visit(&mut self, record: VisitRecord) {
        self.visits.push(record);
    }

    /// Record a visitor who gave up before entering
    pub fn register_admission_failure(&mut self) {
        self.admission_failures += 1;
    }

    /// Record an online ticket sale, redeemed or not
    pub fn register_prepaid_sale(&mut self, redeemed: bool) {
        self.prepaid_sales += 1;
        if redeemed {
            self.prepaid_redeemed += 1;
        }
    }

    /// Record how long a visitor queued for a sale counter
    pub fn register_counter_wait(&mut self, minutes: f64) {
        self.counter_waits.push(minutes);
    }

    /// Append a fine-grained journey entry
    pub fn log_event(&mut self, entry: JourneyEntry) {
        self.journey_log.push(entry);
    }

    /// All visit records, in completion order
    pub fn visits(&self) -> &[VisitRecord] {
        &self.visits
    }

    /// The fine-grained journey log
    pub fn journey_log(&self) -> &[JourneyEntry] {
        &self.journey_log
    }

    /// Visitors who gave up at the ticket queue
    pub fn admission_failures(&self) -> u64 {
        self.admission_failures
    }

    /// Online tickets sold
    pub fn prepaid_sales(&self) -> u64 {
        self.prepaid_sales
    }

    /// Online tickets actually redeemed at a turnstile
    pub fn prepaid_redeemed(&self) -> u64 {
        self.prepaid_redeemed
    }

    /// Tickets sold at the counters (walk-ups who entered)
    pub fn counter_sales(&self) -> u64 {
        self.visits
            .iter()
            .filter(|v| v.entered && v.channel == AdmissionChannel::WalkUp)
            .count() as u64
    }

    /// Visitors who made it inside
    pub fn entered_count(&self) -> u64 {
        self.visits.iter().filter(|v| v.entered).count() as u64
    }

    /// Mean counter queueing time, if anyone queued
    pub fn avg_counter_wait(&self) -> Option<f64> {
        if self.counter_waits.is_empty() {
            None
        } else {
            Some(self.counter_waits.iter().sum::<f64>() / self.counter_waits.len() as f64)
        }
    }

    /// Merge several collectors (one per simulated day) into one
    pub fn combine<'a>(collectors: impl IntoIterator<Item = &'a DataCollector>) -> Self {
        let mut combined = Self::new();
        for collector in collectors {
            combined.visits.extend(collector.visits.iter().cloned());
            combined.journey_log.extend(collector.journey_log.iter().cloned());
            combined.admission_failures += collector.admission_failures;
            combined.prepaid_sales += collector.prepaid_sales;
            combined.prepaid_redeemed += collector.prepaid_redeemed;
            combined.counter_waits.extend(collector.counter_waits.iter().copied());
        }
        combined
    }

    /// Export visit records to a CSV file
    pub fn export_csv<P: AsRef<Path>>(&self, path: P) -> Result<(), csv::Error> {
        let mut writer = csv::Writer::from_path(path)?;
        for record in &self.visits {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, channel: AdmissionChannel, entered: bool) -> VisitRecord {
        VisitRecord {
            id: VisitorId(id),
            category: VisitorCategory::Adult,
            channel,
            attractions_visited: 2,
            total_time: 45.0,
            avg_wait: 3.0,
            avg_usage: 6.0,
            final_satisfaction: 40,
            entered,
        }
    }

    #[test]
    fn test_sales_breakdown() {
        let mut collector = DataCollector::new();
        collector.register_visit(record(0, AdmissionChannel::WalkUp, true));
        collector.register_visit(record(1, AdmissionChannel::Online, true));
        collector.register_visit(record(2, AdmissionChannel::WalkUp, false));
        collector.register_prepaid_sale(true);
        collector.register_prepaid_sale(false);
        collector.register_admission_failure();

        assert_eq!(collector.counter_sales(), 1);
        assert_eq!(collector.entered_count(), 2);
        assert_eq!(collector.prepaid_sales(), 2);
        assert_eq!(collector.prepaid_redeemed(), 1);
        assert_eq!(collector.admission_failures(), 1);
    }

    #[test]
    fn test_counter_wait_average() {
        let mut collector = DataCollector::new();
        assert!(collector.avg_counter_wait().is_none());

        collector.register_counter_wait(0.0);
        collector.register_counter_wait(4.0);
        collector.register_counter_wait(8.0);
        assert_eq!(collector.avg_counter_wait(), Some(4.0));
    }

    #[test]
    fn test_combine_adds_everything_up() {
        let mut day1 = DataCollector::new();
        day1.register_visit(record(0, AdmissionChannel::WalkUp, true));
        day1.register_prepaid_sale(true);
        day1.register_counter_wait(2.0);

        let mut day2 = DataCollector::new();
        day2.register_visit(record(1, AdmissionChannel::Online, true));
        day2.register_visit(record(2, AdmissionChannel::WalkUp, true));
        day2.register_admission_failure();
        day2.register_counter_wait(6.0);

        let week = DataCollector::combine([&day1, &day2]);
        assert_eq!(week.visits().len(), 3);
        assert_eq!(week.prepaid_sales(), 1);
        assert_eq!(week.admission_failures(), 1);
        assert_eq!(week.avg_counter_wait(), Some(4.0));
    }

    #[test]
    fn test_journey_log() {
        let mut collector = DataCollector::new();
        collector.log_event(JourneyEntry {
            time: 12.0,
            visitor: VisitorId(3),
            event: "entered park".to_string(),
        });
        assert_eq!(collector.journey_log().len(), 1);
        assert_eq!(collector.journey_log()[0].visitor, VisitorId(3));
    }

    #[test]
    fn test_csv_export() {
        let mut collector = DataCollector::new();
        collector.register_visit(record(0, AdmissionChannel::WalkUp, true));
        collector.register_visit(record(1, AdmissionChannel::Online, true));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("visits.csv");
        collector.export_csv(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("id,category,channel,"));
        assert_eq!(contents.lines().count(), 3);
    }
}
