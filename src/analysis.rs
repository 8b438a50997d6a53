//! Console summaries of a simulated day
//!
//! Pure consumers of the collected statistics: the per-day sales summary,
//! the attraction table, and clock-face formatting of virtual minutes.
//! Nothing here feeds back into the simulation core.

use crate::data::DataCollector;
use crate::engine::SimTime;
use crate::park::{AttractionStats, TicketOffice};
use chrono::{Duration, NaiveTime};

/// Render a virtual instant as wall-clock `HH:MM`, counting from the
/// park's opening hour
pub fn format_clock(opening_hour: u32, minutes: SimTime) -> String {
    let opening = NaiveTime::from_hms_opt(opening_hour, 0, 0).unwrap_or_default();
    let time = opening + Duration::seconds((minutes * 60.0) as i64);
    time.format("%H:%M").to_string()
}

/// Print the per-attraction statistics table
pub fn print_attraction_stats(stats: &[AttractionStats]) {
    println!("\nAttraction statistics:");
    for entry in stats {
        println!(
            "  {} -> Visitors: {} | Avg Wait: {:.2} | Avg Usage: {:.2} | Popularity: {} | Status: {}",
            entry.name, entry.visitors, entry.avg_wait, entry.avg_usage, entry.popularity,
            entry.status
        );
    }
}

/// Print the sales and admissions summary for one day (or a combined
/// period when `collector` holds several days)
pub fn print_summary(label: &str, collector: &DataCollector, office: &TicketOffice) {
    println!("\nSummary for {}:", label);
    println!("  Online sales: {}", collector.prepaid_sales());
    println!("  Ticket office sales: {}", collector.counter_sales());
    println!("  Total sales: {}", collector.prepaid_sales() + collector.counter_sales());
    println!("  Redeemed online entries: {}", collector.prepaid_redeemed());
    println!(
        "  Unredeemed online entries: {}",
        collector.prepaid_sales() - collector.prepaid_redeemed()
    );
    println!("  Visitors who did not enter: {}", collector.admission_failures());
    println!("  Counter revenue: {:.2}", office.revenue());
    match collector.avg_counter_wait() {
        Some(wait) => println!("  Average wait at the ticket office: {:.2} minutes", wait),
        None => println!("  Average wait at the ticket office: N/A"),
    }
}
