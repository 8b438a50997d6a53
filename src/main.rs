// Theme Park Simulator - Main Entry Point
//
// Run it via Cargo:
//
// ```console
// $ cargo run --release
// ```
//
// Or with custom configuration:
//
// ```console
// $ cargo run --release -- --config park.json --days 7 --seed 42 --verbose
// ```

use anyhow::Context;
use clap::Parser;
use parksim::analysis;
use parksim::types::config::CliArgs;
use parksim::{DataCollector, LoggingConfig, ParkConfig, ParkSimulation};
use std::process;
use tracing::{error, info};

fn main() {
    let args = CliArgs::parse();

    if args.print_config {
        match ParkConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        LoggingConfig::new().with_level(tracing::Level::WARN).init()
    };
    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let dry_run = args.dry_run;
    let config = match ParkConfig::from_cli_args(args) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }
    info!("Configuration loaded and validated");

    if dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - simulation will not be executed.");
        return;
    }

    if let Err(e) = run_simulation(config) {
        error!("Simulation failed: {:#}", e);
        process::exit(1);
    }
}

/// Simulate the configured number of days and print per-day plus combined
/// summaries
fn run_simulation(config: ParkConfig) -> anyhow::Result<()> {
    let mut daily_collectors = Vec::with_capacity(config.days);
    let mut total_revenue = 0.0;

    for day in 0..config.days {
        println!("\nSimulating day {} of {}", day + 1, config.days);

        let day_config = ParkConfig {
            // Each day gets its own derived seed so days differ but the
            // whole run stays reproducible
            seed: config.seed.map(|seed| seed.wrapping_add(day as u64)),
            ..config.clone()
        };

        let mut sim = ParkSimulation::new(day_config)
            .with_context(|| format!("failed to build simulation for day {}", day + 1))?;
        sim.run();
        info!(
            day = day + 1,
            visitors = sim.collector().visits().len(),
            closing = %analysis::format_clock(config.opening_hour, sim.config().sim_duration),
            "day complete"
        );

        analysis::print_attraction_stats(&sim.attraction_stats());
        analysis::print_summary(&format!("day {}", day + 1), sim.collector(), sim.office());

        total_revenue += sim.office().revenue();
        daily_collectors.push(sim.into_collector());
    }

    if config.days > 1 {
        let combined = DataCollector::combine(daily_collectors.iter());
        println!("\n=== Combined report over {} days ===", config.days);
        println!("  Total counter revenue: {:.2}", total_revenue);
        println!("  Total visits recorded: {}", combined.visits().len());
        println!("  Online sales: {}", combined.prepaid_sales());
        println!("  Ticket office sales: {}", combined.counter_sales());
        println!("  Visitors who did not enter: {}", combined.admission_failures());
        match combined.avg_counter_wait() {
            Some(wait) => println!("  Average wait at the ticket office: {:.2} minutes", wait),
            None => println!("  Average wait at the ticket office: N/A"),
        }
    }

    if let Some(path) = &config.export_path {
        let combined = DataCollector::combine(daily_collectors.iter());
        combined
            .export_csv(path)
            .with_context(|| format!("failed to export visitor records to {}", path))?;
        println!("\nVisitor records exported to {}", path);
    }

    Ok(())
}
