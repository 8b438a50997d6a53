//! Configuration structures for the park simulator
//!
//! The simulation configuration follows a three-layer model: built-in
//! defaults, an optional configuration file (JSON, or the tabular CSV park
//! definition), and command-line overrides, with later layers winning.
//! Construction fails fast: `validate()` rejects any non-positive capacity,
//! duration, or rate before a simulation object is built.

use crate::types::VisitorCategory;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Configuration for a single attraction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttractionConfig {
    /// Display name of the attraction
    pub name: String,
    /// Concurrent ride slots (module pool capacity)
    pub module_capacity: u32,
    /// Concurrent staff slots (independent staff pool capacity)
    pub staff_capacity: u32,
    /// Minutes one ride turn lasts
    pub ride_duration: f64,
    /// Visitor categories allowed to ride
    pub eligible_categories: Vec<VisitorCategory>,
}

/// Configuration for the park simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkConfig {
    /// Attraction definitions
    pub attractions: Vec<AttractionConfig>,

    /// Number of ticket sale counters
    pub counter_capacity: u32,

    /// Number of entry turnstiles
    pub turnstile_capacity: u32,

    /// Price of a walk-up ticket
    pub entry_price: f64,

    /// Base visitor arrival rate, visitors per minute
    pub base_arrival_rate: f64,

    /// Length of the simulated day in minutes
    pub sim_duration: f64,

    /// Hour of day at which the park opens (for clock-face log formatting)
    pub opening_hour: u32,

    /// Probability that an arriving visitor pre-purchased online (0.0-1.0)
    pub online_probability: f64,

    /// Probability that an online purchaser never shows up (0.0-1.0)
    pub no_show_probability: f64,

    /// Inclusive range the per-attraction maintenance ride threshold is drawn from
    pub maintenance_threshold_range: (u64, u64),

    /// Inclusive range, in minutes, the per-attraction maintenance duration is drawn from
    pub maintenance_duration_range: (f64, f64),

    /// Number of consecutive days to simulate
    pub days: usize,

    /// Random seed for reproducible runs
    pub seed: Option<u64>,

    /// Output path for the visitor-record CSV export
    pub export_path: Option<String>,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Attraction definitions
    pub attractions: Option<Vec<AttractionConfig>>,
    /// Number of ticket sale counters
    pub counter_capacity: Option<u32>,
    /// Number of entry turnstiles
    pub turnstile_capacity: Option<u32>,
    /// Price of a walk-up ticket
    pub entry_price: Option<f64>,
    /// Base visitor arrival rate, visitors per minute
    pub base_arrival_rate: Option<f64>,
    /// Length of the simulated day in minutes
    pub sim_duration: Option<f64>,
    /// Hour of day at which the park opens
    pub opening_hour: Option<u32>,
    /// Probability of online pre-purchase
    pub online_probability: Option<f64>,
    /// Probability an online purchaser never shows up
    pub no_show_probability: Option<f64>,
    /// Maintenance threshold draw range
    pub maintenance_threshold_range: Option<(u64, u64)>,
    /// Maintenance duration draw range, minutes
    pub maintenance_duration_range: Option<(f64, f64)>,
    /// Number of consecutive days to simulate
    pub days: Option<usize>,
    /// Random seed for reproducible runs
    pub seed: Option<u64>,
    /// Output path for the visitor-record CSV export
    pub export_path: Option<String>,
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "parksim",
    version,
    about = "Theme park simulator - a discrete-event model of a day of park operation",
    long_about = "Simulates a day of theme park operation: visitors arrive stochastically, \
buy admission, tour capacity-limited attractions, and leave as fatigue builds and \
satisfaction drops. Configuration can come from a JSON file, a tabular CSV park \
definition, or command-line flags (flags win)."
)]
pub struct CliArgs {
    /// Configuration file path (.json or .csv)
    #[arg(short, long, help = "Configuration file path (.json or .csv)")]
    pub config: Option<String>,

    /// Number of ticket sale counters
    #[arg(long, help = "Number of ticket sale counters")]
    pub counter_capacity: Option<u32>,

    /// Number of entry turnstiles
    #[arg(long, help = "Number of entry turnstiles")]
    pub turnstile_capacity: Option<u32>,

    /// Price of a walk-up ticket
    #[arg(long, help = "Price of a walk-up ticket")]
    pub entry_price: Option<f64>,

    /// Base visitor arrival rate in visitors per minute
    #[arg(long, help = "Base arrival rate, visitors per minute")]
    pub base_arrival_rate: Option<f64>,

    /// Length of the simulated day in minutes
    #[arg(long, help = "Simulated day length in minutes")]
    pub sim_duration: Option<f64>,

    /// Probability that a visitor pre-purchased online
    #[arg(long, help = "Probability of online pre-purchase (0.0-1.0)")]
    pub online_probability: Option<f64>,

    /// Number of consecutive days to simulate
    #[arg(long, help = "Number of days to simulate")]
    pub days: Option<usize>,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Output path for the visitor-record CSV export
    #[arg(long, help = "Export visitor records to this CSV path")]
    pub export: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Validate configuration without running the simulation
    #[arg(long, help = "Validate configuration without running")]
    pub dry_run: bool,

    /// Print the default configuration as JSON and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// CSV parsing error
    #[error("Failed to parse CSV configuration: {0}")]
    CsvError(#[from] csv::Error),

    /// A CSV field failed to parse
    #[error("Invalid CSV field in row '{row}': {message}")]
    CsvField {
        /// Name column of the offending row
        row: String,
        /// What failed to parse
        message: String,
    },

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json, .csv)")]
    UnsupportedFormat(String),
}

/// Validation errors for the park configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// No attractions defined
    #[error("At least one attraction must be configured")]
    NoAttractions,

    /// A capacity field is zero
    #[error("{field} for '{name}' must be greater than 0")]
    InvalidCapacity {
        /// Attraction or office the capacity belongs to
        name: String,
        /// Name of the zero-valued field
        field: &'static str,
    },

    /// A duration or rate is non-positive
    #[error("{field} must be positive, got {value}")]
    NonPositive {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Entry price is negative
    #[error("Entry price must be non-negative, got {0}")]
    NegativePrice(f64),

    /// An attraction has no eligible categories
    #[error("Attraction '{0}' must allow at least one visitor category")]
    NoEligibleCategories(String),

    /// A probability is out of range
    #[error("Invalid probability for {field}: {value} (must be between 0.0 and 1.0)")]
    InvalidProbability {
        /// Name of the field with the invalid probability
        field: &'static str,
        /// The invalid value
        value: f64,
    },

    /// A draw range is inverted or degenerate
    #[error("Invalid {field} range: min ({min}) must be positive and <= max ({max})")]
    InvalidRange {
        /// Name of the range field
        field: &'static str,
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },

    /// Days count is invalid
    #[error("Days count must be greater than 0, got {0}")]
    InvalidDaysCount(usize),

    /// Opening hour out of range
    #[error("Opening hour must be below 24, got {0}")]
    InvalidOpeningHour(u32),
}

impl Default for ParkConfig {
    fn default() -> Self {
        Self {
            attractions: vec![
                AttractionConfig {
                    name: "Roller Coaster".to_string(),
                    module_capacity: 2,
                    staff_capacity: 2,
                    ride_duration: 6.0,
                    eligible_categories: vec![VisitorCategory::Adult],
                },
                AttractionConfig {
                    name: "Carousel".to_string(),
                    module_capacity: 3,
                    staff_capacity: 2,
                    ride_duration: 4.0,
                    eligible_categories: vec![
                        VisitorCategory::Child,
                        VisitorCategory::Adult,
                        VisitorCategory::Senior,
                    ],
                },
                AttractionConfig {
                    name: "Ferris Wheel".to_string(),
                    module_capacity: 4,
                    staff_capacity: 2,
                    ride_duration: 8.0,
                    eligible_categories: vec![
                        VisitorCategory::Child,
                        VisitorCategory::Adult,
                        VisitorCategory::Senior,
                    ],
                },
            ],
            counter_capacity: 2,
            turnstile_capacity: 4,
            entry_price: 20.0,
            base_arrival_rate: 0.5,
            sim_duration: 480.0,
            opening_hour: 10,
            online_probability: 0.2,
            no_show_probability: 0.1,
            maintenance_threshold_range: (400, 600),
            maintenance_duration_range: (100.0, 500.0),
            days: 1,
            seed: None,
            export_path: None,
        }
    }
}

impl ParkConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = if let Some(config_path) = &args.config {
            Self::from_file(config_path)?
        } else {
            Self::default()
        };

        Self::apply_cli_overrides(&mut config, args);
        Ok(config)
    }

    /// Load configuration from a file, dispatching on the extension
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some("csv") => Self::from_csv(path),
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Load the tabular park definition.
    ///
    /// Columns: `Name,Modules,Staff,Ride_Minutes,Eligible`. A row whose
    /// `Name` is `CONFIG` carries the park-level values instead, reusing the
    /// numeric columns as counter capacity, turnstile capacity, entry price,
    /// and base arrival rate.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut config = Self { attractions: Vec::new(), ..Self::default() };
        let mut reader = csv::Reader::from_path(path.as_ref())?;

        for record in reader.deserialize() {
            let row: CsvRow = record?;
            if row.name == "CONFIG" {
                config.counter_capacity = parse_field(&row.name, "Modules", &row.modules)?;
                config.turnstile_capacity = parse_field(&row.name, "Staff", &row.staff)?;
                config.entry_price = parse_field(&row.name, "Ride_Minutes", &row.ride_minutes)?;
                config.base_arrival_rate = parse_field(&row.name, "Eligible", &row.eligible)?;
            } else {
                let eligible_categories = row
                    .eligible
                    .split(',')
                    .map(VisitorCategory::from_str)
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|message| ConfigError::CsvField { row: row.name.clone(), message })?;
                config.attractions.push(AttractionConfig {
                    module_capacity: parse_field(&row.name, "Modules", &row.modules)?,
                    staff_capacity: parse_field(&row.name, "Staff", &row.staff)?,
                    ride_duration: parse_field(&row.name, "Ride_Minutes", &row.ride_minutes)?,
                    eligible_categories,
                    name: row.name,
                });
            }
        }

        Ok(config)
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            attractions: config_file.attractions.unwrap_or(defaults.attractions),
            counter_capacity: config_file.counter_capacity.unwrap_or(defaults.counter_capacity),
            turnstile_capacity: config_file
                .turnstile_capacity
                .unwrap_or(defaults.turnstile_capacity),
            entry_price: config_file.entry_price.unwrap_or(defaults.entry_price),
            base_arrival_rate: config_file.base_arrival_rate.unwrap_or(defaults.base_arrival_rate),
            sim_duration: config_file.sim_duration.unwrap_or(defaults.sim_duration),
            opening_hour: config_file.opening_hour.unwrap_or(defaults.opening_hour),
            online_probability: config_file
                .online_probability
                .unwrap_or(defaults.online_probability),
            no_show_probability: config_file
                .no_show_probability
                .unwrap_or(defaults.no_show_probability),
            maintenance_threshold_range: config_file
                .maintenance_threshold_range
                .unwrap_or(defaults.maintenance_threshold_range),
            maintenance_duration_range: config_file
                .maintenance_duration_range
                .unwrap_or(defaults.maintenance_duration_range),
            days: config_file.days.unwrap_or(defaults.days),
            seed: config_file.seed.or(defaults.seed),
            export_path: config_file.export_path.or(defaults.export_path),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.counter_capacity {
            config.counter_capacity = value;
        }
        if let Some(value) = args.turnstile_capacity {
            config.turnstile_capacity = value;
        }
        if let Some(value) = args.entry_price {
            config.entry_price = value;
        }
        if let Some(value) = args.base_arrival_rate {
            config.base_arrival_rate = value;
        }
        if let Some(value) = args.sim_duration {
            config.sim_duration = value;
        }
        if let Some(value) = args.online_probability {
            config.online_probability = value;
        }
        if let Some(value) = args.days {
            config.days = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
        if let Some(value) = args.export {
            config.export_path = Some(value);
        }
    }

    /// Print configuration as pretty JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters, failing fast on the first problem
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.attractions.is_empty() {
            return Err(ConfigValidationError::NoAttractions);
        }

        for attraction in &self.attractions {
            if attraction.module_capacity == 0 {
                return Err(ConfigValidationError::InvalidCapacity {
                    name: attraction.name.clone(),
                    field: "module_capacity",
                });
            }
            if attraction.staff_capacity == 0 {
                return Err(ConfigValidationError::InvalidCapacity {
                    name: attraction.name.clone(),
                    field: "staff_capacity",
                });
            }
            if attraction.ride_duration <= 0.0 {
                return Err(ConfigValidationError::NonPositive {
                    field: "ride_duration",
                    value: attraction.ride_duration,
                });
            }
            if attraction.eligible_categories.is_empty() {
                return Err(ConfigValidationError::NoEligibleCategories(attraction.name.clone()));
            }
        }

        if self.counter_capacity == 0 {
            return Err(ConfigValidationError::InvalidCapacity {
                name: "ticket office".to_string(),
                field: "counter_capacity",
            });
        }
        if self.turnstile_capacity == 0 {
            return Err(ConfigValidationError::InvalidCapacity {
                name: "ticket office".to_string(),
                field: "turnstile_capacity",
            });
        }
        if self.entry_price < 0.0 {
            return Err(ConfigValidationError::NegativePrice(self.entry_price));
        }
        if self.base_arrival_rate <= 0.0 {
            return Err(ConfigValidationError::NonPositive {
                field: "base_arrival_rate",
                value: self.base_arrival_rate,
            });
        }
        if self.sim_duration <= 0.0 {
            return Err(ConfigValidationError::NonPositive {
                field: "sim_duration",
                value: self.sim_duration,
            });
        }

        self.validate_probability("online_probability", self.online_probability)?;
        self.validate_probability("no_show_probability", self.no_show_probability)?;

        let (threshold_min, threshold_max) = self.maintenance_threshold_range;
        if threshold_min == 0 || threshold_min > threshold_max {
            return Err(ConfigValidationError::InvalidRange {
                field: "maintenance_threshold",
                min: threshold_min as f64,
                max: threshold_max as f64,
            });
        }

        let (duration_min, duration_max) = self.maintenance_duration_range;
        if duration_min <= 0.0 || duration_min > duration_max {
            return Err(ConfigValidationError::InvalidRange {
                field: "maintenance_duration",
                min: duration_min,
                max: duration_max,
            });
        }

        if self.days == 0 {
            return Err(ConfigValidationError::InvalidDaysCount(self.days));
        }
        if self.opening_hour >= 24 {
            return Err(ConfigValidationError::InvalidOpeningHour(self.opening_hour));
        }

        Ok(())
    }

    fn validate_probability(
        &self,
        field: &'static str,
        value: f64,
    ) -> Result<(), ConfigValidationError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigValidationError::InvalidProbability { field, value });
        }
        Ok(())
    }
}

/// One row of the tabular park definition
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Modules")]
    modules: String,
    #[serde(rename = "Staff")]
    staff: String,
    #[serde(rename = "Ride_Minutes")]
    ride_minutes: String,
    #[serde(rename = "Eligible")]
    eligible: String,
}

fn parse_field<T: FromStr>(row: &str, field: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::CsvField {
        row: row.to_string(),
        message: format!("{} value '{}' is not valid", field, raw),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_park_config_default() {
        let config = ParkConfig::default();

        assert_eq!(config.attractions.len(), 3);
        assert_eq!(config.counter_capacity, 2);
        assert_eq!(config.turnstile_capacity, 4);
        assert_eq!(config.entry_price, 20.0);
        assert_eq!(config.base_arrival_rate, 0.5);
        assert_eq!(config.sim_duration, 480.0);
        assert_eq!(config.online_probability, 0.2);
        assert_eq!(config.days, 1);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_json_file_loading() {
        let mut temp_file = Builder::new().suffix(".json").tempfile().unwrap();
        let config_json = r#"{
            "counter_capacity": 3,
            "turnstile_capacity": 6,
            "entry_price": 15.5,
            "base_arrival_rate": 1.2,
            "seed": 12345
        }"#;
        temp_file.write_all(config_json.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = ParkConfig::from_file(temp_file.path()).unwrap();

        assert_eq!(config.counter_capacity, 3);
        assert_eq!(config.turnstile_capacity, 6);
        assert_eq!(config.entry_price, 15.5);
        assert_eq!(config.base_arrival_rate, 1.2);
        assert_eq!(config.seed, Some(12345));
        // Defaults fill the unspecified fields
        assert_eq!(config.attractions.len(), 3);
        assert_eq!(config.sim_duration, 480.0);
    }

    #[test]
    fn test_csv_file_loading() {
        let mut temp_file = Builder::new().suffix(".csv").tempfile().unwrap();
        let csv = "Name,Modules,Staff,Ride_Minutes,Eligible\n\
                   CONFIG,3,5,18.0,0.8\n\
                   Roller Coaster,2,2,6.5,adult\n\
                   Carousel,3,1,4.0,\"child,adult,senior\"\n";
        temp_file.write_all(csv.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = ParkConfig::from_file(temp_file.path()).unwrap();

        assert_eq!(config.counter_capacity, 3);
        assert_eq!(config.turnstile_capacity, 5);
        assert_eq!(config.entry_price, 18.0);
        assert_eq!(config.base_arrival_rate, 0.8);
        assert_eq!(config.attractions.len(), 2);
        assert_eq!(config.attractions[0].name, "Roller Coaster");
        assert_eq!(config.attractions[0].eligible_categories, vec![VisitorCategory::Adult]);
        assert_eq!(config.attractions[1].module_capacity, 3);
        assert_eq!(config.attractions[1].eligible_categories.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_csv_rejects_bad_category() {
        let mut temp_file = Builder::new().suffix(".csv").tempfile().unwrap();
        let csv = "Name,Modules,Staff,Ride_Minutes,Eligible\n\
                   Log Flume,2,1,5.0,martian\n";
        temp_file.write_all(csv.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let result = ParkConfig::from_file(temp_file.path());
        assert!(matches!(result, Err(ConfigError::CsvField { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = ParkConfig::from_file("definitely/not/here.json");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_cli_overrides() {
        let args = CliArgs::try_parse_from([
            "parksim",
            "--counter-capacity",
            "7",
            "--entry-price",
            "25.0",
            "--seed",
            "99",
            "--days",
            "3",
        ])
        .unwrap();

        let config = ParkConfig::from_cli_args(args).unwrap();

        assert_eq!(config.counter_capacity, 7);
        assert_eq!(config.entry_price, 25.0);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.days, 3);
        // Non-overridden fields keep defaults
        assert_eq!(config.turnstile_capacity, 4);
    }

    #[test]
    fn test_validation_rejects_zero_capacity() {
        let mut config = ParkConfig::default();
        config.attractions[0].module_capacity = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidCapacity { field: "module_capacity", .. })
        ));

        let mut config = ParkConfig::default();
        config.counter_capacity = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidCapacity { field: "counter_capacity", .. })
        ));
    }

    #[test]
    fn test_validation_rejects_non_positive_durations() {
        let mut config = ParkConfig::default();
        config.attractions[1].ride_duration = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::NonPositive { field: "ride_duration", .. })
        ));

        let mut config = ParkConfig::default();
        config.sim_duration = -10.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::NonPositive { field: "sim_duration", .. })
        ));

        let mut config = ParkConfig::default();
        config.base_arrival_rate = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::NonPositive { field: "base_arrival_rate", .. })
        ));
    }

    #[test]
    fn test_validation_rejects_empty_eligibility() {
        let mut config = ParkConfig::default();
        config.attractions[2].eligible_categories.clear();
        assert!(matches!(config.validate(), Err(ConfigValidationError::NoEligibleCategories(_))));
    }

    #[test]
    fn test_validation_rejects_bad_probability() {
        let mut config = ParkConfig::default();
        config.online_probability = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidProbability { field: "online_probability", .. })
        ));
    }

    #[test]
    fn test_validation_rejects_inverted_ranges() {
        let mut config = ParkConfig::default();
        config.maintenance_threshold_range = (600, 400);
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidRange { .. })));

        let mut config = ParkConfig::default();
        config.maintenance_duration_range = (0.0, 100.0);
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidRange { .. })));
    }

    #[test]
    fn test_config_serialization_round_trip() {
        let config = ParkConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: ParkConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.attractions, back.attractions);
        assert_eq!(config.counter_capacity, back.counter_capacity);
        assert_eq!(config.days, back.days);
    }
}
