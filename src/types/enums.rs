//! Enumeration types for the park simulator
//!
//! Visitor categories, admission channels, and attraction status values used
//! throughout the simulation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visitor age categories, used to gate attraction eligibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisitorCategory {
    /// Children
    Child,
    /// Adults
    Adult,
    /// Seniors
    Senior,
}

impl VisitorCategory {
    /// The closed set of categories, in draw order
    pub const ALL: [VisitorCategory; 3] =
        [VisitorCategory::Child, VisitorCategory::Adult, VisitorCategory::Senior];
}

impl fmt::Display for VisitorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisitorCategory::Child => write!(f, "child"),
            VisitorCategory::Adult => write!(f, "adult"),
            VisitorCategory::Senior => write!(f, "senior"),
        }
    }
}

impl FromStr for VisitorCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "child" | "children" => Ok(VisitorCategory::Child),
            "adult" | "adults" => Ok(VisitorCategory::Adult),
            "senior" | "seniors" => Ok(VisitorCategory::Senior),
            _ => Err(format!("Unknown visitor category: {}", s)),
        }
    }
}

/// How a visitor obtained admission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdmissionChannel {
    /// Ticket pre-purchased online; bypasses the counters
    Online,
    /// Ticket bought at a counter on arrival
    WalkUp,
}

impl AdmissionChannel {
    /// Whether this channel paid before arriving at the park
    pub fn is_prepaid(self) -> bool {
        matches!(self, AdmissionChannel::Online)
    }
}

impl fmt::Display for AdmissionChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdmissionChannel::Online => write!(f, "online"),
            AdmissionChannel::WalkUp => write!(f, "walk-up"),
        }
    }
}

/// Operating status of an attraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttractionStatus {
    /// Accepting riders
    Operational,
    /// Closed for a maintenance window; all ride requests are rejected
    Maintenance,
}

impl fmt::Display for AttractionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttractionStatus::Operational => write!(f, "operational"),
            AttractionStatus::Maintenance => write!(f, "maintenance"),
        }
    }
}
