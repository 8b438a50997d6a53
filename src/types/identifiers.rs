//! Unique identifier types for the park simulator
//!
//! Every entity in the simulation is addressed by a small integer newtype.
//! Identifiers are assigned monotonically by their owning component, which
//! keeps runs reproducible under a fixed seed and makes event ordering
//! auditable in logs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a visitor, assigned in arrival order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitorId(pub u64);

impl fmt::Display for VisitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V{}", self.0)
    }
}

/// Unique identifier for a scheduled task (visitor process or arrival generator)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

/// Handle addressing a resource pool inside the [`PoolStore`](crate::engine::PoolStore)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoolId(pub usize);

impl PoolId {
    /// Index of this pool within its store
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Handle addressing an attraction, in park configuration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttractionId(pub usize);

impl AttractionId {
    /// Index of this attraction within the park
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for AttractionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formats() {
        assert_eq!(VisitorId(7).to_string(), "V7");
        assert_eq!(TaskId(0).to_string(), "T0");
        assert_eq!(PoolId(3).to_string(), "P3");
        assert_eq!(AttractionId(12).to_string(), "A12");
    }

    #[test]
    fn test_visitor_ids_order_by_assignment() {
        assert!(VisitorId(1) < VisitorId(2));
        assert!(VisitorId(41) < VisitorId(42));
    }

    #[test]
    fn test_serde_transparent() {
        let id = VisitorId(9);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "9");
        let back: VisitorId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
