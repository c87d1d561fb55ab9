use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Metrics collected while scanning units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanMetrics {
    /// Total units attempted
    pub units_attempted: usize,

    /// Units scanned to the end
    pub units_succeeded: usize,

    /// Units that failed to read
    pub units_failed: usize,

    /// Total time spent scanning
    #[serde(with = "duration_millis")]
    pub total_scan_time: Duration,

    /// Total classes extracted
    pub total_classes: usize,

    /// Total member variables extracted
    pub total_members: usize,

    /// Total member functions extracted
    pub total_methods: usize,

    /// Base class names pruned during resolution
    pub unresolved_bases: usize,
}

// Helper module for serializing Duration
mod duration_millis {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (duration.as_millis() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis: u64 = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

impl Default for ScanMetrics {
    fn default() -> Self {
        Self {
            units_attempted: 0,
            units_succeeded: 0,
            units_failed: 0,
            total_scan_time: Duration::ZERO,
            total_classes: 0,
            total_members: 0,
            total_methods: 0,
            unresolved_bases: 0,
        }
    }
}

impl ScanMetrics {
    /// Success rate (0.0 to 1.0)
    pub fn success_rate(&self) -> f64 {
        if self.units_attempted == 0 {
            0.0
        } else {
            self.units_succeeded as f64 / self.units_attempted as f64
        }
    }

    /// Average scan time per unit
    pub fn avg_scan_time(&self) -> Duration {
        if self.units_succeeded == 0 {
            Duration::ZERO
        } else {
            self.total_scan_time / self.units_succeeded as u32
        }
    }

    /// Average classes per unit
    pub fn avg_classes_per_unit(&self) -> f64 {
        if self.units_succeeded == 0 {
            0.0
        } else {
            self.total_classes as f64 / self.units_succeeded as f64
        }
    }

    /// Merge another metrics object into this one
    pub fn merge(&mut self, other: &ScanMetrics) {
        self.units_attempted += other.units_attempted;
        self.units_succeeded += other.units_succeeded;
        self.units_failed += other.units_failed;
        self.total_scan_time += other.total_scan_time;
        self.total_classes += other.total_classes;
        self.total_members += other.total_members;
        self.total_methods += other.total_methods;
        self.unresolved_bases += other.unresolved_bases;
    }
}
