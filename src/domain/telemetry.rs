// Telemetry data domain models
use serde::{Deserialize, Serialize};

/// One reading from the leak-detection oracle. Fields absent from the wire
/// payload deserialize to zero/false.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetrySample {
    pub rpm: f64,
    pub lambda: f64,
    pub map: f64,
    pub speed: f64,
    pub score: f64,
    pub anomaly: bool,
}

/// One reading from the fuel-trim optimization oracle, both values in
/// fuel-trim percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizationSample {
    pub actual: f64,
    pub predicted: f64,
}

/// Dashboard health label. Live data only ever produces Normal or Critical;
/// Warning is part of the display contract but has no live producer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    Normal,
    Warning,
    Critical,
}

impl HealthStatus {
    pub fn from_sample(sample: &TelemetrySample) -> Self {
        if sample.anomaly {
            HealthStatus::Critical
        } else {
            HealthStatus::Normal
        }
    }
}

/// Whether the poller is currently receiving data from the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkStatus {
    Live,
    Stale,
}
