// Shared dashboard view state
use super::alert::AlertLog;
use super::telemetry::{HealthStatus, LinkStatus, OptimizationSample, TelemetrySample};
use super::window::TrimWindow;
use chrono::{DateTime, Local};

/// Everything the dashboard views render. The poller is the only writer;
/// views see snapshots through a watch channel.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub latest: TelemetrySample,
    pub health: HealthStatus,
    pub link: LinkStatus,
    pub alerts: AlertLog,
    pub actual_trims: TrimWindow,
    pub predicted_trims: TrimWindow,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            latest: TelemetrySample::default(),
            health: HealthStatus::Normal,
            link: LinkStatus::Stale,
            alerts: AlertLog::new(),
            actual_trims: TrimWindow::new(),
            predicted_trims: TrimWindow::new(),
        }
    }

    /// Merge a successful leak-oracle reading: overwrite the latest sample,
    /// recompute the health label, and record an alert if the sample is
    /// anomalous.
    pub fn apply_telemetry(&mut self, sample: TelemetrySample, at: DateTime<Local>) {
        self.latest = sample;
        self.health = HealthStatus::from_sample(&sample);
        self.link = LinkStatus::Live;
        if sample.anomaly {
            self.alerts
                .push(format!("Leak Detected (Score: {:.4})", sample.score), at);
        }
    }

    /// Merge a successful optimization reading into the trim windows.
    pub fn apply_optimization(&mut self, sample: OptimizationSample) {
        self.actual_trims.push(sample.actual);
        self.predicted_trims.push(sample.predicted);
    }

    /// A leak poll failed; keep last-known-good data but flag the link.
    pub fn mark_stale(&mut self) {
        self.link = LinkStatus::Stale;
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
