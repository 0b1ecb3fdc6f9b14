// View models - pure projections of the shared view state
use crate::domain::alert::Alert;
use crate::domain::telemetry::{HealthStatus, LinkStatus};
use crate::domain::view_state::ViewState;
use serde::Serialize;

/// Top-level dashboard summary.
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub health: HealthStatus,
    pub link: LinkStatus,
    pub rpm: f64,
    pub speed: f64,
    pub map: f64,
    pub score: f64,
    pub anomaly: bool,
}

/// Leak-detection detail: latest metrics plus the alert history.
#[derive(Debug, Serialize)]
pub struct LeakDetailView {
    pub health: HealthStatus,
    pub link: LinkStatus,
    pub rpm: f64,
    pub lambda: f64,
    pub map: f64,
    pub score: f64,
    pub anomaly: bool,
    pub alerts: Vec<Alert>,
}

/// Trim chart data: the two sliding windows, oldest first.
#[derive(Debug, Serialize)]
pub struct OptimizationChartView {
    pub actual: Vec<f64>,
    pub predicted: Vec<f64>,
}

pub fn dashboard_view(state: &ViewState) -> DashboardView {
    DashboardView {
        health: state.health,
        link: state.link,
        rpm: state.latest.rpm,
        speed: state.latest.speed,
        map: state.latest.map,
        score: state.latest.score,
        anomaly: state.latest.anomaly,
    }
}

pub fn leak_detail_view(state: &ViewState) -> LeakDetailView {
    LeakDetailView {
        health: state.health,
        link: state.link,
        rpm: state.latest.rpm,
        lambda: state.latest.lambda,
        map: state.latest.map,
        score: state.latest.score,
        anomaly: state.latest.anomaly,
        alerts: state.alerts.to_vec(),
    }
}

pub fn optimization_chart_view(state: &ViewState) -> OptimizationChartView {
    OptimizationChartView {
        actual: state.actual_trims.values(),
        predicted: state.predicted_trims.values(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::telemetry::TelemetrySample;
    use crate::domain::window::TRIM_WINDOW_SIZE;
    use chrono::{Local, TimeZone};

    #[test]
    fn test_views_reflect_merged_sample() {
        let mut state = ViewState::new();
        let at = Local.timestamp_millis_opt(1_700_000_000_000).unwrap();
        state.apply_telemetry(
            TelemetrySample {
                rpm: 2500.0,
                lambda: 1.02,
                map: 45.0,
                speed: 60.0,
                score: 0.31,
                anomaly: true,
            },
            at,
        );

        let dashboard = dashboard_view(&state);
        assert_eq!(dashboard.health, HealthStatus::Critical);
        assert_eq!(dashboard.rpm, 2500.0);

        let detail = leak_detail_view(&state);
        assert_eq!(detail.lambda, 1.02);
        assert_eq!(detail.alerts.len(), 1);
    }

    #[test]
    fn test_chart_view_carries_full_windows() {
        let state = ViewState::new();
        let chart = optimization_chart_view(&state);
        assert_eq!(chart.actual.len(), TRIM_WINDOW_SIZE);
        assert_eq!(chart.predicted.len(), TRIM_WINDOW_SIZE);
    }
}
