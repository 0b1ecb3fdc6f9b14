// Telemetry poller - background loops that keep the view state current
use crate::application::gateway_client::GatewayClient;
use crate::domain::view_state::ViewState;
use chrono::Local;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

#[derive(Debug, Clone, Copy)]
pub struct PollerSettings {
    pub leak_interval: Duration,
    pub optimization_interval: Duration,
}

/// Owns the polling tasks. Dropping the handle without calling `shutdown`
/// leaves the loops running for the life of the runtime.
pub struct PollerHandle {
    shutdown: watch::Sender<bool>,
    tasks: Vec<JoinHandle<()>>,
}

impl PollerHandle {
    /// Stop both loops and wait for them to finish. Any in-flight request is
    /// dropped, so a late response cannot mutate state after shutdown.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(true);
        for task in self.tasks {
            let _ = task.await;
        }
    }
}

/// Timer-driven poller for the two gateway endpoints. The poller is the only
/// writer of the `ViewState` watch channel; every reader holds a receiver.
pub struct TelemetryPoller;

impl TelemetryPoller {
    pub fn spawn(
        client: Arc<dyn GatewayClient>,
        settings: PollerSettings,
    ) -> (watch::Receiver<ViewState>, PollerHandle) {
        let (state_tx, state_rx) = watch::channel(ViewState::new());
        let state_tx = Arc::new(state_tx);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let leak_task = tokio::spawn(run_leak_loop(
            client.clone(),
            state_tx.clone(),
            settings.leak_interval,
            shutdown_rx.clone(),
        ));
        let optimization_task = tokio::spawn(run_optimization_loop(
            client,
            state_tx,
            settings.optimization_interval,
            shutdown_rx,
        ));

        (
            state_rx,
            PollerHandle {
                shutdown: shutdown_tx,
                tasks: vec![leak_task, optimization_task],
            },
        )
    }
}

/// Poll the leak endpoint. Failures are swallowed: the view keeps its
/// last-known-good data, the link is flagged stale, and the next tick is the
/// implicit retry. Each request completes before the next tick is taken, so
/// a slow response cannot be overtaken by a later one.
async fn run_leak_loop(
    client: Arc<dyn GatewayClient>,
    state: Arc<watch::Sender<ViewState>>,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = shutdown.changed() => return,
        }
        tokio::select! {
            result = client.fetch_leak() => match result {
                Ok(sample) => {
                    state.send_modify(|view| view.apply_telemetry(sample, Local::now()));
                }
                Err(err) => {
                    tracing::debug!("leak poll failed: {err:#}");
                    state.send_modify(|view| view.mark_stale());
                }
            },
            _ = shutdown.changed() => return,
        }
    }
}

/// Poll the optimization endpoint and feed the trim windows. On failure the
/// windows are left unchanged.
async fn run_optimization_loop(
    client: Arc<dyn GatewayClient>,
    state: Arc<watch::Sender<ViewState>>,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = shutdown.changed() => return,
        }
        tokio::select! {
            result = client.fetch_optimization() => match result {
                Ok(sample) => {
                    state.send_modify(|view| view.apply_optimization(sample));
                }
                Err(err) => {
                    tracing::debug!("optimization poll failed: {err:#}");
                }
            },
            _ = shutdown.changed() => return,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::telemetry::{LinkStatus, OptimizationSample, TelemetrySample};
    use crate::domain::window::TRIM_WINDOW_SIZE;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::sleep;

    struct ScriptedGateway {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl GatewayClient for ScriptedGateway {
        async fn fetch_leak(&self) -> anyhow::Result<TelemetrySample> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(TelemetrySample {
                rpm: 2500.0,
                lambda: 1.02,
                map: 45.0,
                speed: 60.0,
                score: 0.31,
                anomaly: true,
            })
        }

        async fn fetch_optimization(&self) -> anyhow::Result<OptimizationSample> {
            Ok(OptimizationSample {
                actual: 3.2,
                predicted: 2.9,
            })
        }
    }

    struct UnreachableGateway;

    #[async_trait]
    impl GatewayClient for UnreachableGateway {
        async fn fetch_leak(&self) -> anyhow::Result<TelemetrySample> {
            anyhow::bail!("connection refused")
        }

        async fn fetch_optimization(&self) -> anyhow::Result<OptimizationSample> {
            anyhow::bail!("connection refused")
        }
    }

    fn fast_settings() -> PollerSettings {
        PollerSettings {
            leak_interval: Duration::from_millis(10),
            optimization_interval: Duration::from_millis(10),
        }
    }

    #[tokio::test]
    async fn test_merges_successful_polls_into_view_state() {
        let gateway = Arc::new(ScriptedGateway {
            calls: AtomicUsize::new(0),
        });
        let (rx, handle) = TelemetryPoller::spawn(gateway.clone(), fast_settings());

        sleep(Duration::from_millis(100)).await;

        {
            let view = rx.borrow();
            assert_eq!(view.latest.rpm, 2500.0);
            assert_eq!(view.link, LinkStatus::Live);
            assert!(!view.alerts.is_empty());
            assert_eq!(view.actual_trims.values()[TRIM_WINDOW_SIZE - 1], 3.2);
        }

        handle.shutdown().await;
    }

    #[tokio::test]
    async fn test_failures_leave_state_unchanged_but_stale() {
        let (rx, handle) = TelemetryPoller::spawn(Arc::new(UnreachableGateway), fast_settings());

        sleep(Duration::from_millis(60)).await;

        {
            let view = rx.borrow();
            assert_eq!(view.link, LinkStatus::Stale);
            assert_eq!(view.latest, TelemetrySample::default());
            assert!(view.alerts.is_empty());
            assert!(view.actual_trims.values().iter().all(|v| *v == 0.0));
        }

        handle.shutdown().await;
    }

    #[tokio::test]
    async fn test_shutdown_stops_polling() {
        let gateway = Arc::new(ScriptedGateway {
            calls: AtomicUsize::new(0),
        });
        let (_rx, handle) = TelemetryPoller::spawn(gateway.clone(), fast_settings());

        sleep(Duration::from_millis(50)).await;
        handle.shutdown().await;

        let calls_at_shutdown = gateway.calls.load(Ordering::SeqCst);
        assert!(calls_at_shutdown > 0);

        sleep(Duration::from_millis(50)).await;
        assert_eq!(gateway.calls.load(Ordering::SeqCst), calls_at_shutdown);
    }
}
