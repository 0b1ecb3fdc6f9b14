// Gateway client trait - the poller's view of the prediction gateway
use crate::domain::telemetry::{OptimizationSample, TelemetrySample};
use async_trait::async_trait;

/// Fetches predictions from the gateway on behalf of the poller. Errors
/// cover both transport failures and payloads the gateway flagged with an
/// `error` field; the poller treats every failure the same way.
#[async_trait]
pub trait GatewayClient: Send + Sync {
    async fn fetch_leak(&self) -> anyhow::Result<TelemetrySample>;

    async fn fetch_optimization(&self) -> anyhow::Result<OptimizationSample>;
}
