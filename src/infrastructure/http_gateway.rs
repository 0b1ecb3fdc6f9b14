// HTTP gateway client implementation
use crate::application::gateway_client::GatewayClient;
use crate::domain::telemetry::{OptimizationSample, TelemetrySample};
use anyhow::Context;
use async_trait::async_trait;
use std::time::Duration;

/// reqwest-backed client for the prediction gateway. Gateway failure bodies
/// carry an `error` field regardless of status code, so the body is decoded
/// first and inspected before the payload is trusted.
pub struct HttpGatewayClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpGatewayClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build gateway HTTP client")?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn fetch_payload(&self, path: &str) -> anyhow::Result<serde_json::Value> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("failed to reach gateway at {url}"))?;

        let payload = response
            .json::<serde_json::Value>()
            .await
            .context("failed to decode gateway response")?;

        if let Some(error) = payload.get("error").and_then(|v| v.as_str()) {
            anyhow::bail!("gateway reported: {error}");
        }

        Ok(payload)
    }
}

#[async_trait]
impl GatewayClient for HttpGatewayClient {
    async fn fetch_leak(&self) -> anyhow::Result<TelemetrySample> {
        let payload = self.fetch_payload("/predict/leak").await?;
        serde_json::from_value(payload).context("unexpected leak payload shape")
    }

    async fn fetch_optimization(&self) -> anyhow::Result<OptimizationSample> {
        let payload = self.fetch_payload("/predict/optimization").await?;
        serde_json::from_value(payload).context("unexpected optimization payload shape")
    }
}
