// Prediction service - Use case for gateway predict routes
use crate::application::prediction_oracle::{OracleError, PredictionOracle};
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Dispatches predict requests to the corresponding oracle. Each request is
/// independent and stateless; a semaphore bounds how many oracle processes
/// run at once.
#[derive(Clone)]
pub struct PredictionService {
    leak_oracle: Arc<dyn PredictionOracle>,
    optimization_oracle: Arc<dyn PredictionOracle>,
    spawn_permits: Arc<Semaphore>,
}

impl PredictionService {
    pub fn new(
        leak_oracle: Arc<dyn PredictionOracle>,
        optimization_oracle: Arc<dyn PredictionOracle>,
        max_concurrent: usize,
    ) -> Self {
        Self {
            leak_oracle,
            optimization_oracle,
            spawn_permits: Arc::new(Semaphore::new(max_concurrent)),
        }
    }

    pub async fn predict_leak(&self) -> Result<serde_json::Value, OracleError> {
        let _permit = self.acquire().await;
        self.leak_oracle.invoke().await
    }

    pub async fn predict_optimization(&self) -> Result<serde_json::Value, OracleError> {
        let _permit = self.acquire().await;
        self.optimization_oracle.invoke().await
    }

    async fn acquire(&self) -> tokio::sync::OwnedSemaphorePermit {
        // The semaphore is never closed, so acquire cannot fail
        self.spawn_permits
            .clone()
            .acquire_owned()
            .await
            .expect("oracle semaphore closed")
    }
}
