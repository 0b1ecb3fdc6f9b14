// Oracle trait - seam between the gateway and the external predictors
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Ways a single oracle invocation can fail. Each variant maps to a distinct
/// HTTP failure body; none are retried.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("failed to launch oracle process: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("oracle exited with non-zero status")]
    Failed { details: String },

    #[error("oracle produced output that is not valid JSON")]
    MalformedOutput { details: String },

    #[error("oracle produced no result within {0:?}")]
    TimedOut(Duration),
}

/// An external predictive model invoked on demand. Implementations emit one
/// JSON document per invocation; the document's schema is the oracle's own
/// contract and is passed through verbatim.
#[async_trait]
pub trait PredictionOracle: Send + Sync {
    async fn invoke(&self) -> Result<serde_json::Value, OracleError>;
}
