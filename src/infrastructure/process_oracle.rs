// Child-process oracle implementation
use crate::application::prediction_oracle::{OracleError, PredictionOracle};
use crate::infrastructure::config::OracleCommand;
use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Invokes an oracle by spawning its configured command and buffering its
/// output streams. Each invocation is an independent process with no stdin;
/// the wait is bounded and the child is killed when the bound expires.
pub struct ProcessOracle {
    command: OracleCommand,
    timeout: Duration,
}

impl ProcessOracle {
    pub fn new(command: OracleCommand, timeout: Duration) -> Self {
        Self { command, timeout }
    }
}

#[async_trait]
impl PredictionOracle for ProcessOracle {
    async fn invoke(&self) -> Result<serde_json::Value, OracleError> {
        let child = Command::new(&self.command.program)
            .args(&self.command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        // kill_on_drop reaps the child if the wait is abandoned here
        let output = match timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result?,
            Err(_) => {
                tracing::warn!(
                    program = %self.command.program,
                    "oracle produced no result within {:?}",
                    self.timeout
                );
                return Err(OracleError::TimedOut(self.timeout));
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            tracing::error!(
                program = %self.command.program,
                status = %output.status,
                "oracle process failed: {}",
                stderr.trim_end()
            );
            return Err(OracleError::Failed { details: stderr });
        }

        serde_json::from_str(&stdout).map_err(|err| {
            tracing::warn!(
                program = %self.command.program,
                "oracle output is not valid JSON: {}",
                err
            );
            OracleError::MalformedOutput { details: stdout }
        })
    }
}
