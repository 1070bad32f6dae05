//! Infrastructure implementation of the `VmGateway` port over the Azure CLI.
//!
//! `AzCliGateway<R>` routes every `az vm` call through a `CommandRunner`, so
//! tests can inject a scripted runner without spawning real processes.

use std::process::Output;

use anyhow::Context;

use crate::application::ports::{CommandRunner, VmGateway};
use crate::domain::{AzvmConfig, GatewayError, ResourceId, VmDetails};
use crate::infra::command_runner::TokioCommandRunner;

/// JMESPath query selecting `[name, <PowerState/* displayStatus>]`.
pub const INSTANCE_VIEW_QUERY: &str = "[name, (instanceView.statuses[?code.starts_with(@, 'PowerState/')].displayStatus | [0])]";

/// Azure CLI adapter for the three remote VM operations.
pub struct AzCliGateway<R: CommandRunner> {
    runner: R,
    az_path: String,
    wait: bool,
}

impl<R: CommandRunner> AzCliGateway<R> {
    /// Create a gateway over an explicit runner.
    ///
    /// When `wait` is `false`, start and deallocate pass `--no-wait` and
    /// return as soon as Azure accepts the request.
    pub fn new(runner: R, az_path: impl Into<String>, wait: bool) -> Self {
        Self {
            runner,
            az_path: az_path.into(),
            wait,
        }
    }

    async fn change_power_state(&self, verb: &str, id: &ResourceId) -> Result<(), GatewayError> {
        let mut args = vec!["vm", verb, "--ids", id.as_str()];
        if !self.wait {
            args.push("--no-wait");
        }
        let output = self
            .runner
            .run(&self.az_path, &args)
            .await
            .with_context(|| format!("az vm {verb}"))
            .map_err(|e| GatewayError::Execution(format!("{e:#}")))?;
        check_status(&output)
    }
}

impl AzCliGateway<TokioCommandRunner> {
    /// Convenience constructor for production use.
    #[must_use]
    pub fn from_config(config: &AzvmConfig) -> Self {
        let timeout = std::time::Duration::from_secs(config.command_timeout_secs);
        Self::new(
            TokioCommandRunner::new(timeout),
            config.az_path.clone(),
            config.wait_for_completion,
        )
    }
}

impl<R: CommandRunner> VmGateway for AzCliGateway<R> {
    async fn query_status(&self, id: &ResourceId) -> VmDetails {
        let args = [
            "vm",
            "get-instance-view",
            "--ids",
            id.as_str(),
            "--query",
            INSTANCE_VIEW_QUERY,
            "-o",
            "tsv",
        ];
        match self.runner.run(&self.az_path, &args).await {
            Ok(output) if output.status.success() => {
                VmDetails::from_query_output(&String::from_utf8_lossy(&output.stdout))
            }
            Ok(output) => {
                tracing::debug!(
                    %id,
                    code = ?output.status.code(),
                    stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                    "az vm get-instance-view failed"
                );
                VmDetails::query_failed()
            }
            Err(e) => {
                tracing::debug!(%id, error = %e, "az vm get-instance-view could not run");
                VmDetails::query_failed()
            }
        }
    }

    async fn start(&self, id: &ResourceId) -> Result<(), GatewayError> {
        self.change_power_state("start", id).await
    }

    async fn deallocate(&self, id: &ResourceId) -> Result<(), GatewayError> {
        self.change_power_state("deallocate", id).await
    }
}

fn check_status(output: &Output) -> Result<(), GatewayError> {
    if output.status.success() {
        return Ok(());
    }
    Err(GatewayError::CommandFailed {
        code: output
            .status
            .code()
            .map_or_else(|| "signal".to_string(), |c| c.to_string()),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    })
}
