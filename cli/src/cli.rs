//! CLI argument parsing with clap derive

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use clap::builder::FalseyValueParser;

use crate::app::{AppContext, OutputFlags};
use crate::application::ports::ConfigStore;
use crate::domain::AzvmConfig;
use crate::infra::config::YamlConfigStore;
use crate::infra::vm_list::FileVmList;

/// Inspect and toggle the power state of Azure virtual machines
#[derive(Parser)]
#[command(name = "azvm", version, about)]
pub struct Cli {
    /// File with one VM resource ID per line (skips the filename prompt)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Filename offered as the default at the prompt
    #[arg(long, value_name = "PATH", env = "AZVM_VM_LIST")]
    pub default_list: Option<String>,

    /// Azure CLI executable
    #[arg(long, value_name = "PATH")]
    pub az: Option<String>,

    /// Timeout for each Azure CLI call, in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Wait for start/deallocate to complete instead of returning immediately
    #[arg(long)]
    pub wait: bool,

    /// Suppress informational notices and warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply CLI overrides on top of the file configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the merged configuration is invalid.
    pub fn merge_config(&self, mut config: AzvmConfig) -> Result<AzvmConfig> {
        if let Some(list) = &self.default_list {
            config.vm_list.clone_from(list);
        }
        if let Some(az) = &self.az {
            config.az_path.clone_from(az);
        }
        if let Some(timeout) = self.timeout {
            config.command_timeout_secs = timeout;
        }
        if self.wait {
            config.wait_for_completion = true;
        }
        config.validate()?;
        Ok(config)
    }

    /// Run the console.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid or the terminal cannot be
    /// read.
    pub async fn run(self) -> Result<()> {
        let config = YamlConfigStore.load().context("loading configuration")?;
        let config = self.merge_config(config)?;
        tracing::debug!(?config, "effective configuration");

        let app = AppContext::new(
            &OutputFlags {
                no_color: self.no_color,
                quiet: self.quiet,
            },
            config,
        );
        let console = app.console();
        let list = app.load_vm_list(&FileVmList, &console, self.file.as_deref())?;
        app.run_session(&console, &list).await
    }
}
