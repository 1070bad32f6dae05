//! Domain types and validators for azvm configuration.
//!
//! Pure functions only: no I/O, no async, no filesystem access.

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

/// Identifier list offered at the filename prompt when nothing else is set.
pub const DEFAULT_VM_LIST: &str = "manage_vmlist.txt";

/// Default Azure CLI executable.
pub const DEFAULT_AZ_PATH: &str = "az";

/// Default per-command timeout in seconds.
pub const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 120;

/// Top-level configuration stored in `~/.azvm/config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AzvmConfig {
    /// Default identifier list file.
    pub vm_list: String,
    /// Azure CLI executable name or path.
    pub az_path: String,
    /// Timeout applied to every `az` invocation.
    pub command_timeout_secs: u64,
    /// Await completion of start/deallocate instead of passing `--no-wait`.
    pub wait_for_completion: bool,
}

impl Default for AzvmConfig {
    fn default() -> Self {
        Self {
            vm_list: DEFAULT_VM_LIST.to_string(),
            az_path: DEFAULT_AZ_PATH.to_string(),
            command_timeout_secs: DEFAULT_COMMAND_TIMEOUT_SECS,
            wait_for_completion: false,
        }
    }
}

impl AzvmConfig {
    /// Validate values that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for a zero timeout or an empty `az_path`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.command_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(self.command_timeout_secs));
        }
        if self.az_path.trim().is_empty() {
            return Err(ConfigError::EmptyAzPath);
        }
        Ok(())
    }
}
