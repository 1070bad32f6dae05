//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure and presentation
//! must fulfill. This file imports only from `crate::domain`, never from
//! `crate::infra` or `crate::output`.

use std::path::{Path, PathBuf};
use std::process::Output;

use anyhow::Result;

use crate::domain::{AzvmConfig, FilteredView, GatewayError, ResourceId, VmDetails};

// ── Remote State Gateway ──────────────────────────────────────────────────────

/// The three remote operations the console performs against one machine.
#[allow(async_fn_in_trait)]
pub trait VmGateway {
    /// Query display name and power state.
    ///
    /// Infallible: execution failures map to [`VmDetails::query_failed`] so a
    /// single unreachable machine never aborts a scan.
    async fn query_status(&self, id: &ResourceId) -> VmDetails;
    /// Request that the machine be powered on.
    async fn start(&self, id: &ResourceId) -> Result<(), GatewayError>;
    /// Request that the machine be powered off and released.
    async fn deallocate(&self, id: &ResourceId) -> Result<(), GatewayError>;
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds the
    /// runner's timeout. On timeout, the child process must be killed (not
    /// left orphaned).
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
}

// ── Identifier Source ─────────────────────────────────────────────────────────

/// Produces the ordered identifier list from a named source.
pub trait VmListSource {
    /// Whether `path` names an existing source.
    fn exists(&self, path: &Path) -> bool;
    /// Load the identifiers in file order.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read.
    fn load(&self, path: &Path) -> Result<Vec<ResourceId>>;
}

// ── Configuration Port ────────────────────────────────────────────────────────

/// Abstracts loading of the optional configuration file.
pub trait ConfigStore {
    /// Load configuration, returning defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load(&self) -> Result<AzvmConfig>;
    /// Location of the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}

// ── Operator Input ────────────────────────────────────────────────────────────

/// Line-oriented source of raw operator text.
pub trait OperatorInput {
    /// Show `prompt` and return the line typed by the operator.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read (e.g. stdin closed).
    fn read_line(&self, prompt: &str) -> Result<String>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts operator notices so services can emit events without depending
/// on the Presentation layer. Sync trait, no async needed.
pub trait ProgressReporter {
    /// Emit a neutral informational message.
    fn info(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
    /// Emit an error message. Never suppressed.
    fn error(&self, message: &str);
}

/// Incremental progress of a scan.
pub trait ScanProgress {
    /// A scan over `total` machines is starting.
    fn begin(&self, total: usize);
    /// `completed` of `total` machines have been queried.
    fn advance(&self, completed: usize, total: usize);
    /// The scan finished; clear any in-place indicator.
    fn finish(&self);
}

// ── Presentation Port ─────────────────────────────────────────────────────────

/// Renders menus and status tables.
pub trait ViewRenderer {
    /// Print a titled, 1-based numbered menu.
    fn render_menu(&self, title: &str, options: &[&str]);
    /// Print the status table for a filtered view.
    fn render_view(&self, view: &FilteredView<'_>);
}
