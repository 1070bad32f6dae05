//! Application context: unified state built once at startup.
//!
//! `AppContext` owns the output context, the resolved configuration, and the
//! Azure gateway. `TerminalConsole` bundles the presentation and input
//! adapters into the single `Console` the session loop talks to.

use anyhow::Result;

use crate::application::ports::{
    OperatorInput, ProgressReporter, ScanProgress, ViewRenderer, VmListSource,
};
use crate::application::services::session;
use crate::application::services::vm_list::{self, LoadedList};
use crate::domain::{AzvmConfig, FilteredView};
use crate::infra::az::AzCliGateway;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::prompt::TerminalInput;
use crate::output::{HumanRenderer, OutputContext, TerminalReporter};

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress informational notices and warnings.
    pub quiet: bool,
}

/// Unified application context.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Effective configuration after CLI overrides.
    pub config: AzvmConfig,
    /// Azure CLI gateway.
    pub gateway: AzCliGateway<TokioCommandRunner>,
}

impl AppContext {
    /// Construct an `AppContext` from a validated configuration.
    #[must_use]
    pub fn new(flags: &OutputFlags, config: AzvmConfig) -> Self {
        Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            gateway: AzCliGateway::from_config(&config),
            config,
        }
    }

    /// Presentation and input adapters bound to this context.
    #[must_use]
    pub fn console(&self) -> TerminalConsole<'_> {
        TerminalConsole {
            reporter: TerminalReporter::new(&self.output),
            renderer: HumanRenderer::new(&self.output),
            input: TerminalInput::new(),
        }
    }

    /// Load the identifier list, from `preset` if given, else by prompting.
    ///
    /// A preset that does not exist falls back to the prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if operator input cannot be read or an existing file
    /// cannot be read.
    pub fn load_vm_list(
        &self,
        source: &impl VmListSource,
        console: &TerminalConsole<'_>,
        preset: Option<&std::path::Path>,
    ) -> Result<LoadedList> {
        if let Some(path) = preset
            && let Some(list) = vm_list::try_load(source, path, console)?
        {
            return Ok(list);
        }
        vm_list::prompt_for_list(source, console, console, &self.config.vm_list)
    }

    /// Run the interactive session over `list`.
    ///
    /// # Errors
    ///
    /// Returns an error if operator input cannot be read.
    pub async fn run_session(
        &self,
        console: &TerminalConsole<'_>,
        list: &LoadedList,
    ) -> Result<()> {
        console.info(&format!(
            "Loaded {} VM(s) from {}",
            list.ids.len(),
            list.path.display()
        ));
        session::run(&self.gateway, console, &list.ids).await
    }
}

/// The terminal as seen by the session loop.
pub struct TerminalConsole<'a> {
    reporter: TerminalReporter<'a>,
    renderer: HumanRenderer<'a>,
    input: TerminalInput,
}

impl OperatorInput for TerminalConsole<'_> {
    fn read_line(&self, prompt: &str) -> Result<String> {
        self.input.read_line(prompt)
    }
}

impl ProgressReporter for TerminalConsole<'_> {
    fn info(&self, message: &str) {
        self.reporter.info(message);
    }

    fn success(&self, message: &str) {
        self.reporter.success(message);
    }

    fn warn(&self, message: &str) {
        self.reporter.warn(message);
    }

    fn error(&self, message: &str) {
        self.reporter.error(message);
    }
}

impl ScanProgress for TerminalConsole<'_> {
    fn begin(&self, total: usize) {
        self.reporter.begin(total);
    }

    fn advance(&self, completed: usize, total: usize) {
        self.reporter.advance(completed, total);
    }

    fn finish(&self) {
        self.reporter.finish();
    }
}

impl ViewRenderer for TerminalConsole<'_> {
    fn render_menu(&self, title: &str, options: &[&str]) {
        self.renderer.render_menu(title, options);
    }

    fn render_view(&self, view: &FilteredView<'_>) {
        self.renderer.render_view(view);
    }
}
