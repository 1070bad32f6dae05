//! Application service: the interactive menu loop.
//!
//! Owns the current `StatusSet` for the duration of one filter-menu cycle and
//! passes it by reference to the filter and action controller. A new scan
//! replaces it wholesale.

use anyhow::Result;

use crate::application::ports::{
    OperatorInput, ProgressReporter, ScanProgress, ViewRenderer, VmGateway,
};
use crate::application::services::{action, scan};
use crate::domain::menu::{
    FILTER_MENU, FilterChoice, MAIN_MENU, MainChoice, parse_filter_choice, parse_main_choice,
};
use crate::domain::{ResourceId, StatusSet};

/// Everything the operator sees and types through.
pub trait Console: OperatorInput + ProgressReporter + ScanProgress + ViewRenderer {}

/// Blanket implementation: any type implementing all four sub-traits is a `Console`.
impl<T> Console for T where T: OperatorInput + ProgressReporter + ScanProgress + ViewRenderer {}

/// Run the main menu until the operator chooses Exit.
///
/// # Errors
///
/// Returns an error only if operator input cannot be read.
pub async fn run(
    gateway: &impl VmGateway,
    console: &impl Console,
    ids: &[ResourceId],
) -> Result<()> {
    loop {
        console.render_menu("Select an option:", MAIN_MENU);
        let answer = console.read_line("Enter your choice")?;
        match parse_main_choice(&answer) {
            Ok(MainChoice::Scan) => {
                let statuses = scan::scan(gateway, ids, console, console).await;
                filter_menu(gateway, console, &statuses).await?;
            }
            Ok(MainChoice::Exit) => {
                console.info("Exiting.");
                return Ok(());
            }
            Err(e) => console.error(&e.to_string()),
        }
    }
}

/// Show filtered views of one scan until the operator returns to the main menu.
async fn filter_menu(
    gateway: &impl VmGateway,
    console: &impl Console,
    statuses: &StatusSet,
) -> Result<()> {
    loop {
        console.render_menu("Select a filter option:", FILTER_MENU);
        let answer = console.read_line("Enter your filter choice")?;
        match parse_filter_choice(&answer) {
            Ok(FilterChoice::Show(category)) => {
                let view = statuses.filter(category);
                console.render_view(&view);
                action::offer_transition(gateway, &view, console, console).await?;
            }
            Ok(FilterChoice::Return) => return Ok(()),
            Err(e) => console.error(&e.to_string()),
        }
    }
}
