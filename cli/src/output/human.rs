//! Human-readable terminal renderer for menus and the status table.

use console::measure_text_width;
use owo_colors::{OwoColorize as _, Style};

use crate::application::ports::ViewRenderer;
use crate::domain::{FilteredView, PowerState};
use crate::output::{OutputContext, Styles};

const HEADERS: [&str; 3] = ["VM", "Name", "Power State"];

/// Renders menus and filtered views using `OutputContext` styles.
///
/// Menus and tables are the interactive surface, so they are printed even
/// in quiet mode.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }
}

impl ViewRenderer for HumanRenderer<'_> {
    fn render_menu(&self, title: &str, options: &[&str]) {
        println!();
        println!("{title}");
        for (i, option) in options.iter().enumerate() {
            println!("{}. {option}", i + 1);
        }
    }

    fn render_view(&self, view: &FilteredView<'_>) {
        println!();
        for line in format_table(view, &self.ctx.styles) {
            println!("{line}");
        }
    }
}

/// Table title for a view, e.g. `VM Status Summary (Running)`.
#[must_use]
pub fn table_title(view: &FilteredView<'_>) -> String {
    format!("VM Status Summary ({})", view.category().title())
}

/// Style used for a power-state cell.
#[must_use]
pub fn power_state_style(state: &PowerState, styles: &Styles) -> Style {
    match state {
        PowerState::Running(_) => styles.success,
        PowerState::Deallocated(_) => styles.warning,
        PowerState::Error => styles.error,
        PowerState::Unavailable | PowerState::Other(_) => styles.dim,
    }
}

/// Lay out the view as a title, header, rule, and one line per row.
///
/// Rows show the scan ordinal, not the position within the view.
#[must_use]
pub fn format_table(view: &FilteredView<'_>, styles: &Styles) -> Vec<String> {
    let cells: Vec<[String; 3]> = view
        .rows()
        .iter()
        .map(|s| {
            [
                s.ordinal.to_string(),
                s.name.clone(),
                s.power_state.label().to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(measure_text_width);
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(measure_text_width(cell));
        }
    }

    let mut lines = Vec::with_capacity(cells.len() + 3);
    lines.push(format!("  {}", table_title(view).style(styles.header)));
    lines.push(format!(
        "  {}  {}  {}",
        pad(HEADERS[0], widths[0]).style(styles.dim),
        pad(HEADERS[1], widths[1]).style(styles.dim),
        HEADERS[2].style(styles.dim),
    ));
    lines.push(format!(
        "  {}  {}  {}",
        "─".repeat(widths[0]),
        "─".repeat(widths[1]),
        "─".repeat(widths[2]),
    ));

    for (snapshot, row) in view.rows().iter().zip(&cells) {
        let state_style = power_state_style(&snapshot.power_state, styles);
        lines.push(format!(
            "  {}  {}  {}",
            pad(&row[0], widths[0]).style(styles.row),
            pad(&row[1], widths[1]).style(styles.name),
            row[2].style(state_style),
        ));
    }

    if cells.is_empty() {
        lines.push(format!("  {}", "No VMs match this filter.".style(styles.dim)));
    }
    lines
}

/// Pad by display width so wide characters keep the columns aligned.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(measure_text_width(text));
    format!("{text}{}", " ".repeat(fill))
}
