//! Menu choices and yes/no answers parsed from raw operator text.

use crate::domain::error::MenuError;
use crate::domain::vm::FilterCategory;

/// Entries of the main menu, in display order.
pub const MAIN_MENU: &[&str] = &["Scan and View Status", "Exit"];

/// Entries of the filter menu, in display order.
pub const FILTER_MENU: &[&str] = &[
    "Show all",
    "Show running",
    "Show deallocated",
    "Return to main menu",
];

/// Parsed main menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    Scan,
    Exit,
}

/// Parsed filter menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterChoice {
    Show(FilterCategory),
    Return,
}

/// Parse a 1-based menu index in `1..=max`.
///
/// # Errors
///
/// Returns `MenuError::NotANumber` for non-integer text and
/// `MenuError::OutOfRange` for integers outside the menu.
pub fn parse_index(input: &str, max: usize) -> Result<usize, MenuError> {
    let n: i64 = input.trim().parse().map_err(|_| MenuError::NotANumber)?;
    usize::try_from(n)
        .ok()
        .filter(|n| (1..=max).contains(n))
        .ok_or(MenuError::OutOfRange { max })
}

/// Parse a main menu answer.
///
/// # Errors
///
/// See [`parse_index`].
pub fn parse_main_choice(input: &str) -> Result<MainChoice, MenuError> {
    match parse_index(input, MAIN_MENU.len())? {
        1 => Ok(MainChoice::Scan),
        _ => Ok(MainChoice::Exit),
    }
}

/// Parse a filter menu answer.
///
/// # Errors
///
/// See [`parse_index`].
pub fn parse_filter_choice(input: &str) -> Result<FilterChoice, MenuError> {
    let idx = parse_index(input, FILTER_MENU.len())?;
    Ok(FilterCategory::ALL
        .get(idx - 1)
        .map_or(FilterChoice::Return, |c| FilterChoice::Show(*c)))
}

/// Only a case-insensitive `y` counts as yes.
#[must_use]
pub fn is_affirmative(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}
