//! VM status model: identifiers, power states, snapshots, and filtered views.
//!
//! Pure functions only: no I/O, no async, no process execution.

use std::fmt;

use crate::domain::error::SelectionError;

/// Display name substituted when the remote query omits or fails to return one.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Power-state label substituted when the remote query omits the state line.
pub const UNAVAILABLE_LABEL: &str = "Unavailable";

/// Power-state label used when the remote query itself failed.
pub const ERROR_LABEL: &str = "Error";

const RUNNING_LABEL: &str = "vm running";
const DEALLOCATED_LABEL: &str = "vm deallocated";

// ── Identifier ────────────────────────────────────────────────────────────────

/// Opaque handle naming one machine (an Azure resource ID in practice).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId(String);

impl ResourceId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse the contents of an identifier list file.
///
/// One identifier per line; surrounding whitespace is trimmed and blank lines
/// are skipped. Order and duplicates are preserved.
#[must_use]
pub fn parse_vm_list(content: &str) -> Vec<ResourceId> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ResourceId::new)
        .collect()
}

// ── Power state ───────────────────────────────────────────────────────────────

/// Power state as reported by the management service.
///
/// `Running` and `Deallocated` are recognised by a case-insensitive exact
/// match on the reported label. Every other label is kept verbatim in
/// `Other` so the table shows exactly what the service returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PowerState {
    Running(String),
    Deallocated(String),
    Unavailable,
    Error,
    Other(String),
}

impl PowerState {
    /// Classify a raw power-state label.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let lowered = label.to_lowercase();
        if lowered == RUNNING_LABEL {
            Self::Running(label.to_string())
        } else if lowered == DEALLOCATED_LABEL {
            Self::Deallocated(label.to_string())
        } else if label == UNAVAILABLE_LABEL {
            Self::Unavailable
        } else if label == ERROR_LABEL {
            Self::Error
        } else {
            Self::Other(label.to_string())
        }
    }

    /// The label shown in the status table.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Running(label) | Self::Deallocated(label) | Self::Other(label) => label,
            Self::Unavailable => UNAVAILABLE_LABEL,
            Self::Error => ERROR_LABEL,
        }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of querying one machine: its display name and power state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VmDetails {
    pub name: String,
    pub power_state: PowerState,
}

impl VmDetails {
    /// Placeholder used when the query could not be executed.
    #[must_use]
    pub fn query_failed() -> Self {
        Self {
            name: UNKNOWN_NAME.to_string(),
            power_state: PowerState::Error,
        }
    }

    /// Parse the tab-separated query output: line one is the name, line two
    /// the power-state label. Missing or empty lines fall back to placeholders.
    ///
    /// A null name prints as an empty first line, so leading blank lines are
    /// significant and only trailing line breaks are stripped.
    #[must_use]
    pub fn from_query_output(stdout: &str) -> Self {
        let mut lines = stdout.trim_end_matches(['\r', '\n']).lines().map(str::trim);
        let name = lines
            .next()
            .filter(|l| !l.is_empty())
            .unwrap_or(UNKNOWN_NAME)
            .to_string();
        let power_state = lines
            .next()
            .filter(|l| !l.is_empty())
            .map_or(PowerState::Unavailable, PowerState::from_label);
        Self { name, power_state }
    }
}

// ── Snapshots ─────────────────────────────────────────────────────────────────

/// One row of a completed scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    /// 1-based position within the scan that produced it.
    pub ordinal: usize,
    pub name: String,
    pub power_state: PowerState,
    pub id: ResourceId,
}

/// The complete result of one scan, in source order.
///
/// Only constructed once every identifier has been queried, so a partial
/// scan can never reach the filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSet {
    snapshots: Vec<StatusSnapshot>,
}

impl StatusSet {
    /// Build a set from per-machine details, assigning ordinals `1..=N`.
    #[must_use]
    pub fn from_details(entries: Vec<(ResourceId, VmDetails)>) -> Self {
        let snapshots = entries
            .into_iter()
            .enumerate()
            .map(|(i, (id, details))| StatusSnapshot {
                ordinal: i + 1,
                name: details.name,
                power_state: details.power_state,
                id,
            })
            .collect();
        Self { snapshots }
    }

    #[must_use]
    pub fn snapshots(&self) -> &[StatusSnapshot] {
        &self.snapshots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Select the snapshots matching `category`, keeping their ordinals.
    #[must_use]
    pub fn filter(&self, category: FilterCategory) -> FilteredView<'_> {
        let rows = self
            .snapshots
            .iter()
            .filter(|s| category.matches(&s.power_state))
            .collect();
        FilteredView { category, rows }
    }
}

// ── Filtering ─────────────────────────────────────────────────────────────────

/// Which snapshots to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterCategory {
    All,
    Running,
    Deallocated,
}

impl FilterCategory {
    /// Menu order: 1 = All, 2 = Running, 3 = Deallocated.
    pub const ALL: [Self; 3] = [Self::All, Self::Running, Self::Deallocated];

    #[must_use]
    pub fn matches(self, state: &PowerState) -> bool {
        match self {
            Self::All => true,
            Self::Running => matches!(state, PowerState::Running(_)),
            Self::Deallocated => matches!(state, PowerState::Deallocated(_)),
        }
    }

    /// The single transition offered for a view of this category.
    #[must_use]
    pub fn transition(self) -> Option<Transition> {
        match self {
            Self::All => None,
            Self::Running => Some(Transition::Deallocate),
            Self::Deallocated => Some(Transition::Start),
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Running => "Running",
            Self::Deallocated => "Deallocated",
        }
    }
}

/// Snapshots selected by a category, borrowed from the current scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredView<'a> {
    category: FilterCategory,
    rows: Vec<&'a StatusSnapshot>,
}

impl<'a> FilteredView<'a> {
    #[must_use]
    pub fn category(&self) -> FilterCategory {
        self.category
    }

    #[must_use]
    pub fn rows(&self) -> &[&'a StatusSnapshot] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Resolve a 1-based row number within this view to its identifier.
    ///
    /// The row number is a position in the displayed view, not the scan
    /// ordinal.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::InvalidSelection` when `row` is outside
    /// `1..=len`.
    pub fn resolve(&self, row: i64) -> Result<&'a ResourceId, SelectionError> {
        usize::try_from(row)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| self.rows.get(idx).copied())
            .map(|s| &s.id)
            .ok_or_else(|| SelectionError::InvalidSelection {
                row: row.to_string(),
                max: self.rows.len(),
            })
    }

    /// Parse raw operator text as a row number and resolve it.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::InvalidSelection` for non-numeric text or an
    /// out-of-range row.
    pub fn resolve_input(&self, input: &str) -> Result<&'a ResourceId, SelectionError> {
        let trimmed = input.trim();
        let row = trimmed
            .parse::<i64>()
            .map_err(|_| SelectionError::InvalidSelection {
                row: trimmed.to_string(),
                max: self.rows.len(),
            })?;
        self.resolve(row)
    }
}

// ── Transitions ───────────────────────────────────────────────────────────────

/// A power-state change the operator can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Start,
    Deallocate,
}

impl Transition {
    /// Verb phrase used in prompts: "start", "stop and deallocate".
    #[must_use]
    pub fn verb(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Deallocate => "stop and deallocate",
        }
    }

    /// Notice printed after the request was accepted.
    #[must_use]
    pub fn initiated_message(self) -> &'static str {
        match self {
            Self::Start => "VM start initiated.",
            Self::Deallocate => "VM deallocation initiated.",
        }
    }

    /// Prefix of the error notice when the request failed.
    #[must_use]
    pub fn failure_prefix(self) -> &'static str {
        match self {
            Self::Start => "Error starting VM",
            Self::Deallocate => "Error deallocating VM",
        }
    }
}
