//! Application service: sequential status scan over the identifier list.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use crate::application::ports::{ProgressReporter, ScanProgress, VmGateway};
use crate::domain::{PowerState, ResourceId, StatusSet};

/// Message emitted once a scan has queried every machine.
pub const SCAN_COMPLETED: &str = "VM status scan completed.";

/// Notice shown for a machine whose status could not be retrieved.
#[must_use]
pub fn query_failed_message(id: &ResourceId) -> String {
    format!("Could not retrieve status for {id}")
}

/// Query every identifier in order and return the complete status set.
///
/// Queries are issued one at a time; each is awaited before the next starts.
/// Per-machine failures become `Error` rows plus a warning notice and never
/// abort the scan.
pub async fn scan(
    gateway: &impl VmGateway,
    ids: &[ResourceId],
    progress: &impl ScanProgress,
    reporter: &impl ProgressReporter,
) -> StatusSet {
    let total = ids.len();
    progress.begin(total);

    let mut entries = Vec::with_capacity(total);
    for (i, id) in ids.iter().enumerate() {
        let details = gateway.query_status(id).await;
        if details.power_state == PowerState::Error {
            reporter.warn(&query_failed_message(id));
        }
        entries.push((id.clone(), details));
        progress.advance(i + 1, total);
    }

    progress.finish();
    reporter.success(SCAN_COMPLETED);
    StatusSet::from_details(entries)
}
