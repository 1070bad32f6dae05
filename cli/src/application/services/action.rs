//! Application service: guarded start/deallocate for a filtered view.
//!
//! The controller walks a small state machine:
//! `Idle -> Selecting -> Confirming -> Executing -> Reported`. Only two
//! affirmative answers (at `Idle` and `Confirming`) lead to a gateway call,
//! and the call is made exactly once.

use anyhow::Result;

use crate::application::ports::{OperatorInput, ProgressReporter, VmGateway};
use crate::domain::{FilteredView, ResourceId, Transition, is_affirmative};

/// How an action attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The view's category offers no action, or the view is empty.
    NotOffered,
    /// The operator did not want to act.
    Declined,
    /// The operator picked a machine but did not confirm.
    Cancelled,
    /// The request was accepted by the management service.
    Succeeded { transition: Transition, id: ResourceId },
    /// The request failed; `detail` is what the operator was shown.
    Failed {
        transition: Transition,
        id: ResourceId,
        detail: String,
    },
}

enum ActionState<'v> {
    Idle,
    Selecting,
    Confirming(&'v ResourceId),
    Executing(&'v ResourceId),
    Reported(ActionOutcome),
}

/// Offer the view's transition and carry it out if the operator confirms.
///
/// # Errors
///
/// Returns an error only if operator input cannot be read. Gateway failures
/// are reported to the operator and returned as [`ActionOutcome::Failed`].
pub async fn offer_transition(
    gateway: &impl VmGateway,
    view: &FilteredView<'_>,
    input: &impl OperatorInput,
    reporter: &impl ProgressReporter,
) -> Result<ActionOutcome> {
    let Some(transition) = view.category().transition() else {
        return Ok(ActionOutcome::NotOffered);
    };
    if view.is_empty() {
        return Ok(ActionOutcome::NotOffered);
    }

    let mut state = ActionState::Idle;
    loop {
        state = match state {
            ActionState::Idle => {
                let prompt = format!("Do you want to {} a VM? (y/n)", transition.verb());
                if is_affirmative(&input.read_line(&prompt)?) {
                    ActionState::Selecting
                } else {
                    ActionState::Reported(ActionOutcome::Declined)
                }
            }
            ActionState::Selecting => {
                let prompt = format!("Enter the VM number to {}", transition.verb());
                match view.resolve_input(&input.read_line(&prompt)?) {
                    Ok(id) => ActionState::Confirming(id),
                    Err(e) => {
                        reporter.error(&e.to_string());
                        ActionState::Selecting
                    }
                }
            }
            ActionState::Confirming(id) => {
                let prompt = format!(
                    "Are you sure you want to {} this VM? (y/n)",
                    transition.verb()
                );
                if is_affirmative(&input.read_line(&prompt)?) {
                    ActionState::Executing(id)
                } else {
                    ActionState::Reported(ActionOutcome::Cancelled)
                }
            }
            ActionState::Executing(id) => {
                ActionState::Reported(execute(gateway, transition, id, reporter).await)
            }
            ActionState::Reported(outcome) => return Ok(outcome),
        };
    }
}

async fn execute(
    gateway: &impl VmGateway,
    transition: Transition,
    id: &ResourceId,
    reporter: &impl ProgressReporter,
) -> ActionOutcome {
    tracing::info!(%id, ?transition, "requesting power state change");
    let result = match transition {
        Transition::Start => gateway.start(id).await,
        Transition::Deallocate => gateway.deallocate(id).await,
    };
    match result {
        Ok(()) => {
            reporter.success(transition.initiated_message());
            ActionOutcome::Succeeded {
                transition,
                id: id.clone(),
            }
        }
        Err(e) => {
            let detail = format!("{}: {e}", transition.failure_prefix());
            tracing::warn!(%id, error = %e, "power state change failed");
            reporter.error(&detail);
            ActionOutcome::Failed {
                transition,
                id: id.clone(),
                detail,
            }
        }
    }
}
