//! Unit tests for the interactive menu loop.

#![allow(clippy::expect_used)]

use azvm_cli::application::services::session;
use azvm_cli::domain::FilterCategory;

use crate::helpers::{GatewayCall, RenderedView, ScriptedConsole, alpha_beta_fleet, ids};

#[tokio::test]
async fn exit_immediately_without_scanning() {
    let gw = alpha_beta_fleet();
    let console = ScriptedConsole::new(&["2"]);

    session::run(&gw, &console, &ids(&["vm1"]))
        .await
        .expect("session");

    assert!(gw.calls().is_empty());
    assert_eq!(*console.menus.borrow(), ["Select an option:"]);
}

#[tokio::test]
async fn filter_menu_reuses_one_scan() {
    let gw = alpha_beta_fleet();
    // scan, show all, show running (decline), show deallocated (decline), return, exit
    let console = ScriptedConsole::new(&["1", "1", "2", "n", "3", "n", "4", "2"]);

    session::run(&gw, &console, &ids(&["vm1", "vm2", "vm3"]))
        .await
        .expect("session");

    let queries = gw
        .calls()
        .iter()
        .filter(|c| matches!(c, GatewayCall::Query(_)))
        .count();
    assert_eq!(queries, 3, "filters must not rescan");
    assert_eq!(
        console.views(),
        [
            RenderedView {
                category: FilterCategory::All,
                ordinals: vec![1, 2, 3],
            },
            RenderedView {
                category: FilterCategory::Running,
                ordinals: vec![1],
            },
            RenderedView {
                category: FilterCategory::Deallocated,
                ordinals: vec![2],
            },
        ]
    );
    assert!(gw.transition_calls().is_empty());
}

#[tokio::test]
async fn each_scan_request_rescans_everything() {
    let gw = alpha_beta_fleet();
    let console = ScriptedConsole::new(&["1", "4", "1", "4", "2"]);

    session::run(&gw, &console, &ids(&["vm1", "vm2"]))
        .await
        .expect("session");

    assert_eq!(gw.calls().len(), 4);
}

#[tokio::test]
async fn invalid_menu_input_is_rejected_and_reprompted() {
    let gw = alpha_beta_fleet();
    let console = ScriptedConsole::new(&["abc", "0", "3", "1", "x", "9", "4", "2"]);

    session::run(&gw, &console, &ids(&["vm1"]))
        .await
        .expect("session");

    let errors = console.errors();
    assert_eq!(errors.len(), 5);
    assert_eq!(errors[0], "Invalid input. Please enter a number.");
    assert_eq!(
        errors[1],
        "Invalid option. Please choose a number between 1 and 2."
    );
    assert_eq!(
        errors[4],
        "Invalid option. Please choose a number between 1 and 4."
    );
}

#[tokio::test]
async fn scan_filter_and_start_end_to_end() {
    let gw = alpha_beta_fleet();
    // scan, show deallocated, act, row 1, confirm, return, exit
    let console = ScriptedConsole::new(&["1", "3", "y", "1", "y", "4", "2"]);

    session::run(&gw, &console, &ids(&["vm1", "vm2", "vm3"]))
        .await
        .expect("session");

    assert_eq!(gw.transition_calls(), [GatewayCall::Start("vm2".into())]);
    assert!(
        console
            .successes()
            .contains(&"VM start initiated.".to_string())
    );
    assert_eq!(console.remaining_answers(), 0);
}

#[tokio::test]
async fn action_failure_keeps_session_alive() {
    let gw = alpha_beta_fleet().failing_transitions("QuotaExceeded");
    let console = ScriptedConsole::new(&["1", "2", "y", "1", "y", "1", "4", "2"]);

    session::run(&gw, &console, &ids(&["vm1", "vm2"]))
        .await
        .expect("session continues after a failed action");

    assert_eq!(gw.transition_calls(), [GatewayCall::Deallocate("vm1".into())]);
    assert!(console.errors().iter().any(|e| e.contains("QuotaExceeded")));
    assert_eq!(console.views().len(), 2);
}

#[tokio::test]
async fn closed_input_ends_session_with_error() {
    let gw = alpha_beta_fleet();
    let console = ScriptedConsole::new(&["1"]);

    let result = session::run(&gw, &console, &ids(&["vm1"])).await;

    assert!(result.is_err());
}
