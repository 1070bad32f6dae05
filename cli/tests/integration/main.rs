//! Integration tests for azvm
//!
//! These tests spawn the actual binary against a fake `az` script and drive
//! the console through piped stdin.

mod cli_tests;
mod session_tests;
