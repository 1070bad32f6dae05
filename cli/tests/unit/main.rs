//! Unit tests for azvm
//!
//! These tests use mocked ports and run fast without external I/O.

mod property_tests;
mod session_loop;
