//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution, the
//! Azure CLI gateway, filesystem access, and terminal input.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::output` are forbidden.

pub mod az;
pub mod command_runner;
pub mod config;
pub mod prompt;
pub mod vm_list;
