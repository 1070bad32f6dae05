//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::application`,
//! `crate::output`, `tokio`, `std::fs`, or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod menu;
pub mod vm;

pub use config::AzvmConfig;
pub use error::{ConfigError, GatewayError, MenuError, SelectionError};
pub use menu::{FilterChoice, MainChoice, is_affirmative};
pub use vm::{
    FilterCategory, FilteredView, PowerState, ResourceId, StatusSet, StatusSnapshot, Transition,
    VmDetails,
};
