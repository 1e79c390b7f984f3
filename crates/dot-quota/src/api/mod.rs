//! Public API for the dot-quota crate.
//!
//! This module provides the high-level API: [`DotPlanner`] builder and
//! [`PlanError`] unified error type.

mod builder;
mod error;

pub use builder::{DotPlanner, DEFAULT_QUOTA};
pub use error::PlanError;
