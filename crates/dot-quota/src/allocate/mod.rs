//! Quota-constrained allocation
//!
//! This module assigns samples to palette entries under a fixed per-entry
//! supply, and reports how much of each entry was used and how many samples
//! went without.

mod allocator;
mod error;
mod result;

pub use allocator::{allocate, QuotaAllocator};
pub use error::AllocateError;
pub use result::{AllocationResult, Dot, EntrySummary};
