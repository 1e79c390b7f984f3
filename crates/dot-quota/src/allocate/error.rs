use std::fmt;

/// Error type for allocation configuration.
///
/// Raised before any sample is processed. Running out of a color is not an
/// error; it is reported through [`AllocationResult`](super::AllocationResult).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocateError {
    /// Quota per color must be at least 1
    InvalidQuota {
        /// The rejected quota
        quota: u32,
    },
}

impl fmt::Display for AllocateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocateError::InvalidQuota { quota } => {
                write!(f, "quota per color must be positive, got {}", quota)
            }
        }
    }
}

impl std::error::Error for AllocateError {}
