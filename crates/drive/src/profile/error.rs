use roadload_core::constraint::ConstraintError;
use thiserror::Error;

/// Errors returned when building a throttle or grade profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("profile has no breakpoints")]
    Empty,

    #[error("breakpoint {index} does not come after the previous one")]
    Unordered { index: usize },

    #[error("breakpoint {index} is not finite")]
    NotFinite { index: usize },

    #[error("throttle at breakpoint {index} is outside [0, 1]: {source}")]
    Throttle {
        index: usize,
        source: ConstraintError,
    },
}
