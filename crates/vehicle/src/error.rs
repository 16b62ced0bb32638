use roadload_core::constraint::ConstraintError;
use thiserror::Error;

/// Errors raised when a [`VehicleConfig`](crate::VehicleConfig) cannot
/// produce a well-defined model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A divisor or step size is zero, negative, or not finite.
    #[error("`{field}` must be strictly positive: {source}")]
    NotPositive {
        field: &'static str,
        source: ConstraintError,
    },

    /// A parameter or initial condition is NaN or infinite.
    #[error("`{field}` must be finite")]
    NotFinite { field: &'static str },
}

/// Errors raised by [`VehicleModel::step`](crate::VehicleModel::step).
///
/// Every check runs before the state is touched, so a rejected step leaves
/// the model exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StepError {
    /// The slip ratio divides by velocity, which is exactly zero.
    #[error("velocity is zero, so the slip ratio is undefined")]
    ZeroVelocity,

    /// Integrating from `velocity` would land on exactly zero, where the slip
    /// ratio is undefined. The model keeps its pre-step state and cannot
    /// advance until [`reset`](crate::VehicleModel::reset).
    #[error("velocity {velocity} m/s would integrate to exactly zero; step not applied")]
    IntegratedToZero { velocity: f64 },

    /// The throttle command lies outside `[0, 1]` or is NaN.
    #[error("throttle {value} is outside [0, 1]")]
    Throttle {
        value: f64,
        source: ConstraintError,
    },

    /// The grade angle is NaN or infinite.
    #[error("grade angle {value} is not finite")]
    Grade { value: f64 },
}
