use num_traits::Float;

use crate::constraint::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a finite value is greater than zero.
///
/// Infinity is rejected along with NaN, because every quantity this marker
/// guards ends up as a divisor or a step size.
///
/// # Examples
///
/// ```
/// use roadload_core::constraint::StrictlyPositive;
///
/// let dt = StrictlyPositive::new(0.01).unwrap();
/// assert_eq!(dt.into_inner(), 0.01);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::INFINITY).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs `Constrained<T, StrictlyPositive>` if the value is finite and positive.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::NotANumber`] if the value is NaN.
    /// - [`ConstraintError::NotFinite`] if the value is infinite.
    /// - [`ConstraintError::Zero`] if the value is zero.
    /// - [`ConstraintError::Negative`] if the value is negative.
    pub fn new<T: Float>(value: T) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: Float> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if value.is_infinite() {
            Err(ConstraintError::NotFinite)
        } else if value.is_zero() {
            Err(ConstraintError::Zero)
        } else if value.is_sign_negative() {
            Err(ConstraintError::Negative)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_values() {
        assert!(StrictlyPositive::new(1e-12).is_ok());
        assert!(StrictlyPositive::new(2000.0_f32).is_ok());
    }

    #[test]
    fn rejects_zero_of_either_sign() {
        assert_eq!(StrictlyPositive::new(0.0).unwrap_err(), ConstraintError::Zero);
        assert_eq!(StrictlyPositive::new(-0.0).unwrap_err(), ConstraintError::Zero);
    }

    #[test]
    fn rejects_negative_and_non_finite_values() {
        assert_eq!(
            StrictlyPositive::new(-10.0).unwrap_err(),
            ConstraintError::Negative
        );
        assert_eq!(
            StrictlyPositive::new(f64::NAN).unwrap_err(),
            ConstraintError::NotANumber
        );
        assert_eq!(
            StrictlyPositive::new(f64::NEG_INFINITY).unwrap_err(),
            ConstraintError::NotFinite
        );
    }
}
