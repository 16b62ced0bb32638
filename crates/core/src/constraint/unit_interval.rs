use std::cmp::Ordering;

use num_traits::Float;

use crate::constraint::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value lies in the closed unit interval: `0 ≤ x ≤ 1`.
///
/// # Examples
///
/// ```
/// use roadload_core::constraint::{Constrained, UnitInterval};
///
/// let throttle = UnitInterval::new(0.2).unwrap();
/// assert_eq!(throttle.into_inner(), 0.2);
///
/// // Both endpoints are included.
/// assert!(Constrained::<f64, UnitInterval>::new(0.0).is_ok());
/// assert!(Constrained::<f64, UnitInterval>::new(1.0).is_ok());
///
/// assert!(UnitInterval::new(1.5).is_err());
/// assert!(UnitInterval::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitInterval;

impl UnitInterval {
    /// Constructs `Constrained<T, UnitInterval>` if 0 ≤ value ≤ 1.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: Float>(value: T) -> Result<Constrained<T, UnitInterval>, ConstraintError> {
        Constrained::<T, UnitInterval>::new(value)
    }
}

impl<T: Float> Constraint<T> for UnitInterval {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_endpoints_and_interior() {
        for value in [0.0, 0.2, 0.5, 1.0] {
            assert!(UnitInterval::new(value).is_ok(), "{value} should be accepted");
        }
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert_eq!(
            UnitInterval::new(-0.01).unwrap_err(),
            ConstraintError::BelowMinimum
        );
        assert_eq!(
            UnitInterval::new(1.01).unwrap_err(),
            ConstraintError::AboveMaximum
        );
        assert_eq!(
            UnitInterval::new(f64::INFINITY).unwrap_err(),
            ConstraintError::AboveMaximum
        );
    }

    #[test]
    fn rejects_nan() {
        assert_eq!(
            UnitInterval::new(f64::NAN).unwrap_err(),
            ConstraintError::NotANumber
        );
    }
}
