/// A trait for states that can be advanced using their derivative.
///
/// Implementing this trait lets a simulation advance the state by
/// `derivative * delta` without knowing its layout. `Delta` is usually a
/// time increment in seconds, but any independent variable works.
///
/// `Delta` can be a plain scalar like `f64` or a dimensioned type from `uom`.
pub trait StepIntegrable<Delta> {
    /// The derivative of the state with respect to `Delta`.
    type Derivative;

    /// Returns the state after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}
