/// A callable model that maps a typed input to a typed output.
///
/// Models must be deterministic: the same input always yields the same
/// output, bit for bit. Stateful simulation objects keep their state outside
/// the model and pass it in through `Input`, which keeps every evaluation
/// reproducible and easy to test in isolation.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Each model defines its own `Error` type for domain-specific failures,
    /// such as an input outside the region where the model is defined.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("divisor must not be zero")]
    struct DivideByZero;

    /// Divides a numerator by the model's denominator.
    struct Ratio {
        denominator: f64,
    }

    impl Model for Ratio {
        type Input = f64;
        type Output = f64;
        type Error = DivideByZero;

        fn call(&self, numerator: &f64) -> Result<f64, DivideByZero> {
            if self.denominator == 0.0 {
                return Err(DivideByZero);
            }
            Ok(numerator / self.denominator)
        }
    }

    #[test]
    fn call_is_repeatable() {
        let model = Ratio { denominator: 3.0 };

        let first = model.call(&1.0).unwrap();
        let second = model.call(&1.0).unwrap();

        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn call_reports_domain_errors() {
        let model = Ratio { denominator: 0.0 };
        assert!(model.call(&1.0).is_err());
    }
}
