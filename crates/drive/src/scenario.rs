//! Scenarios decide the controls applied at each sample.

use roadload_vehicle::VehicleState;

use crate::profile::{GradeProfile, GradeSegment, ProfileError, ThrottleProfile};

/// Simulated duration of [`ProfileScenario::ramp`], in seconds.
pub const RAMP_DURATION: f64 = 20.0;

/// Controls applied to the vehicle over one sample interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Controls {
    /// Throttle fraction in `[0, 1]`.
    pub throttle: f64,

    /// Road grade angle in radians.
    pub grade: f64,
}

/// Supplies the controls for each sample of a run.
///
/// A scenario sees the elapsed time and the vehicle state before the step,
/// so profiles may be keyed on time, on position, or on both.
///
/// Closures of the form `Fn(f64, &VehicleState) -> Controls` implement
/// `Scenario` directly.
pub trait Scenario {
    /// Returns the controls for the sample starting at `time`.
    fn controls(&self, time: f64, state: &VehicleState) -> Controls;
}

impl<F> Scenario for F
where
    F: Fn(f64, &VehicleState) -> Controls,
{
    fn controls(&self, time: f64, state: &VehicleState) -> Controls {
        self(time, state)
    }
}

/// A throttle profile over time combined with a grade profile over position.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileScenario {
    pub throttle: ThrottleProfile,
    pub grade: GradeProfile,
}

impl ProfileScenario {
    #[must_use]
    pub fn new(throttle: ThrottleProfile, grade: GradeProfile) -> Self {
        Self { throttle, grade }
    }

    /// Holds a throttle value and grade angle for the whole run.
    ///
    /// # Errors
    ///
    /// Returns a [`ProfileError`] if the throttle is outside `[0, 1]` or the
    /// grade is not finite.
    pub fn constant(throttle: f64, grade: f64) -> Result<Self, ProfileError> {
        Ok(Self::new(
            ThrottleProfile::constant(throttle)?,
            GradeProfile::uniform(grade)?,
        ))
    }

    /// The hill-climb scenario.
    ///
    /// Throttle ramps from 0.2 to 0.5 over 5 s, holds for 10 s, then falls to
    /// zero over 5 s. The road climbs 3 m over the first 60 m, then 9 m over
    /// the next 90 m, and is level afterwards. Runs for [`RAMP_DURATION`].
    ///
    /// # Errors
    ///
    /// Never fails for the built-in breakpoints; the `Result` mirrors the
    /// profile constructors.
    pub fn ramp() -> Result<Self, ProfileError> {
        let throttle = ThrottleProfile::new([(0.0, 0.2), (5.0, 0.5), (15.0, 0.5), (20.0, 0.0)])?;
        let grade = GradeProfile::new(
            [
                GradeSegment::from_rise_over_run(60.0, 3.0, 60.0),
                GradeSegment::from_rise_over_run(150.0, 9.0, 90.0),
            ],
            0.0,
        )?;
        Ok(Self::new(throttle, grade))
    }
}

impl Scenario for ProfileScenario {
    fn controls(&self, time: f64, state: &VehicleState) -> Controls {
        Controls {
            throttle: self.throttle.value_at(time),
            grade: self.grade.angle_at(state.position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn at(position: f64) -> VehicleState {
        VehicleState {
            position,
            velocity: 10.0,
            ..VehicleState::default()
        }
    }

    #[test]
    fn ramp_throttle_follows_time_and_grade_follows_position() {
        let scenario = ProfileScenario::ramp().unwrap();

        let early = scenario.controls(1.0, &at(10.0));
        assert_relative_eq!(early.throttle, 0.26, epsilon = 1e-12);
        assert_relative_eq!(early.grade, (3.0_f64 / 60.0).atan());

        let steep = scenario.controls(1.0, &at(100.0));
        assert_relative_eq!(steep.throttle, early.throttle);
        assert_relative_eq!(steep.grade, (9.0_f64 / 90.0).atan());

        let level = scenario.controls(18.0, &at(200.0));
        assert_relative_eq!(level.throttle, 0.2, epsilon = 1e-12);
        assert_relative_eq!(level.grade, 0.0);
    }

    #[test]
    fn constant_scenario_ignores_time_and_state() {
        let scenario = ProfileScenario::constant(0.2, 0.01).unwrap();

        for (time, position) in [(0.0, 0.0), (50.0, 1_000.0)] {
            let controls = scenario.controls(time, &at(position));
            assert_eq!(
                controls,
                Controls {
                    throttle: 0.2,
                    grade: 0.01
                }
            );
        }
    }

    #[test]
    fn constant_scenario_validates_inputs() {
        assert!(ProfileScenario::constant(1.5, 0.0).is_err());
        assert!(ProfileScenario::constant(0.5, f64::NAN).is_err());
    }

    #[test]
    fn closures_are_scenarios() {
        let scenario = |time: f64, _: &VehicleState| Controls {
            throttle: if time < 1.0 { 1.0 } else { 0.0 },
            grade: 0.0,
        };

        assert_relative_eq!(scenario.controls(0.5, &at(0.0)).throttle, 1.0);
        assert_relative_eq!(scenario.controls(1.5, &at(0.0)).throttle, 0.0);
    }
}
