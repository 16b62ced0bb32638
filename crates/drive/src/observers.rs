//! Reusable observers for the driver loop.

use roadload_core::Observer;

use crate::simulate::{Action, Event};

/// Stops a run once the vehicle reaches a position.
///
/// The run ends at the first sample whose position is at or beyond
/// `threshold`, before the step for that sample is applied.
///
/// # Example
///
/// ```
/// use roadload_drive::{StopAtPosition, scenario::ProfileScenario, simulate};
/// use roadload_vehicle::VehicleModel;
///
/// let mut vehicle = VehicleModel::default();
/// let scenario = ProfileScenario::ramp().unwrap();
///
/// let solution =
///     simulate::run(&mut vehicle, &scenario, 2_000, StopAtPosition::new(60.0)).unwrap();
///
/// assert!(solution.final_state.position >= 60.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopAtPosition {
    /// Position in meters at which to stop.
    pub threshold: f64,
}

impl StopAtPosition {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Observer<Event, Action> for StopAtPosition {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        (event.sample.state.position >= self.threshold).then_some(Action::StopEarly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use roadload_vehicle::VehicleState;

    use crate::{scenario::Controls, simulate::Sample};

    fn event_at(position: f64) -> Event {
        Event {
            step: 0,
            sample: Sample {
                time: 0.0,
                controls: Controls {
                    throttle: 0.0,
                    grade: 0.0,
                },
                state: VehicleState {
                    position,
                    velocity: 5.0,
                    ..VehicleState::default()
                },
            },
        }
    }

    #[test]
    fn continues_before_the_threshold() {
        let mut observer = StopAtPosition::new(60.0);
        assert_eq!(observer.observe(&event_at(59.99)), None);
    }

    #[test]
    fn stops_at_and_beyond_the_threshold() {
        let mut observer = StopAtPosition::new(60.0);
        assert_eq!(observer.observe(&event_at(60.0)), Some(Action::StopEarly));
        assert_eq!(observer.observe(&event_at(75.0)), Some(Action::StopEarly));
    }
}
