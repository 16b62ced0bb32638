//! The fixed-rate driver loop.
//!
//! Drives a [`VehicleModel`] through a [`Scenario`] at the model's own time
//! step. For each step `k` the loop:
//!
//! 1. Computes the elapsed time `t = k·Δt`.
//! 2. Asks the scenario for the controls at `t` and the current state.
//! 3. Records a [`Sample`] and emits it to the observer as an [`Event`].
//! 4. Stops if the observer returns [`Action::StopEarly`].
//! 5. Applies [`VehicleModel::step`] with those controls.
//!
//! # Example
//!
//! ```
//! use roadload_drive::{scenario::ProfileScenario, simulate};
//! use roadload_vehicle::VehicleModel;
//!
//! let mut vehicle = VehicleModel::default();
//! let scenario = ProfileScenario::constant(0.2, 0.0).unwrap();
//!
//! let solution = simulate::run_unobserved(&mut vehicle, &scenario, 100).unwrap();
//! assert_eq!(solution.final_state, vehicle.state());
//! ```

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Sample, Solution, Status};

use log::{debug, info};
use roadload_core::Observer;
use roadload_vehicle::VehicleModel;

use crate::scenario::Scenario;

/// Upper bound on the history preallocated from the step limit.
///
/// `steps` is only a limit, and runs ended by an observer may pass
/// `usize::MAX`.
const MAX_PREALLOCATED_SAMPLES: usize = 1 << 16;

/// Drives `vehicle` through `scenario` for up to `steps` steps.
///
/// The vehicle is advanced in place, so its state after the call matches
/// [`Solution::final_state`]. The observer receives an [`Event`] before each
/// step and may return [`Action::StopEarly`] to end the run without applying
/// that step.
///
/// # Errors
///
/// Returns [`Error::Vehicle`] if the vehicle rejects a step. Samples recorded
/// up to the failure are discarded; the vehicle keeps its last valid state.
pub fn run<S, Obs>(
    vehicle: &mut VehicleModel,
    scenario: &S,
    steps: usize,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    S: Scenario + ?Sized,
    Obs: Observer<Event, Action>,
{
    let dt = vehicle.time_step();
    info!("driving {steps} steps at dt = {dt} s");

    let mut history = Vec::with_capacity(steps.min(MAX_PREALLOCATED_SAMPLES));

    for step in 0..steps {
        #[allow(clippy::cast_precision_loss)]
        let time = step as f64 * dt;
        let state = vehicle.state();
        let controls = scenario.controls(time, &state);

        let sample = Sample {
            time,
            controls,
            state,
        };
        history.push(sample);

        if let Some(Action::StopEarly) = observer.observe(&Event { step, sample }) {
            debug!("observer stopped the run at step {step} (t = {time} s)");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                history,
                final_state: vehicle.state(),
                steps: step,
            });
        }

        vehicle
            .step(controls.throttle, controls.grade)
            .map_err(|source| Error::Vehicle { step, source })?;
    }

    let final_state = vehicle.state();
    info!(
        "run complete: x = {:.3} m, v = {:.3} m/s",
        final_state.position, final_state.velocity
    );

    Ok(Solution {
        status: Status::Complete,
        history,
        final_state,
        steps,
    })
}

/// Drives `vehicle` through `scenario` without observation.
///
/// This is a convenience wrapper around [`run`] that discards events.
///
/// # Errors
///
/// Returns [`Error::Vehicle`] if the vehicle rejects a step.
pub fn run_unobserved<S>(
    vehicle: &mut VehicleModel,
    scenario: &S,
    steps: usize,
) -> Result<Solution, Error>
where
    S: Scenario + ?Sized,
{
    run(vehicle, scenario, steps, ())
}
