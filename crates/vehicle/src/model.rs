use log::{debug, trace, warn};
use roadload_core::{
    Model, StepIntegrable,
    constraint::{Constrained, StrictlyPositive, UnitInterval},
};
use uom::si::{
    angular_velocity::radian_per_second, length::meter, time::second, velocity::meter_per_second,
};

use crate::{
    ConfigError, StepError, VehicleConfig,
    config::{finite, positive},
    physics::{Forces, Powertrain, PowertrainInput},
    state::VehicleState,
};

/// A stateful longitudinal vehicle simulation.
///
/// Owns its parameters and state exclusively. The state changes only through
/// [`step`](Self::step) and [`reset`](Self::reset); each independent run
/// should construct its own instance.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleModel {
    config: VehicleConfig,
    powertrain: Powertrain,
    time_step: Constrained<f64, StrictlyPositive>,
    initial: VehicleState,
    state: VehicleState,
    reversing: bool,
}

impl VehicleModel {
    /// Creates a model from a configuration, starting at its initial conditions.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the time step, mass, or engine inertia is
    /// not strictly positive, or if any other value is not finite.
    pub fn new(config: VehicleConfig) -> Result<Self, ConfigError> {
        let powertrain = Powertrain::new(&config)?;
        let time_step = positive("time_step", config.time_step.get::<second>())?;

        let initial = VehicleState {
            position: finite("initial_position", config.initial_position.get::<meter>())?,
            velocity: finite(
                "initial_velocity",
                config.initial_velocity.get::<meter_per_second>(),
            )?,
            acceleration: 0.0,
            engine_speed: finite(
                "initial_engine_speed",
                config.initial_engine_speed.get::<radian_per_second>(),
            )?,
            engine_acceleration: 0.0,
        };

        debug!(
            "vehicle model created: dt = {} s, initial state {initial:?}",
            time_step.into_inner()
        );

        Ok(Self {
            config,
            powertrain,
            time_step,
            initial,
            state: initial,
            reversing: false,
        })
    }

    /// Restores the initial conditions, discarding all step history.
    pub fn reset(&mut self) {
        self.state = self.initial;
        self.reversing = false;
        debug!("vehicle model reset to {:?}", self.initial);
    }

    /// Advances the model by one time step.
    ///
    /// Position, velocity, and engine speed are first advanced with the rates
    /// stored by the previous step (zero on the first step). The physics is
    /// then evaluated at the new state with the given controls, and the
    /// resulting rates are stored for the next step.
    ///
    /// `throttle` must lie in `[0, 1]`; `grade` is the road angle in radians
    /// and may take any finite value.
    ///
    /// Returns the force breakdown evaluated during this step.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    ///
    /// - [`StepError::ZeroVelocity`] if the current velocity is exactly zero,
    ///   whatever the controls.
    /// - [`StepError::Throttle`] if `throttle` is outside `[0, 1]` or NaN.
    /// - [`StepError::Grade`] if `grade` is not finite.
    /// - [`StepError::IntegratedToZero`] if the integrated velocity is
    ///   exactly zero.
    ///
    /// On error the state is left unchanged.
    pub fn step(&mut self, throttle: f64, grade: f64) -> Result<Forces, StepError> {
        if self.state.velocity == 0.0 {
            return Err(StepError::ZeroVelocity);
        }
        let throttle = UnitInterval::new(throttle).map_err(|source| StepError::Throttle {
            value: throttle,
            source,
        })?;
        if !grade.is_finite() {
            return Err(StepError::Grade { value: grade });
        }

        let kinematics = self
            .state
            .kinematics()
            .step(self.state.rates(), self.time_step.into_inner());
        if kinematics.velocity == 0.0 {
            return Err(StepError::IntegratedToZero {
                velocity: self.state.velocity,
            });
        }

        let forces = self.powertrain.call(&PowertrainInput {
            kinematics,
            throttle,
            grade,
        })?;

        self.state = VehicleState::from_parts(kinematics, &forces);

        if self.state.velocity < 0.0 && !self.reversing {
            warn!(
                "velocity turned negative ({} m/s); rolling resistance is only valid for forward motion",
                self.state.velocity
            );
            self.reversing = true;
        }
        trace!("step: {:?}", self.state);

        Ok(forces)
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn state(&self) -> VehicleState {
        self.state
    }

    /// Position `x` in metres.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.state.position
    }

    /// Velocity `v` in m/s.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.state.velocity
    }

    /// Acceleration `a` in m/s², as computed by the last step.
    #[must_use]
    pub fn acceleration(&self) -> f64 {
        self.state.acceleration
    }

    /// Engine angular velocity `ω_e` in rad/s.
    #[must_use]
    pub fn engine_speed(&self) -> f64 {
        self.state.engine_speed
    }

    /// Engine angular acceleration `ω_e_dot` in rad/s², as computed by the last step.
    #[must_use]
    pub fn engine_acceleration(&self) -> f64 {
        self.state.engine_acceleration
    }

    /// The fixed time step `Δt` in seconds.
    #[must_use]
    pub fn time_step(&self) -> f64 {
        self.time_step.into_inner()
    }

    /// The configuration this model was built from.
    #[must_use]
    pub fn config(&self) -> &VehicleConfig {
        &self.config
    }
}

impl Default for VehicleModel {
    fn default() -> Self {
        // Known-good values, expect is safe
        Self::new(VehicleConfig::default()).expect("default vehicle configuration is valid")
    }
}
