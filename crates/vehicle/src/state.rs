use roadload_core::StepIntegrable;

use crate::physics::Forces;

/// The full mutable state of a [`VehicleModel`](crate::VehicleModel).
///
/// Positions are in metres, velocities in m/s, and engine quantities in
/// rad/s and rad/s². `acceleration` and `engine_acceleration` are the rates
/// computed by the most recent step; they are applied on the next one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VehicleState {
    pub position: f64,
    pub velocity: f64,
    pub acceleration: f64,
    pub engine_speed: f64,
    pub engine_acceleration: f64,
}

impl VehicleState {
    /// Returns the integrated part of the state.
    #[must_use]
    pub fn kinematics(&self) -> Kinematics {
        Kinematics {
            position: self.position,
            velocity: self.velocity,
            engine_speed: self.engine_speed,
        }
    }

    /// Returns the stored time derivative of [`kinematics`](Self::kinematics).
    #[must_use]
    pub fn rates(&self) -> Rates {
        Rates {
            velocity: self.velocity,
            acceleration: self.acceleration,
            engine_acceleration: self.engine_acceleration,
        }
    }

    /// Combines freshly integrated kinematics with the rates evaluated there.
    pub(crate) fn from_parts(kinematics: Kinematics, forces: &Forces) -> Self {
        Self {
            position: kinematics.position,
            velocity: kinematics.velocity,
            acceleration: forces.acceleration,
            engine_speed: kinematics.engine_speed,
            engine_acceleration: forces.engine_acceleration,
        }
    }
}

/// Position, velocity, and engine speed: the quantities advanced each step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Kinematics {
    pub position: f64,
    pub velocity: f64,
    pub engine_speed: f64,
}

/// Time derivative of [`Kinematics`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rates {
    pub velocity: f64,
    pub acceleration: f64,
    pub engine_acceleration: f64,
}

impl StepIntegrable<f64> for Kinematics {
    type Derivative = Rates;

    fn step(&self, rates: Rates, dt: f64) -> Self {
        Self {
            position: self.position + rates.velocity * dt,
            velocity: self.velocity + rates.acceleration * dt,
            engine_speed: self.engine_speed + rates.engine_acceleration * dt,
        }
    }
}
