use roadload_core::constraint::{Constrained, StrictlyPositive};
use serde::{Deserialize, Serialize};
use uom::si::{
    acceleration::meter_per_second_squared,
    angular_velocity::radian_per_second,
    f64::{
        Acceleration, AngularVelocity, Force, Length, Mass, MomentOfInertia, Time, Torque,
        Velocity,
    },
    force::newton,
    length::meter,
    mass::kilogram,
    moment_of_inertia::kilogram_square_meter,
    time::second,
    torque::newton_meter,
    velocity::meter_per_second,
};

use crate::ConfigError;

/// Physical parameters, sample time, and initial conditions of a vehicle.
///
/// Dimensioned values use [`uom`] quantities; the torque map coefficients
/// and load coefficients mix units, so they are plain `f64` in SI units.
/// When deserialized, quantities are read as SI base-unit numbers and any
/// missing field takes its [`Default`] value:
///
/// ```
/// use roadload_vehicle::VehicleConfig;
/// use uom::si::mass::kilogram;
///
/// let config: VehicleConfig = toml::from_str("mass = 1500.0").unwrap();
/// assert_eq!(config.mass.get::<kilogram>(), 1500.0);
/// assert_eq!(config.gear_ratio, VehicleConfig::default().gear_ratio);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleConfig {
    /// Constant term `a0` of the engine torque map.
    pub torque_a0: Torque,

    /// Linear term `a1` of the engine torque map, in N·m·s/rad.
    pub torque_a1: f64,

    /// Quadratic term `a2` of the engine torque map, in N·m·s²/rad².
    pub torque_a2: f64,

    /// Gear ratio `GR` from engine speed to wheel speed.
    pub gear_ratio: f64,

    /// Effective tire radius `r_e`.
    pub tire_radius: Length,

    /// Lumped engine and driveline inertia `J_e`.
    pub engine_inertia: MomentOfInertia,

    /// Vehicle mass `m`.
    pub mass: Mass,

    /// Gravitational acceleration `g`.
    pub gravity: Acceleration,

    /// Aerodynamic drag coefficient `c_a`, in N·s²/m².
    pub drag_coefficient: f64,

    /// Linearized rolling resistance coefficient `c_r1`, in N·s/m.
    pub rolling_coefficient: f64,

    /// Tire force per unit slip `c` in the linear region.
    pub slip_stiffness: Force,

    /// Tire force `F_max` once the slip magnitude reaches one.
    pub max_tire_force: Force,

    /// Fixed integration time step `Δt`.
    pub time_step: Time,

    pub initial_position: Length,
    pub initial_velocity: Velocity,
    pub initial_engine_speed: AngularVelocity,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            torque_a0: Torque::new::<newton_meter>(400.0),
            torque_a1: 0.1,
            torque_a2: -0.0002,
            gear_ratio: 0.35,
            tire_radius: Length::new::<meter>(0.3),
            engine_inertia: MomentOfInertia::new::<kilogram_square_meter>(10.0),
            mass: Mass::new::<kilogram>(2000.0),
            gravity: Acceleration::new::<meter_per_second_squared>(9.81),
            drag_coefficient: 1.36,
            rolling_coefficient: 0.01,
            slip_stiffness: Force::new::<newton>(10_000.0),
            max_tire_force: Force::new::<newton>(10_000.0),
            time_step: Time::new::<second>(0.01),
            initial_position: Length::new::<meter>(0.0),
            initial_velocity: Velocity::new::<meter_per_second>(5.0),
            initial_engine_speed: AngularVelocity::new::<radian_per_second>(100.0),
        }
    }
}

/// Validates a parameter that is used as a divisor or step size.
pub(crate) fn positive(
    field: &'static str,
    value: f64,
) -> Result<Constrained<f64, StrictlyPositive>, ConfigError> {
    StrictlyPositive::new(value).map_err(|source| ConfigError::NotPositive { field, source })
}

/// Validates a parameter that only needs to be a real number.
pub(crate) fn finite(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NotFinite { field })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip_through_toml() {
        let config = VehicleConfig::default();
        let text = toml::to_string(&config).unwrap();
        let parsed: VehicleConfig = toml::from_str(&text).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config: VehicleConfig = toml::from_str(
            r"
            time_step = 0.005
            initial_velocity = 12.0
            drag_coefficient = 0.9
            ",
        )
        .unwrap();

        assert_eq!(config.time_step.get::<second>(), 0.005);
        assert_eq!(config.initial_velocity.get::<meter_per_second>(), 12.0);
        assert_eq!(config.drag_coefficient, 0.9);
        assert_eq!(config.mass, VehicleConfig::default().mass);
        assert_eq!(config.torque_a0, VehicleConfig::default().torque_a0);
    }

    #[test]
    fn unknown_values_fail_to_parse() {
        let result: Result<VehicleConfig, _> = toml::from_str("mass = \"heavy\"");
        assert!(result.is_err());
    }
}
