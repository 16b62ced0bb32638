//! Scalar force and torque relations of the powertrain and road loads.
//!
//! The free functions are pure and total over real inputs. [`Powertrain`]
//! composes them into the per-step evaluation and is the only place that
//! guards the zero-velocity singularity of [`slip_ratio`].

use roadload_core::{
    Model,
    constraint::{Constrained, StrictlyPositive, UnitInterval},
};
use uom::si::{
    acceleration::meter_per_second_squared, force::newton, length::meter, mass::kilogram,
    moment_of_inertia::kilogram_square_meter, torque::newton_meter,
};

use crate::{
    ConfigError, StepError, VehicleConfig,
    config::{finite, positive},
    state::Kinematics,
};

/// Quadratic engine torque map: `T = a0 + a1·ω + a2·ω²` at full throttle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorqueMap {
    pub a0: f64,
    pub a1: f64,
    pub a2: f64,
}

impl TorqueMap {
    /// Returns the full-throttle torque at `engine_speed` (rad/s).
    #[must_use]
    pub fn at(&self, engine_speed: f64) -> f64 {
        self.a0 + self.a1 * engine_speed + self.a2 * engine_speed.powi(2)
    }
}

/// Engine torque for a throttle fraction: `T_e = throttle·(a0 + a1·ω_e + a2·ω_e²)`.
#[must_use]
pub fn engine_torque(throttle: f64, map: &TorqueMap, engine_speed: f64) -> f64 {
    throttle * map.at(engine_speed)
}

/// Longitudinal slip ratio: `s = (ω_w·r_e − v) / v`.
///
/// Not defined for `velocity == 0`, where the result is infinite or NaN.
#[must_use]
pub fn slip_ratio(wheel_speed: f64, tire_radius: f64, velocity: f64) -> f64 {
    (wheel_speed * tire_radius - velocity) / velocity
}

/// Tire force: linear in slip while `|s| < 1`, otherwise `max_force`.
///
/// The saturated value keeps its sign for negative slip.
#[must_use]
pub fn tire_force(slip_ratio: f64, stiffness: f64, max_force: f64) -> f64 {
    if slip_ratio.abs() < 1.0 {
        stiffness * slip_ratio
    } else {
        max_force
    }
}

/// Gravity component along the road: `F_g = m·g·sin(α)`.
#[must_use]
pub fn grade_force(mass: f64, gravity: f64, grade_angle: f64) -> f64 {
    mass * gravity * grade_angle.sin()
}

/// Linearized rolling resistance: `R_x = c_r1·v`, valid for `v ≥ 0`.
#[must_use]
pub fn rolling_resistance(coefficient: f64, velocity: f64) -> f64 {
    coefficient * velocity
}

/// Aerodynamic drag: `F_aero = c_a·v²`.
#[must_use]
pub fn aero_drag(coefficient: f64, velocity: f64) -> f64 {
    coefficient * velocity.powi(2)
}

/// Every intermediate quantity of one physics evaluation.
///
/// Forces are in newtons, torque in N·m, speeds in rad/s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Forces {
    pub wheel_speed: f64,
    pub slip_ratio: f64,
    pub tire_force: f64,
    pub grade_force: f64,
    pub rolling_resistance: f64,
    pub aero_drag: f64,

    /// Sum of drag, rolling resistance, and grade force.
    pub load: f64,

    pub engine_torque: f64,

    /// Vehicle acceleration (m/s²) to apply on the next step.
    pub acceleration: f64,

    /// Engine angular acceleration (rad/s²) to apply on the next step.
    pub engine_acceleration: f64,
}

/// Input to a [`Powertrain`] evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowertrainInput {
    pub kinematics: Kinematics,
    pub throttle: Constrained<f64, UnitInterval>,

    /// Road grade angle in radians; positive climbs.
    pub grade: f64,
}

/// Resolved, validated vehicle parameters in SI units.
///
/// Implements [`Model`] from [`PowertrainInput`] to [`Forces`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Powertrain {
    pub torque_map: TorqueMap,
    pub gear_ratio: f64,
    pub tire_radius: f64,
    pub engine_inertia: Constrained<f64, StrictlyPositive>,
    pub mass: Constrained<f64, StrictlyPositive>,
    pub gravity: f64,
    pub drag_coefficient: f64,
    pub rolling_coefficient: f64,
    pub slip_stiffness: f64,
    pub max_tire_force: f64,
}

impl Powertrain {
    /// Resolves the physical parameters of a configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if mass or engine inertia is not strictly
    /// positive, or if any other parameter is not finite.
    pub fn new(config: &VehicleConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            torque_map: TorqueMap {
                a0: finite("torque_a0", config.torque_a0.get::<newton_meter>())?,
                a1: finite("torque_a1", config.torque_a1)?,
                a2: finite("torque_a2", config.torque_a2)?,
            },
            gear_ratio: finite("gear_ratio", config.gear_ratio)?,
            tire_radius: finite("tire_radius", config.tire_radius.get::<meter>())?,
            engine_inertia: positive(
                "engine_inertia",
                config.engine_inertia.get::<kilogram_square_meter>(),
            )?,
            mass: positive("mass", config.mass.get::<kilogram>())?,
            gravity: finite(
                "gravity",
                config.gravity.get::<meter_per_second_squared>(),
            )?,
            drag_coefficient: finite("drag_coefficient", config.drag_coefficient)?,
            rolling_coefficient: finite("rolling_coefficient", config.rolling_coefficient)?,
            slip_stiffness: finite("slip_stiffness", config.slip_stiffness.get::<newton>())?,
            max_tire_force: finite("max_tire_force", config.max_tire_force.get::<newton>())?,
        })
    }
}

impl Model for Powertrain {
    type Input = PowertrainInput;
    type Output = Forces;
    type Error = StepError;

    fn call(&self, input: &PowertrainInput) -> Result<Forces, StepError> {
        let PowertrainInput {
            kinematics,
            throttle,
            grade,
        } = *input;
        let Kinematics {
            velocity,
            engine_speed,
            ..
        } = kinematics;

        if velocity == 0.0 {
            return Err(StepError::ZeroVelocity);
        }

        let mass = self.mass.into_inner();

        let wheel_speed = self.gear_ratio * engine_speed;
        let slip_ratio = slip_ratio(wheel_speed, self.tire_radius, velocity);
        let tire_force = tire_force(slip_ratio, self.slip_stiffness, self.max_tire_force);

        let grade_force = grade_force(mass, self.gravity, grade);
        let rolling_resistance = rolling_resistance(self.rolling_coefficient, velocity);
        let aero_drag = aero_drag(self.drag_coefficient, velocity);
        let load = aero_drag + rolling_resistance + grade_force;

        let engine_torque = engine_torque(throttle.into_inner(), &self.torque_map, engine_speed);

        let acceleration = (tire_force - load) / mass;
        let engine_acceleration = (engine_torque - self.gear_ratio * self.tire_radius * load)
            / self.engine_inertia.into_inner();

        Ok(Forces {
            wheel_speed,
            slip_ratio,
            tire_force,
            grade_force,
            rolling_resistance,
            aero_drag,
            load,
            engine_torque,
            acceleration,
            engine_acceleration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::FRAC_PI_2;

    use approx::assert_relative_eq;
    use uom::si::{f64::Mass, f64::MomentOfInertia};

    fn powertrain() -> Powertrain {
        Powertrain::new(&VehicleConfig::default()).unwrap()
    }

    fn input(velocity: f64, engine_speed: f64, throttle: f64, grade: f64) -> PowertrainInput {
        PowertrainInput {
            kinematics: Kinematics {
                position: 0.0,
                velocity,
                engine_speed,
            },
            throttle: UnitInterval::new(throttle).unwrap(),
            grade,
        }
    }

    #[test]
    fn torque_map_is_quadratic_in_engine_speed() {
        let map = TorqueMap {
            a0: 400.0,
            a1: 0.1,
            a2: -0.0002,
        };

        assert_relative_eq!(map.at(0.0), 400.0);
        assert_relative_eq!(map.at(100.0), 408.0);
        assert_relative_eq!(engine_torque(0.5, &map, 100.0), 204.0);
        assert_relative_eq!(engine_torque(0.0, &map, 100.0), 0.0);
    }

    #[test]
    fn slip_ratio_is_zero_when_wheel_matches_vehicle() {
        assert_relative_eq!(slip_ratio(20.0, 0.5, 10.0), 0.0);
        assert_relative_eq!(slip_ratio(22.0, 0.5, 10.0), 0.1, epsilon = 1e-12);
        assert_relative_eq!(slip_ratio(18.0, 0.5, 10.0), -0.1, epsilon = 1e-12);
    }

    #[test]
    fn tire_force_is_linear_below_unit_slip() {
        assert_relative_eq!(tire_force(0.1, 10_000.0, 8_000.0), 1_000.0);
        assert_relative_eq!(tire_force(-0.5, 10_000.0, 8_000.0), -5_000.0);
    }

    #[test]
    fn tire_force_saturates_without_flipping_sign() {
        assert_relative_eq!(tire_force(1.0, 10_000.0, 8_000.0), 8_000.0);
        assert_relative_eq!(tire_force(3.0, 10_000.0, 8_000.0), 8_000.0);
        assert_relative_eq!(tire_force(-1.5, 10_000.0, 8_000.0), 8_000.0);
    }

    #[test]
    fn road_loads() {
        assert_relative_eq!(grade_force(2000.0, 9.81, 0.0), 0.0);
        assert_relative_eq!(grade_force(2000.0, 9.81, FRAC_PI_2), 19_620.0);
        assert!(grade_force(2000.0, 9.81, -0.1) < 0.0);
        assert_relative_eq!(rolling_resistance(0.01, 20.0), 0.2);
        assert_relative_eq!(aero_drag(1.36, 10.0), 136.0);
    }

    #[test]
    fn first_step_from_defaults_saturates_the_tire() {
        // ω_w·r_e = 0.35·100·0.3 = 10.5 m/s against v = 5 m/s.
        let forces = powertrain().call(&input(5.0, 100.0, 0.2, 0.0)).unwrap();

        assert_relative_eq!(forces.slip_ratio, 1.1, epsilon = 1e-12);
        assert_relative_eq!(forces.tire_force, 10_000.0);
        assert_relative_eq!(forces.load, 34.05, epsilon = 1e-12);
        assert_relative_eq!(forces.engine_torque, 81.6, epsilon = 1e-12);
        assert_relative_eq!(forces.acceleration, 4.982975, epsilon = 1e-12);
        assert_relative_eq!(forces.engine_acceleration, 7.802475, epsilon = 1e-12);
    }

    #[test]
    fn climbing_increases_load() {
        let flat = powertrain().call(&input(10.0, 100.0, 0.3, 0.0)).unwrap();
        let uphill = powertrain().call(&input(10.0, 100.0, 0.3, 0.05)).unwrap();

        assert!(uphill.load > flat.load);
        assert!(uphill.acceleration < flat.acceleration);
        assert_relative_eq!(uphill.tire_force, flat.tire_force);
    }

    #[test]
    fn zero_velocity_is_rejected() {
        let result = powertrain().call(&input(0.0, 100.0, 0.5, 0.0));
        assert_eq!(result, Err(StepError::ZeroVelocity));
    }

    #[test]
    fn non_positive_mass_or_inertia_is_rejected() {
        let config = VehicleConfig {
            mass: Mass::new::<kilogram>(0.0),
            ..VehicleConfig::default()
        };
        assert!(matches!(
            Powertrain::new(&config),
            Err(ConfigError::NotPositive { field: "mass", .. })
        ));

        let config = VehicleConfig {
            engine_inertia: MomentOfInertia::new::<kilogram_square_meter>(-1.0),
            ..VehicleConfig::default()
        };
        assert!(matches!(
            Powertrain::new(&config),
            Err(ConfigError::NotPositive {
                field: "engine_inertia",
                ..
            })
        ));
    }

    #[test]
    fn non_finite_coefficients_are_rejected() {
        let config = VehicleConfig {
            drag_coefficient: f64::NAN,
            ..VehicleConfig::default()
        };
        assert_eq!(
            Powertrain::new(&config),
            Err(ConfigError::NotFinite {
                field: "drag_coefficient"
            })
        );
    }
}
