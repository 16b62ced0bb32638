//! A lumped-parameter longitudinal vehicle model.
//!
//! The model couples a quadratic engine torque map, a fixed gear ratio, a
//! linear-then-saturating tire force, and road loads (aerodynamic drag,
//! rolling resistance, grade) into a small nonlinear ODE system, advanced
//! with a fixed-step explicit scheme.
//!
//! # Integration order
//!
//! Each [`VehicleModel::step`] first advances position, velocity, and engine
//! speed using the rates computed by the *previous* step, then evaluates the
//! physics at the new state to produce the rates used by the *next* step.
//! This one-step lag is part of the model's reference trajectory and must not
//! be reordered.
//!
//! # Example
//!
//! ```
//! use roadload_vehicle::VehicleModel;
//!
//! let mut vehicle = VehicleModel::default();
//! for _ in 0..100 {
//!     vehicle.step(0.2, 0.0).unwrap();
//! }
//! assert!(vehicle.velocity() > 5.0);
//! ```

mod config;
mod error;
mod model;
pub mod physics;
mod state;

pub use config::VehicleConfig;
pub use error::{ConfigError, StepError};
pub use model::VehicleModel;
pub use physics::{Forces, Powertrain, PowertrainInput, TorqueMap};
pub use state::{Kinematics, Rates, VehicleState};
