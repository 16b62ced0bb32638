//! Scenario driver for the roadload vehicle model.
//!
//! This crate is the harness around [`roadload_vehicle::VehicleModel`]: it
//! builds time-keyed throttle and position-keyed grade profiles, drives the
//! model at its fixed sample interval, records a trajectory, and persists it
//! as a plain two-column table.
//!
//! # Modules
//!
//! - [`profile`]: throttle and grade profiles
//! - [`scenario`]: the [`Scenario`] trait and profile-based scenarios
//! - [`simulate`]: the observed driver loop
//! - [`observers`]: reusable observers such as [`StopAtPosition`]
//! - [`table`]: comma-space delimited persistence
//!
//! # Features
//!
//! - `cli`: Builds the `roadload` binary.
//! - `plot`: Enables `PlotObserver` for viewing a run via egui.
//!
//! # Example
//!
//! ```
//! use roadload_drive::{scenario::ProfileScenario, simulate};
//! use roadload_vehicle::VehicleModel;
//!
//! let mut vehicle = VehicleModel::default();
//! let scenario = ProfileScenario::ramp().unwrap();
//!
//! let solution = simulate::run_unobserved(&mut vehicle, &scenario, 2_000).unwrap();
//! assert_eq!(solution.history.len(), 2_000);
//! ```

pub mod observers;
pub mod profile;
pub mod scenario;
pub mod simulate;
pub mod table;

#[cfg(feature = "plot")]
mod plot;

pub use observers::StopAtPosition;
pub use scenario::{Controls, Scenario};

#[cfg(feature = "plot")]
pub use plot::PlotObserver;
