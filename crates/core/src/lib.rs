//! Core traits and types for the roadload vehicle simulator.
//!
//! This crate defines the shared abstractions the vehicle model and the
//! scenario driver build on:
//!
//! - [`Model`]: a deterministic callable mapping a typed input to a typed output
//! - [`StepIntegrable`]: a state that can be advanced by its derivative
//! - [`Observer`]: receives driver events and optionally returns control actions
//! - [`constraint`]: numeric invariants checked once at construction

pub mod constraint;
mod model;
mod observer;
mod step;

pub use model::Model;
pub use observer::Observer;
pub use step::StepIntegrable;
