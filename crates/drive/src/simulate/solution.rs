use roadload_vehicle::VehicleState;

use crate::scenario::Controls;

/// Indicates how the driver loop terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The vehicle state at the start of a sample interval and the controls
/// applied over it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Elapsed time in seconds: step index times `Δt`.
    pub time: f64,
    pub controls: Controls,
    pub state: VehicleState,
}

/// The result of driving a vehicle through a scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the loop terminated.
    pub status: Status,

    /// One sample per step, taken before the step is applied.
    pub history: Vec<Sample>,

    /// Vehicle state after the last applied step.
    pub final_state: VehicleState,

    /// Number of steps applied.
    pub steps: usize,
}
