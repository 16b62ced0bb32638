use roadload_vehicle::StepError;

/// Errors that can occur while driving a vehicle through a scenario.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("vehicle step {step} failed: {source}")]
    Vehicle { step: usize, source: StepError },
}
