use super::Sample;

/// Event emitted by the driver loop before each step is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Zero-based index of the step about to be applied.
    pub step: usize,

    /// The sample recorded for this step.
    pub sample: Sample,
}
