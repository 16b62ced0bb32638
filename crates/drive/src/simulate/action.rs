/// Control actions supported by the driver loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop before applying the current step and return the run so far.
    StopEarly,
}
