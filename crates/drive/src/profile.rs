//! Throttle and grade profiles for scripted scenarios.
//!
//! - [`ThrottleProfile`] is keyed on elapsed time and interpolates linearly
//!   between breakpoints.
//! - [`GradeProfile`] is keyed on position and holds a constant angle over
//!   each segment.

mod error;
mod grade;
mod throttle;

pub use error::ProfileError;
pub use grade::{GradeProfile, GradeSegment};
pub use throttle::ThrottleProfile;
