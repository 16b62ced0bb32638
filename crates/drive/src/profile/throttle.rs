use roadload_core::constraint::UnitInterval;

use super::ProfileError;

/// A piecewise-linear throttle command over time.
///
/// Built from `(time, throttle)` breakpoints with strictly increasing times.
/// Between two breakpoints the throttle is interpolated linearly; before the
/// first breakpoint it holds the first value and after the last it holds the
/// last value.
///
/// # Examples
///
/// ```
/// use roadload_drive::profile::ThrottleProfile;
///
/// let profile = ThrottleProfile::new([(0.0, 0.2), (5.0, 0.5), (15.0, 0.5), (20.0, 0.0)]).unwrap();
///
/// assert_eq!(profile.value_at(0.0), 0.2);
/// assert_eq!(profile.value_at(10.0), 0.5);
/// assert_eq!(profile.value_at(17.5), 0.25);
/// assert_eq!(profile.value_at(30.0), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ThrottleProfile {
    breakpoints: Vec<(f64, f64)>,
}

impl ThrottleProfile {
    /// Creates a profile from `(time, throttle)` breakpoints.
    ///
    /// # Errors
    ///
    /// - [`ProfileError::Empty`] if there are no breakpoints.
    /// - [`ProfileError::NotFinite`] if a time is NaN or infinite.
    /// - [`ProfileError::Throttle`] if a throttle value is outside `[0, 1]`.
    /// - [`ProfileError::Unordered`] if times are not strictly increasing.
    pub fn new<I>(breakpoints: I) -> Result<Self, ProfileError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let breakpoints: Vec<_> = breakpoints.into_iter().collect();
        if breakpoints.is_empty() {
            return Err(ProfileError::Empty);
        }

        for (index, &(time, throttle)) in breakpoints.iter().enumerate() {
            if !time.is_finite() {
                return Err(ProfileError::NotFinite { index });
            }
            UnitInterval::new(throttle).map_err(|source| ProfileError::Throttle { index, source })?;
        }

        if let Some(index) = breakpoints.windows(2).position(|pair| pair[1].0 <= pair[0].0) {
            return Err(ProfileError::Unordered { index: index + 1 });
        }

        Ok(Self { breakpoints })
    }

    /// Creates a profile that holds one throttle value forever.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Throttle`] if `throttle` is outside `[0, 1]`.
    pub fn constant(throttle: f64) -> Result<Self, ProfileError> {
        Self::new([(0.0, throttle)])
    }

    /// Returns the throttle command at `time`.
    #[must_use]
    pub fn value_at(&self, time: f64) -> f64 {
        let (first_time, first_value) = self.breakpoints[0];
        if time < first_time {
            return first_value;
        }

        self.breakpoints
            .windows(2)
            .find_map(|pair| {
                let (t0, v0) = pair[0];
                let (t1, v1) = pair[1];
                (t0 <= time && time < t1).then(|| v0 + (v1 - v0) * (time - t0) / (t1 - t0))
            })
            .unwrap_or_else(|| self.breakpoints[self.breakpoints.len() - 1].1)
    }
}
