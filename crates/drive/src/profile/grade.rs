use super::ProfileError;

/// A road segment of constant grade ending at a given position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeSegment {
    /// Position (m) where the segment ends, exclusive.
    pub end: f64,

    /// Grade angle in radians; positive climbs.
    pub angle: f64,
}

impl GradeSegment {
    /// Creates a segment with an explicit grade angle.
    #[must_use]
    pub fn new(end: f64, angle: f64) -> Self {
        Self { end, angle }
    }

    /// Creates a segment from a rise over run, e.g. 3 m over 60 m.
    #[must_use]
    pub fn from_rise_over_run(end: f64, rise: f64, run: f64) -> Self {
        Self::new(end, (rise / run).atan())
    }
}

/// A piecewise-constant road grade over position.
///
/// Segments are ordered by strictly increasing end position. The angle at a
/// position is that of the first segment ending beyond it; past the last
/// segment the `beyond` angle applies.
///
/// # Examples
///
/// ```
/// use roadload_drive::profile::{GradeProfile, GradeSegment};
///
/// let hill = GradeProfile::new(
///     [
///         GradeSegment::from_rise_over_run(60.0, 3.0, 60.0),
///         GradeSegment::from_rise_over_run(150.0, 9.0, 90.0),
///     ],
///     0.0,
/// )
/// .unwrap();
///
/// assert_eq!(hill.angle_at(0.0), (0.05_f64).atan());
/// assert_eq!(hill.angle_at(60.0), (0.1_f64).atan());
/// assert_eq!(hill.angle_at(150.0), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GradeProfile {
    segments: Vec<GradeSegment>,
    beyond: f64,
}

impl GradeProfile {
    /// Creates a profile from ordered segments and the angle past the last one.
    ///
    /// # Errors
    ///
    /// - [`ProfileError::NotFinite`] if an angle is not finite or an end is NaN.
    ///   The index equals the number of segments for the `beyond` angle.
    /// - [`ProfileError::Unordered`] if end positions are not strictly increasing.
    pub fn new<I>(segments: I, beyond: f64) -> Result<Self, ProfileError>
    where
        I: IntoIterator<Item = GradeSegment>,
    {
        let segments: Vec<_> = segments.into_iter().collect();

        if let Some(index) = segments
            .iter()
            .position(|segment| segment.end.is_nan() || !segment.angle.is_finite())
        {
            return Err(ProfileError::NotFinite { index });
        }
        if !beyond.is_finite() {
            return Err(ProfileError::NotFinite {
                index: segments.len(),
            });
        }
        if let Some(index) = segments.windows(2).position(|pair| pair[1].end <= pair[0].end) {
            return Err(ProfileError::Unordered { index: index + 1 });
        }

        Ok(Self { segments, beyond })
    }

    /// Creates a profile with the same angle everywhere.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::NotFinite`] if `angle` is not finite.
    pub fn uniform(angle: f64) -> Result<Self, ProfileError> {
        Self::new(std::iter::empty(), angle)
    }

    /// Returns the grade angle at `position`.
    #[must_use]
    pub fn angle_at(&self, position: f64) -> f64 {
        self.segments
            .iter()
            .find(|segment| position < segment.end)
            .map_or(self.beyond, |segment| segment.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn from_rise_over_run_uses_arctangent() {
        let segment = GradeSegment::from_rise_over_run(10.0, 1.0, 1.0);
        assert_relative_eq!(segment.angle, std::f64::consts::FRAC_PI_4);
    }

    #[test]
    fn segment_end_is_exclusive() {
        let profile = GradeProfile::new(
            [GradeSegment::new(10.0, 0.1), GradeSegment::new(20.0, -0.1)],
            0.02,
        )
        .unwrap();

        assert_relative_eq!(profile.angle_at(-100.0), 0.1);
        assert_relative_eq!(profile.angle_at(9.999), 0.1);
        assert_relative_eq!(profile.angle_at(10.0), -0.1);
        assert_relative_eq!(profile.angle_at(20.0), 0.02);
        assert_relative_eq!(profile.angle_at(1e6), 0.02);
    }

    #[test]
    fn uniform_profile_ignores_position() {
        let profile = GradeProfile::uniform(0.03).unwrap();
        assert_relative_eq!(profile.angle_at(-5.0), 0.03);
        assert_relative_eq!(profile.angle_at(42.0), 0.03);
    }

    #[test]
    fn rejects_unordered_segments() {
        let result = GradeProfile::new(
            [GradeSegment::new(50.0, 0.1), GradeSegment::new(50.0, 0.2)],
            0.0,
        );
        assert_eq!(result, Err(ProfileError::Unordered { index: 1 }));
    }

    #[test]
    fn rejects_non_finite_angles() {
        let result = GradeProfile::new([GradeSegment::new(50.0, f64::NAN)], 0.0);
        assert_eq!(result, Err(ProfileError::NotFinite { index: 0 }));

        assert_eq!(
            GradeProfile::uniform(f64::INFINITY),
            Err(ProfileError::NotFinite { index: 0 })
        );
    }
}
