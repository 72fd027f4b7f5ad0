use glam::Vec3;

/// Push axis used when two centers coincide and `diff` has no direction.
pub const FALLBACK_AXIS: Vec3 = Vec3::X;

/// Below this distance a center-to-center vector is treated as zero length.
pub const MIN_SEPARATION: f32 = 1e-6;

/// Unit vector along `diff` (whose length is `dist`).
///
/// Returns `(FALLBACK_AXIS, true)` for coincident centers so callers never
/// divide by zero and NaN never reaches the particle buffers.
#[inline]
pub fn direction_or_axis(diff: Vec3, dist: f32) -> (Vec3, bool) {
    if dist > MIN_SEPARATION && dist.is_finite() {
        (diff / dist, false)
    } else {
        (FALLBACK_AXIS, true)
    }
}

/// Scale `v` down to `max_len` if it is longer, keeping its direction.
#[inline]
pub fn cap_length(v: Vec3, max_len: f32) -> Vec3 {
    v.clamp_length_max(max_len)
}

/// Sign used when snapping onto a wall. A particle sitting exactly on the
/// axis goes to the positive wall.
#[inline]
pub fn wall_side(x: f32) -> f32 {
    if x < 0.0 { -1.0 } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_normalizes_regular_vectors() {
        let (dir, degenerate) = direction_or_axis(Vec3::new(0.0, 3.0, 4.0), 5.0);
        assert!(!degenerate);
        assert!((dir - Vec3::new(0.0, 0.6, 0.8)).length() < 1e-6);
    }

    #[test]
    fn coincident_centers_use_fallback_axis() {
        let (dir, degenerate) = direction_or_axis(Vec3::ZERO, 0.0);
        assert!(degenerate);
        assert_eq!(dir, FALLBACK_AXIS);
        assert!(dir.is_finite());
    }

    #[test]
    fn cap_length_preserves_direction() {
        let v = cap_length(Vec3::new(3.0, 0.0, 4.0), 1.0);
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert!((v.x / v.z - 0.75).abs() < 1e-6);
        assert_eq!(cap_length(Vec3::new(0.1, 0.0, 0.0), 1.0), Vec3::new(0.1, 0.0, 0.0));
    }

    #[test]
    fn wall_side_of_zero_is_positive() {
        assert_eq!(wall_side(0.0), 1.0);
        assert_eq!(wall_side(-0.5), -1.0);
        assert_eq!(wall_side(2.0), 1.0);
    }
}
