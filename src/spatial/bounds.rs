use glam::Vec3;

/// Half extents of the simulation box, centered on the origin.
///
/// X and Y follow the viewport and are rewritten by the renderer on resize.
/// Z is fixed by configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationBounds {
    pub max_x: f32,
    pub max_y: f32,
    pub max_z: f32,
}

impl SimulationBounds {
    pub fn new(max_x: f32, max_y: f32, max_z: f32) -> Self {
        Self { max_x, max_y, max_z }
    }

    /// The box center. Slot 0 starts here.
    pub fn center(&self) -> Vec3 {
        Vec3::ZERO
    }

    /// Update the viewport-driven extents. Non-finite, zero or negative
    /// values (a zero-sized canvas mid-resize) are ignored.
    pub fn set_xy(&mut self, max_x: f32, max_y: f32) -> bool {
        if !(max_x.is_finite() && max_y.is_finite()) || max_x <= 0.0 || max_y <= 0.0 {
            return false;
        }
        self.max_x = max_x;
        self.max_y = max_y;
        true
    }

    /// Depth wall used for containment: never tighter than the largest
    /// sphere the configuration can produce, so it cannot poke through the
    /// near plane.
    #[inline]
    pub fn depth_limit(&self, max_size: f32) -> f32 {
        self.max_z.max(max_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_limit_respects_largest_sphere() {
        let b = SimulationBounds::new(5.0, 5.0, 0.5);
        assert_eq!(b.depth_limit(1.0), 1.0);
        assert_eq!(b.depth_limit(0.25), 0.5);
    }

    #[test]
    fn invalid_resize_is_ignored() {
        let mut b = SimulationBounds::new(5.0, 5.0, 2.0);
        assert!(!b.set_xy(f32::NAN, 3.0));
        assert!(!b.set_xy(-1.0, 3.0));
        assert!(!b.set_xy(0.0, 0.0));
        assert!(!b.set_xy(4.0, 0.0));
        assert_eq!(b, SimulationBounds::new(5.0, 5.0, 2.0));
        assert!(b.set_xy(8.0, 4.5));
        assert_eq!((b.max_x, b.max_y), (8.0, 4.5));
    }
}
