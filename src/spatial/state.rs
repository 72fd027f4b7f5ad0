//! ParticleState - Structure of Arrays (SoA) storage for the spheres
//!
//! Particle `i` is an index into three parallel buffers, not an object:
//!     positions[i], velocities[i], radii[i]
//! Count is fixed at construction. Nothing here moves particles; the stepper
//! in `systems::physics` does.

use glam::Vec3;

use crate::core::random::XorShift32;

use super::bounds::SimulationBounds;

pub struct ParticleState {
    // Structure of Arrays - one contiguous buffer per attribute
    pub positions: Vec<Vec3>,   // world units
    pub velocities: Vec<Vec3>,  // world units per frame
    pub radii: Vec<f32>,        // > 0, fixed after construction
}

impl ParticleState {
    /// Lay out `count` spheres inside `bounds`.
    ///
    /// Slot 0 sits at the center with radius `size0` and no velocity; the
    /// rest are spread uniformly over the whole box with radii drawn from
    /// `size_range`.
    pub fn initialize(
        count: usize,
        bounds: &SimulationBounds,
        size_range: (f32, f32),
        size0: f32,
        rng: &mut XorShift32,
    ) -> Self {
        assert!(count > 0, "particle count must be at least 1");
        assert!(size0 > 0.0, "size0 must be positive, got {}", size0);
        let (min_size, max_size) = size_range;
        assert!(
            min_size > 0.0 && max_size >= min_size,
            "invalid size range [{}, {}]",
            min_size,
            max_size
        );

        let mut positions = Vec::with_capacity(count);
        let velocities = vec![Vec3::ZERO; count];
        let mut radii = Vec::with_capacity(count);

        positions.push(bounds.center());
        radii.push(size0);

        for _ in 1..count {
            let x = rng.spread(bounds.max_x);
            let y = rng.spread(bounds.max_y);
            let z = rng.spread(bounds.max_z);
            positions.push(Vec3::new(x, y, z));
            radii.push(rng.range(min_size, max_size));
        }

        Self {
            positions,
            velocities,
            radii,
        }
    }

    /// Build a state from explicit buffers (scripted scenes, tests).
    ///
    /// Panics if the buffers disagree in length, are empty, or a radius is
    /// not strictly positive.
    pub fn from_parts(positions: Vec<Vec3>, velocities: Vec<Vec3>, radii: Vec<f32>) -> Self {
        assert!(!radii.is_empty(), "particle count must be at least 1");
        assert_eq!(positions.len(), radii.len(), "positions/radii length mismatch");
        assert_eq!(velocities.len(), radii.len(), "velocities/radii length mismatch");
        for (i, r) in radii.iter().enumerate() {
            assert!(*r > 0.0 && r.is_finite(), "radius of particle {} must be > 0, got {}", i, r);
        }
        Self {
            positions,
            velocities,
            radii,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.radii.len()
    }

    /// Always false for a constructed state; present for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }

    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        self.positions[i]
    }

    #[inline]
    pub fn velocity(&self, i: usize) -> Vec3 {
        self.velocities[i]
    }

    #[inline]
    pub fn radius(&self, i: usize) -> f32 {
        self.radii[i]
    }

    /// Largest speed currently stored in `range`.
    pub fn max_speed_in(&self, range: std::ops::Range<usize>) -> f32 {
        self.velocities[range]
            .iter()
            .map(|v| v.length())
            .fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> SimulationBounds {
        SimulationBounds::new(5.0, 4.0, 2.0)
    }

    #[test]
    fn slot_zero_starts_centered_with_size0() {
        let mut rng = XorShift32::new(1);
        let state = ParticleState::initialize(50, &bounds(), (0.5, 1.0), 1.25, &mut rng);
        assert_eq!(state.len(), 50);
        assert_eq!(state.position(0), Vec3::ZERO);
        assert_eq!(state.velocity(0), Vec3::ZERO);
        assert_eq!(state.radius(0), 1.25);
    }

    #[test]
    fn layout_stays_inside_box_and_size_range() {
        let mut rng = XorShift32::new(99);
        let b = bounds();
        let state = ParticleState::initialize(500, &b, (0.5, 1.0), 1.0, &mut rng);
        for i in 1..state.len() {
            let p = state.position(i);
            assert!(p.x.abs() <= b.max_x);
            assert!(p.y.abs() <= b.max_y);
            assert!(p.z.abs() <= b.max_z);
            let r = state.radius(i);
            assert!((0.5..=1.0).contains(&r));
            assert_eq!(state.velocity(i), Vec3::ZERO);
        }
    }

    #[test]
    #[should_panic]
    fn out_of_range_index_panics() {
        let mut rng = XorShift32::new(1);
        let state = ParticleState::initialize(3, &bounds(), (0.5, 1.0), 1.0, &mut rng);
        let _ = state.position(3);
    }

    #[test]
    #[should_panic]
    fn from_parts_rejects_zero_radius() {
        let _ = ParticleState::from_parts(vec![Vec3::ZERO], vec![Vec3::ZERO], vec![0.0]);
    }
}
