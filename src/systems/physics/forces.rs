use glam::Vec3;

use crate::core::math::cap_length;

use super::types::PhysicsParams;

/// Gravity, friction, speed cap and position update for one dynamic sphere.
///
/// Gravity scales with radius, so big spheres drop faster. Friction is a
/// plain per-frame multiplier, not mass-normalized drag.
#[inline(always)]
pub fn integrate_dynamic(
    position: &mut Vec3,
    velocity: &mut Vec3,
    radius: f32,
    dt: f32,
    params: &PhysicsParams,
) {
    velocity.y -= dt * params.gravity * radius;
    *velocity *= params.friction;
    *velocity = cap_length(*velocity, params.max_velocity);
    *position += *velocity;
}

/// Ease the cursor sphere toward its target; it carries no velocity.
#[inline]
pub fn drive_kinematic(position: &mut Vec3, velocity: &mut Vec3, target: Vec3, smoothing: f32) {
    *position = position.lerp(target, smoothing);
    *velocity = Vec3::ZERO;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> PhysicsParams {
        PhysicsParams {
            gravity: 0.5,
            friction: 1.0,
            wall_bounce: 0.95,
            max_velocity: 10.0,
            max_size: 1.0,
            peer_kick_floor: 1.0,
            attractor_kick_floor: 2.0,
            attractor_smoothing: 0.1,
        }
    }

    #[test]
    fn gravity_scales_with_radius() {
        let p = params();
        let mut small = (Vec3::ZERO, Vec3::ZERO);
        let mut large = (Vec3::ZERO, Vec3::ZERO);
        integrate_dynamic(&mut small.0, &mut small.1, 0.5, 0.1, &p);
        integrate_dynamic(&mut large.0, &mut large.1, 2.0, 0.1, &p);
        assert!((small.1.y + 0.025).abs() < 1e-6);
        assert!((large.1.y + 0.1).abs() < 1e-6);
        assert_eq!(small.0, small.1);
    }

    #[test]
    fn speed_is_capped_before_moving() {
        let mut p = params();
        p.gravity = 0.0;
        p.max_velocity = 0.15;
        let mut pos = Vec3::ZERO;
        let mut vel = Vec3::new(3.0, 4.0, 0.0);
        integrate_dynamic(&mut pos, &mut vel, 1.0, 0.016, &p);
        assert!((vel.length() - 0.15).abs() < 1e-6);
        assert!((pos - vel).length() < 1e-7);
    }

    #[test]
    fn friction_damps_every_frame() {
        let mut p = params();
        p.gravity = 0.0;
        p.friction = 0.9;
        let mut pos = Vec3::ZERO;
        let mut vel = Vec3::new(1.0, 0.0, 0.0);
        integrate_dynamic(&mut pos, &mut vel, 1.0, 0.016, &p);
        assert!((vel.x - 0.9).abs() < 1e-6);
    }

    #[test]
    fn kinematic_slot_eases_and_stops() {
        let mut pos = Vec3::ZERO;
        let mut vel = Vec3::new(1.0, 1.0, 1.0);
        drive_kinematic(&mut pos, &mut vel, Vec3::new(10.0, 0.0, 0.0), 0.1);
        assert!((pos.x - 1.0).abs() < 1e-6);
        assert_eq!(vel, Vec3::ZERO);
    }
}
