use glam::Vec3;

use crate::core::math::wall_side;
use crate::spatial::SimulationBounds;

use super::types::{PhysicsParams, VerticalPolicy};

/// Position and velocity after wall containment
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contained {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Number of axes that hit a wall
    pub hits: u32,
}

/// Symmetric wall at `±limit`: snap the sphere's surface onto the wall and
/// reflect the axis velocity with `bounce`.
#[inline(always)]
fn clamp_axis(pos: &mut f32, vel: &mut f32, radius: f32, limit: f32, bounce: f32) -> bool {
    if pos.abs() + radius > limit {
        *pos = wall_side(*pos) * (limit - radius);
        *vel = -*vel * bounce;
        true
    } else {
        false
    }
}

/// Keep one sphere inside `bounds`.
///
/// X is a closed box. Y is a closed box without gravity, floor only with it.
/// Z uses `max(max_z, max_size)` so no sphere can reach the camera.
pub fn contain(
    position: Vec3,
    velocity: Vec3,
    radius: f32,
    bounds: &SimulationBounds,
    params: &PhysicsParams,
) -> Contained {
    let mut p = position;
    let mut v = velocity;
    let mut hits = 0;
    let bounce = params.wall_bounce;

    if clamp_axis(&mut p.x, &mut v.x, radius, bounds.max_x, bounce) {
        hits += 1;
    }

    match VerticalPolicy::for_gravity(params.gravity) {
        VerticalPolicy::Box => {
            if clamp_axis(&mut p.y, &mut v.y, radius, bounds.max_y, bounce) {
                hits += 1;
            }
        }
        VerticalPolicy::FloorOnly => {
            if p.y - radius < -bounds.max_y {
                p.y = -bounds.max_y + radius;
                v.y = -v.y * bounce;
                hits += 1;
            }
        }
    }

    let depth = bounds.depth_limit(params.max_size);
    if clamp_axis(&mut p.z, &mut v.z, radius, depth, bounce) {
        hits += 1;
    }

    Contained {
        position: p,
        velocity: v,
        hits,
    }
}
