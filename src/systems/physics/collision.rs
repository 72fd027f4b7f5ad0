//! Sphere overlap correction
//!
//! One relaxation pass, O(n^2) over pairs. Overlapping spheres are pushed
//! apart by half the overlap each and get a velocity kick along the push,
//! scaled by their own speed (with a floor). Not an impulse solver: no mass
//! ratio, no restitution, momentum is not conserved.

use std::ops::Range;

use glam::Vec3;

use crate::core::math::direction_or_axis;
use crate::spatial::ParticleState;

/// Contacts found by one pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactCounts {
    pub peer: u32,
    pub attractor: u32,
    pub degenerate: u32,
}

/// Half-overlap push along `diff` (pointing from the first sphere to the
/// second), or `None` if the spheres do not touch.
#[inline(always)]
fn overlap_push(diff: Vec3, sum_radius: f32, counts: &mut ContactCounts) -> Option<Vec3> {
    let dist = diff.length();
    if dist >= sum_radius {
        return None;
    }
    let (dir, degenerate) = direction_or_axis(diff, dist);
    if degenerate {
        counts.degenerate += 1;
        log::debug!("coincident sphere centers, pushing along fallback axis");
    }
    Some(dir * (0.5 * (sum_radius - dist)))
}

/// Resolve every pair `i < j` inside `range` (the dynamic slots).
pub fn resolve_peers(
    state: &mut ParticleState,
    range: Range<usize>,
    kick_floor: f32,
    counts: &mut ContactCounts,
) {
    let end = range.end;
    for i in range {
        for j in (i + 1)..end {
            let diff = state.positions[j] - state.positions[i];
            let sum_radius = state.radii[i] + state.radii[j];
            let Some(push) = overlap_push(diff, sum_radius, counts) else {
                continue;
            };

            let kick_i = state.velocities[i].length().max(kick_floor);
            state.positions[i] -= push;
            state.velocities[i] -= push * kick_i;

            let kick_j = state.velocities[j].length().max(kick_floor);
            state.positions[j] += push;
            state.velocities[j] += push * kick_j;

            counts.peer += 1;
        }
    }
}

/// Push dynamic spheres in `range` out of the cursor sphere at `lead`.
///
/// The cursor sphere is never moved itself. It uses its own (stronger)
/// kick floor.
pub fn resolve_against_lead(
    state: &mut ParticleState,
    lead: usize,
    range: Range<usize>,
    kick_floor: f32,
    counts: &mut ContactCounts,
) {
    debug_assert!(!range.contains(&lead), "lead slot {} inside dynamic range", lead);
    let anchor = state.positions[lead];
    let anchor_radius = state.radii[lead];

    for i in range {
        let diff = anchor - state.positions[i];
        let sum_radius = state.radii[i] + anchor_radius;
        let Some(push) = overlap_push(diff, sum_radius, counts) else {
            continue;
        };

        let kick = state.velocities[i].length().max(kick_floor);
        state.positions[i] -= push;
        state.velocities[i] -= push * kick;

        counts.attractor += 1;
    }
}
