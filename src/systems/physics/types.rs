use std::ops::Range;

use glam::Vec3;

use crate::domain::BallpitConfig;

/// How a slot moves this frame.
///
/// Only slot 0 can be kinematic (while the cursor drives it); every other
/// slot is always dynamic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    /// Integrated under gravity, friction, collisions and walls
    Dynamic,
    /// Pulled toward `target`, velocity held at zero. Pushes others but is
    /// never pushed back
    Kinematic { target: Vec3 },
}

/// Y-axis wall policy, picked from gravity each frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalPolicy {
    /// Zero gravity: floor and ceiling, same as X
    Box,
    /// Gravity on: floor only, spheres may fly above the top edge and fall back
    FloorOnly,
}

impl VerticalPolicy {
    #[inline]
    pub fn for_gravity(gravity: f32) -> Self {
        if gravity == 0.0 {
            VerticalPolicy::Box
        } else {
            VerticalPolicy::FloorOnly
        }
    }
}

/// Numeric knobs of the step, copied out of a validated [`BallpitConfig`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsParams {
    pub gravity: f32,
    pub friction: f32,
    pub wall_bounce: f32,
    pub max_velocity: f32,
    /// Largest radius the config can produce; widens the depth wall
    pub max_size: f32,
    pub peer_kick_floor: f32,
    pub attractor_kick_floor: f32,
    pub attractor_smoothing: f32,
}

impl From<&BallpitConfig> for PhysicsParams {
    fn from(cfg: &BallpitConfig) -> Self {
        Self {
            gravity: cfg.gravity,
            friction: cfg.friction,
            wall_bounce: cfg.wall_bounce,
            max_velocity: cfg.max_velocity,
            max_size: cfg.max_size,
            peer_kick_floor: cfg.peer_kick_floor,
            attractor_kick_floor: cfg.attractor_kick_floor,
            attractor_smoothing: cfg.attractor_smoothing,
        }
    }
}

/// The kinematic slot and where it is heading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lead {
    pub index: usize,
    pub target: Vec3,
}

/// Result of the once-per-frame dispatch on slot 0's [`Motion`].
#[derive(Clone, Debug, PartialEq)]
pub struct FramePlan {
    /// Slots integrated under forces this frame
    pub dynamic: Range<usize>,
    /// Cursor-driven slot, if any
    pub lead: Option<Lead>,
}

impl FramePlan {
    /// Pair tests the collide pass performs for this plan
    pub fn pair_checks(&self) -> usize {
        let n = self.dynamic.len();
        n * n.saturating_sub(1) / 2 + self.lead.map_or(0, |_| n)
    }
}

/// Stages of a frame, in the order they run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pass {
    Integrate,
    Collide,
    Contain,
}

/// Counters gathered during one step
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepReport {
    /// Overlapping dynamic pairs corrected
    pub contacts: u32,
    /// Dynamic spheres pushed by the cursor sphere
    pub attractor_contacts: u32,
    /// Contacts with coincident centers (fallback axis used)
    pub degenerate_contacts: u32,
    /// Wall snaps, counted per axis
    pub wall_hits: u32,
    /// Fastest dynamic sphere after the step
    pub max_speed: f32,
}
