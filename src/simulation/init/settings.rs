use crate::domain::config::{check_friction, check_gravity, check_max_velocity, check_wall_bounce};
use crate::domain::ConfigError;

use super::BallpitCore;

/// Half extents narrower than the biggest sphere would pin it against both
/// walls at once, so they are rejected like a zero-sized canvas.
pub(super) fn set_bounds(core: &mut BallpitCore, max_x: f32, max_y: f32) {
    let widest = core.config.max_size.max(core.config.size0);
    if max_x < widest || max_y < widest {
        log::warn!("ignoring bounds {} x {} narrower than sphere radius {}", max_x, max_y, widest);
        return;
    }
    if core.context.bounds.set_xy(max_x, max_y) {
        log::debug!("bounds set to ±{} x ±{}", max_x, max_y);
    } else {
        log::warn!("ignoring invalid bounds {} x {}", max_x, max_y);
    }
}

pub(super) fn set_gravity(core: &mut BallpitCore, gravity: f32) -> Result<(), ConfigError> {
    let gravity = check_gravity(gravity)?;
    core.config.gravity = gravity;
    core.stepper.params_mut().gravity = gravity;
    Ok(())
}

pub(super) fn set_friction(core: &mut BallpitCore, friction: f32) -> Result<(), ConfigError> {
    let friction = check_friction(friction)?;
    core.config.friction = friction;
    core.stepper.params_mut().friction = friction;
    Ok(())
}

pub(super) fn set_wall_bounce(core: &mut BallpitCore, wall_bounce: f32) -> Result<(), ConfigError> {
    let wall_bounce = check_wall_bounce(wall_bounce)?;
    core.config.wall_bounce = wall_bounce;
    core.stepper.params_mut().wall_bounce = wall_bounce;
    Ok(())
}

pub(super) fn set_max_velocity(core: &mut BallpitCore, max_velocity: f32) -> Result<(), ConfigError> {
    let max_velocity = check_max_velocity(max_velocity)?;
    core.config.max_velocity = max_velocity;
    core.stepper.params_mut().max_velocity = max_velocity;
    Ok(())
}
