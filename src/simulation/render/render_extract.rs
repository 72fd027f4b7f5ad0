use glam::Vec3;

use super::BallpitCore;

/// Floats per sphere in the instance buffer: `x, y, z, scale`
pub const INSTANCE_STRIDE: usize = 4;

/// Copy positions and effective radii into the instance buffer.
///
/// With `follow_cursor` off slot 0 is still simulated but drawn with scale 0.
pub(super) fn refresh_instances(core: &mut BallpitCore) {
    let hide_lead = !core.config.follow_cursor;
    let state = &core.state;
    let out = &mut core.render.instances;
    debug_assert_eq!(out.len(), state.len() * INSTANCE_STRIDE);

    for (i, slot) in out.chunks_exact_mut(INSTANCE_STRIDE).enumerate() {
        let p = state.positions[i];
        let scale = if i == 0 && hide_lead { 0.0 } else { state.radii[i] };
        slot.copy_from_slice(&[p.x, p.y, p.z, scale]);
    }
}

pub(super) fn light_anchor(core: &BallpitCore) -> Option<Vec3> {
    core.config.follow_cursor.then(|| core.state.positions[0])
}
