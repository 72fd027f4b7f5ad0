use std::mem::size_of;

use glam::Vec3;

use crate::systems::physics::StepReport;

use super::render_extract::{self, INSTANCE_STRIDE};
use super::{BallpitCore, FrameClock};

pub(super) fn step(core: &mut BallpitCore, dt_seconds: f32) -> StepReport {
    if core.perf_enabled {
        return step_with_perf(core, dt_seconds);
    }

    let report = core.stepper.advance(&mut core.state, &core.context, dt_seconds);
    finish_frame(core, report);
    report
}

fn finish_frame(core: &mut BallpitCore, report: StepReport) {
    core.frame += 1;
    core.last_report = report;
    render_extract::refresh_instances(core);
}

fn step_with_perf(core: &mut BallpitCore, dt_seconds: f32) -> StepReport {
    core.perf_stats.reset();
    let mut clock = FrameClock::start();

    let stats = &mut core.perf_stats;
    let report = core
        .stepper
        .advance_observed(&mut core.state, &core.context, dt_seconds, |pass| {
            clock.finish_pass(pass, stats)
        });

    finish_frame(core, report);
    clock.finish_frame(&mut core.perf_stats);

    // Post-step snapshot
    let n = core.state.len();
    let pair_checks = core.stepper.plan(&core.state, &core.context).pair_checks();
    let stats = &mut core.perf_stats;
    stats.contacts = report.contacts;
    stats.attractor_contacts = report.attractor_contacts;
    stats.degenerate_contacts = report.degenerate_contacts;
    stats.wall_hits = report.wall_hits;
    stats.max_speed = report.max_speed;
    stats.particle_count = n as u32;
    stats.pair_checks = pair_checks as u32;
    // positions + velocities + radii + instance buffer
    stats.memory_bytes = (n * (2 * size_of::<Vec3>() + size_of::<f32>() * (1 + INSTANCE_STRIDE))) as u32;

    report
}
