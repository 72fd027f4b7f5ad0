use crate::core::random::XorShift32;
use crate::domain::BallpitConfig;
use crate::spatial::{ParticleState, SimulationBounds};
use crate::systems::physics::{PhysicsParams, PhysicsStepper, SimulationContext, StepReport};

use super::perf_stats::PerfStats;
use super::render_extract::{self, INSTANCE_STRIDE};
use super::{BallpitCore, RenderBuffers};

fn initial_bounds(config: &BallpitConfig) -> SimulationBounds {
    SimulationBounds::new(config.max_x, config.max_y, config.max_z)
}

fn layout(config: &BallpitConfig, bounds: &SimulationBounds, seed: u32) -> ParticleState {
    let mut rng = XorShift32::new(seed);
    ParticleState::initialize(
        config.count,
        bounds,
        (config.min_size, config.max_size),
        config.size0,
        &mut rng,
    )
}

pub(super) fn create_core(config: BallpitConfig) -> BallpitCore {
    let bounds = initial_bounds(&config);
    let state = layout(&config, &bounds, config.seed);
    log::info!(
        "ballpit: {} spheres, gravity {}, friction {}, seed {:#x}",
        config.count,
        config.gravity,
        config.friction,
        config.seed
    );
    assemble(config, state, bounds)
}

pub(super) fn create_core_with_state(mut config: BallpitConfig, state: ParticleState) -> BallpitCore {
    if config.count != state.len() {
        log::debug!("count {} overridden by scripted state of {}", config.count, state.len());
        config.count = state.len();
    }
    let bounds = initial_bounds(&config);
    assemble(config, state, bounds)
}

fn assemble(config: BallpitConfig, state: ParticleState, bounds: SimulationBounds) -> BallpitCore {
    let count = state.len();
    let mut core = BallpitCore {
        stepper: PhysicsStepper::new(PhysicsParams::from(&config)),
        context: SimulationContext::new(bounds),
        render: RenderBuffers {
            instances: vec![0.0; count * INSTANCE_STRIDE],
        },
        seed: config.seed,
        frame: 0,
        last_report: StepReport::default(),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        config,
        state,
    };
    render_extract::refresh_instances(&mut core);
    core
}

/// Fresh layout inside the current (possibly resized) bounds. Pointer state
/// is kept: if the cursor is still over the canvas slot 0 keeps following it.
pub(super) fn reset(core: &mut BallpitCore, seed: u32) {
    core.state = layout(&core.config, &core.context.bounds, seed);
    core.seed = seed;
    core.config.seed = seed;
    core.frame = 0;
    core.last_report = StepReport::default();
    core.perf_stats.reset();
    render_extract::refresh_instances(core);
    log::debug!("ballpit reset with seed {:#x}", seed);
}
