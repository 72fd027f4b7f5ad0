//! Ballpit - sphere simulation behind the login screen
//!
//! The renderer (three.js instanced mesh) owns the canvas, camera and pointer
//! raycasting. Each animation tick it:
//! 1. pushes inputs: `set_bounds` on resize, `set_cursor_target` / `release_cursor`
//! 2. calls `advance(dt)`
//! 3. reads the packed instance buffer (`[x, y, z, scale]` per sphere)
//!
//! BallpitCore only orchestrates; the physics lives in `systems::physics`.

use glam::Vec3;

use crate::domain::{BallpitConfig, ConfigError};
use crate::spatial::{ParticleState, SimulationBounds};
use crate::systems::physics::{PhysicsStepper, SimulationContext, StepReport};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::Ballpit;
pub use perf_stats::PerfStats;
pub use render_extract::INSTANCE_STRIDE;

use perf_timer::FrameClock;

/// CPU-side copy of what the renderer uploads each frame
pub(crate) struct RenderBuffers {
    /// `[x, y, z, scale]` per sphere, slot order
    pub(crate) instances: Vec<f32>,
}

/// The simulation
pub struct BallpitCore {
    config: BallpitConfig,
    state: ParticleState,
    stepper: PhysicsStepper,
    context: SimulationContext,
    render: RenderBuffers,

    // State
    seed: u32,
    frame: u64,
    last_report: StepReport,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl BallpitCore {
    /// Validate `config` and lay out a fresh ballpit.
    pub fn new(config: BallpitConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(init::create_core(config))
    }

    /// Ballpit with the stock login-screen settings.
    pub fn with_defaults() -> Self {
        init::create_core(BallpitConfig::default())
    }

    /// Parse a (partial) JSON config from JS and build the ballpit.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config = BallpitConfig::from_json(json)?;
        Ok(init::create_core(config))
    }

    /// Build around an explicit state (scripted scenes, tests). The
    /// configured `count` is replaced by the state's length.
    pub fn from_state(config: BallpitConfig, state: ParticleState) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(init::create_core_with_state(config, state))
    }

    pub fn config(&self) -> &BallpitConfig { &self.config }

    pub fn count(&self) -> usize { self.state.len() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn seed(&self) -> u32 { self.seed }

    pub fn state(&self) -> &ParticleState { &self.state }

    pub fn bounds(&self) -> SimulationBounds { self.context.bounds }

    pub fn context(&self) -> &SimulationContext { &self.context }

    /// Counters from the most recent `advance`
    pub fn last_report(&self) -> StepReport { self.last_report }

    /// Step the simulation forward by one animation tick
    pub fn advance(&mut self, dt_seconds: f32) -> StepReport {
        step::step(self, dt_seconds)
    }

    // === RENDERER INPUTS ===

    /// Viewport half extents (world units). Z stays as configured.
    pub fn set_bounds(&mut self, max_x: f32, max_y: f32) {
        settings::set_bounds(self, max_x, max_y);
    }

    /// Full visible world size at the sphere plane; stored as half extents.
    pub fn set_viewport_size(&mut self, world_width: f32, world_height: f32) {
        settings::set_bounds(self, world_width * 0.5, world_height * 0.5);
    }

    /// Pointer moved over the canvas; slot 0 follows `target` from now on
    pub fn set_cursor_target(&mut self, target: Vec3) {
        self.context.attractor.set_target(target);
    }

    /// Pointer left the canvas
    pub fn release_cursor(&mut self) {
        self.context.attractor.release();
    }

    pub fn cursor_active(&self) -> bool {
        self.context.attractor.is_active()
    }

    // === RUNTIME SETTINGS ===

    pub fn set_gravity(&mut self, gravity: f32) -> Result<(), ConfigError> {
        settings::set_gravity(self, gravity)
    }

    pub fn set_friction(&mut self, friction: f32) -> Result<(), ConfigError> {
        settings::set_friction(self, friction)
    }

    pub fn set_wall_bounce(&mut self, wall_bounce: f32) -> Result<(), ConfigError> {
        settings::set_wall_bounce(self, wall_bounce)
    }

    pub fn set_max_velocity(&mut self, max_velocity: f32) -> Result<(), ConfigError> {
        settings::set_max_velocity(self, max_velocity)
    }

    /// Lay the spheres out again with the current seed
    pub fn reset(&mut self) {
        let seed = self.seed;
        init::reset(self, seed);
    }

    /// Lay the spheres out again with a new seed
    pub fn reseed(&mut self, seed: u32) {
        init::reset(self, seed);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }

    // === RENDERER OUTPUTS ===

    /// Packed `[x, y, z, scale]` per sphere, refreshed after every step
    pub fn instances(&self) -> &[f32] {
        &self.render.instances
    }

    /// Get pointer to the instance buffer (for JS zero-copy reads)
    pub fn instances_ptr(&self) -> *const f32 {
        self.render.instances.as_ptr()
    }

    pub fn instances_len(&self) -> usize {
        self.render.instances.len()
    }

    /// Where the renderer should put its point light: slot 0, but only
    /// while slot 0 is shown.
    pub fn light_anchor(&self) -> Option<Vec3> {
        render_extract::light_anchor(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
