//! Ballpit Engine - sphere physics for the login screen background, in WASM
//!
//! Architecture:
//! - core/       - math guards, seeded RNG, console logging
//! - domain/     - validated configuration and its errors
//! - spatial/    - particle storage (SoA) and simulation bounds
//! - systems/    - physics stepper and cursor attractor
//! - simulation/ - orchestration, render extraction, JS facade

pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook plus console logging at `info`
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::install(log::LevelFilter::Info);
    log::info!("ballpit engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Change the console log level ("error", "warn", "info", "debug", "trace", "off")
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) {
    crate::core::logging::install(crate::core::logging::level_from_str(level));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{BallpitConfig, ConfigError};
pub use simulation::{Ballpit, BallpitCore, PerfStats, INSTANCE_STRIDE};
pub use spatial::{ParticleState, SimulationBounds};
pub use systems::attractor::CursorAttractor;
pub use systems::physics::{Motion, PhysicsParams, PhysicsStepper, SimulationContext, StepReport};
