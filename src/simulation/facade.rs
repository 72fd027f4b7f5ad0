use glam::Vec3;
use wasm_bindgen::prelude::*;

use crate::domain::ConfigError;

use super::perf_stats::PerfStats;
use super::render_extract::INSTANCE_STRIDE;
use super::BallpitCore;

fn to_js(e: ConfigError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// JS handle to the ballpit simulation
#[wasm_bindgen]
pub struct Ballpit {
    core: BallpitCore,
}

#[wasm_bindgen]
impl Ballpit {
    /// Create a ballpit from a JSON config (camelCase keys, all optional).
    /// Pass nothing to use the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<Ballpit, JsValue> {
        let core = match config_json {
            Some(json) => BallpitCore::from_json(&json).map_err(to_js)?,
            None => BallpitCore::with_defaults(),
        };
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn count(&self) -> usize { self.core.count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn seed(&self) -> u32 { self.core.seed() }

    #[wasm_bindgen(getter, js_name = followCursor)]
    pub fn follow_cursor(&self) -> bool { self.core.config().follow_cursor }

    #[wasm_bindgen(getter, js_name = cursorActive)]
    pub fn cursor_active(&self) -> bool { self.core.cursor_active() }

    /// Effective configuration as JSON
    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    /// Step the simulation forward by one animation tick
    pub fn advance(&mut self, dt_seconds: f32) {
        self.core.advance(dt_seconds);
    }

    // === RENDERER INPUTS ===

    /// Viewport half extents in world units (call on resize)
    #[wasm_bindgen(js_name = setBounds)]
    pub fn set_bounds(&mut self, max_x: f32, max_y: f32) {
        self.core.set_bounds(max_x, max_y);
    }

    /// Visible world width/height at the sphere plane (call on resize)
    #[wasm_bindgen(js_name = setViewportSize)]
    pub fn set_viewport_size(&mut self, world_width: f32, world_height: f32) {
        self.core.set_viewport_size(world_width, world_height);
    }

    /// Pointer moved: world-space hit of the pointer ray on the
    /// interaction plane
    #[wasm_bindgen(js_name = setCursor)]
    pub fn set_cursor(&mut self, x: f32, y: f32, z: f32) {
        self.core.set_cursor_target(Vec3::new(x, y, z));
    }

    /// Pointer left the canvas
    #[wasm_bindgen(js_name = releaseCursor)]
    pub fn release_cursor(&mut self) {
        self.core.release_cursor();
    }

    // === SETTINGS ===

    #[wasm_bindgen(js_name = setGravity)]
    pub fn set_gravity(&mut self, gravity: f32) -> Result<(), JsValue> {
        self.core.set_gravity(gravity).map_err(to_js)
    }

    #[wasm_bindgen(js_name = setFriction)]
    pub fn set_friction(&mut self, friction: f32) -> Result<(), JsValue> {
        self.core.set_friction(friction).map_err(to_js)
    }

    #[wasm_bindgen(js_name = setWallBounce)]
    pub fn set_wall_bounce(&mut self, wall_bounce: f32) -> Result<(), JsValue> {
        self.core.set_wall_bounce(wall_bounce).map_err(to_js)
    }

    #[wasm_bindgen(js_name = setMaxVelocity)]
    pub fn set_max_velocity(&mut self, max_velocity: f32) -> Result<(), JsValue> {
        self.core.set_max_velocity(max_velocity).map_err(to_js)
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    pub fn reseed(&mut self, seed: u32) {
        self.core.reseed(seed);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    #[wasm_bindgen(js_name = enablePerfMetrics)]
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    #[wasm_bindgen(js_name = perfStats)]
    pub fn perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === RENDERER OUTPUTS ===

    /// Pointer into wasm memory: `count * INSTANCE_STRIDE` floats of
    /// `[x, y, z, scale]`. Re-read after every `advance`; the view is
    /// invalidated if wasm memory grows.
    #[wasm_bindgen(js_name = instancesPtr)]
    pub fn instances_ptr(&self) -> *const f32 {
        self.core.instances_ptr()
    }

    /// Instance buffer length in floats
    #[wasm_bindgen(js_name = instancesLen)]
    pub fn instances_len(&self) -> usize {
        self.core.instances_len()
    }

    #[wasm_bindgen(js_name = instanceStride)]
    pub fn instance_stride() -> usize {
        INSTANCE_STRIDE
    }

    /// Copy of the instance buffer, for hosts that cannot view wasm memory
    #[wasm_bindgen(js_name = instancesCopy)]
    pub fn instances_copy(&self) -> Vec<f32> {
        self.core.instances().to_vec()
    }

    /// `[x, y, z]` for the point light, or `undefined` when slot 0 is hidden
    #[wasm_bindgen(js_name = lightAnchor)]
    pub fn light_anchor(&self) -> Option<Vec<f32>> {
        self.core.light_anchor().map(|p| p.to_array().to_vec())
    }
}

impl Ballpit {
    /// Native access to the underlying simulation
    pub fn core(&self) -> &BallpitCore {
        &self.core
    }
}
