use crate::spatial::SimulationBounds;
use crate::systems::attractor::CursorAttractor;

/// Everything the renderer feeds in from outside, passed by reference into
/// each step. Bounds follow the viewport; the attractor follows the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationContext {
    pub bounds: SimulationBounds,
    pub attractor: CursorAttractor,
}

impl SimulationContext {
    pub fn new(bounds: SimulationBounds) -> Self {
        Self {
            bounds,
            attractor: CursorAttractor::new(),
        }
    }
}
