//! CursorAttractor - pointer input for slot 0
//!
//! The renderer raycasts the pointer onto its interaction plane and hands us
//! the hit point. We only remember whether the pointer is over the canvas and
//! where it points; the stepper turns that into slot 0's [`Motion`].

use glam::Vec3;

use crate::systems::physics::Motion;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorAttractor {
    control_active: bool,
    target_center: Vec3,
}

impl CursorAttractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer moved: slot 0 becomes kinematic and heads for `target`.
    /// Non-finite points (degenerate ray/plane hit) are dropped and the
    /// previous state kept.
    pub fn set_target(&mut self, target: Vec3) -> bool {
        if !target.is_finite() {
            log::debug!("ignoring non-finite cursor target {:?}", target);
            return false;
        }
        self.target_center = target;
        self.control_active = true;
        true
    }

    /// Pointer left the canvas: slot 0 goes back to being dynamic.
    pub fn release(&mut self) {
        self.control_active = false;
    }

    pub fn is_active(&self) -> bool {
        self.control_active
    }

    pub fn target(&self) -> Vec3 {
        self.target_center
    }

    pub fn motion(&self) -> Motion {
        if self.control_active {
            Motion::Kinematic {
                target: self.target_center,
            }
        } else {
            Motion::Dynamic
        }
    }
}
