//! Ballpit physics - one frame of sphere motion
//!
//! Key concepts:
//! - Spheres keep a velocity across frames (world units per frame)
//! - Gravity pulls proportionally to radius, friction damps every frame
//! - Overlaps are corrected in a single relaxation pass, no iteration
//! - Walls snap the sphere back inside and reflect with `wall_bounce`
//! - Slot 0 can be handed to the cursor and then moves kinematically

mod boundary;
mod collision;
mod context;
mod forces;
mod stepper;
mod types;

pub use boundary::{contain, Contained};
pub use collision::{resolve_against_lead, resolve_peers, ContactCounts};
pub use context::SimulationContext;
pub use forces::{drive_kinematic, integrate_dynamic};
pub use stepper::PhysicsStepper;
pub use types::{FramePlan, Lead, Motion, Pass, PhysicsParams, StepReport, VerticalPolicy};
