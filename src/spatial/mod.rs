//! Particle storage and the box it lives in.

pub mod bounds;
pub mod state;

pub use bounds::SimulationBounds;
pub use state::ParticleState;
