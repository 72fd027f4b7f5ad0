//! Systems that act on particle state each frame.

pub mod attractor;
pub mod physics;
