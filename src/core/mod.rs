//! Core helpers shared by every layer: vector math guards, seeded RNG, logging.

pub mod logging;
pub mod math;
pub mod random;
