//! Point-mass physics: single-particle integration, swarm stepping and
//! flowfield forces.

pub mod flowfield;
pub mod particle;
pub mod system;

pub use flowfield::FlowField;
pub use particle::{apply_force, Particle};
pub use system::{ParticleSystem, PerfStats};
