//! Simulation engine for OVERWATCH.
//!
//! Owns the hecs ECS world, runs the tracking-and-assignment systems one
//! fixed step at a time, and produces `SimSnapshot`s for renderers.

pub mod engagement;
pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use overwatch_core as core;

#[cfg(test)]
mod tests;
