//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! They hold no state; entity state lives in components and claims live in
//! the engine's `ClaimTable`.

pub mod assignment;
pub mod detection;
pub mod interceptor_motion;
pub mod snapshot;
pub mod target_motion;
