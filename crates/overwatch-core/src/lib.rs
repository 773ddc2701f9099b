//! Core types and definitions for the OVERWATCH interception simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! geometry, components, scenario configuration, snapshots, events,
//! errors and constants. It has no dependency on the ECS or any runtime.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod geometry;
pub mod state;
pub mod types;
