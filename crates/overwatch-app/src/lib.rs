//! OVERWATCH driver.
//!
//! Wires the simulation engine to a paced game loop thread and to snapshot
//! sinks for external viewers.

pub mod game_loop;
pub mod logging;
pub mod render;
pub mod state;

pub use logging::init as init_logging;
pub use overwatch_core as core;
