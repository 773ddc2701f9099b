//! Simulation constants and tuning parameters.

use std::f64::consts::FRAC_PI_2;

/// Default simulation step (time units per tick).
pub const DEFAULT_DT: f64 = 1.0;

/// Wall-clock interval between ticks when driven in real time (milliseconds).
pub const TICK_INTERVAL_MS: u64 = 100;

// --- Engagement ---

/// Range at which an interceptor and its target destroy each other.
pub const KILL_RADIUS: f64 = 40.0;

// --- Map ---

/// Half-width of the displayed map; the scene spans `[-MAP_EXTENT, MAP_EXTENT]` on both axes.
pub const MAP_EXTENT: f64 = 1000.0;

// --- Guarded asset ---

pub const DEFAULT_DETECTION_RADIUS: f64 = 600.0;

// --- Targets ---

pub const DEFAULT_TARGET_SPEED: f64 = 10.0;

// --- Interceptors ---

pub const DEFAULT_INTERCEPTOR_SPEED: f64 = 20.0;

/// Radius of the idle holding pattern at spawn.
pub const DEFAULT_STANDOFF_RADIUS: f64 = 100.0;

/// Offset of each idle anchor from the asset along both axes.
pub const DEFAULT_ANCHOR_OFFSET: f64 = 200.0;

/// Interceptors spawn heading north.
pub const INITIAL_INTERCEPTOR_HEADING: f64 = FRAC_PI_2;

// --- Random raids ---

/// Inner edge of the ring random raid targets spawn on.
pub const RAID_MIN_RANGE: f64 = 800.0;

/// Outer edge of the ring random raid targets spawn on.
pub const RAID_MAX_RANGE: f64 = 1000.0;

/// Speed jitter applied to random raid targets (fraction of the base speed).
pub const RAID_SPEED_JITTER: f64 = 0.2;
