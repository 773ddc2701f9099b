//! Game loop: drives the simulation engine at a fixed cadence.
//!
//! The engine is moved into a named thread. Commands arrive via an `mpsc`
//! channel; each snapshot goes to a `SnapshotSink` and is stored in shared
//! state for polling. `run_headless` drives the same engine as fast as
//! possible on the calling thread.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use overwatch_core::constants::TICK_INTERVAL_MS;
use overwatch_core::state::SimSnapshot;
use overwatch_sim::SimulationEngine;

use crate::render::SnapshotSink;
use crate::state::{LoopCommand, LoopHandle, LoopSummary, StopReason};

/// Nominal duration of one tick at 1x speed.
pub const TICK_DURATION: Duration = Duration::from_millis(TICK_INTERVAL_MS);

/// Slowest accepted time scale.
pub const MIN_TIME_SCALE: f64 = 0.01;
/// Fastest accepted time scale.
pub const MAX_TIME_SCALE: f64 = 100.0;

/// Whether `scale` may be applied to the tick interval.
pub fn valid_time_scale(scale: f64) -> bool {
    (MIN_TIME_SCALE..=MAX_TIME_SCALE).contains(&scale)
}

#[derive(Debug, Clone, Copy)]
pub struct LoopConfig {
    /// Wall-clock time per tick at 1x.
    pub tick_interval: Duration,
    pub max_ticks: u64,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            tick_interval: TICK_DURATION,
            max_ticks: u64::MAX,
        }
    }
}

/// Tick `engine` until it completes or `max_ticks` have run, without pacing.
pub fn run_headless<S: SnapshotSink + ?Sized>(
    engine: &mut SimulationEngine,
    sink: &mut S,
    max_ticks: u64,
) -> io::Result<LoopSummary> {
    let mut ticks = 0;
    let reason = loop {
        if engine.is_complete() {
            break StopReason::Complete;
        }
        if ticks >= max_ticks {
            break StopReason::TickLimit;
        }
        sink.emit(&engine.tick())?;
        ticks += 1;
    };
    sink.finish()?;
    Ok(summarize(engine, ticks, reason))
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop<S>(
    engine: SimulationEngine,
    sink: S,
    config: LoopConfig,
) -> io::Result<LoopHandle>
where
    S: SnapshotSink + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();
    let latest_snapshot = Arc::new(Mutex::new(None));
    let shared = Arc::clone(&latest_snapshot);

    let thread = std::thread::Builder::new()
        .name("overwatch-game-loop".into())
        .spawn(move || run_game_loop(engine, sink, config, cmd_rx, &shared))?;

    Ok(LoopHandle::new(cmd_tx, latest_snapshot, thread))
}

/// The game loop. Runs until the simulation completes, the tick budget runs
/// out, or a Shutdown command / channel disconnect arrives.
fn run_game_loop<S: SnapshotSink>(
    mut engine: SimulationEngine,
    mut sink: S,
    config: LoopConfig,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<SimSnapshot>>,
) -> io::Result<LoopSummary> {
    let mut ticks = 0;
    let mut paused = false;
    let mut time_scale = 1.0;
    let mut next_tick_time = Instant::now();

    let reason = 'outer: loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Pause) => paused = true,
                Ok(LoopCommand::Resume) => paused = false,
                Ok(LoopCommand::SetTimeScale(scale)) => {
                    if valid_time_scale(scale) {
                        time_scale = scale;
                    } else {
                        log::warn!(
                            "ignoring time scale {scale}, must be within \
                             {MIN_TIME_SCALE}..={MAX_TIME_SCALE}"
                        );
                    }
                }
                Ok(LoopCommand::Shutdown) => break 'outer StopReason::Shutdown,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => break 'outer StopReason::Disconnected,
            }
        }

        // 2. Stop conditions
        if engine.is_complete() {
            break StopReason::Complete;
        }
        if ticks >= config.max_ticks {
            break StopReason::TickLimit;
        }

        // 3. Advance one tick and publish it
        if !paused {
            let snapshot = engine.tick();
            ticks += 1;
            sink.emit(&snapshot)?;
            if let Ok(mut lock) = latest_snapshot.lock() {
                *lock = Some(snapshot);
            }
        }

        // 4. Sleep until next tick, adjusting for time_scale
        let effective_tick_duration = config.tick_interval.div_f64(time_scale);
        next_tick_time += effective_tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > effective_tick_duration * 2 {
            // Too far behind, reset instead of bursting to catch up
            next_tick_time = now;
        }
    };

    sink.finish()?;
    log::debug!("game loop stopped after {ticks} ticks: {reason:?}");
    Ok(summarize(&engine, ticks, reason))
}

fn summarize(engine: &SimulationEngine, ticks: u64, reason: StopReason) -> LoopSummary {
    let score = engine.score();
    LoopSummary {
        ticks,
        reason,
        targets_destroyed: score.targets_destroyed,
        interceptors_expended: score.interceptors_expended,
    }
}
