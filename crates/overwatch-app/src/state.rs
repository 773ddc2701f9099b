//! State shared between the caller and the game loop thread.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use anyhow::{anyhow, Context};

use overwatch_core::state::SimSnapshot;

/// Commands sent to the game loop thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoopCommand {
    /// Stop ticking; the loop keeps draining commands.
    Pause,
    Resume,
    /// Multiply the tick rate. Values that are not finite and positive are ignored.
    SetTimeScale(f64),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Why the game loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Every target was destroyed.
    Complete,
    /// The tick budget ran out first.
    TickLimit,
    Shutdown,
    /// The command sender was dropped.
    Disconnected,
}

/// Outcome of a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopSummary {
    pub ticks: u64,
    pub reason: StopReason,
    pub targets_destroyed: u32,
    pub interceptors_expended: u32,
}

/// Handle to a running game loop thread.
///
/// Dropping the handle disconnects the command channel, which stops the loop
/// at its next tick.
pub struct LoopHandle {
    command_tx: mpsc::Sender<LoopCommand>,
    latest_snapshot: Arc<Mutex<Option<SimSnapshot>>>,
    thread: JoinHandle<io::Result<LoopSummary>>,
}

impl LoopHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<LoopCommand>,
        latest_snapshot: Arc<Mutex<Option<SimSnapshot>>>,
        thread: JoinHandle<io::Result<LoopSummary>>,
    ) -> Self {
        Self {
            command_tx,
            latest_snapshot,
            thread,
        }
    }

    pub fn send(&self, command: LoopCommand) -> anyhow::Result<()> {
        self.command_tx
            .send(command)
            .context("game loop has already stopped")
    }

    pub fn pause(&self) -> anyhow::Result<()> {
        self.send(LoopCommand::Pause)
    }

    pub fn resume(&self) -> anyhow::Result<()> {
        self.send(LoopCommand::Resume)
    }

    pub fn set_time_scale(&self, scale: f64) -> anyhow::Result<()> {
        self.send(LoopCommand::SetTimeScale(scale))
    }

    /// Latest snapshot published by the loop, if it has ticked yet.
    pub fn latest_snapshot(&self) -> Option<SimSnapshot> {
        self.latest_snapshot.lock().ok()?.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Wait for the loop to stop on its own.
    pub fn join(self) -> anyhow::Result<LoopSummary> {
        let summary = self
            .thread
            .join()
            .map_err(|_| anyhow!("game loop thread panicked"))??;
        Ok(summary)
    }

    /// Ask the loop to stop and wait for it.
    pub fn shutdown(self) -> anyhow::Result<LoopSummary> {
        // The loop may already be gone; joining still reports how it ended.
        let _ = self.command_tx.send(LoopCommand::Shutdown);
        self.join()
    }
}
