//! Snapshot sinks: where each tick's `SimSnapshot` goes.
//!
//! Drawing is left to external viewers. `JsonLinesSink` streams one JSON
//! snapshot per line for them; `LogSink` writes a one-line summary per tick.

use std::io::{self, Write};

use overwatch_core::events::SimEvent;
use overwatch_core::state::SimSnapshot;

/// Receives every snapshot a run produces, in tick order.
pub trait SnapshotSink {
    fn emit(&mut self, snapshot: &SimSnapshot) -> io::Result<()>;

    /// Called once after the last snapshot.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<S: SnapshotSink + ?Sized> SnapshotSink for Box<S> {
    fn emit(&mut self, snapshot: &SimSnapshot) -> io::Result<()> {
        (**self).emit(snapshot)
    }

    fn finish(&mut self) -> io::Result<()> {
        (**self).finish()
    }
}

/// Newline-delimited JSON, one snapshot per line.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SnapshotSink for JsonLinesSink<W> {
    fn emit(&mut self, snapshot: &SimSnapshot) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, snapshot)?;
        self.writer.write_all(b"\n")
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Logs a summary line per tick at info level, and one line per event at debug.
#[derive(Debug, Default)]
pub struct LogSink;

impl SnapshotSink for LogSink {
    fn emit(&mut self, snapshot: &SimSnapshot) -> io::Result<()> {
        log::info!("{}", summary_line(snapshot));
        for event in &snapshot.events {
            log::debug!("  {}", describe(event));
        }
        Ok(())
    }
}

/// `t=12 targets 3/4 interceptors 2/4 splashes 1`
pub fn summary_line(snapshot: &SimSnapshot) -> String {
    let score = &snapshot.score;
    format!(
        "t={} targets {}/{} interceptors {}/{} splashes {}",
        snapshot.time.tick,
        snapshot.targets.len(),
        score.targets_total,
        snapshot.interceptors.len(),
        score.interceptors_total,
        score.targets_destroyed
    )
}

fn describe(event: &SimEvent) -> String {
    match event {
        SimEvent::ContactDetected { target, range } => {
            format!("contact: target {target} at range {range:.1}")
        }
        SimEvent::Assigned {
            engagement_id,
            interceptor,
            target,
            range,
        } => format!(
            "engagement {engagement_id}: interceptor {interceptor} -> target {target} ({range:.1} out)"
        ),
        SimEvent::Splash {
            engagement_id,
            interceptor,
            target,
        } => format!("engagement {engagement_id}: splash, interceptor {interceptor} and target {target}"),
    }
}
