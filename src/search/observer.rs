//! Hooks for watching the search without affecting it

use crate::io::error::{Result, output_context};
use crate::search::backtrack::SearchStats;
use std::io::Write;

/// Receives a callback on every recursive entry of the search
pub trait SearchObserver {
    /// Called when the search enters `depth`, before the terminal check
    ///
    /// # Errors
    ///
    /// Returns an error if the observer's output fails; the search stops and
    /// propagates it
    fn enter(&mut self, depth: usize, stats: &SearchStats) -> Result<()>;

    /// Called once the search has finished, whatever the outcome
    fn finish(&mut self, _stats: &SearchStats) {}
}

impl<O: SearchObserver + ?Sized> SearchObserver for Box<O> {
    fn enter(&mut self, depth: usize, stats: &SearchStats) -> Result<()> {
        (**self).enter(depth, stats)
    }

    fn finish(&mut self, stats: &SearchStats) {
        (**self).finish(stats);
    }
}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn enter(&mut self, depth: usize, stats: &SearchStats) -> Result<()> {
        (**self).enter(depth, stats)
    }

    fn finish(&mut self, stats: &SearchStats) {
        (**self).finish(stats);
    }
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    fn enter(&mut self, _depth: usize, _stats: &SearchStats) -> Result<()> {
        Ok(())
    }
}

/// Writes one line per recursive entry: `depth` dashes followed by the depth
pub struct DepthTrace<W: Write> {
    writer: W,
}

impl<W: Write> DepthTrace<W> {
    /// Trace into `writer`
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SearchObserver for DepthTrace<W> {
    fn enter(&mut self, depth: usize, _stats: &SearchStats) -> Result<()> {
        output_context(
            writeln!(self.writer, "{}{depth}", "-".repeat(depth)),
            "depth trace",
        )
    }

    fn finish(&mut self, _stats: &SearchStats) {
        // Nothing useful to do with a failed flush once the search is over
        let _ = self.writer.flush();
    }
}
