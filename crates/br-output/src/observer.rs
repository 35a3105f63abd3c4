//! `TrajectoryOutputObserver<W>` — bridges `StepObserver` to an `OutputWriter`.

use br_sim::{RunSummary, StepEvent, StepObserver};
use log::warn;

use crate::row::{RunSummaryRow, TrajectoryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// Rows buffered before a `write_rows` call.
const BATCH_ROWS: usize = 1024;

/// A [`StepObserver`] that records every position, plus the run summary, to
/// any [`OutputWriter`] backend.
///
/// Rows are buffered and written in batches.  Errors from the writer are
/// stored internally because `StepObserver` methods have no return value.
/// After the run returns, check for errors with [`take_error`][Self::take_error].
pub struct TrajectoryOutputObserver<W: OutputWriter> {
    writer:     W,
    buffer:     Vec<TrajectoryRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TrajectoryOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer:     Vec::with_capacity(BATCH_ROWS),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn push(&mut self, row: TrajectoryRow) {
        self.buffer.push(row);
        if self.buffer.len() >= BATCH_ROWS {
            self.flush_rows();
        }
    }

    fn flush_rows(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let result = self.writer.write_rows(&self.buffer);
        self.buffer.clear();
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!("trajectory output failed: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> StepObserver for TrajectoryOutputObserver<W> {
    fn on_run_start(&mut self, start: &StepEvent) {
        self.push(TrajectoryRow::from(start));
    }

    fn on_step(&mut self, event: &StepEvent) {
        self.push(TrajectoryRow::from(event));
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        self.flush_rows();
        let result = self.writer.write_summary(&RunSummaryRow::from(summary));
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
