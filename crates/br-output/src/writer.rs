//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, RunSummaryRow, TrajectoryRow};

/// Trait implemented by output backends.
///
/// Errors surface to the caller through
/// [`TrajectoryOutputObserver::take_error`][crate::TrajectoryOutputObserver::take_error];
/// the run itself never stops because a write failed.
pub trait OutputWriter {
    /// Write a batch of trajectory rows, in step order.
    fn write_rows(&mut self, rows: &[TrajectoryRow]) -> OutputResult<()>;

    /// Write the run summary.
    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
