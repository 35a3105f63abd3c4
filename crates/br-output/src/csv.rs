//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `trajectory.csv` — one row per position, start included
//! - `run_summary.csv` — one row per run

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::{OutputResult, RunSummaryRow, TrajectoryRow};
use crate::writer::OutputWriter;

pub const TRAJECTORY_FILE: &str = "trajectory.csv";
pub const SUMMARY_FILE: &str = "run_summary.csv";

/// Writes a trajectory and its summary to two CSV files.
pub struct CsvWriter {
    trajectory: Writer<File>,
    summary:    Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (truncating) the two CSV files, and write
    /// the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut trajectory = Writer::from_path(dir.join(TRAJECTORY_FILE))?;
        trajectory.write_record(["step", "time_secs", "x", "y", "heading", "collided"])?;

        let mut summary = Writer::from_path(dir.join(SUMMARY_FILE))?;
        summary.write_record(["steps", "collisions", "sim_secs", "elapsed_secs", "cancelled"])?;

        Ok(Self {
            trajectory,
            summary,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_rows(&mut self, rows: &[TrajectoryRow]) -> OutputResult<()> {
        for row in rows {
            self.trajectory.write_record(&[
                row.step.to_string(),
                row.time_secs.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.heading.to_string(),
                (row.collided as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.steps.to_string(),
            row.collisions.to_string(),
            row.sim_secs.to_string(),
            row.elapsed_secs.to_string(),
            (row.cancelled as u8).to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trajectory.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
