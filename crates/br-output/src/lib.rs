//! `br-output` — trajectory output writers for the brownian robot simulator.
//!
//! | Backend | Files created                           |
//! |---------|-----------------------------------------|
//! | CSV     | `trajectory.csv`, `run_summary.csv`     |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`TrajectoryOutputObserver`], which implements `br_sim::StepObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use br_output::{CsvWriter, TrajectoryOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = TrajectoryOutputObserver::new(writer);
//! runner.run_fixed(1_000, 0.5, &mut obs);
//! if let Some(e) = obs.take_error() {
//!     log::error!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TrajectoryOutputObserver;
pub use row::{RunSummaryRow, TrajectoryRow};
pub use writer::OutputWriter;
