//! The run settings and their defaults.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::{ConfigError, ConfigResult, Entry, Value};

// ── Mode ──────────────────────────────────────────────────────────────────────

/// Which runner drives the simulation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Pre-compute `steps` steps, then render/save the trajectory.
    #[default]
    Fixed,
    /// Step against the wall clock for up to `duration` seconds.
    Realtime,
}

impl FromStr for Mode {
    type Err = ConfigError;

    /// Accepts `fixed` / `realtime` plus the older `batch`, `matplotlib`
    /// and `pygame` spellings, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" | "batch" | "matplotlib" => Ok(Mode::Fixed),
            "realtime" | "pygame"            => Ok(Mode::Realtime),
            _ => Err(ConfigError::UnknownMode(s.to_owned())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Fixed    => "fixed",
            Mode::Realtime => "realtime",
        })
    }
}

// ── SimSettings ───────────────────────────────────────────────────────────────

/// Everything a run needs, as read from the settings file.
///
/// Values are not range-checked here.  The simulation builder rejects
/// non-positive sizes and speeds when the run is assembled.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimSettings {
    pub mode:         Mode,
    /// Side length of the square arena.
    pub arena_size:   f64,
    pub robot_radius: f64,
    /// Distance covered per simulated second.
    pub speed:        f64,
    /// Simulated seconds per step.
    pub time_step:    f64,
    /// Step count for fixed mode.
    pub steps:        u64,
    /// Wall-clock budget in seconds for realtime mode.
    pub duration:     f64,
    pub save_output:  bool,
    pub output_path:  PathBuf,
    /// RNG seed; `None` draws from OS entropy.
    pub seed:         Option<u64>,
    /// Realtime frame-rate cap; `0` runs uncapped.
    pub target_fps:   f64,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            mode:         Mode::Fixed,
            arena_size:   100.0,
            robot_radius: 2.0,
            speed:        2.0,
            time_step:    0.5,
            steps:        1000,
            duration:     60.0,
            save_output:  false,
            output_path:  PathBuf::from("output"),
            seed:         None,
            target_fps:   60.0,
        }
    }
}

impl SimSettings {
    /// Every key `apply` understands.
    pub const KEYS: &'static [&'static str] = &[
        "mode",
        "arena_size",
        "robot_radius",
        "speed",
        "time_step",
        "steps",
        "duration",
        "save_output",
        "output_path",
        "seed",
        "target_fps",
    ];

    /// Overlay one entry.
    ///
    /// Returns `Ok(false)` for an unknown key (nothing changed) and an error
    /// if the value has the wrong type; in both cases `self` is unchanged.
    pub fn apply(&mut self, key: &str, value: &Value) -> ConfigResult<bool> {
        match key {
            "mode" => {
                self.mode = match value {
                    Value::Str(s) => s.parse()?,
                    other => return Err(type_err(key, "a mode name", other)),
                };
            }
            "arena_size"   => self.arena_size   = float(key, value)?,
            "robot_radius" => self.robot_radius = float(key, value)?,
            "speed"        => self.speed        = float(key, value)?,
            "time_step"    => self.time_step    = float(key, value)?,
            "duration"     => self.duration     = float(key, value)?,
            "target_fps"   => self.target_fps   = float(key, value)?,
            "steps"        => self.steps        = count(key, value)?,
            "seed"         => self.seed         = Some(count(key, value)?),
            "save_output" => {
                self.save_output = value
                    .as_bool()
                    .ok_or_else(|| type_err(key, "true or false", value))?;
            }
            // Any scalar is a usable path; `output: 2024` means "./2024".
            "output_path" => self.output_path = PathBuf::from(value.to_string()),
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// Defaults overlaid with `entries`, strictly: the first unknown key or
    /// mistyped value is an error.
    pub fn from_entries(entries: &[Entry]) -> ConfigResult<Self> {
        let mut settings = Self::default();
        for entry in entries {
            if !settings.apply(&entry.key, &entry.value)? {
                return Err(ConfigError::Syntax {
                    line: entry.line,
                    msg:  format!("unknown key {:?}", entry.key),
                });
            }
        }
        Ok(settings)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn float(key: &str, value: &Value) -> ConfigResult<f64> {
    value.as_f64().ok_or_else(|| type_err(key, "a number", value))
}

fn count(key: &str, value: &Value) -> ConfigResult<u64> {
    value
        .as_u64()
        .ok_or_else(|| type_err(key, "a non-negative integer", value))
}

fn type_err(key: &str, expected: &'static str, found: &Value) -> ConfigError {
    ConfigError::Type {
        key: key.to_owned(),
        expected,
        found: found.to_string(),
    }
}
