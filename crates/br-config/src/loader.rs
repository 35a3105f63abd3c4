//! Forgiving settings loader.
//!
//! [`load_settings`] always returns usable settings.  Problems are reported
//! through the `log` facade instead of being returned:
//!
//! | Situation                     | Level   | Result                               |
//! |-------------------------------|---------|--------------------------------------|
//! | file missing                  | `warn`  | defaults; a default file is written  |
//! | default file cannot be written| `error` | defaults                             |
//! | file unreadable               | `error` | defaults                             |
//! | line without `key: value`     | `warn`  | line skipped, other keys kept        |
//! | unknown key                   | `warn`  | key ignored                          |
//! | wrongly typed value           | `warn`  | that key keeps its default           |

use std::fs;
use std::path::Path;

use log::{error, info, warn};

use crate::{parse_file, ConfigResult, SimSettings};

/// Contents of the settings file written when none exists.  Parses to
/// exactly [`SimSettings::default`].
pub const DEFAULT_CONFIG: &str = "\
# Brownian robot simulation settings

# Run mode: 'fixed' (precomputed trajectory) or 'realtime' (paced, live view)
mode: fixed

# Side length of the square arena
arena_size: 100.0

# Robot radius (clearance kept from the walls)
robot_radius: 2.0

# Distance covered per simulated second
speed: 2.0

# Simulated seconds per step
time_step: 0.5

# Number of steps (fixed mode)
steps: 1000

# Maximum wall-clock duration in seconds (realtime mode)
duration: 60.0

# Frame-rate cap in realtime mode (0 = uncapped)
target_fps: 60.0

# Write the trajectory to output_path
save_output: false

# Directory for output files
output_path: output

# Uncomment for a reproducible run
# seed: 42
";

/// Load settings from `path`, falling back to defaults on any problem.
///
/// If `path` does not exist, a commented default file is created there
/// (parent directories included) so the user has something to edit.
pub fn load_settings(path: &Path) -> SimSettings {
    let mut settings = SimSettings::default();

    if !path.exists() {
        warn!("config file '{}' not found, using default settings", path.display());
        match write_default(path) {
            Ok(())  => info!("created default config file '{}'", path.display()),
            Err(e)  => error!("could not create default config file '{}': {e}", path.display()),
        }
        return settings;
    }

    let parsed = match parse_file(path) {
        Ok(parsed) => parsed,
        Err(e) => {
            error!("error loading config file '{}': {e}; using default settings", path.display());
            return settings;
        }
    };

    for e in &parsed.skipped {
        warn!("{}: {e}; skipping line", path.display());
    }

    for entry in &parsed.entries {
        match settings.apply(&entry.key, &entry.value) {
            Ok(true)  => {}
            Ok(false) => warn!("{}:{}: ignoring unknown key {:?}", path.display(), entry.line, entry.key),
            Err(e)    => warn!("{}:{}: {e}; keeping default", path.display(), entry.line),
        }
    }

    info!("loaded config from '{}'", path.display());
    settings
}

/// Write [`DEFAULT_CONFIG`] to `path`, creating parent directories.
pub fn write_default(path: &Path) -> ConfigResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, DEFAULT_CONFIG)?;
    Ok(())
}
