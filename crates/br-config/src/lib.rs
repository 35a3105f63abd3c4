//! `br-config` — simulation settings and the key-value settings file loader.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`value`]     | `Value` — a typed scalar from the settings file           |
//! | [`parser`]    | `parse_str`, `parse_file` (+ `_strict`) — text → entries  |
//! | [`settings`]  | `SimSettings`, `Mode`, defaults and per-key overlay       |
//! | [`loader`]    | `load_settings`, `write_default` — the forgiving front end |
//! | [`error`]     | `ConfigError`, `ConfigResult<T>`                          |
//!
//! # File format
//!
//! ```text
//! # comment
//! mode: fixed
//! arena_size: 100.0
//! steps: 1000
//! save_output: false
//! ```
//!
//! One `key: value` per line, split at the first `:`.  Values are typed as
//! they are read: `true`/`false` (any case) → bool, ASCII digits with at most
//! one `.` → int or float, anything else → string.
//!
//! The loader never fails: a missing file is replaced by a commented default
//! file, an unreadable one falls back to defaults, a line without a `:` is
//! skipped, and a bad key keeps its default.  Every such fallback is logged.

pub mod error;
pub mod loader;
pub mod parser;
pub mod settings;
pub mod value;


pub use error::{ConfigError, ConfigResult};
pub use loader::{load_settings, write_default, DEFAULT_CONFIG};
pub use parser::{parse_file, parse_file_strict, parse_str, parse_str_strict, Entry, Parsed};
pub use settings::{Mode, SimSettings};
pub use value::Value;
