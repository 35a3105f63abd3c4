//! Settings file parser: text → ordered `(key, value)` entries.
//!
//! The parser only tokenises and types values.  It knows nothing about which
//! keys exist; [`SimSettings::apply`][crate::SimSettings::apply] does that.
//!
//! [`parse_str`] skips lines it cannot read and reports them in
//! [`Parsed::skipped`]; [`parse_str_strict`] stops at the first one.

use std::io::Read;
use std::path::Path;

use crate::{ConfigError, ConfigResult, Value};

/// One `key: value` line.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// 1-based source line, for diagnostics.
    pub line:  usize,
    pub key:   String,
    pub value: Value,
}

/// Result of a lenient parse.
#[derive(Debug, Default)]
pub struct Parsed {
    /// Readable lines, in file order.
    pub entries: Vec<Entry>,
    /// One [`ConfigError::Syntax`] per line that was skipped.
    pub skipped: Vec<ConfigError>,
}

/// `None` for blank and comment lines.
fn parse_line(line_no: usize, raw: &str) -> Option<ConfigResult<Entry>> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let Some((key, value)) = line.split_once(':') else {
        return Some(Err(ConfigError::Syntax {
            line: line_no,
            msg:  format!("expected `key: value`, got {line:?}"),
        }));
    };
    let key = key.trim();
    if key.is_empty() {
        return Some(Err(ConfigError::Syntax {
            line: line_no,
            msg:  "empty key".to_owned(),
        }));
    }

    Some(Ok(Entry {
        line:  line_no,
        key:   key.to_owned(),
        value: Value::infer(value.trim()),
    }))
}

fn numbered_lines(text: &str) -> impl Iterator<Item = ConfigResult<Entry>> + '_ {
    text.lines()
        .enumerate()
        .filter_map(|(idx, raw)| parse_line(idx + 1, raw))
}

/// Parse settings text, skipping unreadable lines.  Entries keep file order;
/// a repeated key appears twice and the later one wins when applied.
pub fn parse_str(text: &str) -> Parsed {
    let mut parsed = Parsed::default();
    for result in numbered_lines(text) {
        match result {
            Ok(entry) => parsed.entries.push(entry),
            Err(e)    => parsed.skipped.push(e),
        }
    }
    parsed
}

/// Parse settings text, failing on the first unreadable line.
pub fn parse_str_strict(text: &str) -> ConfigResult<Vec<Entry>> {
    numbered_lines(text).collect()
}

fn read_text(path: &Path) -> ConfigResult<String> {
    let mut text = String::new();
    std::fs::File::open(path)?.read_to_string(&mut text)?;
    Ok(text)
}

/// Read and leniently parse a settings file.  Only I/O problems are errors.
pub fn parse_file(path: &Path) -> ConfigResult<Parsed> {
    Ok(parse_str(&read_text(path)?))
}

/// Read and strictly parse a settings file.
pub fn parse_file_strict(path: &Path) -> ConfigResult<Vec<Entry>> {
    parse_str_strict(&read_text(path)?)
}
