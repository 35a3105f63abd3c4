//! Typed scalar values read from a settings file.

use std::fmt;

/// A setting value, typed by its spelling.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    /// Type a raw (already trimmed) value string.
    ///
    /// - `true` / `false`, any case → `Bool`
    /// - ASCII digits with at most one `.` → `Float` if a `.` is present,
    ///   else `Int` (`Float` if it overflows `i64`)
    /// - everything else, including signed numbers → `Str`
    pub fn infer(raw: &str) -> Value {
        if raw.eq_ignore_ascii_case("true") {
            return Value::Bool(true);
        }
        if raw.eq_ignore_ascii_case("false") {
            return Value::Bool(false);
        }

        let dots = raw.bytes().filter(|&b| b == b'.').count();
        let digits = raw.bytes().filter(u8::is_ascii_digit).count();
        let numeric = dots <= 1 && digits > 0 && digits + dots == raw.len();
        if numeric {
            if dots == 0 {
                if let Ok(i) = raw.parse::<i64>() {
                    return Value::Int(i);
                }
            }
            if let Ok(f) = raw.parse::<f64>() {
                return Value::Float(f);
            }
        }
        Value::Str(raw.to_owned())
    }

    /// Numeric view: `Int` and `Float` both widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Int(i)   => Some(i as f64),
            Value::Float(f) => Some(f),
            _ => None,
        }
    }

    /// Non-negative integer view.  A float with no fractional part counts.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Value::Int(i) => u64::try_from(i).ok(),
            Value::Float(f) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => {
                Some(f as u64)
            }
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b)  => write!(f, "{b}"),
            Value::Int(i)   => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s)   => f.write_str(s),
        }
    }
}
