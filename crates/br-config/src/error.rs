use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("line {line}: {msg}")]
    Syntax { line: usize, msg: String },

    #[error("`{key}` expects {expected}, got {found:?}")]
    Type {
        key:      String,
        expected: &'static str,
        found:    String,
    },

    #[error("unknown mode {0:?}: expected \"fixed\" or \"realtime\"")]
    UnknownMode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
