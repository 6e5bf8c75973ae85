use std::path::PathBuf;

/// Ways a move or a cell query can be rejected.
///
/// Every variant is a caller-input condition, never engine corruption: a
/// rejected call leaves the board exactly as it was. Callers are expected to
/// pattern-match — the interactive app retries on [`ColumnFull`] and treats
/// the index variants as bugs in whatever produced the index.
///
/// [`ColumnFull`]: MoveError::ColumnFull
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// No token was supplied for the move. Unreachable through this crate's
    /// API, where a `Token` argument always names a player; kept so matches
    /// on move rejections cover the full taxonomy.
    #[error("no token supplied for the move")]
    InvalidToken,

    /// The column index lies outside `[0, num_columns)`.
    #[error("column index {0} is off the board")]
    InvalidColumnIndex(usize),

    /// The row index lies outside `[0, num_rows)`. Only cell queries surface
    /// this; a move addresses a column, not a row.
    #[error("row index {0} is off the board")]
    InvalidRowIndex(usize),

    /// The column already holds `num_rows` tokens.
    #[error("column {0} is full")]
    ColumnFull(usize),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
