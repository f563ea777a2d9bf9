use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the contagion engine.
///
/// Stepping and queries are total over a constructed model; only construction
/// can fail. Writing results is reported through `anyhow` by the output helpers.
#[derive(Debug, Error)]
pub enum Error {
    /// Population split, bounds or speed rejected at construction.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
