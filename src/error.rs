//! Structured error types for gridport.
//!
//! The engine itself has no recoverable failures on the scroll hot path;
//! errors here surface misconfiguration and malformed collaborator input
//! at construction time.

/// All errors that can occur while configuring the engine or feeding it
/// position data.
#[derive(Debug, thiserror::Error)]
pub enum GridportError {
    /// Invalid option combination or value.
    #[error("Invalid options: {0}")]
    Options(String),

    /// A cumulative position array decreased between two indexes.
    #[error("Position array not monotonic at index {index}: {previous} > {next}")]
    NonMonotonicPositions {
        /// Index of the offending entry.
        index: usize,
        /// Offset recorded at `index - 1`.
        previous: f32,
        /// Offset recorded at `index`.
        next: f32,
    },

    /// A cumulative position array contains NaN or an infinity.
    #[error("Position array contains a non-finite offset at index {0}")]
    NonFinitePosition(usize),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridportError>;

impl From<String> for GridportError {
    fn from(s: String) -> Self {
        Self::Options(s)
    }
}

impl From<&str> for GridportError {
    fn from(s: &str) -> Self {
        Self::Options(s.to_string())
    }
}
