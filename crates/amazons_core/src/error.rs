//! Error types for board setup, notation and move application.

use thiserror::Error;

use crate::types::Move;

/// Errors raised by the Amazons core.
///
/// Everything here is a contract violation by the caller (bad coordinates,
/// malformed text, an illegal move handed to the checked apply path). There
/// is no I/O in the core, so nothing is transient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmazonsError {
    /// Column/row pair outside the 10x10 board
    #[error("Invalid square: column {col}, row {row} (must be 0-9)")]
    InvalidSquare { col: i32, row: i32 },

    /// Square index outside 0..100
    #[error("Invalid square index: {index} (must be 0-99)")]
    InvalidIndex { index: usize },

    /// Text that is not a square or move designation
    #[error("Invalid notation: {text:?}")]
    InvalidNotation { text: String },

    /// Move rejected by the checked apply path
    #[error("Illegal move: {mv}")]
    IllegalMove { mv: Move },

    /// Malformed board dump
    #[error("Invalid board dump: {reason}")]
    InvalidDump { reason: String },
}

/// Result type alias for Amazons core operations
pub type AmazonsResult<T> = Result<T, AmazonsError>;
