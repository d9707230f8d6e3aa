//! Error types for the Lines of Action rules library.
//!
//! Only malformed input is reported through [`LoaError`]. Broken invariants,
//! such as retracting with an empty history, are programmer errors and panic.

use thiserror::Error;

/// Errors produced while turning text or raw coordinates into engine values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoaError {
    /// Square text did not match `[a-h][1-8]`.
    #[error("invalid square designator: {0:?}")]
    InvalidSquare(String),

    /// Move text was not of the form `<square>-<square>`.
    #[error("unparseable move: {0:?}")]
    UnparseableMove(String),

    /// A direction was requested for a delta of zero in both axes.
    #[error("direction of a zero-length delta")]
    ZeroDelta,

    /// The delta does not lie on a rank, file or diagonal.
    #[error("delta ({dc}, {dr}) is not along a line of action")]
    NotALine { dc: i8, dr: i8 },

    /// Unknown piece abbreviation or player name.
    #[error("invalid piece: {0:?}")]
    InvalidPiece(String),

    /// Position text could not be parsed.
    #[error("invalid position: {0}")]
    InvalidPosition(String),
}

/// Result alias for rules operations.
pub type Result<T> = std::result::Result<T, LoaError>;
