//! Errors used throughout the board core.
//!
//! `ChessError` is the single error type returned by square conversion, the
//! move codec, position import and the validated make-move path. Every
//! failure is deterministic: nothing here is transient or worth retrying.
//!
//! Usage guidelines:
//! - Functions at the public boundary return `ChessResult<T>` for invalid
//!   input (bad square index, malformed encoding, bad FEN, illegal move).
//! - `InconsistentBoardState` comes from `GameState::check_consistency` and
//!   from setup calls that would stack two pieces on one square.

/// Unified error type for the board core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// A square index outside `0..=63` reached a public constructor.
    #[error("square index {0} is outside 0..=63")]
    InvalidSquare(usize),

    /// A packed move integer has a field with no valid decoding.
    #[error("invalid move encoding {raw:#010x}: {reason}")]
    InvalidEncoding { raw: u32, reason: String },

    /// A move was submitted that is not in the legal set of the position.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// Piece bitboards overlap or the occupancy caches are stale.
    #[error("inconsistent board state: {0}")]
    InconsistentBoardState(String),

    /// A position string could not be parsed.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A square or move in algebraic notation could not be parsed.
    #[error("invalid algebraic notation: {0}")]
    InvalidAlgebraic(String),

    /// A perft runner setting from the environment or command line.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
