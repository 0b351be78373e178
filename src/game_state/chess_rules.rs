//! Canonical chess-rule constants.
//!
//! Stores the standard starting position and the fixed geometry of the four
//! castling moves shared by move generation and make/unmake.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Fixed squares involved in one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingLane {
    pub right: CastlingRights,
    pub color: Color,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares that must be empty between king and rook.
    pub must_be_empty: Bitboard,
    /// Squares the king passes through or lands on; none may be attacked.
    pub king_path: Bitboard,
}

const fn lane(
    right: CastlingRights,
    color: Color,
    squares: [u8; 4],
    must_be_empty: u64,
    king_path: u64,
) -> CastlingLane {
    CastlingLane {
        right,
        color,
        king_from: Square::from_index(squares[0]),
        king_to: Square::from_index(squares[1]),
        rook_from: Square::from_index(squares[2]),
        rook_to: Square::from_index(squares[3]),
        must_be_empty: Bitboard(must_be_empty),
        king_path: Bitboard(king_path),
    }
}

pub static CASTLING_LANES: [CastlingLane; 4] = [
    lane(CASTLE_LIGHT_KINGSIDE, Color::Light, [4, 6, 7, 5], 0x60, 0x60),
    lane(CASTLE_LIGHT_QUEENSIDE, Color::Light, [4, 2, 0, 3], 0x0E, 0x0C),
    lane(CASTLE_DARK_KINGSIDE, Color::Dark, [60, 62, 63, 61], 0x60u64 << 56, 0x60u64 << 56),
    lane(CASTLE_DARK_QUEENSIDE, Color::Dark, [60, 58, 56, 59], 0x0Eu64 << 56, 0x0Cu64 << 56),
];

/// Lane matching a king move, if the move is one of the four castles.
pub fn castling_lane_for(color: Color, king_from: Square, king_to: Square) -> Option<&'static CastlingLane> {
    CASTLING_LANES
        .iter()
        .find(|lane| lane.color == color && lane.king_from == king_from && lane.king_to == king_to)
}

/// Rights lost when a piece leaves or lands on `square`.
#[inline]
pub const fn castling_rights_revoked_by(square: Square) -> CastlingRights {
    match square.index() {
        0 => CASTLE_LIGHT_QUEENSIDE,
        4 => CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE,
        7 => CASTLE_LIGHT_KINGSIDE,
        56 => CASTLE_DARK_QUEENSIDE,
        60 => CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE,
        63 => CASTLE_DARK_KINGSIDE,
        _ => 0,
    }
}
