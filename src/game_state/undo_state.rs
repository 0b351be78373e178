use crate::game_state::chess_types::*;

/// Snapshot taken by `make_move` that lets `unmake_move` restore the
/// position exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub moved_piece: PieceKind,
    /// Captured kind and the square it stood on (differs from the
    /// destination for en passant).
    pub captured: Option<(PieceKind, Square)>,

    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,
}
