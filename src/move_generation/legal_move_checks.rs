//! Attack and check detection.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    attackers_to_square(game_state, square, attacker_color).any()
}

/// Every `attacker_color` piece that attacks `square` under the current
/// occupancy. Pawn attackers are found by looking back along the defender's
/// pawn diagonals.
pub fn attackers_to_square(game_state: &GameState, square: Square, attacker_color: Color) -> Bitboard {
    let theirs = &game_state.pieces[attacker_color.index()];
    let occupancy = game_state.occupancy_all;

    let diagonal = theirs[PieceKind::Bishop.index()] | theirs[PieceKind::Queen.index()];
    let straight = theirs[PieceKind::Rook.index()] | theirs[PieceKind::Queen.index()];

    (pawn_attacks(attacker_color.opposite(), square) & theirs[PieceKind::Pawn.index()])
        | (knight_attacks(square) & theirs[PieceKind::Knight.index()])
        | (king_attacks(square) & theirs[PieceKind::King.index()])
        | (bishop_attacks(square, occupancy) & diagonal)
        | (rook_attacks(square, occupancy) & straight)
}

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = game_state.king_square(color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

/// Whether the side to move is in check.
#[inline]
pub fn is_in_check(game_state: &GameState) -> bool {
    is_king_in_check(game_state, game_state.side_to_move)
}

pub fn is_checkmate(game_state: &GameState) -> bool {
    is_in_check(game_state) && !has_legal_move(game_state)
}

pub fn is_stalemate(game_state: &GameState) -> bool {
    !is_in_check(game_state) && !has_legal_move(game_state)
}

fn has_legal_move(game_state: &GameState) -> bool {
    !crate::move_generation::legal_move_generator::generate_legal_moves(game_state).is_empty()
}
