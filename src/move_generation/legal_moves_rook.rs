//! Rook move generation.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::generate_piece_moves;
use crate::moves::move_descriptions::Move;
use crate::moves::rook_moves::rook_attacks;

pub fn generate_rook_moves(game_state: &GameState, out: &mut Vec<Move>) {
    generate_piece_moves(game_state, PieceKind::Rook, rook_attacks, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_in_corner_on_open_board() {
        let game = GameState::from_fen("7k/8/8/8/8/8/8/R3K3 w - - 0 1").expect("valid FEN");
        let mut out = Vec::new();
        generate_rook_moves(&game, &mut out);
        // Seven up the a-file plus b1, c1, d1.
        assert_eq!(out.len(), 10);
        assert!(out.iter().all(|mv| !mv.is_capture() && !mv.is_castle()));
    }
}
