use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::generate_piece_moves;
use crate::moves::move_descriptions::Move;
use crate::moves::queen_moves::queen_attacks;

pub fn generate_queen_moves(game_state: &GameState, out: &mut Vec<Move>) {
    generate_piece_moves(game_state, PieceKind::Queen, queen_attacks, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boxed_in_queen_has_no_moves() {
        let mut out = Vec::new();
        generate_queen_moves(&GameState::new_game(), &mut out);
        assert!(out.is_empty());
    }
}
