use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::generate_piece_moves;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::move_descriptions::Move;

pub fn generate_bishop_moves(game_state: &GameState, out: &mut Vec<Move>) {
    generate_piece_moves(game_state, PieceKind::Bishop, bishop_attacks, out);
}
