//! Full legal move generation pipeline.
//!
//! Collects pseudo-legal moves piece by piece, then keeps the ones that do
//! not leave the mover's own king attacked. The self-check filter plays each
//! candidate with make/unmake on a scratch copy of the position.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{make_pseudo_legal_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<Move> {
        generate_legal_moves(game_state)
    }
}

/// Legal moves for the side to move, in piece order
/// (pawns, knights, bishops, rooks, queens, king).
pub fn generate_legal_moves(game_state: &GameState) -> Vec<Move> {
    let mut scratch = game_state.clone();
    generate_legal_moves_in_place(&mut scratch)
}

/// Same as [`generate_legal_moves`] but borrows the position mutably for the
/// self-check probes. The position is unchanged when this returns.
pub fn generate_legal_moves_in_place(game_state: &mut GameState) -> Vec<Move> {
    let mut pseudo = generate_pseudo_legal_moves(game_state);
    let side = game_state.side_to_move;

    pseudo.retain(|mv| match make_pseudo_legal_move(game_state, mv) {
        Ok(undo) => {
            let legal = !is_king_in_check(game_state, side);
            unmake_move(game_state, mv, &undo);
            legal
        }
        Err(_) => false,
    });

    pseudo
}

/// Moves that follow piece movement rules but may leave the own king in
/// check. Castling is already checked for attacked transit squares.
pub fn generate_pseudo_legal_moves(game_state: &GameState) -> Vec<Move> {
    let mut pseudo = Vec::<Move>::with_capacity(128);

    generate_pawn_moves(game_state, &mut pseudo);
    generate_knight_moves(game_state, &mut pseudo);
    generate_bishop_moves(game_state, &mut pseudo);
    generate_rook_moves(game_state, &mut pseudo);
    generate_queen_moves(game_state, &mut pseudo);
    generate_king_moves(game_state, &mut pseudo);

    pseudo
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::*;

    #[test]
    fn starting_position_has_twenty_moves() {
        let game = GameState::new_game();
        let moves = LegalMoveGenerator.generate_legal_moves(&game);
        assert_eq!(moves.len(), 20);
        assert!(moves.iter().all(|mv| !mv.is_capture() && !mv.is_castle()));
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn pinned_knight_moves_are_filtered() {
        let game = GameState::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("valid FEN");
        let pseudo = generate_pseudo_legal_moves(&game);
        let legal = generate_legal_moves(&game);
        assert!(pseudo.len() > legal.len());
        assert!(legal.iter().all(|mv| mv.from().to_string() != "e2"));
        assert_eq!(legal.len(), 4);
    }

    #[test]
    fn double_check_leaves_only_king_moves() {
        let game = GameState::from_fen("4k3/8/8/8/1b6/1N6/8/r3K3 w - - 0 1").expect("valid FEN");
        let legal = generate_legal_moves(&game);
        let king = game.king_square(Color::Light).expect("light king present");
        assert!(!legal.is_empty());
        assert!(legal.iter().all(|mv| mv.from() == king));
    }

    #[test]
    fn every_promotion_is_listed() {
        let game = GameState::from_fen("8/4P2k/8/8/8/8/8/4K3 w - - 0 1").expect("valid FEN");
        let promotions: Vec<Move> = generate_legal_moves(&game)
            .into_iter()
            .filter(Move::is_promotion)
            .collect();
        assert_eq!(promotions.len(), 4);
    }
}
