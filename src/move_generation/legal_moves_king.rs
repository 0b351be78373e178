use crate::game_state::chess_rules::CASTLING_LANES;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_moves_to_targets;
use crate::moves::king_moves::king_attacks;
use crate::moves::move_descriptions::Move;

pub fn generate_king_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let Some(from) = game_state.king_square(side) else {
        return;
    };

    let targets = king_attacks(from) & !game_state.occupancy_by_color[side.index()];
    push_moves_to_targets(game_state, from, targets, out);

    generate_castling_moves(game_state, from, out);
}

fn generate_castling_moves(game_state: &GameState, king_from: Square, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let enemy = side.opposite();
    let rooks = game_state.pieces(side, PieceKind::Rook);

    // Cannot castle out of check.
    if is_square_attacked(game_state, king_from, enemy) {
        return;
    }

    for lane in CASTLING_LANES.iter().filter(|lane| lane.color == side) {
        if game_state.castling_rights & lane.right == 0
            || lane.king_from != king_from
            || !rooks.contains(lane.rook_from)
            || (game_state.occupancy_all & lane.must_be_empty).any()
        {
            continue;
        }
        if lane
            .king_path
            .iter()
            .any(|square| is_square_attacked(game_state, square, enemy))
        {
            continue;
        }
        out.push(Move::castle(lane.king_from, lane.king_to));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn king_moves(fen: &str) -> Vec<String> {
        let game = GameState::from_fen(fen).expect("valid FEN");
        let mut out = Vec::new();
        generate_king_moves(&game, &mut out);
        out.iter()
            .filter(|mv| mv.is_castle())
            .map(|mv| mv.to_long_algebraic())
            .collect()
    }

    #[test]
    fn both_castles_available_on_clear_back_rank() {
        assert_eq!(king_moves("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"), vec!["e1g1", "e1c1"]);
        assert_eq!(king_moves("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1"), vec!["e8g8", "e8c8"]);
    }

    #[test]
    fn attacked_transit_square_blocks_castle() {
        // Dark rook on f8 covers f1.
        assert_eq!(king_moves("5r1k/8/8/8/8/8/8/R3K2R w KQ - 0 1"), vec!["e1c1"]);
    }

    #[test]
    fn attacked_b1_does_not_block_queenside() {
        assert_eq!(king_moves("1r5k/8/8/8/8/8/8/R3K3 w Q - 0 1"), vec!["e1c1"]);
    }

    #[test]
    fn no_castle_out_of_check_or_without_right() {
        assert!(king_moves("4r2k/8/8/8/8/8/8/R3K2R w KQ - 0 1").is_empty());
        assert!(king_moves("7k/8/8/8/8/8/8/R3K2R w - - 0 1").is_empty());
    }
}
