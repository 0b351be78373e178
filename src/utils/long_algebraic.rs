//! Long algebraic move text (`e2e4`, `e7e8q`) resolved against a position.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::algebraic_to_square;

/// Finds the legal move in `game_state` spelled by `long_algebraic`. The
/// returned move carries capture, castle and captured-piece details taken
/// from the position.
pub fn long_algebraic_to_move(long_algebraic: &str, game_state: &GameState) -> ChessResult<Move> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(ChessError::InvalidAlgebraic(long_algebraic.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some(ch) => Some(
            PieceKind::from_char(ch)
                .filter(|kind| PROMOTION_KINDS.contains(kind))
                .ok_or_else(|| ChessError::InvalidAlgebraic(long_algebraic.to_owned()))?,
        ),
    };

    generate_legal_moves(game_state)
        .into_iter()
        .find(|mv| mv.from() == from && mv.to() == to && mv.promotion_kind() == promotion)
        .ok_or_else(|| {
            ChessError::IllegalMove(format!("{text} is not legal in {}", game_state.get_fen()))
        })
}

#[inline]
pub fn move_to_long_algebraic(mv: &Move) -> String {
    mv.to_long_algebraic()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn resolves_simple_push() {
        let game_state = parse_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").expect("FEN should parse");
        let mv = long_algebraic_to_move("e2e4", &game_state).expect("move should resolve");
        assert_eq!(move_to_long_algebraic(&mv), "e2e4");
        assert!(!mv.is_capture());
    }

    #[test]
    fn resolves_promotion_kind() {
        let game_state = parse_fen("8/P7/8/8/8/8/8/k6K w - - 0 1").expect("FEN should parse");
        let mv = long_algebraic_to_move("a7a8n", &game_state).expect("move should resolve");
        assert_eq!(mv.promotion_kind(), Some(PieceKind::Knight));
        assert!(long_algebraic_to_move("a7a8", &game_state).is_err());
        assert!(matches!(
            long_algebraic_to_move("a7a8k", &game_state),
            Err(ChessError::InvalidAlgebraic(_))
        ));
    }

    #[test]
    fn detects_castling_and_en_passant() {
        let castle_state =
            parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let castle = long_algebraic_to_move("e1g1", &castle_state).expect("castle should resolve");
        assert!(castle.is_castle());

        let ep_state = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("FEN should parse");
        let ep = long_algebraic_to_move("e5d6", &ep_state).expect("en passant should resolve");
        assert!(ep.is_capture());
        assert_eq!(ep.captured(), Some(Piece::new(Color::Dark, PieceKind::Pawn)));
    }

    #[test]
    fn rejects_illegal_and_malformed_text() {
        let game_state = GameState::new_game();
        assert!(matches!(
            long_algebraic_to_move("e2e5", &game_state),
            Err(ChessError::IllegalMove(_))
        ));
        assert!(long_algebraic_to_move("e2", &game_state).is_err());
        assert!(long_algebraic_to_move("z2e4", &game_state).is_err());
    }
}
