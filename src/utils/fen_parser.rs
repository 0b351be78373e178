//! FEN-to-GameState parser.
//!
//! Builds a fully populated position from Forsyth-Edwards Notation. The
//! halfmove and fullmove fields may be omitted and default to `0 1`.

use tracing::debug;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    parse_fields(fen).inspect_err(|err| debug!(fen, error = %err, "rejected FEN"))
}

fn parse_fields(fen: &str) -> ChessResult<GameState> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if !(4..=6).contains(&fields.len()) {
        return Err(invalid(format!("expected 4 to 6 fields, found {}", fields.len())));
    }

    let mut game_state = GameState::new_empty();

    parse_board(fields[0], &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(fields[1])?;
    game_state.castling_rights = parse_castling_rights(fields[2])?;
    game_state.en_passant_square = parse_en_passant_square(fields[3], &game_state)?;
    if let Some(halfmove) = fields.get(4) {
        game_state.halfmove_clock = halfmove
            .parse::<u16>()
            .map_err(|_| invalid(format!("halfmove clock '{halfmove}'")))?;
    }
    if let Some(fullmove) = fields.get(5) {
        game_state.fullmove_number = fullmove
            .parse::<u16>()
            .map_err(|_| invalid(format!("fullmove number '{fullmove}'")))?;
    }

    for color in [Color::Light, Color::Dark] {
        let kings = game_state.pieces(color, PieceKind::King).count();
        if kings != 1 {
            return Err(invalid(format!("{color:?} has {kings} kings")));
        }
    }

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks".to_owned()));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("empty-square count '{ch}'")));
                }
                file = file.saturating_add(empty_count as u8);
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| invalid(format!("piece character '{ch}'")))?;
            let square = Square::from_file_rank(file, board_rank)
                .ok_or_else(|| invalid(format!("rank {} has too many files", board_rank + 1)))?;
            game_state.put_piece(piece, square)?;
            file += 1;
        }

        if file != 8 {
            return Err(invalid(format!("rank {} does not sum to 8 files", board_rank + 1)));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(invalid(format!("side to move '{side_part}'"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(0);
    }

    castling_part.chars().try_fold(0, |rights, ch| {
        let right = match ch {
            'K' => CASTLE_LIGHT_KINGSIDE,
            'Q' => CASTLE_LIGHT_QUEENSIDE,
            'k' => CASTLE_DARK_KINGSIDE,
            'q' => CASTLE_DARK_QUEENSIDE,
            _ => return Err(invalid(format!("castling character '{ch}'"))),
        };
        Ok(rights | right)
    })
}

fn parse_en_passant_square(
    en_passant_part: &str,
    game_state: &GameState,
) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| invalid(format!("en-passant square '{en_passant_part}'")))?;

    // The target sits behind a pawn the opponent just pushed two squares.
    let mover = game_state.side_to_move();
    let (target_rank, behind) = match mover {
        Color::Light => (5, -1),
        Color::Dark => (2, 1),
    };
    if square.rank() != target_rank {
        return Err(invalid(format!(
            "en-passant square {square} is not on rank {} with {mover:?} to move",
            target_rank + 1
        )));
    }
    let pushed_pawn = Piece::new(mover.opposite(), PieceKind::Pawn);
    let victim = square.offset(0, behind);
    if victim.and_then(|victim| game_state.piece_on(victim)) != Some(pushed_pawn) {
        return Err(invalid(format!("no {pushed_pawn:?} behind en-passant square {square}")));
    }
    Ok(Some(square))
}

#[inline]
fn invalid(reason: String) -> ChessError {
    ChessError::InvalidFen(reason)
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    #[test]
    fn parse_starting_fen() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(game_state.side_to_move(), Color::Light);
        assert_eq!(game_state.castling_rights(), CASTLE_ALL);
        assert_eq!(game_state.fullmove_number(), 1);
        assert_eq!(game_state.halfmove_clock(), 0);
        assert_eq!(game_state.occupancy(Color::Dark).count(), 16);
        assert!(game_state.check_consistency().is_ok());
    }

    #[test]
    fn clocks_are_optional() {
        let game_state = parse_fen("4k3/8/8/8/8/8/8/4K3 b - -").expect("short FEN should parse");
        assert_eq!(game_state.side_to_move(), Color::Dark);
        assert_eq!(game_state.halfmove_clock(), 0);
        assert_eq!(game_state.fullmove_number(), 1);
    }

    #[test]
    fn reads_en_passant_and_clocks() {
        let game_state = parse_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3")
            .expect("FEN should parse");
        assert_eq!(game_state.en_passant_square().map(|sq| sq.to_string()).as_deref(), Some("d6"));
        assert_eq!(game_state.fullmove_number(), 3);
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in [
            "",
            "8/8/8/8/8/8/8 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K2 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K4 w - - 0 1",
            "4k3/8/8/8/8/8/8/4X3 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 x - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w KX - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w - e4 0 1",
            "4k3/8/8/8/8/8/8/4K3 w - - zero 1",
            "8/8/8/8/8/8/8/4K3 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w - - 0 1 extra",
        ] {
            assert!(
                matches!(parse_fen(bad), Err(ChessError::InvalidFen(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn en_passant_square_must_match_side_to_move() {
        for bad in [
            "4k3/8/8/8/8/8/3Pp3/4K3 w - e3 0 1",
            "4k3/3pP3/8/8/8/8/8/4K3 b - e6 0 1",
            "4k3/8/8/3p4/8/8/8/4K3 w - e6 0 1",
            "4k3/8/8/8/4p3/8/8/4K3 b - e3 0 1",
        ] {
            assert!(
                matches!(parse_fen(bad), Err(ChessError::InvalidFen(_))),
                "accepted {bad:?}"
            );
        }

        let game_state = parse_fen("4k3/8/8/8/4P3/8/8/4K3 b - e3 0 1")
            .expect("target behind a light double push should parse");
        assert_eq!(game_state.en_passant_square().map(|sq| sq.to_string()).as_deref(), Some("e3"));
    }
}
