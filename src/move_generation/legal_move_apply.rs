//! Make/unmake of moves on a mutable `GameState`.
//!
//! `make_*` returns an `UndoState` snapshot; passing it back to
//! [`unmake_move`] with the same move restores the position bit for bit.
//! Captured pieces, en passant and double pushes are read from the board, so
//! a move only needs correct squares and promotion kind to be applied.

use tracing::debug;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{castling_lane_for, castling_rights_revoked_by};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::Move;

/// Applies `mv` after checking it is legal in `game_state`. On error the
/// position is left untouched.
pub fn make_move(game_state: &mut GameState, mv: &Move) -> ChessResult<UndoState> {
    if !generate_legal_moves(game_state).contains(mv) {
        debug!(mv = %mv, fen = %game_state.get_fen(), "rejected illegal move");
        return Err(ChessError::IllegalMove(format!(
            "{mv} is not legal in {}",
            game_state.get_fen()
        )));
    }
    make_pseudo_legal_move(game_state, mv)
}

/// Applies `mv` without a legality check. Only verifies that the origin holds
/// a piece of the side to move and the destination is not an own piece.
pub fn make_pseudo_legal_move(game_state: &mut GameState, mv: &Move) -> ChessResult<UndoState> {
    let side = game_state.side_to_move;
    let enemy = side.opposite();
    let from = mv.from();
    let to = mv.to();

    let moved_piece = game_state.piece_kind_on(side, from).ok_or_else(|| {
        ChessError::IllegalMove(format!("no {side:?} piece on {from} for {mv}"))
    })?;
    if game_state.occupancy_by_color[side.index()].contains(to) {
        return Err(ChessError::IllegalMove(format!(
            "{mv} lands on a {side:?} piece"
        )));
    }

    let captured = if is_en_passant(game_state, moved_piece, from, to) {
        let victim = ep_victim_square(side, to);
        Some((PieceKind::Pawn, victim))
    } else {
        game_state.piece_kind_on(enemy, to).map(|kind| (kind, to))
    };

    let undo = UndoState {
        moved_piece,
        captured,
        prev_castling_rights: game_state.castling_rights,
        prev_en_passant_square: game_state.en_passant_square,
        prev_halfmove_clock: game_state.halfmove_clock,
        prev_fullmove_number: game_state.fullmove_number,
    };

    if let Some((kind, square)) = captured {
        game_state.take_piece(enemy, kind, square);
    }

    match promoted_kind(moved_piece, mv) {
        Some(promotion) => {
            game_state.take_piece(side, PieceKind::Pawn, from);
            game_state.add_piece(side, promotion, to);
        }
        None => game_state.shift_piece(side, moved_piece, from, to),
    }

    if moved_piece == PieceKind::King {
        if let Some(lane) = castling_lane_for(side, from, to) {
            game_state.shift_piece(side, PieceKind::Rook, lane.rook_from, lane.rook_to);
        }
    }

    game_state.castling_rights &=
        !(castling_rights_revoked_by(from) | castling_rights_revoked_by(to));

    game_state.en_passant_square = if moved_piece == PieceKind::Pawn && from.rank().abs_diff(to.rank()) == 2 {
        Some(Square::from_index((from.index() + to.index()) / 2))
    } else {
        None
    };

    if moved_piece == PieceKind::Pawn || captured.is_some() {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }
    if side == Color::Dark {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }

    game_state.side_to_move = enemy;

    Ok(undo)
}

/// Reverts `mv`, which must be the last move made on `game_state` and must
/// have produced `undo`.
pub fn unmake_move(game_state: &mut GameState, mv: &Move, undo: &UndoState) {
    let side = game_state.side_to_move.opposite();
    let from = mv.from();
    let to = mv.to();

    game_state.side_to_move = side;

    if undo.moved_piece == PieceKind::King {
        if let Some(lane) = castling_lane_for(side, from, to) {
            game_state.shift_piece(side, PieceKind::Rook, lane.rook_to, lane.rook_from);
        }
    }

    match promoted_kind(undo.moved_piece, mv) {
        Some(promotion) => {
            game_state.take_piece(side, promotion, to);
            game_state.add_piece(side, PieceKind::Pawn, from);
        }
        None => game_state.shift_piece(side, undo.moved_piece, to, from),
    }

    if let Some((kind, square)) = undo.captured {
        game_state.add_piece(side.opposite(), kind, square);
    }

    game_state.castling_rights = undo.prev_castling_rights;
    game_state.en_passant_square = undo.prev_en_passant_square;
    game_state.halfmove_clock = undo.prev_halfmove_clock;
    game_state.fullmove_number = undo.prev_fullmove_number;
}

/// Copy-make: the position after `mv`, leaving `game_state` unchanged.
pub fn apply_move(game_state: &GameState, mv: &Move) -> ChessResult<GameState> {
    let mut next = game_state.clone();
    make_move(&mut next, mv)?;
    Ok(next)
}

/// A pawn moving diagonally onto the empty en-passant target square.
#[inline]
pub fn is_en_passant(game_state: &GameState, moved_piece: PieceKind, from: Square, to: Square) -> bool {
    moved_piece == PieceKind::Pawn
        && game_state.en_passant_square == Some(to)
        && from.file() != to.file()
        && !game_state.occupancy_all.contains(to)
}

#[inline]
fn ep_victim_square(side: Color, to: Square) -> Square {
    match side {
        Color::Light => Square::from_index(to.index().wrapping_sub(8)),
        Color::Dark => Square::from_index(to.index() + 8),
    }
}

#[inline]
fn promoted_kind(moved_piece: PieceKind, mv: &Move) -> Option<PieceKind> {
    if moved_piece == PieceKind::Pawn {
        mv.promotion_kind()
    } else {
        None
    }
}
