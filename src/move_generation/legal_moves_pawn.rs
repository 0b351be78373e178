//! Pawn move generation.
//!
//! Pushes are generated set-wise by shifting the whole pawn bitboard; captures
//! and en passant go pawn by pawn through the attack tables.

use crate::game_state::bitboard::{Direction, RANK_1, RANK_3, RANK_6, RANK_8};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::enemy_piece_on;
use crate::moves::move_descriptions::Move;
use crate::moves::pawn_moves::pawn_attacks;

pub fn generate_pawn_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let pawns = game_state.pieces[side.index()][PieceKind::Pawn.index()];
    let enemy_occ = game_state.occupancy_by_color[side.opposite().index()];
    let empty = !game_state.occupancy_all;

    let (forward, double_push_rank, last_rank, back) = match side {
        Color::Light => (Direction::North, RANK_3, RANK_8, -8i8),
        Color::Dark => (Direction::South, RANK_6, RANK_1, 8i8),
    };
    let origin = |to: Square, steps: i8| Square::from_index((to.index() as i8 + back * steps) as u8);

    let single = pawns.shift(forward) & empty;
    let double = (single & Bitboard(double_push_rank)).shift(forward) & empty;

    for to in single {
        push_pawn_move(origin(to, 1), to, None, last_rank, out);
    }
    for to in double {
        out.push(Move::quiet(origin(to, 2), to));
    }

    for from in pawns {
        let attacks = pawn_attacks(side, from);

        for to in attacks & enemy_occ {
            push_pawn_move(from, to, enemy_piece_on(game_state, to), last_rank, out);
        }

        if let Some(ep) = game_state.en_passant_square {
            if attacks.contains(ep) && !game_state.occupancy_all.contains(ep) {
                let victim_square = origin(ep, 1);
                let victim = Piece::new(side.opposite(), PieceKind::Pawn);
                if game_state.pieces(victim.color, PieceKind::Pawn).contains(victim_square) {
                    out.push(Move::capture(from, ep, victim));
                }
            }
        }
    }
}

fn push_pawn_move(
    from: Square,
    to: Square,
    captured: Option<Piece>,
    last_rank: u64,
    out: &mut Vec<Move>,
) {
    if Bitboard(last_rank).contains(to) {
        for kind in PROMOTION_KINDS {
            out.push(Move::promotion(from, to, kind, captured));
        }
        return;
    }
    match captured {
        Some(piece) => out.push(Move::capture(from, to, piece)),
        None => out.push(Move::quiet(from, to)),
    }
}
