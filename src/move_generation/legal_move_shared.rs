use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::Move;

/// Opponent piece standing on `square`, if any.
#[inline]
pub fn enemy_piece_on(game_state: &GameState, square: Square) -> Option<Piece> {
    let enemy = game_state.side_to_move.opposite();
    game_state
        .piece_kind_on(enemy, square)
        .map(|kind| Piece::new(enemy, kind))
}

/// Emits one quiet move or capture from `from` to each square of `targets`.
/// Targets must already exclude own pieces.
#[inline]
pub fn push_moves_to_targets(
    game_state: &GameState,
    from: Square,
    targets: Bitboard,
    out: &mut Vec<Move>,
) {
    for to in targets {
        match enemy_piece_on(game_state, to) {
            Some(captured) => out.push(Move::capture(from, to, captured)),
            None => out.push(Move::quiet(from, to)),
        }
    }
}

/// Moves for every `kind` piece of the side to move, using `attacks` to
/// produce each piece's target set.
pub fn generate_piece_moves<F>(game_state: &GameState, kind: PieceKind, attacks: F, out: &mut Vec<Move>)
where
    F: Fn(Square, Bitboard) -> Bitboard,
{
    let side = game_state.side_to_move;
    let own_occ = game_state.occupancy_by_color[side.index()];

    for from in game_state.pieces[side.index()][kind.index()] {
        let targets = attacks(from, game_state.occupancy_all) & !own_occ;
        push_moves_to_targets(game_state, from, targets, out);
    }
}
