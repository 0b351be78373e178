//! Move-path enumeration for validating the generator.
//!
//! Leaf statistics follow the usual perft tables: a capture, en passant,
//! castle, promotion, check or checkmate is counted on the move that reaches
//! the leaf.

use std::thread;

use tracing::debug;

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{is_en_passant, make_pseudo_legal_move, unmake_move};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves_in_place;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Full leaf statistics to `depth` plies.
pub fn perft<G: MoveGenerator + ?Sized>(generator: &G, game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut scratch = game_state.clone();
    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(&scratch) {
        perft_recurse(generator, &mut scratch, &mv, depth, &mut total);
    }
    total
}

/// Node count only, with bulk counting at the last ply.
pub fn perft_nodes(game_state: &GameState, depth: u8) -> u64 {
    let mut scratch = game_state.clone();
    count_nodes(&mut scratch, depth)
}

/// Node count below each root move, in generation order.
pub fn perft_divide(game_state: &GameState, depth: u8) -> Vec<(Move, u64)> {
    let mut scratch = game_state.clone();
    if depth == 0 {
        return Vec::new();
    }

    generate_legal_moves_in_place(&mut scratch)
        .into_iter()
        .filter_map(|mv| {
            let undo = make_pseudo_legal_move(&mut scratch, &mv).ok()?;
            let nodes = count_nodes(&mut scratch, depth - 1);
            unmake_move(&mut scratch, &mv, &undo);
            Some((mv, nodes))
        })
        .collect()
}

/// Splits the root moves across `threads` workers. Each worker owns its own
/// copy of the position.
pub fn perft_multi_threaded<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
    threads: usize,
) -> PerftCounts {
    if depth == 0 || threads <= 1 {
        return perft(generator, game_state, depth);
    }

    let root_moves = generator.generate_legal_moves(game_state);
    if root_moves.is_empty() {
        return PerftCounts::default();
    }
    let chunk_size = root_moves.len().div_ceil(threads);

    thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .chunks(chunk_size)
            .map(|chunk| {
                let mut local_state = game_state.clone();
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    for mv in chunk {
                        let before = local.nodes;
                        perft_recurse(generator, &mut local_state, mv, depth, &mut local);
                        debug!(mv = %mv, nodes = local.nodes - before, "perft root move done");
                    }
                    local
                })
            })
            .collect();

        let mut total = PerftCounts::default();
        for handle in handles {
            match handle.join() {
                Ok(local) => total.merge(local),
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
        total
    })
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &mut GameState,
    mv: &Move,
    remaining: u8,
    counts: &mut PerftCounts,
) {
    let Some(moved_piece) = game_state.piece_kind_on(game_state.side_to_move(), mv.from()) else {
        return;
    };
    let en_passant = is_en_passant(game_state, moved_piece, mv.from(), mv.to());

    let Ok(undo) = make_pseudo_legal_move(game_state, mv) else {
        return;
    };

    if remaining == 1 {
        counts.nodes += 1;
        if mv.is_capture() {
            counts.captures += 1;
        }
        if en_passant {
            counts.en_passant += 1;
        }
        if mv.is_castle() {
            counts.castles += 1;
        }
        if mv.is_promotion() {
            counts.promotions += 1;
        }
        if is_in_check(game_state) {
            counts.checks += 1;
            if generator.generate_legal_moves(game_state).is_empty() {
                counts.checkmates += 1;
            }
        }
    } else {
        for child in generator.generate_legal_moves(game_state) {
            perft_recurse(generator, game_state, &child, remaining - 1, counts);
        }
    }

    unmake_move(game_state, mv, &undo);
}

fn count_nodes(game_state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_legal_moves_in_place(game_state);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in &moves {
        let Ok(undo) = make_pseudo_legal_move(game_state, mv) else {
            continue;
        };
        nodes += count_nodes(game_state, depth - 1);
        unmake_move(game_state, mv, &undo);
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;

    struct NoMovesGenerator;

    impl MoveGenerator for NoMovesGenerator {
        fn generate_legal_moves(&self, _game_state: &GameState) -> Vec<Move> {
            Vec::new()
        }
    }

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let counts = perft(&NoMovesGenerator, &GameState::new_empty(), 0);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
        assert_eq!(perft(&NoMovesGenerator, &GameState::new_game(), 3), PerftCounts::default());
    }

    #[test]
    fn startpos_shallow_counts() {
        let game = GameState::new_game();
        assert_eq!(perft_nodes(&game, 1), 20);
        assert_eq!(perft_nodes(&game, 2), 400);

        let counts = perft(&LegalMoveGenerator, &game, 3);
        assert_eq!(counts.nodes, 8_902);
        assert_eq!(counts.captures, 34);
        assert_eq!(counts.checks, 12);
        assert_eq!(counts.checkmates, 0);
    }

    #[test]
    fn divide_sums_to_total() {
        let game = GameState::new_game();
        let divide = perft_divide(&game, 3);
        assert_eq!(divide.len(), 20);
        assert_eq!(divide.iter().map(|(_, n)| n).sum::<u64>(), 8_902);
        let e2e4 = divide
            .iter()
            .find(|(mv, _)| mv.to_long_algebraic() == "e2e4")
            .expect("e2e4 is a root move");
        assert_eq!(e2e4.1, 600);
    }

    #[test]
    fn threaded_perft_matches_single_thread() {
        let game = GameState::new_game();
        let single = perft(&LegalMoveGenerator, &game, 3);
        let threaded = perft_multi_threaded(&LegalMoveGenerator, &game, 3, 4);
        assert_eq!(single, threaded);
    }
}
