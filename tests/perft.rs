//! Perft suite against published reference counts.
//!
//! A mismatch at any depth means a bug in move generation, make/unmake or
//! the legality filter.
//!
//! Reference: <https://www.chessprogramming.org/Perft_Results>

use pioneer_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use pioneer_chess::game_state::game_state::GameState;
use pioneer_chess::move_generation::legal_move_generator::LegalMoveGenerator;
use pioneer_chess::move_generation::perft::{
    perft, perft_divide, perft_multi_threaded, perft_nodes, PerftCounts,
};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
const POSITION_4: &str = "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1";
const POSITION_5: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

fn position(fen: &str) -> GameState {
    GameState::from_fen(fen).expect("reference FEN should parse")
}

fn assert_nodes(fen: &str, expected: &[u64]) {
    let game = position(fen);
    for (depth_idx, nodes) in expected.iter().enumerate() {
        let depth = (depth_idx + 1) as u8;
        assert_eq!(perft_nodes(&game, depth), *nodes, "{fen} depth {depth}");
    }
}

// =====================================================================
// Position 1: starting position
// =====================================================================

#[test]
fn perft_start_node_counts() {
    assert_nodes(STARTING_POSITION_FEN, &[20, 400, 8_902, 197_281]);
}

#[test]
fn perft_start_depth_4_statistics() {
    let counts = perft(&LegalMoveGenerator, &GameState::new_game(), 4);
    assert_eq!(
        counts,
        PerftCounts {
            nodes: 197_281,
            captures: 1_576,
            en_passant: 0,
            castles: 0,
            promotions: 0,
            checks: 469,
            checkmates: 8,
        }
    );
}

// =====================================================================
// Position 2: "Kiwipete"
// =====================================================================

#[test]
fn perft_kiwipete_node_counts() {
    assert_nodes(KIWIPETE, &[48, 2_039, 97_862]);
}

#[test]
fn perft_kiwipete_statistics() {
    let game = position(KIWIPETE);

    let depth_1 = perft(&LegalMoveGenerator, &game, 1);
    assert_eq!(depth_1.nodes, 48);
    assert_eq!(depth_1.captures, 8);
    assert_eq!(depth_1.castles, 2);

    let depth_2 = perft(&LegalMoveGenerator, &game, 2);
    assert_eq!(
        depth_2,
        PerftCounts {
            nodes: 2_039,
            captures: 351,
            en_passant: 1,
            castles: 91,
            promotions: 0,
            checks: 3,
            checkmates: 0,
        }
    );
}

// =====================================================================
// Position 3: en passant and rook endgame
// =====================================================================

#[test]
fn perft_position_3_node_counts() {
    assert_nodes(POSITION_3, &[14, 191, 2_812, 43_238]);
}

#[test]
fn perft_position_3_statistics() {
    let counts = perft(&LegalMoveGenerator, &position(POSITION_3), 3);
    assert_eq!(counts.nodes, 2_812);
    assert_eq!(counts.captures, 209);
    assert_eq!(counts.en_passant, 2);
    assert_eq!(counts.checks, 267);
    assert_eq!(counts.checkmates, 0);
}

// =====================================================================
// Position 4: promotions and castling under pressure
// =====================================================================

#[test]
fn perft_position_4_node_counts() {
    assert_nodes(POSITION_4, &[6, 264, 9_467]);
}

#[test]
fn perft_position_4_statistics() {
    let counts = perft(&LegalMoveGenerator, &position(POSITION_4), 2);
    assert_eq!(counts.nodes, 264);
    assert_eq!(counts.captures, 87);
    assert_eq!(counts.castles, 6);
    assert_eq!(counts.promotions, 48);
    assert_eq!(counts.checks, 10);
}

// =====================================================================
// Position 5
// =====================================================================

#[test]
fn perft_position_5_node_counts() {
    assert_nodes(POSITION_5, &[44, 1_486, 62_379]);
}

// =====================================================================
// Runner variants agree
// =====================================================================

#[test]
fn divide_and_threaded_runs_agree_with_single_thread() {
    let game = position(KIWIPETE);
    let single = perft(&LegalMoveGenerator, &game, 2);

    let divided: u64 = perft_divide(&game, 2).iter().map(|(_, nodes)| nodes).sum();
    assert_eq!(divided, single.nodes);

    for threads in [2, 3, 8, 64] {
        assert_eq!(perft_multi_threaded(&LegalMoveGenerator, &game, 2, threads), single);
    }
}

#[test]
fn perft_leaves_root_position_untouched() {
    let game = position(POSITION_4);
    let before = game.clone();
    perft_nodes(&game, 3);
    perft(&LegalMoveGenerator, &game, 2);
    assert_eq!(game, before);
}
