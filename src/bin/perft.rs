//! Perft runner for checking the move generator against reference counts.
//!
//! Usage:
//! `cargo run --release --bin perft`
//! `cargo run --release --bin perft -- --depth 5 --threads 8`
//! `cargo run --release --bin perft -- --fen "<fen>" --depth 3 --divide`

use std::process::ExitCode;
use std::time::Instant;

use pioneer_chess::chess_errors::ChessResult;
use pioneer_chess::config::PerftConfig;
use pioneer_chess::game_state::game_state::GameState;
use pioneer_chess::move_generation::legal_move_generator::LegalMoveGenerator;
use pioneer_chess::move_generation::perft::{perft_divide, perft_multi_threaded};
use pioneer_chess::moves::magic_tables;

fn run(config: &PerftConfig) -> ChessResult<()> {
    let game = GameState::from_fen(&config.fen)?;
    magic_tables::init();

    println!("{game}");
    println!("fen: {}", game.get_fen());

    if config.divide {
        let mut total = 0u64;
        for (mv, nodes) in perft_divide(&game, config.depth) {
            println!("{mv}: {nodes}");
            total += nodes;
        }
        println!("\nmoves: {total}");
        return Ok(());
    }

    let started = Instant::now();
    let counts = perft_multi_threaded(&LegalMoveGenerator, &game, config.depth, config.threads);
    let elapsed = started.elapsed();
    let nps = (counts.nodes as f64 / elapsed.as_secs_f64().max(1e-9)) as u64;

    tracing::info!(
        depth = config.depth,
        threads = config.threads,
        nodes = counts.nodes,
        elapsed_ms = elapsed.as_millis() as u64,
        nps,
        "perft finished"
    );
    println!(
        "depth={} nodes={} captures={} ep={} castles={} promotions={} checks={} mates={} elapsed_ms={} nps={}",
        config.depth,
        counts.nodes,
        counts.captures,
        counts.en_passant,
        counts.castles,
        counts.promotions,
        counts.checks,
        counts.checkmates,
        elapsed.as_millis(),
        nps
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pioneer_chess=info".into()),
        )
        .init();

    let config = match PerftConfig::from_env().apply_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("usage: perft [--fen <fen>] [--depth <n>] [--threads <n>] [--divide]");
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
