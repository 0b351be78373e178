//! Prints packed values in readable form.
//!
//! Usage:
//! `cargo run --bin inspect -- move <u32>`
//! `cargo run --bin inspect -- bitboard <u64>`

use std::process::ExitCode;

use pioneer_chess::game_state::bitboard::Bitboard;
use pioneer_chess::moves::move_descriptions::Move;

const USAGE: &str = "usage: inspect move <u32> | inspect bitboard <u64>";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [kind, value] = args.as_slice() else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    match kind.as_str() {
        "move" => {
            let Ok(raw) = value.parse::<u32>() else {
                eprintln!("not a 32-bit move value: {value}");
                return ExitCode::FAILURE;
            };
            match Move::describe_raw(raw) {
                Ok(report) => println!("{report}"),
                Err(err) => {
                    eprintln!("{err}");
                    return ExitCode::FAILURE;
                }
            }
        }
        "bitboard" => {
            let Ok(bits) = value.parse::<u64>() else {
                eprintln!("not a 64-bit bitboard value: {value}");
                return ExitCode::FAILURE;
            };
            print!("{}", Bitboard(bits));
        }
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
