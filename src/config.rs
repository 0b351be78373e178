//! Settings for the perft runner.
//!
//! Values come from `PIONEER_PERFT_*` environment variables and can be
//! overridden by command-line flags.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::STARTING_POSITION_FEN;

pub const ENV_FEN: &str = "PIONEER_PERFT_FEN";
pub const ENV_DEPTH: &str = "PIONEER_PERFT_DEPTH";
pub const ENV_THREADS: &str = "PIONEER_PERFT_THREADS";
pub const ENV_DIVIDE: &str = "PIONEER_PERFT_DIVIDE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerftConfig {
    /// Root position.
    pub fen: String,
    /// Plies to enumerate, at least 1.
    pub depth: u8,
    /// Worker threads for the root split; 1 runs on the calling thread.
    pub threads: usize,
    /// Print a per-root-move breakdown.
    pub divide: bool,
}

impl Default for PerftConfig {
    fn default() -> Self {
        PerftConfig {
            fen: STARTING_POSITION_FEN.to_owned(),
            depth: 4,
            threads: 1,
            divide: false,
        }
    }
}

impl PerftConfig {
    /// Load configuration from environment variables with defaults.
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = PerftConfig::default();
        PerftConfig {
            fen: lookup(ENV_FEN).unwrap_or(defaults.fen),
            depth: lookup(ENV_DEPTH)
                .and_then(|v| v.parse::<u8>().ok())
                .unwrap_or(defaults.depth)
                .max(1),
            threads: lookup(ENV_THREADS)
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(defaults.threads)
                .max(1),
            divide: lookup(ENV_DIVIDE)
                .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.divide),
        }
    }

    /// Applies `--fen <fen>`, `--depth <n>`, `--threads <n>` and `--divide`.
    /// `args` excludes the program name.
    pub fn apply_args<I, S>(mut self, args: I) -> ChessResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--fen" => self.fen = flag_value(&flag, args.next())?,
                "--depth" => {
                    self.depth = parse_flag::<u8>(&flag, args.next())?.max(1);
                }
                "--threads" => {
                    self.threads = parse_flag::<usize>(&flag, args.next())?.max(1);
                }
                "--divide" => self.divide = true,
                other => {
                    return Err(ChessError::InvalidConfig(format!("unknown argument '{other}'")));
                }
            }
        }
        Ok(self)
    }
}

fn flag_value(flag: &str, value: Option<String>) -> ChessResult<String> {
    value.ok_or_else(|| ChessError::InvalidConfig(format!("{flag} needs a value")))
}

fn parse_flag<T: std::str::FromStr>(flag: &str, value: Option<String>) -> ChessResult<T> {
    let value = flag_value(flag, value)?;
    value
        .parse::<T>()
        .map_err(|_| ChessError::InvalidConfig(format!("{flag} value '{value}' is not a number")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PerftConfig::default();
        assert_eq!(config.fen, STARTING_POSITION_FEN);
        assert_eq!(config.depth, 4);
        assert_eq!(config.threads, 1);
        assert!(!config.divide);
    }

    #[test]
    fn lookup_overrides_and_clamps() {
        let config = PerftConfig::from_lookup(|key| match key {
            ENV_DEPTH => Some("0".to_owned()),
            ENV_THREADS => Some("8".to_owned()),
            ENV_DIVIDE => Some("true".to_owned()),
            _ => None,
        });
        assert_eq!(config.depth, 1);
        assert_eq!(config.threads, 8);
        assert!(config.divide);
        assert_eq!(config.fen, STARTING_POSITION_FEN);

        let garbage = PerftConfig::from_lookup(|_| Some("lots".to_owned()));
        assert_eq!(garbage.depth, 4);
        assert_eq!(garbage.fen, "lots");
    }

    #[test]
    fn args_take_precedence() {
        let config = PerftConfig::default()
            .apply_args(["--depth", "2", "--divide", "--fen", "4k3/8/8/8/8/8/8/4K3 w - - 0 1"])
            .expect("valid args");
        assert_eq!(config.depth, 2);
        assert!(config.divide);
        assert_eq!(config.fen, "4k3/8/8/8/8/8/8/4K3 w - - 0 1");
    }

    #[test]
    fn bad_args_are_reported() {
        for args in [vec!["--depth"], vec!["--threads", "many"], vec!["--bogus"]] {
            assert!(matches!(
                PerftConfig::default().apply_args(args),
                Err(ChessError::InvalidConfig(_))
            ));
        }
    }
}
