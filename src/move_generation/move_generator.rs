use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

/// Source of legal moves for a position. Implementations must be shareable
/// across perft worker threads.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<Move>;
}
