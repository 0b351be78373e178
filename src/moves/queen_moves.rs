use crate::game_state::chess_types::{Bitboard, Square};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn queen_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    rook_attacks(square, occupancy) | bishop_attacks(square, occupancy)
}

#[cfg(test)]
mod tests {
    use super::queen_attacks;
    use crate::game_state::chess_types::{Bitboard, Square};

    #[test]
    fn queen_on_empty_board_from_d4_sees_twenty_seven_squares() {
        assert_eq!(queen_attacks(Square::from_index(27), Bitboard::EMPTY).count(), 27);
    }
}
