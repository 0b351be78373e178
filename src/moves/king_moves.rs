//! King attack bitboards.
//!
//! Fixed one-step offsets precomputed at compile time; castling is handled
//! by the king move generator, not here.

use crate::game_state::chess_types::{Bitboard, Square};

pub const KING_ATTACKS: [u64; 64] = generate_king_attacks();

#[inline]
pub const fn king_attacks(square: Square) -> Bitboard {
    Bitboard(KING_ATTACKS[square.as_usize()])
}

const fn generate_king_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut attacks = 0u64;

        attacks |= set_if_valid(file - 1, rank - 1);
        attacks |= set_if_valid(file, rank - 1);
        attacks |= set_if_valid(file + 1, rank - 1);
        attacks |= set_if_valid(file - 1, rank);
        attacks |= set_if_valid(file + 1, rank);
        attacks |= set_if_valid(file - 1, rank + 1);
        attacks |= set_if_valid(file, rank + 1);
        attacks |= set_if_valid(file + 1, rank + 1);

        table[sq] = attacks;
        sq += 1;
    }

    table
}

const fn set_if_valid(file: i32, rank: i32) -> u64 {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return 0;
    }

    1u64 << (rank as usize * 8 + file as usize)
}

#[cfg(test)]
mod tests {
    use super::{king_attacks, KING_ATTACKS};
    use crate::game_state::chess_types::Square;

    #[test]
    fn king_attacks_from_a1_has_three_targets() {
        assert_eq!(KING_ATTACKS[0].count_ones(), 3);
        assert_eq!(king_attacks(Square::from_index(0)).count(), 3);
        assert_eq!(king_attacks(Square::from_index(36)).count(), 8);
    }
}
