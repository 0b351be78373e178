use crate::game_state::chess_types::{Bitboard, Color, Square};

pub const LIGHT_PAWN_ATTACKS: [u64; 64] = generate_light_pawn_attacks();
pub const DARK_PAWN_ATTACKS: [u64; 64] = generate_dark_pawn_attacks();

/// Squares a `color` pawn standing on `square` attacks.
#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> Bitboard {
    match color {
        Color::Light => Bitboard(LIGHT_PAWN_ATTACKS[square.as_usize()]),
        Color::Dark => Bitboard(DARK_PAWN_ATTACKS[square.as_usize()]),
    }
}

const fn generate_light_pawn_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = sq % 8;
        let rank = sq / 8;
        let mut attacks = 0u64;

        if rank < 7 {
            if file > 0 {
                attacks |= 1u64 << (sq + 7);
            }
            if file < 7 {
                attacks |= 1u64 << (sq + 9);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

const fn generate_dark_pawn_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = sq % 8;
        let rank = sq / 8;
        let mut attacks = 0u64;

        if rank > 0 {
            if file > 0 {
                attacks |= 1u64 << (sq - 9);
            }
            if file < 7 {
                attacks |= 1u64 << (sq - 7);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{pawn_attacks, DARK_PAWN_ATTACKS, LIGHT_PAWN_ATTACKS};
    use crate::game_state::chess_types::{Color, Square};

    #[test]
    fn light_pawn_attacks_from_e2() {
        let expected = (1u64 << 19) | (1u64 << 21);
        assert_eq!(LIGHT_PAWN_ATTACKS[12], expected);
        assert_eq!(pawn_attacks(Color::Light, Square::from_index(12)).0, expected);
    }

    #[test]
    fn dark_pawn_attacks_from_a7_stay_on_board() {
        assert_eq!(DARK_PAWN_ATTACKS[48], 1u64 << 41);
        assert_eq!(pawn_attacks(Color::Dark, Square::from_index(48)).count(), 1);
    }
}
