use crate::game_state::chess_types::{Bitboard, Square};
use crate::moves::magic_tables::slider_tables;
use crate::moves::rook_moves::{trace_ray, trace_ray_const};

const BISHOP_STEPS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const BISHOP_RAYS: [u64; 64] = generate_bishop_rays();

#[inline]
pub fn bishop_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    slider_tables().bishop_attacks(square, occupancy)
}

pub fn bishop_attacks_traced(square: Square, occupancy: u64) -> u64 {
    BISHOP_STEPS
        .iter()
        .fold(0u64, |acc, &(df, dr)| acc | trace_ray(square, df, dr, occupancy))
}

/// Diagonal rays from `square` with the board rim removed.
pub fn bishop_relevant_mask(square: Square) -> u64 {
    const RIM: u64 = 0xFF81_8181_8181_81FF;
    BISHOP_RAYS[square.as_usize()] & !RIM
}

const fn generate_bishop_rays() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let sq_i = sq as i32;
        table[sq] = trace_ray_const(sq_i, 1, 1)
            | trace_ray_const(sq_i, 1, -1)
            | trace_ray_const(sq_i, -1, 1)
            | trace_ray_const(sq_i, -1, -1);
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{bishop_attacks, bishop_attacks_traced, bishop_relevant_mask, BISHOP_RAYS};
    use crate::game_state::chess_types::{Bitboard, Square};

    #[test]
    fn bishop_rays_from_d4_have_thirteen_squares() {
        assert_eq!(BISHOP_RAYS[27].count_ones(), 13);
        assert_eq!(bishop_relevant_mask(Square::from_index(27)).count_ones(), 9);
    }

    #[test]
    fn bishop_lookup_matches_ray_trace() {
        let c1 = Square::from_index(2);
        let occupancy = (1u64 << 20) | (1u64 << 9) | (1u64 << 47);
        assert_eq!(
            bishop_attacks(c1, Bitboard(occupancy)).0,
            bishop_attacks_traced(c1, occupancy)
        );
        // Blocked on e3, so f4 is out of reach.
        assert!(!bishop_attacks(c1, Bitboard(occupancy)).contains(Square::from_index(29)));
    }
}
