//! Rook attacks.
//!
//! Runtime lookups go through the magic tables. The ray tracer below is the
//! reference the tables are built from.

use crate::game_state::chess_types::{Bitboard, Square};
use crate::moves::magic_tables::slider_tables;

const ROOK_STEPS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub const ROOK_RAYS: [u64; 64] = generate_rook_rays();

#[inline]
pub fn rook_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    slider_tables().rook_attacks(square, occupancy)
}

/// Ray-traced rook attacks; stops on (and includes) the first blocker.
pub fn rook_attacks_traced(square: Square, occupancy: u64) -> u64 {
    ROOK_STEPS
        .iter()
        .fold(0u64, |acc, &(df, dr)| acc | trace_ray(square, df, dr, occupancy))
}

/// Squares whose occupancy can change a rook's attack set from `square`:
/// the rays without their final edge square.
pub fn rook_relevant_mask(square: Square) -> u64 {
    let file = square.file() as i32;
    let rank = square.rank() as i32;
    let mut mask = 0u64;

    for f in 1..7 {
        if f != file {
            mask |= 1u64 << (rank * 8 + f);
        }
    }
    for r in 1..7 {
        if r != rank {
            mask |= 1u64 << (r * 8 + file);
        }
    }

    mask
}

const fn generate_rook_rays() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let sq_i = sq as i32;
        let mut rays = 0u64;

        rays |= trace_ray_const(sq_i, 0, 1);
        rays |= trace_ray_const(sq_i, 0, -1);
        rays |= trace_ray_const(sq_i, 1, 0);
        rays |= trace_ray_const(sq_i, -1, 0);

        table[sq] = rays;
        sq += 1;
    }

    table
}

pub(crate) fn trace_ray(square: Square, file_step: i32, rank_step: i32, occupancy: u64) -> u64 {
    let mut file = square.file() as i32 + file_step;
    let mut rank = square.rank() as i32 + rank_step;
    let mut attacks = 0u64;

    while (0..8).contains(&file) && (0..8).contains(&rank) {
        let bit = 1u64 << (rank * 8 + file);
        attacks |= bit;

        if (occupancy & bit) != 0 {
            break;
        }

        file += file_step;
        rank += rank_step;
    }

    attacks
}

pub(crate) const fn trace_ray_const(square: i32, file_step: i32, rank_step: i32) -> u64 {
    let mut file = (square % 8) + file_step;
    let mut rank = (square / 8) + rank_step;
    let mut attacks = 0u64;

    while file >= 0 && file < 8 && rank >= 0 && rank < 8 {
        attacks |= 1u64 << (rank * 8 + file);
        file += file_step;
        rank += rank_step;
    }

    attacks
}

#[cfg(test)]
mod tests {
    use super::{rook_attacks, rook_attacks_traced, rook_relevant_mask, ROOK_RAYS};
    use crate::game_state::chess_types::{Bitboard, Square};

    #[test]
    fn rook_rays_from_d4_have_fourteen_squares() {
        assert_eq!(ROOK_RAYS[27].count_ones(), 14);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let a1 = Square::from_index(0);
        let blocker_on_a4 = Bitboard(1u64 << 24);
        let attacks = rook_attacks(a1, blocker_on_a4);

        assert!(attacks.contains(Square::from_index(24)));
        assert!(!attacks.contains(Square::from_index(32)));
        assert_eq!(attacks.0, rook_attacks_traced(a1, blocker_on_a4.0));
    }

    #[test]
    fn corner_rook_mask_excludes_edges() {
        assert_eq!(rook_relevant_mask(Square::from_index(0)).count_ones(), 12);
        assert_eq!(rook_relevant_mask(Square::from_index(27)).count_ones(), 10);
    }
}
