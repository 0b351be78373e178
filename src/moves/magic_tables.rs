//! Magic-bitboard lookup tables for rook and bishop attacks.
//!
//! Tables are searched for at first use with a fixed-seed RNG, so every run
//! builds the same magics. Call [`init`] up front to keep the cost out of the
//! first timed move generation.

use std::sync::OnceLock;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::game_state::chess_types::{Bitboard, Square};
use crate::moves::bishop_moves::{bishop_attacks_traced, bishop_relevant_mask};
use crate::moves::rook_moves::{rook_attacks_traced, rook_relevant_mask};

const ROOK_SEED: u64 = 0x5EED_0000_0000_0001;
const BISHOP_SEED: u64 = 0x5EED_0000_0000_0002;

static TABLES: OnceLock<SliderTables> = OnceLock::new();

#[derive(Debug, Clone, Copy)]
struct MagicEntry {
    mask: u64,
    magic: u64,
    shift: u32,
    offset: usize,
}

impl MagicEntry {
    #[inline]
    fn index(&self, occupancy: u64) -> usize {
        self.offset + ((occupancy & self.mask).wrapping_mul(self.magic) >> self.shift) as usize
    }
}

#[derive(Debug)]
pub struct SliderTables {
    rook_entries: [MagicEntry; 64],
    rook_attacks: Vec<u64>,
    bishop_entries: [MagicEntry; 64],
    bishop_attacks: Vec<u64>,
}

impl SliderTables {
    #[inline]
    pub fn rook_attacks(&self, square: Square, occupancy: Bitboard) -> Bitboard {
        let entry = &self.rook_entries[square.as_usize()];
        Bitboard(self.rook_attacks[entry.index(occupancy.0)])
    }

    #[inline]
    pub fn bishop_attacks(&self, square: Square, occupancy: Bitboard) -> Bitboard {
        let entry = &self.bishop_entries[square.as_usize()];
        Bitboard(self.bishop_attacks[entry.index(occupancy.0)])
    }

    fn build() -> Self {
        let started = Instant::now();
        let (rook_entries, rook_attacks) =
            build_slider(rook_relevant_mask, rook_attacks_traced, ROOK_SEED);
        let (bishop_entries, bishop_attacks) =
            build_slider(bishop_relevant_mask, bishop_attacks_traced, BISHOP_SEED);

        debug!(
            rook_entries = rook_attacks.len(),
            bishop_entries = bishop_attacks.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "built slider magic tables"
        );

        Self {
            rook_entries,
            rook_attacks,
            bishop_entries,
            bishop_attacks,
        }
    }
}

/// Builds the tables if nobody has yet.
pub fn init() {
    let _ = slider_tables();
}

#[inline]
pub fn slider_tables() -> &'static SliderTables {
    TABLES.get_or_init(SliderTables::build)
}

fn build_slider(
    mask_of: fn(Square) -> u64,
    traced: fn(Square, u64) -> u64,
    seed: u64,
) -> ([MagicEntry; 64], Vec<u64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut table = Vec::new();

    let entries: [MagicEntry; 64] = std::array::from_fn(|index| {
        let square = Square::from_index(index as u8);
        let mask = mask_of(square);
        let bits = mask.count_ones();
        let shift = 64 - bits;

        let blockers = blocker_subsets(mask);
        let reference: Vec<u64> = blockers.iter().map(|&b| traced(square, b)).collect();

        let magic = find_magic(&mut rng, mask, shift, &blockers, &reference);
        let offset = table.len();
        table.resize(offset + (1usize << bits), 0);

        let entry = MagicEntry {
            mask,
            magic,
            shift,
            offset,
        };
        for (&occupancy, &attacks) in blockers.iter().zip(&reference) {
            table[entry.index(occupancy)] = attacks;
        }
        entry
    });

    (entries, table)
}

/// Every subset of `mask`, via the carry-rippler walk.
fn blocker_subsets(mask: u64) -> Vec<u64> {
    let mut subsets = Vec::with_capacity(1usize << mask.count_ones());
    let mut subset = 0u64;
    loop {
        subsets.push(subset);
        subset = subset.wrapping_sub(mask) & mask;
        if subset == 0 {
            break;
        }
    }
    subsets
}

fn find_magic(
    rng: &mut StdRng,
    mask: u64,
    shift: u32,
    blockers: &[u64],
    reference: &[u64],
) -> u64 {
    let mut slots = vec![u64::MAX; 1usize << (64 - shift)];

    loop {
        let candidate = rng.random::<u64>() & rng.random::<u64>() & rng.random::<u64>();
        if (mask.wrapping_mul(candidate) >> 56).count_ones() < 6 {
            continue;
        }

        slots.fill(u64::MAX);
        let collision_free = blockers.iter().zip(reference).all(|(&occupancy, &attacks)| {
            let slot = &mut slots[(occupancy.wrapping_mul(candidate) >> shift) as usize];
            if *slot == u64::MAX {
                *slot = attacks;
                true
            } else {
                *slot == attacks
            }
        });

        if collision_free {
            return candidate;
        }
    }
}
