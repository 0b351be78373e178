//! Square and bitboard conversions for algebraic coordinates (`e4`).

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Bitboard, Square};

/// Parses a coordinate such as `"e4"`.
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    Square::new((rank - b'1') * 8 + (file - b'a'))
}

#[inline]
pub fn algebraic_to_bitboard(square: &str) -> ChessResult<Bitboard> {
    Ok(algebraic_to_square(square)?.bitboard())
}

#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

/// Coordinate of a single-square bitboard.
pub fn bitboard_to_algebraic(bitboard: Bitboard) -> ChessResult<String> {
    match (bitboard.count(), bitboard.lsb()) {
        (1, Some(square)) => Ok(square_to_algebraic(square)),
        (count, _) => Err(ChessError::InvalidAlgebraic(format!(
            "bitboard {:#018x} has {count} squares, expected one",
            bitboard.0
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!(algebraic_to_square("a1").map(Square::index), Ok(0));
        assert_eq!(algebraic_to_square("h8").map(Square::index), Ok(63));
        let e2 = algebraic_to_square("e2").expect("e2 should parse");
        assert_eq!(e2.coordinates(), (5, 2));
        assert_eq!(square_to_algebraic(e2), "e2");
    }

    #[test]
    fn rejects_malformed_coordinates() {
        for bad in ["", "e", "e9", "i1", "E2", "e22"] {
            assert!(matches!(
                algebraic_to_square(bad),
                Err(ChessError::InvalidAlgebraic(_))
            ));
        }
    }

    #[test]
    fn bitboard_conversion_needs_exactly_one_square() {
        let e4 = algebraic_to_bitboard("e4").expect("e4 should parse");
        assert_eq!(e4, Bitboard(1u64 << 28));
        assert_eq!(bitboard_to_algebraic(e4).as_deref(), Ok("e4"));
        assert!(bitboard_to_algebraic(Bitboard::EMPTY).is_err());
        assert!(bitboard_to_algebraic(Bitboard(0b11)).is_err());
    }
}
