//! Move value and its packed 32-bit encoding.
//!
//! Layout:
//!
//! | bits  | field                         |
//! |-------|-------------------------------|
//! | 0-5   | from square                   |
//! | 6-11  | to square                     |
//! | 12-14 | promotion piece-kind code     |
//! | 17    | is promotion                  |
//! | 18    | is capture                    |
//! | 19    | is castle                     |
//! | 20-23 | captured piece code           |
//!
//! Piece codes are `0` for none, `1..=6` for light pawn..king and `9..=14`
//! for dark pawn..king. The promotion field only carries the kind, so it uses
//! the light codes. Bits 15, 16 and 24-31 are reserved.

use std::fmt;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

const FROM_SHIFT: u32 = 0;
const TO_SHIFT: u32 = 6;
const PROMOTION_SHIFT: u32 = 12;
const CAPTURED_SHIFT: u32 = 20;

const SQUARE_MASK: u32 = 0x3F;
const PROMOTION_MASK: u32 = 0x7;
const CAPTURED_MASK: u32 = 0xF;

pub const FLAG_PROMOTION: u32 = 1 << 17;
pub const FLAG_CAPTURE: u32 = 1 << 18;
pub const FLAG_CASTLE: u32 = 1 << 19;

pub const NO_PIECE_CODE: u32 = 0;
const DARK_CODE_BASE: u32 = 9;
const LIGHT_CODE_BASE: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
    is_promotion: bool,
    is_capture: bool,
    is_castle: bool,
    captured: Option<Piece>,
}

impl Move {
    pub const fn new(
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
        is_promotion: bool,
        is_capture: bool,
        is_castle: bool,
        captured: Option<Piece>,
    ) -> Self {
        Self {
            from,
            to,
            promotion,
            is_promotion,
            is_capture,
            is_castle,
            captured,
        }
    }

    /// Non-capturing, non-special move (includes double pawn pushes).
    #[inline]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Self::new(from, to, None, false, false, false, None)
    }

    /// Capture of `captured`; also used for en passant, where the captured
    /// pawn does not stand on `to`.
    #[inline]
    pub const fn capture(from: Square, to: Square, captured: Piece) -> Self {
        Self::new(from, to, None, false, true, false, Some(captured))
    }

    #[inline]
    pub const fn promotion(
        from: Square,
        to: Square,
        kind: PieceKind,
        captured: Option<Piece>,
    ) -> Self {
        Self::new(
            from,
            to,
            Some(kind),
            true,
            captured.is_some(),
            false,
            captured,
        )
    }

    /// King move of a castle; the rook hop is implied by the squares.
    #[inline]
    pub const fn castle(from: Square, to: Square) -> Self {
        Self::new(from, to, None, false, false, true, None)
    }

    #[inline]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(&self) -> Square {
        self.to
    }

    #[inline]
    pub const fn promotion_kind(&self) -> Option<PieceKind> {
        self.promotion
    }

    #[inline]
    pub const fn is_promotion(&self) -> bool {
        self.is_promotion
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.is_capture
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        self.is_castle
    }

    #[inline]
    pub const fn captured(&self) -> Option<Piece> {
        self.captured
    }

    pub fn encode(&self) -> u32 {
        let mut out = 0u32;
        out |= (self.from.index() as u32) << FROM_SHIFT;
        out |= (self.to.index() as u32) << TO_SHIFT;
        out |= self.promotion.map_or(NO_PIECE_CODE, promotion_code) << PROMOTION_SHIFT;
        if self.is_promotion {
            out |= FLAG_PROMOTION;
        }
        if self.is_capture {
            out |= FLAG_CAPTURE;
        }
        if self.is_castle {
            out |= FLAG_CASTLE;
        }
        out |= self.captured.map_or(NO_PIECE_CODE, piece_code) << CAPTURED_SHIFT;
        out
    }

    /// Unpacks `raw`. Unmapped piece codes are rejected; reserved bits are
    /// ignored.
    pub fn decode(raw: u32) -> ChessResult<Self> {
        let from = Square::from_index(((raw >> FROM_SHIFT) & SQUARE_MASK) as u8);
        let to = Square::from_index(((raw >> TO_SHIFT) & SQUARE_MASK) as u8);

        let promotion_bits = (raw >> PROMOTION_SHIFT) & PROMOTION_MASK;
        let promotion = match promotion_bits {
            NO_PIECE_CODE => None,
            code => Some(promotion_kind_from_code(code).ok_or_else(|| {
                ChessError::InvalidEncoding {
                    raw,
                    reason: format!("promotion code {code} is not a promotable piece"),
                }
            })?),
        };

        let captured_bits = (raw >> CAPTURED_SHIFT) & CAPTURED_MASK;
        let captured = match captured_bits {
            NO_PIECE_CODE => None,
            code => Some(piece_from_code(code).ok_or_else(|| ChessError::InvalidEncoding {
                raw,
                reason: format!("captured piece code {code} is unmapped"),
            })?),
        };

        Ok(Self {
            from,
            to,
            promotion,
            is_promotion: raw & FLAG_PROMOTION != 0,
            is_capture: raw & FLAG_CAPTURE != 0,
            is_castle: raw & FLAG_CASTLE != 0,
            captured,
        })
    }

    /// `e2e4`, or `e7e8q` for promotions.
    pub fn to_long_algebraic(&self) -> String {
        let mut out = format!("{}{}", self.from, self.to);
        if let Some(kind) = self.promotion {
            out.push(kind.to_char());
        }
        out
    }

    /// Field-by-field report of this move's packed encoding.
    pub fn describe(&self) -> String {
        self.report(self.encode())
    }

    /// Decodes `raw` and reports its fields under the value as given,
    /// reserved bits included.
    pub fn describe_raw(raw: u32) -> ChessResult<String> {
        Move::decode(raw).map(|mv| mv.report(raw))
    }

    fn report(&self, raw: u32) -> String {
        let piece_letter = |piece: Option<Piece>| piece.map_or('E', Piece::to_fen_char);
        format!(
            "Move: {}\n      {}\n     From: {:?}\n       To: {:?}\nPromotion: {}\nIsPromote: {}\nIsCapture: {}\n IsCastle: {}\nCapturedPiece: {}",
            raw,
            self.to_long_algebraic(),
            self.from.coordinates(),
            self.to.coordinates(),
            piece_letter(self.promotion.map(|kind| Piece::new(Color::Light, kind))),
            self.is_promotion,
            self.is_capture,
            self.is_castle,
            piece_letter(self.captured),
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_long_algebraic())
    }
}

#[inline]
pub fn encode_move(mv: &Move) -> u32 {
    mv.encode()
}

#[inline]
pub fn decode_move(raw: u32) -> ChessResult<Move> {
    Move::decode(raw)
}

#[inline]
pub const fn piece_code(piece: Piece) -> u32 {
    let base = match piece.color {
        Color::Light => LIGHT_CODE_BASE,
        Color::Dark => DARK_CODE_BASE,
    };
    base + piece.kind.index() as u32
}

pub const fn piece_from_code(code: u32) -> Option<Piece> {
    let (color, kind_index) = match code {
        1..=6 => (Color::Light, code - LIGHT_CODE_BASE),
        9..=14 => (Color::Dark, code - DARK_CODE_BASE),
        _ => return None,
    };
    let kind = match kind_index {
        0 => PieceKind::Pawn,
        1 => PieceKind::Knight,
        2 => PieceKind::Bishop,
        3 => PieceKind::Rook,
        4 => PieceKind::Queen,
        _ => PieceKind::King,
    };
    Some(Piece::new(color, kind))
}

#[inline]
const fn promotion_code(kind: PieceKind) -> u32 {
    LIGHT_CODE_BASE + kind.index() as u32
}

const fn promotion_kind_from_code(code: u32) -> Option<PieceKind> {
    match code {
        2 => Some(PieceKind::Knight),
        3 => Some(PieceKind::Bishop),
        4 => Some(PieceKind::Rook),
        5 => Some(PieceKind::Queen),
        _ => None,
    }
}
