//! Core incremental board state representation.
//!
//! `GameState` stores one bitboard per colored piece, occupancy caches that
//! are kept in step with every mutation, and the side/rights/clock fields
//! needed for legal move generation and exact make/unmake.

use std::fmt;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_game_state::render_game_state;

/// Mutable position. Clone it to hand a position to another thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // [color][piece_kind]
    pub(crate) pieces: [[Bitboard; 6]; 2],

    pub(crate) occupancy_by_color: [Bitboard; 2],
    pub(crate) occupancy_all: Bitboard,

    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_square: Option<Square>,

    pub(crate) halfmove_clock: u16,
    pub(crate) fullmove_number: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupancy_by_color: [Bitboard::EMPTY; 2],
            occupancy_all: Bitboard::EMPTY,

            side_to_move: Color::Light,
            castling_rights: 0,
            en_passant_square: None,

            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl GameState {
    /// Empty board, light to move, no rights.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting position.
    pub fn new_game() -> Self {
        let mut game_state = Self::new_empty();
        for (file, kind) in [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ]
        .into_iter()
        .enumerate()
        {
            let file = file as u8;
            game_state.add_piece(Color::Light, kind, Square::from_index(file));
            game_state.add_piece(Color::Light, PieceKind::Pawn, Square::from_index(8 + file));
            game_state.add_piece(Color::Dark, PieceKind::Pawn, Square::from_index(48 + file));
            game_state.add_piece(Color::Dark, kind, Square::from_index(56 + file));
        }
        game_state.castling_rights = CASTLE_ALL;
        game_state
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    // --- Accessors ---

    #[inline]
    pub fn pieces(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.pieces[color.index()][kind.index()]
    }

    #[inline]
    pub fn occupancy(&self, color: Color) -> Bitboard {
        self.occupancy_by_color[color.index()]
    }

    #[inline]
    pub fn occupancy_all(&self) -> Bitboard {
        self.occupancy_all
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Piece standing on `square`, if any.
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        if !self.occupancy_all.contains(square) {
            return None;
        }
        let color = if self.occupancy_by_color[Color::Light.index()].contains(square) {
            Color::Light
        } else {
            Color::Dark
        };
        self.piece_kind_on(color, square)
            .map(|kind| Piece::new(color, kind))
    }

    /// Kind of the `color` piece on `square`, if any.
    #[inline]
    pub fn piece_kind_on(&self, color: Color, square: Square) -> Option<PieceKind> {
        ALL_PIECE_KINDS
            .into_iter()
            .find(|kind| self.pieces[color.index()][kind.index()].contains(square))
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces[color.index()][PieceKind::King.index()].lsb()
    }

    // --- Setup mutators ---

    /// Places `piece` on an empty square.
    pub fn put_piece(&mut self, piece: Piece, square: Square) -> ChessResult<()> {
        if let Some(existing) = self.piece_on(square) {
            return Err(ChessError::InconsistentBoardState(format!(
                "cannot place {piece:?} on {square}: occupied by {existing:?}"
            )));
        }
        self.add_piece(piece.color, piece.kind, square);
        Ok(())
    }

    /// Removes and returns the piece on `square`.
    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        let piece = self.piece_on(square)?;
        self.take_piece(piece.color, piece.kind, square);
        Some(piece)
    }

    #[inline]
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    pub fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.castling_rights = rights & CASTLE_ALL;
    }

    #[inline]
    pub fn set_en_passant_square(&mut self, square: Option<Square>) {
        self.en_passant_square = square;
    }

    #[inline]
    pub fn set_halfmove_clock(&mut self, clock: u16) {
        self.halfmove_clock = clock;
    }

    #[inline]
    pub fn set_fullmove_number(&mut self, number: u16) {
        self.fullmove_number = number;
    }

    /// Diagnostic check that no two piece bitboards share a square and the
    /// occupancy caches match the piece bitboards.
    pub fn check_consistency(&self) -> ChessResult<()> {
        let mut seen = Bitboard::EMPTY;
        let mut by_color = [Bitboard::EMPTY; 2];

        for color in [Color::Light, Color::Dark] {
            for kind in ALL_PIECE_KINDS {
                let bb = self.pieces[color.index()][kind.index()];
                let overlap = seen & bb;
                if let Some(square) = overlap.lsb() {
                    return Err(ChessError::InconsistentBoardState(format!(
                        "{color:?} {kind:?} overlaps another piece on {square}"
                    )));
                }
                seen |= bb;
                by_color[color.index()] |= bb;
            }
        }

        if by_color != self.occupancy_by_color {
            return Err(ChessError::InconsistentBoardState(
                "color occupancy cache does not match piece bitboards".to_owned(),
            ));
        }
        if seen != self.occupancy_all {
            return Err(ChessError::InconsistentBoardState(
                "total occupancy cache does not match piece bitboards".to_owned(),
            ));
        }

        Ok(())
    }

    // --- Incremental bit twiddling used by make/unmake ---

    #[inline]
    pub(crate) fn add_piece(&mut self, color: Color, kind: PieceKind, square: Square) {
        let mask = square.bitboard();
        self.pieces[color.index()][kind.index()] |= mask;
        self.occupancy_by_color[color.index()] |= mask;
        self.occupancy_all |= mask;
    }

    #[inline]
    pub(crate) fn take_piece(&mut self, color: Color, kind: PieceKind, square: Square) {
        let mask = !square.bitboard();
        self.pieces[color.index()][kind.index()] &= mask;
        self.occupancy_by_color[color.index()] &= mask;
        self.occupancy_all &= mask;
    }

    #[inline]
    pub(crate) fn shift_piece(&mut self, color: Color, kind: PieceKind, from: Square, to: Square) {
        let mask = from.bitboard() | to.bitboard();
        self.pieces[color.index()][kind.index()] ^= mask;
        self.occupancy_by_color[color.index()] ^= mask;
        self.occupancy_all ^= mask;
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_game_state(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn new_game_matches_starting_fen() {
        let built = GameState::new_game();
        let parsed = GameState::from_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(built, parsed);
        assert_eq!(built.occupancy_all().count(), 32);
        assert!(built.check_consistency().is_ok());
    }

    #[test]
    fn piece_on_reports_color_and_kind() {
        let game = GameState::new_game();
        assert_eq!(
            game.piece_on(sq("e1")),
            Some(Piece::new(Color::Light, PieceKind::King))
        );
        assert_eq!(
            game.piece_on(sq("d8")),
            Some(Piece::new(Color::Dark, PieceKind::Queen))
        );
        assert_eq!(game.piece_on(sq("e4")), None);
        assert_eq!(game.king_square(Color::Dark), Some(sq("e8")));
    }

    #[test]
    fn put_piece_refuses_occupied_square() {
        let mut game = GameState::new_empty();
        let rook = Piece::new(Color::Dark, PieceKind::Rook);
        game.put_piece(rook, sq("a8")).expect("empty square accepts a piece");
        assert!(matches!(
            game.put_piece(rook, sq("a8")),
            Err(ChessError::InconsistentBoardState(_))
        ));
        assert_eq!(game.remove_piece(sq("a8")), Some(rook));
        assert_eq!(game, GameState::new_empty());
    }

    #[test]
    fn consistency_check_detects_overlap_and_stale_cache() {
        let mut game = GameState::new_game();
        game.pieces[Color::Dark.index()][PieceKind::Queen.index()] |= sq("e2").bitboard();
        assert!(matches!(
            game.check_consistency(),
            Err(ChessError::InconsistentBoardState(_))
        ));

        let mut stale = GameState::new_game();
        stale.pieces[Color::Light.index()][PieceKind::Pawn.index()].clear(sq("a2"));
        assert!(stale.check_consistency().is_err());
        stale.pieces[Color::Light.index()][PieceKind::Pawn.index()].set(sq("a2"));
        assert!(stale.check_consistency().is_ok());
    }
}
