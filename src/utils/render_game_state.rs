//! Terminal-oriented Unicode board renderer.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Renders the board with rank 8 at the top and file labels above and below.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            let piece = Square::from_file_rank(file, rank).and_then(|sq| game_state.piece_on(sq));
            out.push(piece.map_or('·', piece_to_unicode));
            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}
