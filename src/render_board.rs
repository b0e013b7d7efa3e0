//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view from the piece register for debugging,
//! tests, and diagnostics in text environments.

use crate::{chess_board::ChessBoard, piece_class::PieceClass, piece_team::PieceTeam};

/// Render the board to a Unicode string for terminal output.
///
/// Row 0 is printed on top as rank 8; column 0 is file a.
pub fn render_board(board: &ChessBoard) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8 {
        let rank_char = char::from(b'8' - row as u8);
        out.push(rank_char);
        out.push(' ');

        for col in 0..8 {
            match board.view_piece((row, col)) {
                Some(piece) => out.push(piece_to_unicode(piece.team, piece.class)),
                None => out.push('·'),
            }
            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_char);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(team: PieceTeam, class: PieceClass) -> char {
    match (team, class) {
        (PieceTeam::Light, PieceClass::Pawn) => '♙',
        (PieceTeam::Light, PieceClass::Knight) => '♘',
        (PieceTeam::Light, PieceClass::Bishop) => '♗',
        (PieceTeam::Light, PieceClass::Rook) => '♖',
        (PieceTeam::Light, PieceClass::Queen) => '♕',
        (PieceTeam::Light, PieceClass::King) => '♔',
        (PieceTeam::Dark, PieceClass::Pawn) => '♟',
        (PieceTeam::Dark, PieceClass::Knight) => '♞',
        (PieceTeam::Dark, PieceClass::Bishop) => '♝',
        (PieceTeam::Dark, PieceClass::Rook) => '♜',
        (PieceTeam::Dark, PieceClass::Queen) => '♛',
        (PieceTeam::Dark, PieceClass::King) => '♚',
    }
}
