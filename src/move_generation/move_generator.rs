use crate::{
    board_mask::BoardMask,
    move_description::{EnPassantTarget, MoveDescription},
    move_generation::{
        bishop_moves::generate_bishop_moves,
        king_moves::{generate_king_moves, generate_king_offset_moves},
        knight_moves::generate_knight_moves,
        pawn_moves::generate_pawn_moves,
        queen_moves::generate_queen_moves,
        rook_moves::generate_rook_moves,
    },
    piece_class::PieceClass,
    piece_record::PieceRecord,
    piece_register::PieceRegister,
};

/// Generates the legal destinations for one piece against the current board
/// snapshot, dispatching on its class.
///
/// `enemy_attacks` carries the attack mask of the opposing team when the
/// caller wants the king's full move set (check filtering plus castling).
/// Passing `None` restricts the king to its raw offsets; the attack-mask
/// computation uses that form so that enumerating the enemy king's moves
/// never recurses back into check evaluation.
pub fn generate_piece_moves(
    register: &PieceRegister,
    piece: &PieceRecord,
    en_passant: Option<&EnPassantTarget>,
    enemy_attacks: Option<BoardMask>,
) -> Vec<MoveDescription> {
    match piece.class {
        PieceClass::Pawn => generate_pawn_moves(register, piece, en_passant),
        PieceClass::Knight => generate_knight_moves(register, piece.location, piece.team),
        PieceClass::Bishop => generate_bishop_moves(register, piece.location, piece.team),
        PieceClass::Rook => generate_rook_moves(register, piece.location, piece.team),
        PieceClass::Queen => generate_queen_moves(register, piece.location, piece.team),
        PieceClass::King => match enemy_attacks {
            Some(attacks) => generate_king_moves(register, piece, attacks),
            None => generate_king_offset_moves(register, piece),
        },
    }
}
