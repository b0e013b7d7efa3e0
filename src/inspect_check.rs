//! Attacked-square inspection.
//!
//! Answers "which squares does a team currently attack" as the union of that
//! team's generated destinations with castling and en passant excluded:
//! kings contribute their raw offsets only (so the computation never recurses
//! into check evaluation), and en-passant capture squares are capture
//! bookkeeping, not attacks.
//!
//! The mask is derived state. The board caches it per ply and invalidates it
//! on every grid mutation; nothing here mutates the register.

use crate::{
    board_location::BoardLocation,
    board_mask::{location_mask, mask_contains, BoardMask},
    move_generation::move_generator::generate_piece_moves,
    piece_register::PieceRegister,
    piece_team::PieceTeam,
};

/// Computes the mask of every square attacked by `attacking_team` against the
/// current position.
pub fn generate_attack_mask(register: &PieceRegister, attacking_team: PieceTeam) -> BoardMask {
    let mut mask: BoardMask = 0;
    for piece in register.iter_team(attacking_team) {
        for m in generate_piece_moves(register, piece, None, None) {
            mask |= location_mask(m.vector.stop);
        }
    }
    mask
}

/// Returns true iff `location` is covered by a previously computed attack
/// mask.
pub fn is_location_attacked(mask: BoardMask, location: BoardLocation) -> bool {
    mask_contains(mask, location)
}
