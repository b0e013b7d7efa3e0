//! Collision sorting shared by the per-piece move generators.

use crate::{
    board_location::BoardLocation,
    move_description::MoveDescription,
    piece_register::PieceRegister,
    piece_team::PieceTeam,
};

/// The team occupying a square, if any.
pub fn occupant_team(register: &PieceRegister, x: BoardLocation) -> Option<PieceTeam> {
    register.view(x).map(|piece| piece.team)
}

/// Sorts a walked-to square for a sliding piece of `team` starting at `start`.
///
/// An empty square is a destination and the walk continues; an enemy square
/// is a capture destination and the walk stops; a friendly square stops the
/// walk without a destination.
///
/// # Returns
///
/// * `bool` - true when the walk along this ray must stop.
pub fn push_walk_destination(
    register: &PieceRegister,
    team: PieceTeam,
    start: BoardLocation,
    destination: BoardLocation,
    out: &mut Vec<MoveDescription>,
) -> bool {
    match occupant_team(register, destination) {
        None => {
            out.push(MoveDescription::regular(start, destination));
            false
        }
        Some(occupant) if occupant != team => {
            out.push(MoveDescription::regular(start, destination));
            true
        }
        Some(_) => true,
    }
}

/// Sorts a fixed-offset candidate square: legal iff not friendly-occupied.
pub fn push_offset_destination(
    register: &PieceRegister,
    team: PieceTeam,
    start: BoardLocation,
    destination: BoardLocation,
    out: &mut Vec<MoveDescription>,
) {
    if occupant_team(register, destination) != Some(team) {
        out.push(MoveDescription::regular(start, destination));
    }
}
