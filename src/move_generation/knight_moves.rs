use crate::{
    board_location::BoardLocation,
    generate_movements::generate_knight_movement,
    move_description::MoveDescription,
    move_generation::legal_move_shared::push_offset_destination,
    piece_register::PieceRegister,
    piece_team::PieceTeam,
};

/// Generates knight destinations from `start`: the eight L-shaped offsets,
/// filtered to in-bounds squares not occupied by a friendly piece.
pub fn generate_knight_moves(
    register: &PieceRegister,
    start: BoardLocation,
    team: PieceTeam,
) -> Vec<MoveDescription> {
    let mut result = Vec::new();
    for direction in 0..8 {
        if let Ok(x) = generate_knight_movement(start, direction) {
            push_offset_destination(register, team, start, x, &mut result);
        }
    }
    result
}
