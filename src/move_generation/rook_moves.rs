use crate::{
    board_location::BoardLocation,
    generate_movements::generate_rook_movement,
    move_description::MoveDescription,
    move_generation::legal_move_shared::push_walk_destination,
    piece_register::PieceRegister,
    piece_team::PieceTeam,
};

/// Generates rook destinations from `start`: four orthogonal rays walked one
/// square at a time until blocked.
pub fn generate_rook_moves(
    register: &PieceRegister,
    start: BoardLocation,
    team: PieceTeam,
) -> Vec<MoveDescription> {
    let mut result = Vec::new();
    // For all four directions
    for direction in 0..4 {
        // For all distances
        'inner: for distance in 1..8 {
            if let Ok(x) = generate_rook_movement(start, direction, distance) {
                if push_walk_destination(register, team, start, x, &mut result) {
                    break 'inner;
                }
            } else {
                break 'inner;
            }
        }
    }
    result
}
