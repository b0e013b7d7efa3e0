use crate::{
    board_location::BoardLocation,
    move_description::MoveDescription,
    move_generation::{bishop_moves::generate_bishop_moves, rook_moves::generate_rook_moves},
    piece_register::PieceRegister,
    piece_team::PieceTeam,
};

/// Generates queen destinations from `start`: the union of the rook's and
/// bishop's ray sets.
pub fn generate_queen_moves(
    register: &PieceRegister,
    start: BoardLocation,
    team: PieceTeam,
) -> Vec<MoveDescription> {
    let mut result = generate_rook_moves(register, start, team);
    result.extend(generate_bishop_moves(register, start, team));
    result
}
