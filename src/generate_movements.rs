//! Single-square movement generators.
//!
//! Pure geometry over board coordinates: each function produces one candidate
//! destination for a piece kind, direction index, and (for sliders) distance,
//! or an out-of-bounds error. Occupancy is not consulted here; collision
//! handling belongs to the move generators built on top.

use crate::{
    board_location::{move_board_location, BoardLocation},
    chess_errors::ChessErrors,
    piece_team::PieceTeam,
};

/// Generates the movement for a pawn that is single stepping
pub fn generate_pawn_single_step_movement(
    board_location: BoardLocation,
    team: PieceTeam,
) -> Result<BoardLocation, ChessErrors> {
    move_board_location(board_location, team.forward_row_direction(), 0)
}

/// Generates the movement for a pawn that is double stepping
pub fn generate_pawn_double_step_movement(
    board_location: BoardLocation,
    team: PieceTeam,
) -> Result<BoardLocation, ChessErrors> {
    move_board_location(board_location, 2 * team.forward_row_direction(), 0)
}

/// Generates the movement for a pawn that is capturing toward `d_col`
/// (-1 left, +1 right)
pub fn generate_pawn_capture_movement(
    board_location: BoardLocation,
    team: PieceTeam,
    d_col: i8,
) -> Result<BoardLocation, ChessErrors> {
    move_board_location(board_location, team.forward_row_direction(), d_col)
}

/// Generates the movement for a knight
/// direction is 0 through 7 moving counter-clockwise from east-north-east
pub fn generate_knight_movement(
    board_location: BoardLocation,
    direction: u8,
) -> Result<BoardLocation, ChessErrors> {
    let (d_row, d_col) = match direction {
        0 => (-1, 2),
        1 => (-2, 1),
        2 => (-2, -1),
        3 => (-1, -2),
        4 => (1, -2),
        5 => (2, -1),
        6 => (2, 1),
        7 => (1, 2),
        _ => return Err(ChessErrors::InvalidDirectionSelected(direction)),
    };
    move_board_location(board_location, d_row, d_col)
}

/// Generates the movement for a bishop
/// direction is 0 through 3 moving counter-clockwise from north east
/// distance is the number of squares along the direction
pub fn generate_bishop_movement(
    board_location: BoardLocation,
    direction: u8,
    distance: u8,
) -> Result<BoardLocation, ChessErrors> {
    let (d_row, d_col) = match direction {
        0 => (-1, 1),
        1 => (-1, -1),
        2 => (1, -1),
        3 => (1, 1),
        _ => return Err(ChessErrors::InvalidDirectionSelected(direction)),
    };
    let magnitude = distance as i8;
    move_board_location(board_location, d_row * magnitude, d_col * magnitude)
}

/// Generates the movement for a rook
/// direction is 0 through 3 moving counter-clockwise from east
/// distance is the number of squares along the direction
pub fn generate_rook_movement(
    board_location: BoardLocation,
    direction: u8,
    distance: u8,
) -> Result<BoardLocation, ChessErrors> {
    let (d_row, d_col) = match direction {
        0 => (0, 1),
        1 => (-1, 0),
        2 => (0, -1),
        3 => (1, 0),
        _ => return Err(ChessErrors::InvalidDirectionSelected(direction)),
    };
    let magnitude = distance as i8;
    move_board_location(board_location, d_row * magnitude, d_col * magnitude)
}

/// Generates the movement for a king
/// direction is 0 through 7 moving counter-clockwise from east
pub fn generate_king_movement(
    board_location: BoardLocation,
    direction: u8,
) -> Result<BoardLocation, ChessErrors> {
    let (d_row, d_col) = match direction {
        0 => (0, 1),
        1 => (-1, 1),
        2 => (-1, 0),
        3 => (-1, -1),
        4 => (0, -1),
        5 => (1, -1),
        6 => (1, 0),
        7 => (1, 1),
        _ => return Err(ChessErrors::InvalidDirectionSelected(direction)),
    };
    move_board_location(board_location, d_row, d_col)
}
