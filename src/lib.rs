//! Crate root module declarations for the Quince Chess rules engine.
//!
//! This file exposes all top-level subsystems (board state, move generation,
//! check inspection, the action channel, and utility helpers) so binaries,
//! tests, and external tooling can import stable module paths.

pub mod board_location;
pub mod board_mask;
pub mod chess_board;
pub mod chess_errors;
pub mod generate_movements;
pub mod inspect_check;
pub mod move_description;
pub mod observer;
pub mod piece_class;
pub mod piece_record;
pub mod piece_register;
pub mod piece_team;
pub mod render_board;

pub mod move_generation {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod legal_move_shared;
    pub mod move_generator;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}
