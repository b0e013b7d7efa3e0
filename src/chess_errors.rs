//! Errors used throughout the rules engine.
//!
//! This module defines the canonical error type returned by the board,
//! geometry helpers, and the piece register. The enum `ChessErrors` is used as
//! the single error type across the crate to simplify propagation and
//! matching. Each variant carries contextual information where appropriate.
//!
//! Move legality is deliberately *not* an error: an illegal move attempt is a
//! rejected-but-expected outcome and is reported as `false` / an empty move
//! list by the board. `ChessErrors` covers the remaining fallible surface
//! (off-board coordinates, occupied squares during setup, operations on empty
//! squares, and invalid direction indices passed to movement generators).

use crate::board_location::BoardLocation;
use crate::piece_class::PieceClass;

/// Unified error type for the rules engine.
///
/// Each variant corresponds to a specific, identifiable failure mode that can
/// occur while placing pieces, stepping coordinates, or editing the register.
/// Variants include contextual payloads so that callers can log or display
/// precise diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChessErrors {
    /// Attempted to step from `BoardLocation` by the delta `(d_row, d_col)`
    /// which would leave the board.
    ///
    /// Payload: (origin_location, d_row, d_col)
    TriedToMoveOutOfBounds(BoardLocation, i8, i8),

    /// An invalid direction index was selected for a movement generator that
    /// expects a small set of direction identifiers.
    ///
    /// Payload: the invalid index value.
    InvalidDirectionSelected(u8),

    /// Attempted to add a piece to a square that already holds one.
    ///
    /// Payload: the occupied square.
    BoardLocationOccupied(BoardLocation),

    /// Attempted to view or edit a square that is empty (no piece present).
    ///
    /// Payload: the empty square's location.
    TryToViewOrEditEmptySquare(BoardLocation),

    /// Attempted to promote a piece that is not a pawn.
    ///
    /// Payload: (location, class actually found there)
    CannotPromoteClass(BoardLocation, PieceClass),

    /// Attempted to promote a pawn into a class that is not a legal
    /// promotion target (pawn and king are excluded).
    ///
    /// Payload: the requested class.
    InvalidPromotionTarget(PieceClass),
}

impl std::fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChessErrors::TriedToMoveOutOfBounds(origin, d_row, d_col) => {
                write!(
                    f,
                    "stepping {:?} by ({},{}) leaves the board",
                    origin, d_row, d_col
                )
            }
            ChessErrors::InvalidDirectionSelected(direction) => {
                write!(f, "invalid direction index {}", direction)
            }
            ChessErrors::BoardLocationOccupied(location) => {
                write!(f, "square {:?} is already occupied", location)
            }
            ChessErrors::TryToViewOrEditEmptySquare(location) => {
                write!(f, "square {:?} is empty", location)
            }
            ChessErrors::CannotPromoteClass(location, class) => {
                write!(f, "cannot promote {:?} at {:?}", class, location)
            }
            ChessErrors::InvalidPromotionTarget(class) => {
                write!(f, "{:?} is not a legal promotion target", class)
            }
        }
    }
}

impl std::error::Error for ChessErrors {}
