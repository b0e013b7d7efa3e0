use crate::{board_location::BoardLocation, piece_class::PieceClass, piece_team::PieceTeam};

/// Represents a chess piece with its class, team, position, and move history
/// flag. Used to store information about a piece on the board.
///
/// Invariant: a record's `location` always matches the register slot that
/// holds it; the register is the only code that relocates records.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PieceRecord {
    /// The class (type) of the piece (e.g., pawn, knight).
    pub class: PieceClass,
    /// Piece team
    pub team: PieceTeam,
    /// Piece location
    pub location: BoardLocation,
    /// Whether the piece has moved since it was placed.
    ///
    /// Drives pawn double steps and castling rights; set by the register on
    /// relocation, never cleared.
    pub has_moved: bool,
}

impl PieceRecord {
    /// A freshly placed piece that has not moved yet.
    pub fn new(class: PieceClass, team: PieceTeam, location: BoardLocation) -> Self {
        PieceRecord {
            class,
            team,
            location,
            has_moved: false,
        }
    }

    /// True if `other` belongs to the opposing team.
    pub fn is_enemy_of(&self, other: &PieceRecord) -> bool {
        self.team != other.team
    }
}
