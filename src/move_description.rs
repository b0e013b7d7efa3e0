use crate::board_location::BoardLocation;

/// Used for describing a relocation from one square to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveVector {
    pub start: BoardLocation,
    pub stop: BoardLocation,
}

impl MoveVector {
    pub fn new(start: BoardLocation, stop: BoardLocation) -> Self {
        MoveVector { start, stop }
    }
}

/// A side effect attached to a move beyond the primary relocation.
///
/// At most one action accompanies a move: promotion cannot coincide with
/// castling or en passant by the rules of chess.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveAction {
    /// Castling: the rook's own relocation, committed together with the
    /// king's move.
    AuxiliaryMove(MoveVector),
    /// En passant: the captured pawn's square, which differs from the move's
    /// destination (the victim sits one rank behind it).
    Remove(BoardLocation),
    /// Promotion: the destination square whose occupant must be upgraded.
    Promote(BoardLocation),
}

/// The bookkeeping a pawn double step leaves behind, valid for exactly one
/// ply: the pawn's new square and the square a capturing pawn must move to
/// (one rank behind it, on the mover's side).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnPassantTarget {
    pub pawn_location: BoardLocation,
    pub capture_location: BoardLocation,
}

/// A proposed or committed move: the primary relocation plus an optional
/// side effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveDescription {
    pub vector: MoveVector,
    pub action: Option<MoveAction>,
}

impl MoveDescription {
    /// A plain relocation with no side effect.
    pub fn regular(start: BoardLocation, stop: BoardLocation) -> Self {
        MoveDescription {
            vector: MoveVector::new(start, stop),
            action: None,
        }
    }

    pub fn with_action(start: BoardLocation, stop: BoardLocation, action: MoveAction) -> Self {
        MoveDescription {
            vector: MoveVector::new(start, stop),
            action: Some(action),
        }
    }
}
