/// Represents the type (class) of a chess piece.
/// Used to distinguish between pawns, knights, bishops, rooks, queens, and kings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceClass {
    /// A pawn piece.
    Pawn,
    /// A knight piece.
    Knight,
    /// A bishop piece.
    Bishop,
    /// A rook piece.
    Rook,
    /// A queen piece.
    Queen,
    /// A king piece.
    King,
}

impl PieceClass {
    /// True for the classes a pawn may promote into.
    pub fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceClass::Knight | PieceClass::Bishop | PieceClass::Rook | PieceClass::Queen
        )
    }
}
