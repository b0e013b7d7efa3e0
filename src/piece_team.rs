/// Represents the team (color) of a chess piece.
/// Used to distinguish between dark (black) and light (white) pieces.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceTeam {
    /// The dark (black) side.
    Dark,
    /// The light (white) side.
    Light,
}

impl PieceTeam {
    /// The opposing team.
    pub fn opposite(self) -> Self {
        match self {
            PieceTeam::Dark => PieceTeam::Light,
            PieceTeam::Light => PieceTeam::Dark,
        }
    }

    /// The row delta of this team's forward direction.
    ///
    /// Light advances toward row 0, Dark toward row 7.
    pub fn forward_row_direction(self) -> i8 {
        match self {
            PieceTeam::Dark => 1,
            PieceTeam::Light => -1,
        }
    }

    /// The row this team's pawns promote on.
    pub fn promotion_row(self) -> i8 {
        match self {
            PieceTeam::Dark => 7,
            PieceTeam::Light => 0,
        }
    }

    /// The row this team's king and rooks start on.
    pub fn back_row(self) -> i8 {
        match self {
            PieceTeam::Dark => 0,
            PieceTeam::Light => 7,
        }
    }
}
