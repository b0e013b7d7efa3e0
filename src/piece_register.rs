use crate::{
    board_location::BoardLocation,
    board_mask::{location_mask, BoardMask},
    chess_errors::ChessErrors,
    piece_class::PieceClass,
    piece_record::PieceRecord,
    piece_team::PieceTeam,
};

/// The 8x8 grid of optional pieces.
///
/// Owns every piece placed on it; a captured piece is dropped entirely. At
/// most one piece may occupy a square, and a stored record's `location`
/// always names the slot holding it.
#[derive(Default, Clone, Debug)]
pub struct PieceRegister {
    buffer: [[Option<PieceRecord>; 8]; 8],
}

impl PieceRegister {
    pub fn new() -> Self {
        PieceRegister::default()
    }

    /// Views the piece at a location, if any.
    pub fn view(&self, x: BoardLocation) -> Option<&PieceRecord> {
        self.buffer[x.0 as usize][x.1 as usize].as_ref()
    }

    fn at(&mut self, x: BoardLocation) -> &mut Option<PieceRecord> {
        &mut self.buffer[x.0 as usize][x.1 as usize]
    }

    /// Adds a piece record at its own recorded location.
    ///
    /// # Returns
    ///
    /// * `Err(ChessErrors::BoardLocationOccupied)` if the slot already holds
    ///   a piece.
    pub fn add_piece_record(&mut self, x: PieceRecord) -> Result<(), ChessErrors> {
        let slot = self.at(x.location);
        if slot.is_some() {
            return Err(ChessErrors::BoardLocationOccupied(x.location));
        }
        *slot = Some(x);
        Ok(())
    }

    /// Removes and returns the piece at a location, if any.
    pub fn remove_piece_record(&mut self, x: BoardLocation) -> Option<PieceRecord> {
        self.at(x).take()
    }

    /// Relocates the piece at `start` to `stop`, capturing by replacement.
    ///
    /// Updates the record's stored location and marks it as moved. Whatever
    /// occupied `stop` is dropped and returned.
    ///
    /// # Returns
    ///
    /// * `Ok(Option<PieceRecord>)` - The captured piece, if any.
    /// * `Err(ChessErrors::TryToViewOrEditEmptySquare)` if `start` is empty.
    pub fn relocate_piece(
        &mut self,
        start: BoardLocation,
        stop: BoardLocation,
    ) -> Result<Option<PieceRecord>, ChessErrors> {
        let mut piece = self
            .at(start)
            .take()
            .ok_or(ChessErrors::TryToViewOrEditEmptySquare(start))?;
        piece.location = stop;
        piece.has_moved = true;
        Ok(self.at(stop).replace(piece))
    }

    /// Upgrades the pawn at a location to a new class in place.
    ///
    /// The record keeps its team, location, and has-moved flag.
    pub fn promote_piece(
        &mut self,
        x: BoardLocation,
        class: PieceClass,
    ) -> Result<(), ChessErrors> {
        if !class.is_promotion_target() {
            return Err(ChessErrors::InvalidPromotionTarget(class));
        }
        let piece = self
            .at(x)
            .as_mut()
            .ok_or(ChessErrors::TryToViewOrEditEmptySquare(x))?;
        if !matches!(piece.class, PieceClass::Pawn) {
            return Err(ChessErrors::CannotPromoteClass(x, piece.class));
        }
        piece.class = class;
        Ok(())
    }

    /// Iterates every piece on the board.
    pub fn iter_pieces(&self) -> impl Iterator<Item = &PieceRecord> {
        self.buffer.iter().flatten().filter_map(|slot| slot.as_ref())
    }

    /// Iterates every piece belonging to a team.
    pub fn iter_team(&self, team: PieceTeam) -> impl Iterator<Item = &PieceRecord> {
        self.iter_pieces().filter(move |piece| piece.team == team)
    }

    /// Occupancy mask of one team's pieces.
    pub fn generate_mask_team(&self, team: PieceTeam) -> BoardMask {
        let mut result: BoardMask = 0;
        for piece in self.iter_team(team) {
            result |= location_mask(piece.location);
        }
        result
    }

    /// Occupancy mask of every piece on the board.
    pub fn generate_mask_all_pieces(&self) -> BoardMask {
        self.generate_mask_team(PieceTeam::Light) | self.generate_mask_team(PieceTeam::Dark)
    }
}
