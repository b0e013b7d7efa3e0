//! The board-state container and turn-commit protocol.
//!
//! `ChessBoard` owns the piece grid, the side-to-move flag, the single-ply
//! en-passant target, the per-instance attacked-square cache, and the action
//! channel toward the presentation collaborator. All mutation funnels through
//! the commit protocol in `attempt_move`; rejected attempts leave every piece
//! of state untouched.
//!
//! The engine is single-threaded and non-reentrant: subscribers are notified
//! synchronously after a commit and must not trigger another commit from
//! within their handler.

use std::cell::Cell;

use crate::{
    board_location::BoardLocation,
    board_mask::BoardMask,
    chess_errors::ChessErrors,
    inspect_check::generate_attack_mask,
    move_description::{EnPassantTarget, MoveAction, MoveDescription},
    move_generation::move_generator::generate_piece_moves,
    observer::{Subject, SubscriberId},
    piece_class::PieceClass,
    piece_record::PieceRecord,
    piece_register::PieceRegister,
    piece_team::PieceTeam,
};

/// The classes of the standard back line, column 0 through 7.
const BACK_LINE: [PieceClass; 8] = [
    PieceClass::Rook,
    PieceClass::Knight,
    PieceClass::Bishop,
    PieceClass::Queen,
    PieceClass::King,
    PieceClass::Bishop,
    PieceClass::Knight,
    PieceClass::Rook,
];

pub struct ChessBoard {
    piece_register: PieceRegister,
    light_to_move: bool,
    en_passant: Option<EnPassantTarget>,
    /// Lazily computed attacked-square set, keyed by the attacking team.
    /// Derived state only; cleared on every grid mutation.
    attack_cache: Cell<Option<(PieceTeam, BoardMask)>>,
    action_subject: Subject,
}

impl Default for ChessBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessBoard {
    /// An empty board with Light to move.
    pub fn new() -> Self {
        ChessBoard {
            piece_register: PieceRegister::new(),
            light_to_move: true,
            en_passant: None,
            attack_cache: Cell::new(None),
            action_subject: Subject::new(),
        }
    }

    /// A board holding the standard 32-piece starting arrangement.
    pub fn with_standard_arrangement() -> Self {
        let mut board = ChessBoard::new();
        for (col, class) in BACK_LINE.into_iter().enumerate() {
            let col = col as i8;
            for team in [PieceTeam::Dark, PieceTeam::Light] {
                let back_row = team.back_row();
                let pawn_row = back_row + team.forward_row_direction();
                board
                    .insert_piece(PieceRecord::new(class, team, (back_row, col)))
                    .expect("standard back line placement must not collide");
                board
                    .insert_piece(PieceRecord::new(PieceClass::Pawn, team, (pawn_row, col)))
                    .expect("standard pawn placement must not collide");
            }
        }
        board
    }

    /// The side to move.
    pub fn team_to_move(&self) -> PieceTeam {
        if self.light_to_move {
            PieceTeam::Light
        } else {
            PieceTeam::Dark
        }
    }

    /// The active en-passant target, if the previous committed move was a
    /// pawn double step.
    pub fn en_passant_target(&self) -> Option<EnPassantTarget> {
        self.en_passant
    }

    /// Views the piece at a location, if any.
    pub fn view_piece(&self, x: BoardLocation) -> Option<&PieceRecord> {
        self.piece_register.view(x)
    }

    /// Places a piece during setup (or any later insertion the collaborator
    /// wants). At most one piece per square.
    pub fn insert_piece(&mut self, piece: PieceRecord) -> Result<(), ChessErrors> {
        self.piece_register.add_piece_record(piece)?;
        self.invalidate_attack_cache();
        Ok(())
    }

    /// Removes and returns the piece at a location, if any.
    pub fn remove_piece(&mut self, x: BoardLocation) -> Option<PieceRecord> {
        let removed = self.piece_register.remove_piece_record(x);
        if removed.is_some() {
            self.invalidate_attack_cache();
        }
        removed
    }

    /// Completes a notified promotion by upgrading the pawn at `x` to the
    /// collaborator's chosen class.
    pub fn promote_piece(
        &mut self,
        x: BoardLocation,
        class: PieceClass,
    ) -> Result<(), ChessErrors> {
        self.piece_register.promote_piece(x, class)?;
        self.invalidate_attack_cache();
        Ok(())
    }

    /// Registers a handler invoked with each committed move.
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriberId
    where
        F: FnMut(&MoveDescription) + 'static,
    {
        self.action_subject.attach(handler)
    }

    /// Removes a previously registered handler.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.action_subject.detach(id)
    }

    /// Enumerates the legal moves for the piece at `x`, in generation order.
    ///
    /// Empty when the square is empty, when the piece belongs to the idle
    /// side, or when the piece has no legal destination.
    pub fn legal_moves_at(&self, x: BoardLocation) -> Vec<MoveDescription> {
        match self.piece_register.view(x) {
            Some(piece) if piece.team == self.team_to_move() => self.generate_for(piece),
            _ => Vec::new(),
        }
    }

    /// Attempts the move `start -> stop` for the side to move.
    ///
    /// On success the generated move (including any attached action) is
    /// committed as one transition: the turn flag flips, the en-passant
    /// target is recomputed, pieces are relocated/removed on the grid, and
    /// subscribers are notified with the committed description. On rejection
    /// nothing changes and `false` is returned.
    pub fn attempt_move(&mut self, start: BoardLocation, stop: BoardLocation) -> bool {
        let piece = match self.piece_register.view(start) {
            Some(piece) if piece.team == self.team_to_move() => *piece,
            _ => return false,
        };

        let chosen = match self
            .generate_for(&piece)
            .into_iter()
            .find(|m| m.vector.stop == stop)
        {
            Some(m) => m,
            None => return false,
        };

        // The register operations below only fail on violated grid
        // invariants; the generated move guarantees they hold.
        if self.commit(&piece, &chosen).is_err() {
            return false;
        }
        self.action_subject.notify(&chosen);
        true
    }

    /// Applies a validated move: turn flag, en-passant target, primary
    /// relocation, and the action's grid side effects, as one commit.
    fn commit(&mut self, piece: &PieceRecord, chosen: &MoveDescription) -> Result<(), ChessErrors> {
        let vector = chosen.vector;

        self.light_to_move = !self.light_to_move;
        // Derived from the pre-move state: the double-step window opens for
        // exactly one ply and closes on any other commit.
        self.en_passant = next_en_passant_target(piece, vector.stop);

        self.piece_register.relocate_piece(vector.start, vector.stop)?;
        match chosen.action {
            Some(MoveAction::AuxiliaryMove(rook_vector)) => {
                self.piece_register
                    .relocate_piece(rook_vector.start, rook_vector.stop)?;
            }
            Some(MoveAction::Remove(victim)) => {
                self.piece_register
                    .remove_piece_record(victim)
                    .ok_or(ChessErrors::TryToViewOrEditEmptySquare(victim))?;
            }
            Some(MoveAction::Promote(_)) | None => {}
        }

        self.invalidate_attack_cache();
        Ok(())
    }

    fn generate_for(&self, piece: &PieceRecord) -> Vec<MoveDescription> {
        let enemy_attacks = matches!(piece.class, PieceClass::King)
            .then(|| self.attack_mask(piece.team.opposite()));
        generate_piece_moves(
            &self.piece_register,
            piece,
            self.en_passant.as_ref(),
            enemy_attacks,
        )
    }

    /// The attacked-square mask of `attacking_team`, computed lazily and
    /// reused until the next grid mutation.
    pub fn attack_mask(&self, attacking_team: PieceTeam) -> BoardMask {
        if let Some((team, mask)) = self.attack_cache.get() {
            if team == attacking_team {
                return mask;
            }
        }
        let mask = generate_attack_mask(&self.piece_register, attacking_team);
        self.attack_cache.set(Some((attacking_team, mask)));
        mask
    }

    /// Returns true iff `attacking_team` currently attacks `x`.
    pub fn is_location_attacked(&self, x: BoardLocation, attacking_team: PieceTeam) -> bool {
        crate::inspect_check::is_location_attacked(self.attack_mask(attacking_team), x)
    }

    fn invalidate_attack_cache(&self) {
        self.attack_cache.set(None);
    }
}

fn next_en_passant_target(piece: &PieceRecord, stop: BoardLocation) -> Option<EnPassantTarget> {
    if matches!(piece.class, PieceClass::Pawn)
        && !piece.has_moved
        && (stop.0 - piece.location.0).abs() == 2
    {
        Some(EnPassantTarget {
            pawn_location: stop,
            capture_location: (
                piece.location.0 + piece.team.forward_row_direction(),
                piece.location.1,
            ),
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_description::MoveVector;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn place(board: &mut ChessBoard, class: PieceClass, team: PieceTeam, at: (i8, i8)) {
        board
            .insert_piece(PieceRecord::new(class, team, at))
            .unwrap();
    }

    fn kings_only() -> ChessBoard {
        let mut board = ChessBoard::new();
        place(&mut board, PieceClass::King, PieceTeam::Light, (7, 4));
        place(&mut board, PieceClass::King, PieceTeam::Dark, (0, 4));
        board
    }

    #[test]
    fn standard_arrangement_counts() {
        let board = ChessBoard::with_standard_arrangement();
        assert_eq!(
            board.view_piece((7, 4)).map(|p| (p.class, p.team)),
            Some((PieceClass::King, PieceTeam::Light))
        );
        assert_eq!(
            board.view_piece((0, 3)).map(|p| (p.class, p.team)),
            Some((PieceClass::Queen, PieceTeam::Dark))
        );
        assert_eq!(
            board.view_piece((6, 0)).map(|p| p.class),
            Some(PieceClass::Pawn)
        );
        assert_eq!(board.team_to_move(), PieceTeam::Light);
        assert_eq!(board.legal_moves_at((6, 0)).len(), 2);
    }

    #[test]
    fn empty_or_idle_side_squares_yield_no_moves() {
        let board = ChessBoard::with_standard_arrangement();
        assert!(board.legal_moves_at((4, 4)).is_empty());
        assert!(board.legal_moves_at((1, 0)).is_empty());
    }

    #[test]
    fn wrong_turn_attempt_is_rejected_without_state_change() {
        let mut board = ChessBoard::with_standard_arrangement();
        assert!(!board.attempt_move((1, 0), (2, 0)));
        assert_eq!(board.team_to_move(), PieceTeam::Light);
        assert!(board.view_piece((1, 0)).is_some());
        assert!(board.view_piece((2, 0)).is_none());
    }

    #[test]
    fn illegal_destination_is_rejected_without_state_change() {
        let mut board = ChessBoard::with_standard_arrangement();
        assert!(!board.attempt_move((6, 0), (3, 0)));
        assert!(!board.attempt_move((4, 4), (3, 4)));
        assert_eq!(board.team_to_move(), PieceTeam::Light);
        assert!(board.en_passant_target().is_none());
    }

    #[test]
    fn turn_flag_alternates_per_commit() {
        let mut board = ChessBoard::with_standard_arrangement();
        assert!(board.attempt_move((6, 4), (4, 4)));
        assert_eq!(board.team_to_move(), PieceTeam::Dark);
        assert!(board.attempt_move((1, 4), (3, 4)));
        assert_eq!(board.team_to_move(), PieceTeam::Light);
    }

    #[test]
    fn double_step_opens_the_en_passant_window_for_one_ply() {
        let mut board = ChessBoard::with_standard_arrangement();
        assert!(board.attempt_move((6, 4), (4, 4)));
        assert_eq!(
            board.en_passant_target(),
            Some(EnPassantTarget {
                pawn_location: (4, 4),
                capture_location: (5, 4),
            })
        );

        // Any other committed move closes the window.
        assert!(board.attempt_move((1, 0), (2, 0)));
        assert!(board.en_passant_target().is_none());
    }

    #[test]
    fn en_passant_capture_removes_the_pawn_behind_the_destination() {
        let mut board = kings_only();
        place(&mut board, PieceClass::Pawn, PieceTeam::Light, (6, 4));
        place(&mut board, PieceClass::Pawn, PieceTeam::Dark, (4, 3));

        assert!(board.attempt_move((6, 4), (4, 4)));
        assert!(board.attempt_move((4, 3), (5, 4)));

        assert!(board.view_piece((4, 4)).is_none(), "victim removed");
        assert_eq!(
            board.view_piece((5, 4)).map(|p| (p.class, p.team)),
            Some((PieceClass::Pawn, PieceTeam::Dark))
        );
        assert!(board.view_piece((4, 3)).is_none());
        assert!(board.en_passant_target().is_none());
    }

    #[test]
    fn kingside_castle_relocates_both_pieces_in_one_commit() {
        let mut board = kings_only();
        place(&mut board, PieceClass::Rook, PieceTeam::Light, (7, 7));

        assert!(board.attempt_move((7, 4), (7, 6)));

        let king = board.view_piece((7, 6)).expect("king castled");
        let rook = board.view_piece((7, 5)).expect("rook relocated");
        assert!(matches!(king.class, PieceClass::King) && king.has_moved);
        assert!(matches!(rook.class, PieceClass::Rook) && rook.has_moved);
        assert!(board.view_piece((7, 4)).is_none());
        assert!(board.view_piece((7, 7)).is_none());
        assert_eq!(board.team_to_move(), PieceTeam::Dark);
    }

    #[test]
    fn king_may_not_step_onto_a_rook_covered_square() {
        let mut board = kings_only();
        place(&mut board, PieceClass::Rook, PieceTeam::Dark, (3, 3));

        assert!(board.is_location_attacked((7, 3), PieceTeam::Dark));
        let stops: Vec<_> = board
            .legal_moves_at((7, 4))
            .iter()
            .map(|m| m.vector.stop)
            .collect();
        assert!(!stops.contains(&(7, 3)));
        assert!(!stops.contains(&(6, 3)));
        assert!(stops.contains(&(7, 5)));
        assert!(!board.attempt_move((7, 4), (7, 3)));
    }

    #[test]
    fn promotion_is_notified_and_completed_by_the_collaborator() {
        let mut board = kings_only();
        place(&mut board, PieceClass::Pawn, PieceTeam::Light, (1, 0));

        let notified = Rc::new(RefCell::new(None));
        {
            let notified = Rc::clone(&notified);
            board.subscribe(move |m| *notified.borrow_mut() = m.action);
        }

        assert!(board.attempt_move((1, 0), (0, 0)));
        assert_eq!(*notified.borrow(), Some(MoveAction::Promote((0, 0))));
        // The pawn sits on the final rank until the collaborator upgrades it.
        assert_eq!(
            board.view_piece((0, 0)).map(|p| p.class),
            Some(PieceClass::Pawn)
        );
        board.promote_piece((0, 0), PieceClass::Queen).unwrap();
        assert_eq!(
            board.view_piece((0, 0)).map(|p| p.class),
            Some(PieceClass::Queen)
        );
    }

    #[test]
    fn subscribers_receive_the_committed_move_and_can_detach() {
        let mut board = ChessBoard::with_standard_arrangement();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let id = {
            let seen = Rc::clone(&seen);
            board.subscribe(move |m| seen.borrow_mut().push(m.vector))
        };

        assert!(board.attempt_move((6, 4), (4, 4)));
        assert!(!board.attempt_move((6, 0), (3, 0)), "rejections are silent");
        assert_eq!(*seen.borrow(), vec![MoveVector::new((6, 4), (4, 4))]);

        assert!(board.unsubscribe(id));
        assert!(board.attempt_move((1, 4), (3, 4)));
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn attack_cache_is_refreshed_after_mutations() {
        let mut board = kings_only();
        place(&mut board, PieceClass::Rook, PieceTeam::Dark, (0, 0));

        let before = board.attack_mask(PieceTeam::Dark);
        assert!(crate::board_mask::mask_contains(before, (7, 0)));

        board.remove_piece((0, 0));
        let after = board.attack_mask(PieceTeam::Dark);
        assert!(!crate::board_mask::mask_contains(after, (7, 0)));
    }

    #[test]
    fn caller_cannot_smuggle_an_action() {
        // attempt_move only accepts coordinates; the generated move's action
        // is authoritative. A plain pawn push therefore never removes or
        // relocates anything else.
        let mut board = kings_only();
        place(&mut board, PieceClass::Pawn, PieceTeam::Light, (6, 0));
        place(&mut board, PieceClass::Pawn, PieceTeam::Dark, (1, 7));

        assert!(board.attempt_move((6, 0), (5, 0)));
        assert!(board.view_piece((1, 7)).is_some());
    }
}
