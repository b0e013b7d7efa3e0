use crate::{
    generate_movements::{
        generate_pawn_capture_movement, generate_pawn_double_step_movement,
        generate_pawn_single_step_movement,
    },
    move_description::{EnPassantTarget, MoveAction, MoveDescription},
    move_generation::legal_move_shared::occupant_team,
    piece_class::PieceClass,
    piece_record::PieceRecord,
    piece_register::PieceRegister,
};

/// Generates pawn destinations for `pawn`.
///
/// Forward pushes require empty squares (friend or foe blocks); the double
/// step additionally requires an unmoved pawn and an empty intermediate
/// square. Diagonal steps require an enemy occupant, or a match against the
/// active en-passant target, in which case the move carries a `Remove`
/// action naming the victim's square (one rank behind the destination).
/// Any move landing on the pawn's promotion row carries a `Promote` action
/// tagging the destination instead.
pub fn generate_pawn_moves(
    register: &PieceRegister,
    pawn: &PieceRecord,
    en_passant: Option<&EnPassantTarget>,
) -> Vec<MoveDescription> {
    let start = pawn.location;
    let mut result = Vec::new();

    // Check single step
    if let Ok(x) = generate_pawn_single_step_movement(start, pawn.team) {
        if occupant_team(register, x).is_none() {
            result.push(MoveDescription::regular(start, x));
            // Check double step only if the single step was open
            if !pawn.has_moved {
                if let Ok(x) = generate_pawn_double_step_movement(start, pawn.team) {
                    if occupant_team(register, x).is_none() {
                        result.push(MoveDescription::regular(start, x));
                    }
                }
            }
        }
    }

    // Check captures toward both columns
    for d_col in [-1, 1] {
        if let Ok(x) = generate_pawn_capture_movement(start, pawn.team, d_col) {
            if occupant_team(register, x) == Some(pawn.team.opposite()) {
                result.push(MoveDescription::regular(start, x));
            } else if let Some(target) = en_passant {
                // A diagonal step onto the target's capture square takes the
                // pawn on the companion square, not the destination.
                if x == target.capture_location && holds_enemy_pawn(register, pawn, target) {
                    result.push(MoveDescription::with_action(
                        start,
                        x,
                        MoveAction::Remove(target.pawn_location),
                    ));
                }
            }
        }
    }

    // Tag moves landing on the final rank for promotion
    let promotion_row = pawn.team.promotion_row();
    for m in &mut result {
        if m.vector.stop.0 == promotion_row {
            m.action = Some(MoveAction::Promote(m.vector.stop));
        }
    }

    result
}

fn holds_enemy_pawn(register: &PieceRegister, pawn: &PieceRecord, target: &EnPassantTarget) -> bool {
    match register.view(target.pawn_location) {
        Some(piece) => piece.is_enemy_of(pawn) && matches!(piece.class, PieceClass::Pawn),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece_team::PieceTeam;

    fn pawn_at(register: &mut PieceRegister, team: PieceTeam, location: (i8, i8)) -> PieceRecord {
        let record = PieceRecord::new(PieceClass::Pawn, team, location);
        register.add_piece_record(record).unwrap();
        record
    }

    #[test]
    fn unmoved_pawn_may_double_step() {
        let mut register = PieceRegister::new();
        let pawn = pawn_at(&mut register, PieceTeam::Light, (6, 4));
        let moves = generate_pawn_moves(&register, &pawn, None);
        let stops: Vec<_> = moves.iter().map(|m| m.vector.stop).collect();
        assert_eq!(stops, vec![(5, 4), (4, 4)]);
    }

    #[test]
    fn moved_pawn_may_not_double_step() {
        let mut register = PieceRegister::new();
        let mut pawn = pawn_at(&mut register, PieceTeam::Light, (5, 4));
        pawn.has_moved = true;
        let moves = generate_pawn_moves(&register, &pawn, None);
        let stops: Vec<_> = moves.iter().map(|m| m.vector.stop).collect();
        assert_eq!(stops, vec![(4, 4)]);
    }

    #[test]
    fn pushes_are_blocked_by_any_occupant() {
        let mut register = PieceRegister::new();
        let pawn = pawn_at(&mut register, PieceTeam::Light, (6, 4));
        pawn_at(&mut register, PieceTeam::Dark, (5, 4));
        assert!(generate_pawn_moves(&register, &pawn, None).is_empty());

        // A blocked destination square still kills the double step.
        let mut register = PieceRegister::new();
        let pawn = pawn_at(&mut register, PieceTeam::Light, (6, 3));
        pawn_at(&mut register, PieceTeam::Light, (4, 3));
        let moves = generate_pawn_moves(&register, &pawn, None);
        let stops: Vec<_> = moves.iter().map(|m| m.vector.stop).collect();
        assert_eq!(stops, vec![(5, 3)]);
    }

    #[test]
    fn diagonal_steps_require_an_enemy() {
        let mut register = PieceRegister::new();
        let pawn = pawn_at(&mut register, PieceTeam::Light, (6, 4));
        pawn_at(&mut register, PieceTeam::Dark, (5, 3));
        pawn_at(&mut register, PieceTeam::Light, (5, 5));
        let moves = generate_pawn_moves(&register, &pawn, None);
        let stops: Vec<_> = moves.iter().map(|m| m.vector.stop).collect();
        assert!(stops.contains(&(5, 3)));
        assert!(!stops.contains(&(5, 5)));
    }

    #[test]
    fn en_passant_capture_removes_companion_square() {
        let mut register = PieceRegister::new();
        let pawn = pawn_at(&mut register, PieceTeam::Dark, (4, 3));
        pawn_at(&mut register, PieceTeam::Light, (4, 4));
        let target = EnPassantTarget {
            pawn_location: (4, 4),
            capture_location: (5, 4),
        };

        let moves = generate_pawn_moves(&register, &pawn, Some(&target));
        let capture = moves
            .iter()
            .find(|m| m.vector.stop == (5, 4))
            .expect("en passant capture generated");
        assert_eq!(capture.action, Some(MoveAction::Remove((4, 4))));
    }

    #[test]
    fn en_passant_requires_an_enemy_pawn_on_the_companion_square() {
        let mut register = PieceRegister::new();
        let pawn = pawn_at(&mut register, PieceTeam::Dark, (4, 3));
        register
            .add_piece_record(PieceRecord::new(PieceClass::Rook, PieceTeam::Light, (4, 4)))
            .unwrap();
        let target = EnPassantTarget {
            pawn_location: (4, 4),
            capture_location: (5, 4),
        };
        let moves = generate_pawn_moves(&register, &pawn, Some(&target));
        assert!(moves.iter().all(|m| m.vector.stop != (5, 4)));
    }

    #[test]
    fn promotion_is_tagged_on_the_final_rank() {
        let mut register = PieceRegister::new();
        let mut pawn = pawn_at(&mut register, PieceTeam::Light, (1, 0));
        pawn.has_moved = true;
        register
            .add_piece_record(PieceRecord::new(PieceClass::Knight, PieceTeam::Dark, (0, 1)))
            .unwrap();

        let moves = generate_pawn_moves(&register, &pawn, None);
        assert_eq!(moves.len(), 2);
        for m in &moves {
            assert_eq!(m.action, Some(MoveAction::Promote(m.vector.stop)));
            assert_eq!(m.vector.stop.0, 0);
        }

        // A dark pawn one step from row 7 promotes there.
        let mut register = PieceRegister::new();
        let mut pawn = pawn_at(&mut register, PieceTeam::Dark, (6, 6));
        pawn.has_moved = true;
        let moves = generate_pawn_moves(&register, &pawn, None);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].action, Some(MoveAction::Promote((7, 6))));
    }
}
