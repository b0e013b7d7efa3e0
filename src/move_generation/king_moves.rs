use crate::{
    board_mask::{mask_contains, BoardMask},
    generate_movements::generate_king_movement,
    move_description::{MoveAction, MoveDescription, MoveVector},
    move_generation::legal_move_shared::{occupant_team, push_offset_destination},
    piece_class::PieceClass,
    piece_record::PieceRecord,
    piece_register::PieceRegister,
};

/// Generates the king's raw one-square offset destinations, ignoring enemy
/// attacks and castling.
///
/// This form is what enemy-attack computation uses: evaluating whether the
/// enemy king attacks a square must not itself recurse into check evaluation
/// or castling.
pub fn generate_king_offset_moves(
    register: &PieceRegister,
    king: &PieceRecord,
) -> Vec<MoveDescription> {
    let mut result = Vec::new();
    for direction in 0..8 {
        if let Ok(x) = generate_king_movement(king.location, direction) {
            push_offset_destination(register, king.team, king.location, x, &mut result);
        }
    }
    result
}

/// Generates the king's full legal destinations: the one-square offsets with
/// enemy-attacked squares filtered out, plus any legal castling moves.
///
/// `enemy_attacks` is the attack mask of the opposing team against the
/// current position.
pub fn generate_king_moves(
    register: &PieceRegister,
    king: &PieceRecord,
    enemy_attacks: BoardMask,
) -> Vec<MoveDescription> {
    let mut result = generate_king_offset_moves(register, king);
    result.retain(|m| !mask_contains(enemy_attacks, m.vector.stop));
    result.extend(generate_castling_moves(register, king, enemy_attacks));
    result
}

/// One castling wing: the rook's home column, the columns the king crosses
/// (which must be empty and unattacked), the king's and rook's stop columns,
/// and for queenside the extra column that must merely be empty.
struct CastlingWing {
    rook_start_col: i8,
    crossed_cols: [i8; 2],
    king_stop_col: i8,
    rook_stop_col: i8,
    clear_only_col: Option<i8>,
}

const KINGSIDE: CastlingWing = CastlingWing {
    rook_start_col: 7,
    crossed_cols: [5, 6],
    king_stop_col: 6,
    rook_stop_col: 5,
    clear_only_col: None,
};

const QUEENSIDE: CastlingWing = CastlingWing {
    rook_start_col: 0,
    crossed_cols: [3, 2],
    king_stop_col: 2,
    rook_stop_col: 3,
    clear_only_col: Some(1),
};

/// Generates the legal castling moves for `king`, each carrying the rook's
/// relocation as an auxiliary action.
///
/// Eligibility: the king is unmoved, on its home square, and not currently
/// attacked; the wing's rook is an unmoved friendly rook on its home square;
/// every square the king crosses is empty and unattacked; the queenside
/// square next to the rook is empty (the king never stands there, so it may
/// be attacked).
fn generate_castling_moves(
    register: &PieceRegister,
    king: &PieceRecord,
    enemy_attacks: BoardMask,
) -> Vec<MoveDescription> {
    let mut result = Vec::new();
    let back_row = king.team.back_row();

    if king.has_moved
        || king.location != (back_row, 4)
        || mask_contains(enemy_attacks, king.location)
    {
        return result;
    }

    for wing in [KINGSIDE, QUEENSIDE] {
        let rook_start = (back_row, wing.rook_start_col);
        let rook_ready = match register.view(rook_start) {
            Some(piece) => {
                matches!(piece.class, PieceClass::Rook)
                    && piece.team == king.team
                    && !piece.has_moved
            }
            None => false,
        };
        if !rook_ready {
            continue;
        }

        let crossing_clear = wing.crossed_cols.iter().all(|&col| {
            let square = (back_row, col);
            occupant_team(register, square).is_none() && !mask_contains(enemy_attacks, square)
        });
        let wing_clear = match wing.clear_only_col {
            Some(col) => occupant_team(register, (back_row, col)).is_none(),
            None => true,
        };

        if crossing_clear && wing_clear {
            result.push(MoveDescription::with_action(
                king.location,
                (back_row, wing.king_stop_col),
                MoveAction::AuxiliaryMove(MoveVector::new(
                    rook_start,
                    (back_row, wing.rook_stop_col),
                )),
            ));
        }
    }

    result
}
