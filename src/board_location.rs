use crate::chess_errors::ChessErrors;

/// A board coordinate as `(row, col)`, each in `0..8`.
///
/// Row 0 is the Dark back rank; Light pieces start on rows 6 and 7 and
/// advance toward row 0.
pub type BoardLocation = (i8, i8);

/// Returns true iff both coordinates lie in `0..8`.
pub fn is_within_bounds(x: BoardLocation) -> bool {
    (x.0 >= 0) & (x.0 < 8) & (x.1 >= 0) & (x.1 < 8)
}

/// Moves a board location by a specified row and column offset.
///
/// # Arguments
///
/// * `x` - The current board location.
/// * `d_row` - The row offset.
/// * `d_col` - The column offset.
///
/// # Returns
///
/// * `Result<BoardLocation, ChessErrors>` - Returns the new board location if
///   within bounds, otherwise returns an error.
pub fn move_board_location(
    x: BoardLocation,
    d_row: i8,
    d_col: i8,
) -> Result<BoardLocation, ChessErrors> {
    let y: BoardLocation = (x.0 + d_row, x.1 + d_col);
    if is_within_bounds(y) {
        Ok(y)
    } else {
        Err(ChessErrors::TriedToMoveOutOfBounds(x, d_row, d_col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_checking() {
        assert!(is_within_bounds((0, 0)));
        assert!(is_within_bounds((7, 7)));
        assert!(!is_within_bounds((-1, 0)));
        assert!(!is_within_bounds((0, 8)));
    }

    #[test]
    fn stepping_stays_on_board() {
        assert_eq!(move_board_location((6, 4), -2, 0), Ok((4, 4)));
        assert_eq!(move_board_location((7, 0), 0, 7), Ok((7, 7)));
        assert!(move_board_location((0, 0), -1, 0).is_err());
        assert!(move_board_location((3, 7), 0, 1).is_err());
    }
}
