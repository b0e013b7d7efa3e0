//! One-bit-per-square board masks.
//!
//! A `BoardMask` packs the 64 squares into a `u64` (bit index `row * 8 + col`)
//! and is used for occupancy summaries and for the attacked-square sets
//! produced by check inspection.

use crate::board_location::BoardLocation;

pub type BoardMask = u64;

/// Converts an in-bounds board location to its one-hot mask.
#[inline]
pub fn location_mask(x: BoardLocation) -> BoardMask {
    1u64 << ((x.0 as u64) * 8 + (x.1 as u64))
}

/// Returns true iff the location's bit is set in the mask.
#[inline]
pub fn mask_contains(mask: BoardMask, x: BoardLocation) -> bool {
    mask & location_mask(x) > 0
}
