//! Shared corners of a diagonal step.
//!
//! A diagonal step from `from` to `to` passes between two cells that are
//! orthogonally adjacent to both endpoints. Which two depends only on the
//! quadrant of the step, so they are read from a fixed table.

use stepcost_core::{Offset, Position};

/// Per-quadrant offsets from `from` to its two shared corners.
///
/// Each entry is `(step, [first corner, second corner])`; the first corner
/// is always the one reached by moving along the row.
const CORNERS: [(Offset, [Offset; 2]); 4] = [
    // up-left
    (Offset::new(-1, -1), [Offset::new(0, -1), Offset::new(-1, 0)]),
    // up-right
    (Offset::new(-1, 1), [Offset::new(0, 1), Offset::new(-1, 0)]),
    // down-right
    (Offset::new(1, 1), [Offset::new(0, 1), Offset::new(1, 0)]),
    // down-left
    (Offset::new(1, -1), [Offset::new(0, -1), Offset::new(1, 0)]),
];

/// The two cells orthogonally adjacent to both `from` and `to`.
///
/// Returns `None` unless `to` is a diagonal neighbour of `from`.
pub fn shared_corners(from: Position, to: Position) -> Option<[Position; 2]> {
    let step = from.checked_offset_to(to)?;
    if !step.is_diagonal() {
        return None;
    }
    let (_, [a, b]) = CORNERS.iter().find(|(quadrant, _)| *quadrant == step)?;
    Some([from.checked_add(*a)?, from.checked_add(*b)?])
}
