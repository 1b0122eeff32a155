//! Single-step movement evaluation.

use std::f64::consts::SQRT_2;

use stepcost_core::{Offset, Position, TerrainKind};

use crate::corners::shared_corners;
use crate::error::InvalidRequest;
use crate::index::SpatialIndex;
use crate::movement::Movement;

/// Evaluates steps between adjacent cells of a [`SpatialIndex`].
///
/// Holds no state besides the borrowed index, so one evaluator (or many)
/// can be used concurrently.
#[derive(Debug, Clone, Copy)]
pub struct MovementEvaluator<'a> {
    index: &'a SpatialIndex,
}

impl<'a> MovementEvaluator<'a> {
    pub fn new(index: &'a SpatialIndex) -> Self {
        Self { index }
    }

    /// Evaluate the step from `from` to `to`.
    ///
    /// Orthogonal steps cost the weight of the destination. Diagonal steps
    /// cost `sqrt(2)` times that weight, and are refused when both shared
    /// corners are stone. Entering stone is always refused.
    ///
    /// Fails if either cell is off the grid or the cells are not adjacent.
    pub fn evaluate(&self, from: Position, to: Position) -> Result<Movement, InvalidRequest> {
        self.check_bounds(from)?;
        self.check_bounds(to)?;
        let step = from.offset_to(to);
        if !step.is_adjacent() {
            return Err(InvalidRequest::NotAdjacent { from, to });
        }

        let dest = self.index.terrain_at(to);
        let movement = if step.is_orthogonal() {
            enter(dest, 1.0)
        } else if self.corner_cut(from, to) {
            log::trace!("corner cut refused: {from} -> {to}");
            Movement::Blocked
        } else {
            enter(dest, SQRT_2)
        };

        log::trace!("move {from} -> {to}: {movement}");
        Ok(movement)
    }

    /// Evaluate every in-bounds step out of `from`.
    pub fn neighbours(&self, from: Position) -> Result<Vec<(Position, Movement)>, InvalidRequest> {
        self.check_bounds(from)?;
        let mut out = Vec::with_capacity(Offset::DIRECTIONS.len());
        for d in Offset::DIRECTIONS {
            let to = from + d;
            if self.index.contains(to) {
                out.push((to, self.evaluate(from, to)?));
            }
        }
        Ok(out)
    }

    fn check_bounds(&self, pos: Position) -> Result<(), InvalidRequest> {
        if self.index.contains(pos) {
            Ok(())
        } else {
            Err(InvalidRequest::OutOfBounds {
                pos,
                bounds: self.index.bounds(),
            })
        }
    }

    /// Whether both shared corners of the diagonal step are stone.
    fn corner_cut(&self, from: Position, to: Position) -> bool {
        shared_corners(from, to).is_some_and(|corners| {
            corners
                .iter()
                .all(|&c| self.index.lookup(c).is_some_and(TerrainKind::is_blocking))
        })
    }
}

/// Cost of entering `dest`, scaled by the step length.
fn enter(dest: TerrainKind, scale: f64) -> Movement {
    match dest.weight() {
        Some(w) => Movement::Allowed { cost: scale * w },
        None => Movement::Blocked,
    }
}

impl SpatialIndex {
    /// Shorthand for `MovementEvaluator::new(self).evaluate(from, to)`.
    pub fn evaluate(&self, from: Position, to: Position) -> Result<Movement, InvalidRequest> {
        MovementEvaluator::new(self).evaluate(from, to)
    }
}
