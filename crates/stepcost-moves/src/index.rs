//! Sparse terrain storage.
//!
//! A [`SpatialIndex`] holds only the cells whose terrain is not
//! [`TerrainKind::Open`]; every other in-bounds cell is implicitly open.
//! The index is populated once at construction and is read-only afterwards,
//! so a shared reference can be queried from any number of threads.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use stepcost_core::{Bounds, Position, TerrainKind};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Tile
// ---------------------------------------------------------------------------

/// A position carrying its terrain.
///
/// Equality and hashing look at the position only, so a tile can be found
/// in a set by its bare [`Position`].
#[derive(Debug, Clone, Copy)]
pub struct Tile {
    pub pos: Position,
    pub terrain: TerrainKind,
}

impl Tile {
    pub const fn new(pos: Position, terrain: TerrainKind) -> Self {
        Self { pos, terrain }
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must stay identical to `Position::hash` for the `Borrow` lookup.
        self.pos.hash(state);
    }
}

impl Borrow<Position> for Tile {
    fn borrow(&self) -> &Position {
        &self.pos
    }
}

// ---------------------------------------------------------------------------
// SpatialIndex
// ---------------------------------------------------------------------------

/// Immutable sparse map from [`Position`] to non-open [`TerrainKind`].
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tiles: HashSet<Tile>,
    bounds: Bounds,
}

impl SpatialIndex {
    /// Build an index from a row-major matrix of terrain symbols.
    ///
    /// `width` is the number of columns and `height` the number of rows.
    /// Fails if the matrix does not have exactly those dimensions.
    pub fn build<R: AsRef<[char]>>(
        grid: &[R],
        width: usize,
        height: usize,
    ) -> Result<Self, ConfigError> {
        if grid.len() != height {
            return Err(ConfigError::RowCount {
                declared: height,
                actual: grid.len(),
            });
        }
        for (row, cells) in grid.iter().enumerate() {
            let actual = cells.as_ref().len();
            if actual != width {
                return Err(ConfigError::RowLength {
                    row,
                    declared: width,
                    actual,
                });
            }
        }
        Self::from_fn(width, height, |p| {
            TerrainKind::from_symbol(grid[p.x as usize].as_ref()[p.y as usize])
        })
    }

    /// Build an index by asking `f` for the terrain of every cell.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(Position) -> TerrainKind,
    ) -> Result<Self, ConfigError> {
        let too_large = ConfigError::TooLarge { width, height };
        let w = i32::try_from(width).map_err(|_| too_large.clone())?;
        let h = i32::try_from(height).map_err(|_| too_large)?;
        let bounds = Bounds::new(w, h);

        let tiles: HashSet<Tile> = bounds
            .iter()
            .filter_map(|p| {
                let terrain = f(p);
                (!terrain.is_open()).then_some(Tile::new(p, terrain))
            })
            .collect();

        let index = Self { tiles, bounds };
        log::debug!(
            "built terrain index: {bounds}, {} forest, {} stone",
            index.count(TerrainKind::Forest),
            index.count(TerrainKind::Stone),
        );
        Ok(index)
    }

    /// Terrain stored at `pos`, or `None` for open or unlisted cells.
    #[inline]
    pub fn lookup(&self, pos: Position) -> Option<TerrainKind> {
        self.tiles.get(&pos).map(|t| t.terrain)
    }

    /// Terrain at `pos`, treating unlisted cells as open.
    #[inline]
    pub fn terrain_at(&self, pos: Position) -> TerrainKind {
        self.lookup(pos).unwrap_or_default()
    }

    /// Valid cells of the indexed grid.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.bounds.width() as usize
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.bounds.height() as usize
    }

    /// Whether `pos` lies on the grid.
    pub fn contains(&self, pos: Position) -> bool {
        self.bounds.contains(pos)
    }

    /// Number of stored (non-open) cells.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether every cell is open.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Count stored cells of the given kind.
    pub fn count(&self, kind: TerrainKind) -> usize {
        self.tiles.iter().filter(|t| t.terrain == kind).count()
    }

    /// Stored cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, TerrainKind)> + '_ {
        let width = self.width();
        let mut tiles: Vec<&Tile> = self.tiles.iter().collect();
        tiles.sort_unstable_by_key(|t| t.pos.key(width));
        tiles.into_iter().map(|t| (t.pos, t.terrain))
    }
}
