//! Terrain kinds and their traversal weights.

/// Traversal weight of an open cell.
pub const OPEN_WEIGHT: f64 = 1.0;

/// Traversal weight of a forest cell.
pub const FOREST_WEIGHT: f64 = 5.0;

/// The terrain occupying a single cell.
///
/// Stone is a pure blocking marker. It has no numeric weight, so it can
/// never leak into cost arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    /// Default terrain; never stored in a sparse index.
    #[default]
    Open,
    Forest,
    Stone,
}

impl TerrainKind {
    /// Parse a grid symbol: `'*'` is forest, `'@'` is stone, anything else
    /// is open.
    pub const fn from_symbol(ch: char) -> Self {
        match ch {
            '*' => Self::Forest,
            '@' => Self::Stone,
            _ => Self::Open,
        }
    }

    /// Canonical input symbol. Open cells use `'.'`.
    pub const fn symbol(self) -> char {
        match self {
            Self::Open => '.',
            Self::Forest => '*',
            Self::Stone => '@',
        }
    }

    /// Traversal weight, or `None` for blocking terrain.
    pub const fn weight(self) -> Option<f64> {
        match self {
            Self::Open => Some(OPEN_WEIGHT),
            Self::Forest => Some(FOREST_WEIGHT),
            Self::Stone => None,
        }
    }

    /// Whether the terrain forbids entering the cell.
    pub const fn is_blocking(self) -> bool {
        matches!(self, Self::Stone)
    }

    /// Whether the terrain is the implicit default.
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl From<char> for TerrainKind {
    fn from(ch: char) -> Self {
        Self::from_symbol(ch)
    }
}
