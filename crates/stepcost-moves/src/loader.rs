//! Reading terrain grids from text.
//!
//! The format is two integers, the number of rows and the number of
//! columns, followed by `rows * columns` single-character cells in
//! row-major order. All whitespace is insignificant, so cells may be
//! written one per token (`@ . *`) or packed together (`@.*`).

use std::fs;
use std::path::Path;

use stepcost_core::TerrainKind;

use crate::error::{ConfigError, LoadError};
use crate::index::SpatialIndex;

/// A rectangular terrain matrix as read from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridData {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// `height` rows of `width` symbols each; empty when the grid has no
    /// cells at all.
    pub cells: Vec<Vec<char>>,
}

impl GridData {
    /// Build the sparse index for this matrix.
    pub fn build_index(&self) -> Result<SpatialIndex, LoadError> {
        if self.width == 0 || self.height == 0 {
            return Ok(SpatialIndex::from_fn(self.width, self.height, |_| {
                TerrainKind::Open
            })?);
        }
        Ok(SpatialIndex::build(&self.cells, self.width, self.height)?)
    }
}

/// Parse a grid from a string.
pub fn load_str(s: &str) -> Result<GridData, LoadError> {
    let mut tokens = s.split_whitespace();
    let height = parse_dimension(tokens.next())?;
    let width = parse_dimension(tokens.next())?;
    if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
        return Err(ConfigError::TooLarge { width, height }.into());
    }

    let expected = width
        .checked_mul(height)
        .ok_or_else(|| LoadError::BadDimension(format!("{height} x {width}")))?;
    let mut symbols = tokens.flat_map(str::chars);
    let flat: Vec<char> = symbols.by_ref().take(expected).collect();
    if flat.len() < expected {
        return Err(LoadError::MissingCells {
            expected,
            found: flat.len(),
        });
    }
    let extra = symbols.count();
    if extra > 0 {
        log::warn!("ignoring {extra} cells after the end of a {height}x{width} grid");
    }

    let cells: Vec<Vec<char>> = if expected == 0 {
        Vec::new()
    } else {
        flat.chunks(width).map(<[char]>::to_vec).collect()
    };
    log::debug!("loaded {height}x{width} terrain grid");
    Ok(GridData {
        width,
        height,
        cells,
    })
}

/// Read and parse a grid file.
pub fn load_path(path: impl AsRef<Path>) -> Result<GridData, LoadError> {
    let text = fs::read_to_string(path.as_ref())?;
    load_str(&text)
}

fn parse_dimension(tok: Option<&str>) -> Result<usize, LoadError> {
    let tok = tok.ok_or(LoadError::MissingDimensions)?;
    tok.parse()
        .map_err(|_| LoadError::BadDimension(tok.to_string()))
}

impl SpatialIndex {
    /// Parse a grid from a string and index it.
    pub fn from_text(s: &str) -> Result<Self, LoadError> {
        load_str(s)?.build_index()
    }

    /// Read a grid file and index it.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        load_path(path)?.build_index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepcost_core::Position;

    const FIELD: &str = "\
2 3
. * .
@ . .
";

    #[test]
    fn parse_spaced_cells() {
        let g = load_str(FIELD).unwrap();
        assert_eq!(g.height, 2);
        assert_eq!(g.width, 3);
        assert_eq!(g.cells, vec![vec!['.', '*', '.'], vec!['@', '.', '.']]);
    }

    #[test]
    fn parse_packed_cells() {
        let g = load_str("2 3\n.*.\n@..").unwrap();
        assert_eq!(g, load_str(FIELD).unwrap());
    }

    #[test]
    fn rows_need_not_follow_lines() {
        let g = load_str("2 2 .@ *. ").unwrap();
        assert_eq!(g.cells, vec![vec!['.', '@'], vec!['*', '.']]);
    }

    #[test]
    fn index_from_text() {
        let idx = SpatialIndex::from_text(FIELD).unwrap();
        assert_eq!(idx.lookup(Position::new(0, 1)), Some(TerrainKind::Forest));
        assert_eq!(idx.lookup(Position::new(1, 0)), Some(TerrainKind::Stone));
        assert_eq!(idx.len(), 2);
    }

    #[test]
    fn missing_dimensions() {
        assert!(matches!(load_str(""), Err(LoadError::MissingDimensions)));
        assert!(matches!(load_str("3"), Err(LoadError::MissingDimensions)));
    }

    #[test]
    fn bad_dimension() {
        let err = load_str("3 x\n...").unwrap_err();
        assert!(matches!(err, LoadError::BadDimension(ref t) if t == "x"));
        assert!(matches!(load_str("-1 2"), Err(LoadError::BadDimension(_))));
    }

    #[test]
    fn missing_cells() {
        let err = load_str("2 2\n. .\n.").unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingCells {
                expected: 4,
                found: 3
            }
        ));
    }

    #[test]
    fn trailing_cells_are_ignored() {
        let g = load_str("1 2\n. @ * *").unwrap();
        assert_eq!(g.cells, vec![vec!['.', '@']]);
    }

    #[test]
    fn zero_width_grid() {
        let g = load_str("2 0").unwrap();
        assert!(g.cells.is_empty());
        let idx = g.build_index().unwrap();
        assert!(idx.is_empty());
        assert_eq!((idx.width(), idx.height()), (0, 2));
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        for header in [
            "4294967296 0",
            "0 4294967296",
            "18446744073709551615 0",
            "2147483648 1",
        ] {
            let err = load_str(header).unwrap_err();
            assert!(
                matches!(err, LoadError::Config(ConfigError::TooLarge { .. })),
                "{header}: {err}"
            );
        }
        assert!(matches!(
            SpatialIndex::from_text("4294967296 0"),
            Err(LoadError::Config(ConfigError::TooLarge { .. }))
        ));
    }

    #[test]
    fn largest_empty_grid_allocates_no_rows() {
        let g = load_str("2147483647 0").unwrap();
        assert!(g.cells.is_empty());
        assert_eq!(g.build_index().unwrap().height(), 2147483647);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_path("/nonexistent/stepcost/grid.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
