//! Error types for index construction, grid loading and move queries.

use std::fmt;
use std::io;

use stepcost_core::{Bounds, Position};

/// The terrain matrix disagrees with its declared dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The matrix has a different number of rows than declared.
    RowCount { declared: usize, actual: usize },
    /// A row of the matrix has a different number of cells than declared.
    RowLength {
        row: usize,
        declared: usize,
        actual: usize,
    },
    /// A dimension does not fit the `i32` coordinate space.
    TooLarge { width: usize, height: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowCount { declared, actual } => {
                write!(f, "grid declares {declared} rows but has {actual}")
            }
            Self::RowLength {
                row,
                declared,
                actual,
            } => write!(
                f,
                "grid declares {declared} columns but row {row} has {actual}"
            ),
            Self::TooLarge { width, height } => {
                write!(f, "grid of {height} rows x {width} columns is too large")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// A movement query that has no defined answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidRequest {
    /// The two cells are not 8-directionally adjacent (this includes a cell
    /// and itself).
    NotAdjacent { from: Position, to: Position },
    /// A cell lies outside the indexed grid.
    OutOfBounds { pos: Position, bounds: Bounds },
}

impl fmt::Display for InvalidRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAdjacent { from, to } => {
                write!(f, "cells {from} and {to} are not adjacent")
            }
            Self::OutOfBounds { pos, bounds } => {
                write!(f, "cell {pos} is outside the grid ({bounds})")
            }
        }
    }
}

impl std::error::Error for InvalidRequest {}

/// Errors raised while reading a textual terrain grid.
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    /// The input ended before both dimensions were read.
    MissingDimensions,
    /// A dimension token is not a non-negative integer.
    BadDimension(String),
    /// The input ended before every cell was read.
    MissingCells { expected: usize, found: usize },
    Config(ConfigError),
}

impl From<io::Error> for LoadError {
    fn from(value: io::Error) -> Self {
        LoadError::Io(value)
    }
}

impl From<ConfigError> for LoadError {
    fn from(value: ConfigError) -> Self {
        LoadError::Config(value)
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "{err}"),
            LoadError::MissingDimensions => write!(f, "grid input is missing its dimensions"),
            LoadError::BadDimension(tok) => write!(f, "invalid grid dimension \u{201c}{tok}\u{201d}"),
            LoadError::MissingCells { expected, found } => {
                write!(f, "grid input has {found} cells, expected {expected}")
            }
            LoadError::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            LoadError::Config(err) => Some(err),
            _ => None,
        }
    }
}
