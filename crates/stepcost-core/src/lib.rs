//! **stepcost-core** — grid coordinates and terrain kinds.
//!
//! This crate provides the leaf types shared by the *stepcost* crates:
//! cell positions, step offsets, grid bounds, and the closed set of
//! terrain variants with their traversal weights.

pub mod geom;
pub mod terrain;

pub use geom::{Bounds, BoundsIter, Offset, Position};
pub use terrain::{FOREST_WEIGHT, OPEN_WEIGHT, TerrainKind};
