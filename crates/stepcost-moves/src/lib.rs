//! Single-step movement costs on a sparse 2D terrain grid.
//!
//! A [`SpatialIndex`] stores only the cells that are not open (forest and
//! stone). A [`MovementEvaluator`] answers whether a unit may step from a
//! cell to one of its eight neighbours, and at what cost:
//!
//! | Step | Destination | Result |
//! |---|---|---|
//! | orthogonal | open / forest | weight (1 / 5) |
//! | diagonal | open / forest | `sqrt(2)` x weight |
//! | any | stone | blocked |
//! | diagonal | both shared corners stone | blocked |
//!
//! The index is immutable once built; rebuild it to change the terrain.
//!
//! ```
//! use stepcost_core::Position;
//! use stepcost_moves::{Movement, SpatialIndex};
//!
//! let idx = SpatialIndex::from_text("2 2\n.@\n@.").unwrap();
//! let m = idx.evaluate(Position::new(0, 0), Position::new(1, 1)).unwrap();
//! assert_eq!(m, Movement::Blocked);
//! ```

mod corners;
mod error;
mod evaluator;
mod index;
mod loader;
mod movement;
mod render;

pub use corners::shared_corners;
pub use error::{ConfigError, InvalidRequest, LoadError};
pub use evaluator::MovementEvaluator;
pub use index::{SpatialIndex, Tile};
pub use loader::{GridData, load_path, load_str};
pub use movement::Movement;
pub use render::{RenderConfig, render};
