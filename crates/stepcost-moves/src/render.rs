//! Diagnostic text rendering of a [`SpatialIndex`].

use std::fmt;

use stepcost_core::TerrainKind;

use crate::index::SpatialIndex;

/// Glyphs and layout used by [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub stone: char,
    pub forest: char,
    pub open: char,
    /// Written after every glyph, including the last one of a row.
    pub separator: &'static str,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            stone: '@',
            forest: '*',
            open: '_',
            separator: " ",
        }
    }
}

impl RenderConfig {
    fn glyph(&self, terrain: Option<TerrainKind>) -> char {
        match terrain {
            Some(TerrainKind::Stone) => self.stone,
            Some(TerrainKind::Forest) => self.forest,
            Some(TerrainKind::Open) | None => self.open,
        }
    }
}

/// Render the grid, one line per row.
pub fn render(index: &SpatialIndex, config: &RenderConfig) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_grid(&mut out, index, config);
    out
}

fn write_grid(w: &mut impl fmt::Write, index: &SpatialIndex, config: &RenderConfig) -> fmt::Result {
    let bounds = index.bounds();
    for p in bounds {
        w.write_char(config.glyph(index.lookup(p)))?;
        w.write_str(config.separator)?;
        if p.y == bounds.width() - 1 {
            w.write_char('\n')?;
        }
    }
    Ok(())
}

impl fmt::Display for SpatialIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self, &RenderConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_glyphs() {
        let idx = SpatialIndex::from_text("2 3\n.*.\n@..").unwrap();
        assert_eq!(idx.to_string(), "_ * _ \n@ _ _ \n");
    }

    #[test]
    fn custom_glyphs() {
        let idx = SpatialIndex::from_text("1 3\n@*x").unwrap();
        let cfg = RenderConfig {
            stone: '#',
            forest: '"',
            open: '.',
            separator: "",
        };
        assert_eq!(render(&idx, &cfg), "#\".\n");
    }

    #[test]
    fn empty_grid_renders_nothing() {
        let idx = SpatialIndex::from_text("0 0").unwrap();
        assert_eq!(render(&idx, &RenderConfig::default()), "");
    }
}
