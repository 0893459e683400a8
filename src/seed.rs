//! Conversion between the textual seed format and rows of cell states.
//!
//! A seed is a block of lines, one line per row and one character per cell.
//! The alive marker (`'1'` by default) marks a living cell, any other
//! character a dead one.

use crate::{error::SeedError, Result};

/// Characters used to mark living and dead cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub alive: char,
    pub dead: char,
}

impl Glyphs {
    pub fn new(alive: char, dead: char) -> Self {
        Self { alive, dead }
    }

    pub fn glyph(&self, alive: bool) -> char {
        if alive {
            self.alive
        } else {
            self.dead
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::new('1', '-')
    }
}

/// A validated, rectangular set of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    rows: Vec<Vec<bool>>,
}

impl Seed {
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with(text, Glyphs::default())
    }

    /// parses `text`, only `glyphs.alive` is meaningful here.
    pub fn parse_with(text: &str, glyphs: Glyphs) -> Result<Self> {
        let mut lines: Vec<&str> = text.lines().collect();
        while lines.last().map_or(false, |line| line.is_empty()) {
            lines.pop();
        }

        let rows: Vec<Vec<bool>> = lines
            .into_iter()
            .map(|line| line.chars().map(|c| c == glyphs.alive).collect())
            .collect();
        Self::from_rows(rows)
    }

    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        dimensions(&rows)?;
        Ok(Self { rows })
    }

    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn into_rows(self) -> Vec<Vec<bool>> {
        self.rows
    }
}

/// largest width or height of a grid, so every cell has an `i32` position.
pub const MAX_EXTENT: usize = i32::MAX as usize;

/// Checks that `rows` form a non-empty rectangle, returning `(width, height)`.
pub(crate) fn dimensions(rows: &[Vec<bool>]) -> std::result::Result<(usize, usize), SeedError> {
    let width = rows.first().ok_or(SeedError::Empty)?.len();
    if width == 0 {
        return Err(SeedError::EmptyRow);
    }
    if let Some((row, found)) = rows
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|(_, len)| *len != width)
    {
        return Err(SeedError::Ragged {
            row,
            expected: width,
            found,
        });
    }
    extent(width, rows.len())
}

fn extent(width: usize, height: usize) -> std::result::Result<(usize, usize), SeedError> {
    if width > MAX_EXTENT || height > MAX_EXTENT {
        return Err(SeedError::TooLarge {
            width,
            height,
            max: MAX_EXTENT,
        });
    }
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn parses_alive_marker_and_treats_anything_else_as_dead() {
        let seed = Seed::parse("1-0\n x1").unwrap();
        assert_eq!(
            seed.into_rows(),
            vec![vec![true, false, false], vec![false, false, true]]
        );
    }

    #[test]
    fn trailing_newlines_are_ignored() {
        let seed = Seed::parse("--\r\n-1\r\n\n\n").unwrap();
        assert_eq!(seed.width(), 2);
        assert_eq!(seed.height(), 2);
    }

    #[test]
    fn custom_alive_marker() {
        let seed = Seed::parse_with("#.\n.#", Glyphs::new('#', '.')).unwrap();
        assert_eq!(seed.into_rows(), vec![vec![true, false], vec![false, true]]);
    }

    #[test]
    fn ragged_lines_are_rejected() {
        let error = Seed::parse("--\n---\n--").unwrap_err();
        assert_eq!(
            error,
            Error::InvalidSeed(SeedError::Ragged {
                row: 1,
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn blank_line_inside_seed_is_ragged() {
        let error = Seed::parse("--\n\n--").unwrap_err();
        assert!(matches!(
            error,
            Error::InvalidSeed(SeedError::Ragged { row: 1, .. })
        ));
    }

    #[test]
    fn empty_text_is_rejected() {
        assert_eq!(Seed::parse(""), Err(Error::InvalidSeed(SeedError::Empty)));
        assert_eq!(Seed::parse("\n\n"), Err(Error::InvalidSeed(SeedError::Empty)));
    }

    #[test]
    fn rows_without_cells_are_rejected() {
        assert_eq!(
            Seed::from_rows(vec![vec![], vec![]]),
            Err(Error::InvalidSeed(SeedError::EmptyRow))
        );
    }

    #[test]
    fn extent_is_limited_to_addressable_positions() {
        assert_eq!(extent(MAX_EXTENT, 1), Ok((MAX_EXTENT, 1)));
        assert_eq!(
            extent(MAX_EXTENT + 1, 1),
            Err(SeedError::TooLarge {
                width: MAX_EXTENT + 1,
                height: 1,
                max: MAX_EXTENT
            })
        );
        assert!(extent(3, MAX_EXTENT + 1).is_err());
    }

    #[test]
    fn glyph_picks_marker() {
        let glyphs = Glyphs::default();
        assert_eq!(glyphs.glyph(true), '1');
        assert_eq!(glyphs.glyph(false), '-');
    }
}
