use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use metrohash::MetroHash64;

use crate::{
    pos, rule,
    seed::{self, Glyphs, Seed},
    utils::NEIGHBOR_OFFSETS,
    Cell, Error, Pos, Result,
};

/// A fixed-size grid of cells with open boundaries.
///
/// Cells are stored row-major: `pos.x` is the column, `pos.y` the row.
/// Positions outside the grid read as dead cells.
#[derive(Debug, Clone)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    /// buffer of the previous generation, reused by the next cycle.
    scratch: Vec<Cell>,
}

impl Board {
    /// Builds a board from rows of cell states.
    ///
    /// Fails with [`Error::InvalidSeed`] if there are no rows, if the rows
    /// hold no cells, or if they differ in length.
    pub fn new<R>(rows: impl IntoIterator<Item = R>) -> Result<Self>
    where
        R: IntoIterator<Item = bool>,
    {
        let rows: Vec<Vec<bool>> = rows
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect();
        let (width, height) = seed::dimensions(&rows)?;
        let cells = rows.into_iter().flatten().map(Cell::from).collect();
        Ok(Self {
            width,
            height,
            cells,
            scratch: Vec::new(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, Pos { x, y }: Pos) -> Option<usize> {
        let x = usize::try_from(x).ok().filter(|x| *x < self.width)?;
        let y = usize::try_from(y).ok().filter(|y| *y < self.height)?;
        Some(y * self.width + x)
    }

    pub fn get(&self, pos: Pos) -> Cell {
        self.index(pos)
            .map(|index| self.cells[index])
            .unwrap_or_else(Cell::dead)
    }

    /// every position of the grid, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        // dimensions never exceed `seed::MAX_EXTENT`, so both fit in an i32
        let width = i32::try_from(self.width).unwrap_or(i32::MAX);
        let height = i32::try_from(self.height).unwrap_or(i32::MAX);
        (0..height).flat_map(move |y| (0..width).map(move |x| pos!(x, y)))
    }

    /// Counts the living cells among the 8 neighbors of `pos`.
    ///
    /// Neighbors outside of the grid are not counted, so corners see at most
    /// 3 and edges at most 5. `pos` itself may lie outside of the grid.
    pub fn count_live_neighbors(&self, pos: Pos) -> usize {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|offset| pos.checked_add(*offset))
            .filter(|neighbor| self.get(*neighbor).is_alive())
            .count()
    }

    /// Advances the board by one generation.
    ///
    /// Every new state is computed from the previous generation, which is
    /// kept untouched until the whole new generation is ready.
    pub fn cycle(&mut self) {
        let mut next = std::mem::take(&mut self.scratch);
        next.clear();
        next.extend(self.positions().map(|pos| {
            let alive = self.get(pos).is_alive();
            let live_neighbors = self.count_live_neighbors(pos);
            Cell::from(rule::apply(alive, live_neighbors))
        }));
        self.scratch = std::mem::replace(&mut self.cells, next);
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn is_extinct(&self) -> bool {
        self.live_count() == 0
    }

    /// The raw grid, one vector per row.
    pub fn rows(&self) -> Vec<Vec<bool>> {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(Cell::is_alive).collect())
            .collect()
    }

    pub fn render(&self) -> String {
        self.render_with(Glyphs::default())
    }

    /// One line per row, without a trailing newline.
    pub fn render_with(&self, glyphs: Glyphs) -> String {
        let mut result = String::with_capacity((self.width + 1) * self.height);
        for (index, row) in self.cells.chunks(self.width).enumerate() {
            if index > 0 {
                result.push('\n');
            }
            result.extend(row.iter().map(|cell| glyphs.glyph(cell.is_alive())));
        }
        result
    }

    /// 64 bits metrohash of the dimensions and cell states.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = MetroHash64::default();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.width.hash(state);
        self.height.hash(state);
        self.cells.hash(state);
    }
}

impl From<Seed> for Board {
    fn from(seed: Seed) -> Self {
        let width = seed.width();
        let height = seed.height();
        let cells = seed.into_rows().into_iter().flatten().map(Cell::from).collect();
        Self {
            width,
            height,
            cells,
            scratch: Vec::new(),
        }
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Seed::parse(text).map(Board::from)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
