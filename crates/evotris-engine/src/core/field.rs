use super::tetromino::{Tetromino, TetrominoKind};
use crate::InvalidDropError;

/// A single cell of the playfield.
///
/// A cell is either empty or filled by a block of the tetromino type that
/// placed it, so boards can be rendered with per-type characters and
/// converted to and from plain numeric grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell filled by a block of the given tetromino type.
    Filled(TetrominoKind),
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Returns the numeric value of this cell (0 for empty, 1-7 per type).
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Filled(kind) => kind.as_u8(),
        }
    }

    /// Parses a cell from its numeric value.
    ///
    /// # Examples
    ///
    /// ```
    /// use evotris_engine::{Cell, TetrominoKind};
    ///
    /// assert_eq!(Cell::from_u8(0), Some(Cell::Empty));
    /// assert_eq!(Cell::from_u8(3), Some(Cell::Filled(TetrominoKind::T)));
    /// assert_eq!(Cell::from_u8(8), None);
    /// ```
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        if value == 0 {
            return Some(Cell::Empty);
        }
        match TetrominoKind::from_u8(value) {
            Some(kind) => Some(Cell::Filled(kind)),
            None => None,
        }
    }

    /// Returns the display character for this cell (a space when empty).
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Filled(kind) => kind.as_char(),
        }
    }
}

/// The playfield: a fixed 22×10 grid of cells.
///
/// Row 0 is the top of the board and row indices increase downward. The
/// board is mutated only through [`Self::place`], [`Self::drop_piece`], and
/// [`Self::clear_lines`]; searches over candidate placements work on clones.
///
/// # Example
///
/// ```
/// use evotris_engine::{Field, Tetromino, TetrominoKind};
///
/// let mut field = Field::new();
/// let cleared = field
///     .drop_piece(Tetromino::new(TetrominoKind::O), 4)
///     .unwrap();
/// assert_eq!(cleared, 0);
/// assert_eq!(field.column_heights()[4], 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Field {
    cells: [[Cell; Self::WIDTH]; Self::HEIGHT],
}

impl Field {
    /// Number of columns.
    pub const WIDTH: usize = 10;
    /// Number of rows.
    pub const HEIGHT: usize = 22;

    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; Self::WIDTH]; Self::HEIGHT],
        }
    }

    /// Builds a board from a grid of numeric cell values.
    ///
    /// The grid must have exactly [`Self::HEIGHT`] rows of [`Self::WIDTH`]
    /// values each, every value in `0..=7` (0 empty, 1-7 per tetromino
    /// type). The values are copied into the new board.
    ///
    /// # Returns
    ///
    /// * `Some(Field)` - if the grid has the right shape and values
    /// * `None` - otherwise
    #[must_use]
    pub fn from_grid(grid: &[impl AsRef<[u8]>]) -> Option<Self> {
        if grid.len() != Self::HEIGHT {
            return None;
        }
        let mut field = Self::new();
        for (y, row) in grid.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != Self::WIDTH {
                return None;
            }
            for (x, &value) in row.iter().enumerate() {
                field.cells[y][x] = Cell::from_u8(value)?;
            }
        }
        Some(field)
    }

    /// Returns an iterator over the board rows, top row first.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; Self::WIDTH]> {
        self.cells.iter()
    }

    /// Tests whether the tetromino fits with the top-left corner of its
    /// bounding box at (`row`, `column`), without modifying the board.
    ///
    /// A placement fits when every occupied cell of the tetromino lands
    /// inside the board on an empty cell.
    #[must_use]
    pub fn can_place(&self, tetromino: Tetromino, row: usize, column: usize) -> bool {
        let shape = tetromino.shape();
        if row + shape.height() > Self::HEIGHT || column + shape.width() > Self::WIDTH {
            return false;
        }
        shape
            .occupied_positions()
            .all(|(dx, dy)| self.cells[row + dy][column + dx].is_empty())
    }

    /// Stamps the tetromino's occupied cells onto the board with the
    /// top-left corner of its bounding box at (`row`, `column`).
    ///
    /// The bounding box must lie inside the board; callers test with
    /// [`Self::can_place`] first. Already filled target cells are
    /// overwritten.
    pub fn place(&mut self, tetromino: Tetromino, row: usize, column: usize) {
        let shape = tetromino.shape();
        assert!(
            row + shape.height() <= Self::HEIGHT && column + shape.width() <= Self::WIDTH,
            "tetromino placement out of bounds"
        );
        for (dx, dy) in shape.occupied_positions() {
            self.cells[row + dy][column + dx] = Cell::Filled(tetromino.kind());
        }
    }

    /// Drops the tetromino into the board with the left edge of its bounding
    /// box at `column`, then clears any completed lines.
    ///
    /// Rows are probed from the top of the board downward and the piece
    /// settles on the last row that fits before the first obstruction, the
    /// way a piece falling from above would. Returns the number of lines the
    /// drop cleared (possibly 0).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDropError`] when the column leaves the piece out of
    /// bounds or no row fits it; the board is left untouched.
    pub fn drop_piece(
        &mut self,
        tetromino: Tetromino,
        column: usize,
    ) -> Result<usize, InvalidDropError> {
        let mut landing_row = None;
        for row in 0..Self::HEIGHT {
            if !self.can_place(tetromino, row, column) {
                break;
            }
            landing_row = Some(row);
        }
        let Some(row) = landing_row else {
            return Err(InvalidDropError);
        };
        self.place(tetromino, row, column);
        Ok(self.clear_lines())
    }

    /// Clears filled rows and returns the number of rows cleared.
    ///
    /// Cleared rows are removed, the rows above shift down in order, and
    /// fresh empty rows enter at the top.
    pub fn clear_lines(&mut self) -> usize {
        let mut count = 0;
        for y in (0..Self::HEIGHT).rev() {
            if self.cells[y].iter().all(|cell| !cell.is_empty()) {
                count += 1;
                continue;
            }
            if count > 0 {
                self.cells[y + count] = self.cells[y];
            }
        }
        self.cells[..count].fill([Cell::Empty; Self::WIDTH]);
        count
    }

    /// Counts the gaps in the board.
    ///
    /// A gap is an empty cell lying below the topmost filled cell of its
    /// column. Columns with no filled cells contribute nothing.
    #[must_use]
    pub fn count_gaps(&self) -> usize {
        let mut gaps = 0;
        for x in 0..Self::WIDTH {
            let mut below_surface = false;
            for y in 0..Self::HEIGHT {
                if !self.cells[y][x].is_empty() {
                    below_surface = true;
                } else if below_surface {
                    gaps += 1;
                }
            }
        }
        gaps
    }

    /// Returns the height of each column.
    ///
    /// A column's height is the distance from its topmost filled cell to
    /// the board floor; empty columns have height 0.
    #[must_use]
    pub fn column_heights(&self) -> [usize; Self::WIDTH] {
        let mut heights = [0; Self::WIDTH];
        for (x, height) in heights.iter_mut().enumerate() {
            for y in 0..Self::HEIGHT {
                if !self.cells[y][x].is_empty() {
                    *height = Self::HEIGHT - y;
                    break;
                }
            }
        }
        heights
    }
}
