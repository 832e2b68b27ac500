use rand::{Rng, distr::StandardUniform, prelude::Distribution};

use super::field::Cell;

/// A tetromino with a type and a rotation state.
///
/// Tetrominoes are immutable values. Rotation operations return new
/// instances, leaving the original untouched, and never change the type tag.
///
/// # Equality
///
/// Two tetrominoes are equal when they have the same type and their current
/// orientations occupy the same cells. Orientations that coincide compare
/// equal even though their rotation counters differ: an S rotated right
/// equals an S rotated left, and all four orientations of an O are equal.
///
/// # Example
///
/// ```
/// use evotris_engine::{Tetromino, TetrominoKind};
///
/// let tetromino = Tetromino::new(TetrominoKind::S);
/// assert_eq!(tetromino.rotated_right(), tetromino.rotated_left());
/// assert_ne!(tetromino.rotated_right(), tetromino);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Tetromino {
    kind: TetrominoKind,
    rotation: TetrominoRotation,
}

impl Tetromino {
    /// Creates a tetromino in its canonical orientation.
    #[must_use]
    pub fn new(kind: TetrominoKind) -> Self {
        Self {
            kind,
            rotation: TetrominoRotation::default(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> TetrominoKind {
        self.kind
    }

    #[must_use]
    pub fn rotation(&self) -> TetrominoRotation {
        self.rotation
    }

    /// Returns the occupied-cell grid of the current orientation.
    #[must_use]
    pub fn shape(&self) -> &'static TetrominoShape {
        &TETROMINO_SHAPES[self.kind.index()][self.rotation.as_usize()]
    }

    /// Width of the bounding box in the current orientation.
    #[must_use]
    pub fn width(&self) -> usize {
        self.shape().width()
    }

    /// Height of the bounding box in the current orientation.
    #[must_use]
    pub fn height(&self) -> usize {
        self.shape().height()
    }

    #[must_use]
    pub fn rotated_right(&self) -> Self {
        Self {
            kind: self.kind,
            rotation: self.rotation.rotated_right(),
        }
    }

    #[must_use]
    pub fn rotated_left(&self) -> Self {
        Self {
            kind: self.kind,
            rotation: self.rotation.rotated_left(),
        }
    }

    /// Rotates by 180°.
    #[must_use]
    pub fn flipped(&self) -> Self {
        self.rotated_right().rotated_right()
    }

    /// Rotates by `quarter_turns` quarter turns clockwise; negative values
    /// rotate counterclockwise.
    #[must_use]
    pub fn rotated_by(&self, quarter_turns: i32) -> Self {
        Self {
            kind: self.kind,
            rotation: self.rotation.rotated_by(quarter_turns),
        }
    }
}

impl PartialEq for Tetromino {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.shape() == other.shape()
    }
}

impl Eq for Tetromino {}

/// Rotation state of a tetromino.
///
/// Represents one of four rotation states:
///
/// - `0`: 0° (canonical orientation)
/// - `1`: 90° clockwise
/// - `2`: 180°
/// - `3`: 270° clockwise (90° counterclockwise)
///
/// Rotation operations wrap around modulo 4.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TetrominoRotation(u8);

impl TetrominoRotation {
    #[must_use]
    pub fn rotated_right(self) -> Self {
        TetrominoRotation((self.0 + 1) % 4)
    }

    #[must_use]
    pub fn rotated_left(self) -> Self {
        TetrominoRotation((self.0 + 3) % 4)
    }

    /// Advances by `quarter_turns` clockwise quarter turns, wrapping modulo 4
    /// in both directions.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn rotated_by(self, quarter_turns: i32) -> Self {
        let turns = quarter_turns.rem_euclid(4) as u8;
        TetrominoRotation((self.0 + turns) % 4)
    }

    const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Enum representing the type of tetromino.
///
/// Discriminants are the numeric cell values (1-7) used when boards are
/// built from or exported as plain grids; 0 denotes an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TetrominoKind {
    /// I-piece.
    I = 1,
    /// O-piece.
    O = 2,
    /// T-piece.
    T = 3,
    /// S-piece.
    S = 4,
    /// Z-piece.
    Z = 5,
    /// J-piece.
    J = 6,
    /// L-piece.
    L = 7,
}

impl Distribution<TetrominoKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> TetrominoKind {
        match rng.random_range(1..=7) {
            1 => TetrominoKind::I,
            2 => TetrominoKind::O,
            3 => TetrominoKind::T,
            4 => TetrominoKind::S,
            5 => TetrominoKind::Z,
            6 => TetrominoKind::J,
            _ => TetrominoKind::L,
        }
    }
}

impl TetrominoKind {
    /// Number of tetromino types (7).
    pub const LEN: usize = 7;

    const fn index(self) -> usize {
        self as usize - 1
    }

    /// Returns the numeric cell value of this type (1-7).
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Parses a tetromino type from its numeric cell value.
    ///
    /// # Examples
    ///
    /// ```
    /// use evotris_engine::TetrominoKind;
    ///
    /// assert_eq!(TetrominoKind::from_u8(1), Some(TetrominoKind::I));
    /// assert_eq!(TetrominoKind::from_u8(7), Some(TetrominoKind::L));
    /// assert_eq!(TetrominoKind::from_u8(0), None);
    /// ```
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(TetrominoKind::I),
            2 => Some(TetrominoKind::O),
            3 => Some(TetrominoKind::T),
            4 => Some(TetrominoKind::S),
            5 => Some(TetrominoKind::Z),
            6 => Some(TetrominoKind::J),
            7 => Some(TetrominoKind::L),
            _ => None,
        }
    }

    /// Returns the single character representation of this tetromino type.
    ///
    /// # Examples
    ///
    /// ```
    /// use evotris_engine::TetrominoKind;
    ///
    /// assert_eq!(TetrominoKind::I.as_char(), 'I');
    /// assert_eq!(TetrominoKind::T.as_char(), 'T');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            TetrominoKind::I => 'I',
            TetrominoKind::O => 'O',
            TetrominoKind::T => 'T',
            TetrominoKind::S => 'S',
            TetrominoKind::Z => 'Z',
            TetrominoKind::J => 'J',
            TetrominoKind::L => 'L',
        }
    }

    /// Parses a tetromino type from a single character.
    ///
    /// # Examples
    ///
    /// ```
    /// use evotris_engine::TetrominoKind;
    ///
    /// assert_eq!(TetrominoKind::from_char('I'), Some(TetrominoKind::I));
    /// assert_eq!(TetrominoKind::from_char('X'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(TetrominoKind::I),
            'O' => Some(TetrominoKind::O),
            'T' => Some(TetrominoKind::T),
            'S' => Some(TetrominoKind::S),
            'Z' => Some(TetrominoKind::Z),
            'J' => Some(TetrominoKind::J),
            'L' => Some(TetrominoKind::L),
            _ => None,
        }
    }
}

/// The occupied cells of a tetromino in one orientation.
///
/// Shapes are stored as tight bounding boxes: `width` and `height` give the
/// exact extent of the orientation (the I spans 4×1 cells canonically and
/// 1×4 once rotated), padded out to a fixed 4×4 backing array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TetrominoShape {
    cells: [[Cell; 4]; 4],
    width: usize,
    height: usize,
}

impl TetrominoShape {
    const fn tight(width: usize, height: usize, cells: [[Cell; 4]; 4]) -> Self {
        Self {
            cells,
            width,
            height,
        }
    }

    /// Width of the tight bounding box.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height of the tight bounding box.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the cell at `row`, `column` of the bounding box.
    #[must_use]
    pub const fn cell_at(&self, row: usize, column: usize) -> Cell {
        assert!(row < self.height && column < self.width);
        self.cells[row][column]
    }

    /// Returns an iterator over the rows of the bounding box, top row first.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells[..self.height]
            .iter()
            .map(|row| &row[..self.width])
    }

    /// Returns an iterator of `(column, row)` offsets of the occupied cells.
    pub fn occupied_positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells[..self.height]
            .iter()
            .enumerate()
            .flat_map(move |(dy, row)| {
                row[..self.width].iter().enumerate().filter_map(
                    move |(dx, &cell)| {
                        if cell.is_empty() { None } else { Some((dx, dy)) }
                    },
                )
            })
    }
}

/// Generates all 4 rotation states of a shape by rotating 90° clockwise.
///
/// Rotating a `w`×`h` tight grid yields an `h`×`w` grid with
/// `new[y][x] = old[h - 1 - x][y]`.
const fn shape_rotations(canonical: TetrominoShape) -> [TetrominoShape; 4] {
    let mut rotations = [canonical; 4];
    let mut i = 1;
    while i < 4 {
        let width = rotations[i - 1].height;
        let height = rotations[i - 1].width;
        let mut cells = [[Cell::Empty; 4]; 4];
        let mut y = 0;
        while y < height {
            let mut x = 0;
            while x < width {
                cells[y][x] = rotations[i - 1].cells[width - 1 - x][y];
                x += 1;
            }
            y += 1;
        }
        rotations[i] = TetrominoShape::tight(width, height, cells);
        i += 1;
    }
    rotations
}

const TETROMINO_SHAPES: [[TetrominoShape; 4]; TetrominoKind::LEN] = {
    use Cell::Empty as E;
    const I: Cell = Cell::Filled(TetrominoKind::I);
    const O: Cell = Cell::Filled(TetrominoKind::O);
    const T: Cell = Cell::Filled(TetrominoKind::T);
    const S: Cell = Cell::Filled(TetrominoKind::S);
    const Z: Cell = Cell::Filled(TetrominoKind::Z);
    const J: Cell = Cell::Filled(TetrominoKind::J);
    const L: Cell = Cell::Filled(TetrominoKind::L);
    const EEEE: [Cell; 4] = [E; 4];
    [
        // I-piece
        shape_rotations(TetrominoShape::tight(
            4,
            1,
            [[I, I, I, I], EEEE, EEEE, EEEE],
        )),
        // O-piece
        shape_rotations(TetrominoShape::tight(
            2,
            2,
            [[O, O, E, E], [O, O, E, E], EEEE, EEEE],
        )),
        // T-piece
        shape_rotations(TetrominoShape::tight(
            3,
            2,
            [[T, T, T, E], [E, T, E, E], EEEE, EEEE],
        )),
        // S-piece
        shape_rotations(TetrominoShape::tight(
            3,
            2,
            [[E, S, S, E], [S, S, E, E], EEEE, EEEE],
        )),
        // Z-piece
        shape_rotations(TetrominoShape::tight(
            3,
            2,
            [[Z, Z, E, E], [E, Z, Z, E], EEEE, EEEE],
        )),
        // J-piece
        shape_rotations(TetrominoShape::tight(
            3,
            2,
            [[J, J, J, E], [E, E, J, E], EEEE, EEEE],
        )),
        // L-piece
        shape_rotations(TetrominoShape::tight(
            3,
            2,
            [[L, L, L, E], [L, E, E, E], EEEE, EEEE],
        )),
    ]
};
