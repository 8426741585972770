use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const BOARD_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    /// +1 for Black, -1 for White. Scores are Black-positive, so multiplying
    /// by this turns them into the mover's point of view.
    pub const fn sign(self) -> i32 {
        match self {
            Self::Black => 1,
            Self::White => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Black => f.write_str("black"),
            Self::White => f.write_str("white"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    pub const fn color(self) -> Option<Color> {
        match self {
            Self::Empty => None,
            Self::Black => Some(Color::Black),
            Self::White => Some(Color::White),
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    const fn symbol(self) -> char {
        match self {
            Self::Empty => '-',
            Self::Black => 'B',
            Self::White => 'W',
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Self::Black,
            Color::White => Self::White,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("coordinate ({row}, {col}) is outside the 8x8 board")]
pub struct CoordinateError {
    pub row: usize,
    pub col: usize,
}

/// Wire shape of a coordinate; validated on the way in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WireCoordinate {
    pub row: u8,
    pub col: u8,
}

/// A cell position that is always inside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "WireCoordinate", into = "WireCoordinate")]
pub struct BoardCoordinate {
    row: usize,
    col: usize,
}

impl BoardCoordinate {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Row-major square index in `0..64`.
    #[must_use]
    pub const fn from_index(sq: usize) -> Option<Self> {
        Self::new(sq / BOARD_SIZE, sq % BOARD_SIZE)
    }

    pub const fn row(self) -> usize {
        self.row
    }

    pub const fn col(self) -> usize {
        self.col
    }

    pub const fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// One step in `dir`, or `None` when that walks off the board.
    #[must_use]
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub const fn step(self, dir: Direction) -> Option<Self> {
        let (dr, dc) = dir.offset();
        let r = self.row as isize + dr;
        let c = self.col as isize + dc;
        if r < 0 || c < 0 {
            return None;
        }
        Self::new(r as usize, c as usize)
    }

    /// Every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..BOARD_SIZE * BOARD_SIZE).filter_map(Self::from_index)
    }
}

impl TryFrom<WireCoordinate> for BoardCoordinate {
    type Error = CoordinateError;

    fn try_from(raw: WireCoordinate) -> Result<Self, Self::Error> {
        let (row, col) = (usize::from(raw.row), usize::from(raw.col));
        Self::new(row, col).ok_or(CoordinateError { row, col })
    }
}

impl From<BoardCoordinate> for WireCoordinate {
    #[allow(clippy::cast_possible_truncation)]
    fn from(coord: BoardCoordinate) -> Self {
        Self {
            row: coord.row as u8,
            col: coord.col as u8,
        }
    }
}

impl fmt::Display for BoardCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    West,
    East,
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Direction {
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::South,
        Self::West,
        Self::East,
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::North => (-1, 0),
            Self::South => (1, 0),
            Self::West => (0, -1),
            Self::East => (0, 1),
            Self::NorthWest => (-1, -1),
            Self::NorthEast => (-1, 1),
            Self::SouthWest => (1, -1),
            Self::SouthEast => (1, 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("expected 8 ranks separated by '/', found {0}")]
    RankCount(usize),
    #[error("rank {rank} has {len} cells, expected 8")]
    RankLength { rank: usize, len: usize },
    #[error("unknown cell symbol '{0}'")]
    UnknownSymbol(char),
}

/// 8x8 grid, copied by value. Searches take their own copy per branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The starting position: four disks on the center diagonals.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.setup_initial_position();
        board
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    fn setup_initial_position(&mut self) {
        let center = [
            (3, 3, Cell::White),
            (3, 4, Cell::Black),
            (4, 3, Cell::Black),
            (4, 4, Cell::White),
        ];
        for (r, c, cell) in center {
            if let Some(pos) = BoardCoordinate::new(r, c) {
                self.set(pos, cell);
            }
        }
    }

    #[must_use]
    pub fn get(&self, pos: BoardCoordinate) -> Cell {
        self.cells
            .get(pos.row)
            .and_then(|rank| rank.get(pos.col))
            .copied()
            .unwrap_or_default()
    }

    pub fn set(&mut self, pos: BoardCoordinate, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(pos.row).and_then(|rank| rank.get_mut(pos.col)) {
            *slot = cell;
        }
    }

    #[must_use]
    pub fn disk_count(&self, color: Color) -> usize {
        let target = Cell::from(color);
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == target)
            .count()
    }

    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_empty()).count()
    }

    /// Compact text form: ranks top to bottom joined by '/', one of
    /// `B`, `W` or `-` per cell.
    #[must_use]
    pub fn to_notation(&self) -> String {
        let ranks: Vec<String> = self
            .cells
            .iter()
            .map(|rank| rank.iter().map(|c| c.symbol()).collect())
            .collect();
        ranks.join("/")
    }

    pub fn from_notation(notation: &str) -> Result<Self, NotationError> {
        let ranks: Vec<&str> = notation.trim().split('/').collect();
        if ranks.len() != BOARD_SIZE {
            return Err(NotationError::RankCount(ranks.len()));
        }

        let mut board = Self::empty();
        for (r, rank) in ranks.iter().enumerate() {
            let len = rank.chars().count();
            if len != BOARD_SIZE {
                return Err(NotationError::RankLength { rank: r, len });
            }
            for (c, ch) in rank.chars().enumerate() {
                let cell = match ch {
                    'B' | 'b' | 'X' | 'x' => Cell::Black,
                    'W' | 'w' | 'O' | 'o' => Cell::White,
                    '-' | '.' => Cell::Empty,
                    other => return Err(NotationError::UnknownSymbol(other)),
                };
                board.set(BoardCoordinate { row: r, col: c }, cell);
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  0 1 2 3 4 5 6 7")?;
        for (r, rank) in self.cells.iter().enumerate() {
            write!(f, "{r}")?;
            for cell in rank {
                write!(f, " {}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
