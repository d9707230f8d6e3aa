use crate::error::{LoaError, Result};
use std::fmt;
use std::str::FromStr;

/// Number of columns and rows on the board.
pub const BOARD_SIZE: u8 = 8;

/// Contents of a single square: one of the two sides, or nothing.
/// Black is the first side to move and starts on rows 1 and 8.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Piece {
    Black,
    White,
    Empty,
}

impl Piece {
    /// Returns the single-character abbreviation used in dumps and position text.
    pub const fn abbrev(self) -> char {
        match self {
            Piece::Black => 'b',
            Piece::White => 'w',
            Piece::Empty => '-',
        }
    }

    /// Returns the lowercase full name ("black", "white" or "empty").
    pub const fn full_name(self) -> &'static str {
        match self {
            Piece::Black => "black",
            Piece::White => "white",
            Piece::Empty => "empty",
        }
    }

    /// Returns the other side.
    /// Panics for `Empty`, which belongs to no side.
    pub const fn opposite(self) -> Self {
        match self {
            Piece::Black => Piece::White,
            Piece::White => Piece::Black,
            Piece::Empty => panic!("Empty has no opposite"),
        }
    }

    /// Returns true for `Empty`.
    pub const fn is_empty(self) -> bool {
        matches!(self, Piece::Empty)
    }

    /// Parses an abbreviation as produced by [`Piece::abbrev`].
    pub fn from_abbrev(c: char) -> Result<Self> {
        match c {
            'b' => Ok(Piece::Black),
            'w' => Ok(Piece::White),
            '-' => Ok(Piece::Empty),
            _ => Err(LoaError::InvalidPiece(c.to_string())),
        }
    }

    /// Parses a player name, ignoring case. Only the two sides are players.
    pub fn from_player_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "black" | "b" => Ok(Piece::Black),
            "white" | "w" => Ok(Piece::White),
            _ => Err(LoaError::InvalidPiece(name.to_string())),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name())
    }
}

/// The eight compass directions a line of action can take.
///
/// Declaration order is the successor order N, NE, E, SE, S, SW, W, NW.
/// Move enumeration walks directions in exactly this order, so reordering
/// the variants changes which move the search prefers on ties.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    /// All directions in successor order.
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// Column delta of one step.
    pub const fn dc(self) -> i8 {
        match self {
            Direction::N | Direction::S => 0,
            Direction::NE | Direction::E | Direction::SE => 1,
            Direction::SW | Direction::W | Direction::NW => -1,
        }
    }

    /// Row delta of one step.
    pub const fn dr(self) -> i8 {
        match self {
            Direction::E | Direction::W => 0,
            Direction::N | Direction::NE | Direction::NW => 1,
            Direction::SE | Direction::S | Direction::SW => -1,
        }
    }

    /// Returns the next direction in enumeration order, or None after NW.
    pub const fn succ(self) -> Option<Self> {
        match self {
            Direction::N => Some(Direction::NE),
            Direction::NE => Some(Direction::E),
            Direction::E => Some(Direction::SE),
            Direction::SE => Some(Direction::S),
            Direction::S => Some(Direction::SW),
            Direction::SW => Some(Direction::W),
            Direction::W => Some(Direction::NW),
            Direction::NW => None,
        }
    }

    /// Returns the direction pointing the opposite way.
    pub const fn inverse(self) -> Self {
        match self {
            Direction::N => Direction::S,
            Direction::NE => Direction::SW,
            Direction::E => Direction::W,
            Direction::SE => Direction::NW,
            Direction::S => Direction::N,
            Direction::SW => Direction::NE,
            Direction::W => Direction::E,
            Direction::NW => Direction::SE,
        }
    }

    /// Sign-normalizes a coordinate delta into a direction.
    ///
    /// Fails with [`LoaError::ZeroDelta`] when both components are zero and
    /// with [`LoaError::NotALine`] when the delta is neither orthogonal nor
    /// diagonal.
    pub fn from_delta(dc: i8, dr: i8) -> Result<Self> {
        if dc == 0 && dr == 0 {
            return Err(LoaError::ZeroDelta);
        }
        if dc != 0 && dr != 0 && dc.abs() != dr.abs() {
            return Err(LoaError::NotALine { dc, dr });
        }

        let dir = match (dc.signum(), dr.signum()) {
            (0, 1) => Direction::N,
            (1, 1) => Direction::NE,
            (1, 0) => Direction::E,
            (1, -1) => Direction::SE,
            (0, -1) => Direction::S,
            (-1, -1) => Direction::SW,
            (-1, 0) => Direction::W,
            (-1, 1) => Direction::NW,
            _ => unreachable!("signum outside -1..=1"),
        };
        Ok(dir)
    }
}

/// A square on the board.
/// Stored as a row-major index so that ascending indices visit row 1
/// left to right, then row 2, and so on.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square(u8);

impl Square {
    /// The bottom-left corner.
    pub const A1: Square = Square(0);

    /// Creates a square from a 1-based column (a = 1) and row.
    /// Returns None if either coordinate is off the board.
    pub const fn at(col: u8, row: u8) -> Option<Self> {
        if col >= 1 && col <= BOARD_SIZE && row >= 1 && row <= BOARD_SIZE {
            Some(Square((row - 1) * BOARD_SIZE + (col - 1)))
        } else {
            None
        }
    }

    /// Creates a square from index (0-63).
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < BOARD_SIZE * BOARD_SIZE {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Returns the 1-based column.
    pub const fn col(self) -> u8 {
        self.0 % BOARD_SIZE + 1
    }

    /// Returns the 1-based row.
    pub const fn row(self) -> u8 {
        self.0 / BOARD_SIZE + 1
    }

    /// Returns the square index (0-63).
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the square displaced by the given deltas, if it is on the board.
    pub const fn offset(self, dc: i8, dr: i8) -> Option<Self> {
        let col = self.col() as i8 + dc;
        let row = self.row() as i8 + dr;
        if col < 1 || row < 1 {
            return None;
        }
        Square::at(col as u8, row as u8)
    }

    /// Returns the square `steps` squares away in `dir`, if on the board.
    pub const fn step(self, dir: Direction, steps: u8) -> Option<Self> {
        let steps = steps as i8;
        self.offset(dir.dc() * steps, dir.dr() * steps)
    }

    /// Minimum number of king steps between two squares.
    pub const fn king_distance(self, other: Square) -> u8 {
        let col_diff = self.col().abs_diff(other.col());
        let row_diff = self.row().abs_diff(other.row());

        if col_diff > row_diff {
            col_diff
        } else {
            row_diff
        }
    }

    /// Iterates over every square in row-major order (a1, b1, ..., h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE * BOARD_SIZE).map(Square)
    }
}

impl FromStr for Square {
    type Err = LoaError;

    /// Parses a designator matching `[a-h][1-8]`.
    fn from_str(s: &str) -> Result<Self> {
        match s.as_bytes() {
            [c @ b'a'..=b'h', r @ b'1'..=b'8'] => {
                Square::at(c - b'a' + 1, r - b'0').ok_or_else(|| LoaError::InvalidSquare(s.into()))
            }
            _ => Err(LoaError::InvalidSquare(s.to_string())),
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = (b'a' + self.col() - 1) as char;
        write!(f, "{}{}", col, self.row())
    }
}
