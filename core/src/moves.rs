use crate::board::Board;
use crate::error::{LoaError, Result};
use crate::types::{Direction, Piece, Square};
use std::fmt;

/// A move from one square to another, with the pieces that occupied both
/// squares when the move was created.
///
/// The snapshot makes a move self-contained: retracting it needs nothing but
/// the move itself, and later changes to the board never alter it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    moved: Piece,
    replaced: Piece,
}

impl Move {
    /// Creates a move between two squares, snapshotting their contents on `board`.
    pub fn new(from: Square, to: Square, board: &Board) -> Self {
        Self {
            from,
            to,
            moved: board.piece_at(from),
            replaced: board.piece_at(to),
        }
    }

    /// Creates the move of `length` squares from `from` in `dir`.
    /// Returns None if the destination is off the board.
    pub fn along(from: Square, length: u8, dir: Direction, board: &Board) -> Option<Self> {
        let to = from.step(dir, length)?;
        Some(Self::new(from, to, board))
    }

    /// Parses move text of the form `a2-e6` against `board`.
    ///
    /// Failure means the text is unparseable; whether the move is legal is a
    /// separate question for [`Board::is_legal`].
    pub fn parse(text: &str, board: &Board) -> Result<Self> {
        let (from, to) = text
            .split_once('-')
            .ok_or_else(|| LoaError::UnparseableMove(text.to_string()))?;
        let from: Square = from
            .parse()
            .map_err(|_| LoaError::UnparseableMove(text.to_string()))?;
        let to: Square = to
            .parse()
            .map_err(|_| LoaError::UnparseableMove(text.to_string()))?;
        Ok(Self::new(from, to, board))
    }

    pub const fn from(self) -> Square {
        self.from
    }

    pub const fn to(self) -> Square {
        self.to
    }

    /// The piece that stood on the origin when the move was created.
    pub const fn moved_piece(self) -> Piece {
        self.moved
    }

    /// The piece that stood on the destination (`Empty` unless capturing).
    pub const fn replaced_piece(self) -> Piece {
        self.replaced
    }

    /// Number of squares travelled, counting the destination.
    pub const fn length(self) -> u8 {
        let col_diff = self.from.col().abs_diff(self.to.col());
        let row_diff = self.from.row().abs_diff(self.to.row());
        if col_diff > row_diff {
            col_diff
        } else {
            row_diff
        }
    }

    /// Direction from origin to destination.
    pub fn direction(self) -> Result<Direction> {
        let dc = self.to.col() as i8 - self.from.col() as i8;
        let dr = self.to.row() as i8 - self.from.row() as i8;
        Direction::from_delta(dc, dr)
    }

    /// Returns true if this move removes an opposing piece.
    pub fn is_capture(self) -> bool {
        !self.replaced.is_empty()
    }

    /// Placeholder used to fill unused slots of a [`crate::MoveList`].
    pub(crate) const fn placeholder() -> Self {
        Self {
            from: Square::A1,
            to: Square::A1,
            moved: Piece::Empty,
            replaced: Piece::Empty,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}
