use crate::board::Board;
use crate::moves::Move;
use crate::types::{Direction, Square, BOARD_SIZE};
use std::iter::FusedIterator;

/// Upper bound on legal moves: at most one per (origin, direction) pair.
pub const MAX_MOVES: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize) * 8;

/// Lazy sequence of the legal moves for the side to move.
///
/// Origins are visited rows ascending, then columns ascending; each origin
/// holding the mover's piece is tried in direction order N through NW. For an
/// (origin, direction) pair the only candidate is the move whose length equals
/// the line count, and it is yielded only if [`Board::is_legal`] accepts it.
#[derive(Clone, Debug)]
pub struct LegalMoves<'a> {
    board: &'a Board,
    /// Current origin, None once every square has been visited
    square: Option<Square>,
    /// Last direction tried from `square`, None before N
    dir: Option<Direction>,
}

impl<'a> LegalMoves<'a> {
    pub(crate) fn new(board: &'a Board) -> Self {
        Self {
            board,
            square: Some(Square::A1),
            dir: None,
        }
    }
}

fn next_direction(dir: Option<Direction>) -> Option<Direction> {
    match dir {
        None => Some(Direction::N),
        Some(dir) => dir.succ(),
    }
}

impl Iterator for LegalMoves<'_> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        let board = self.board;

        while let Some(from) = self.square {
            if board.piece_at(from) == board.turn() {
                while let Some(dir) = next_direction(self.dir) {
                    self.dir = Some(dir);
                    let length = board.line_count(from, dir);
                    if let Some(mv) = Move::along(from, length, dir, board) {
                        if board.is_legal(mv) {
                            return Some(mv);
                        }
                    }
                }
            }

            self.square = Square::from_index(from.index() + 1);
            self.dir = None;
        }

        None
    }
}

impl FusedIterator for LegalMoves<'_> {}

/// A list of moves with a fixed capacity to avoid allocations.
/// Search collects into this so it can mutate the board while iterating.
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    count: usize,
}

impl MoveList {
    /// Creates an empty move list.
    pub const fn new() -> Self {
        Self {
            moves: [Move::placeholder(); MAX_MOVES],
            count: 0,
        }
    }

    /// Adds a move to the list.
    pub fn push(&mut self, mv: Move) {
        debug_assert!(self.count < MAX_MOVES, "Move list overflow");
        self.moves[self.count] = mv;
        self.count += 1;
    }

    /// Returns the number of moves.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the first move, if any.
    pub fn first(&self) -> Option<Move> {
        self.as_slice().first().copied()
    }

    /// Returns the moves as a slice.
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.count]
    }

    /// Returns an iterator over the moves.
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Move> for MoveList {
    fn extend<I: IntoIterator<Item = Move>>(&mut self, iter: I) {
        for mv in iter {
            self.push(mv);
        }
    }
}

/// Collects all legal moves for the side to move, in enumeration order.
pub fn generate_legal_moves(board: &Board) -> MoveList {
    let mut moves = MoveList::new();
    moves.extend(board.legal_moves());
    moves
}
