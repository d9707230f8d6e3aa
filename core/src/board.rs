//! Board state for Lines of Action.
//! The grid, the side to move and an undo history of applied moves.
use crate::error::Result;
use crate::move_gen::LegalMoves;
use crate::moves::Move;
use crate::types::*;
use log::trace;
use std::fmt;

const SQUARES: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// The standard starting layout, indexed `[row - 1][col - 1]`.
/// Note that row 1 is written first, so the array reads upside down.
pub const INITIAL_PIECES: [[Piece; 8]; 8] = {
    use Piece::{Black as B, Empty as E, White as W};
    [
        [E, B, B, B, B, B, B, E],
        [W, E, E, E, E, E, E, W],
        [W, E, E, E, E, E, E, W],
        [W, E, E, E, E, E, E, W],
        [W, E, E, E, E, E, E, W],
        [W, E, E, E, E, E, E, W],
        [W, E, E, E, E, E, E, W],
        [E, B, B, B, B, B, B, E],
    ]
};

/// Mutable game board with apply/retract history.
///
/// Moves are applied in place and undone with [`Board::retract`] in strict
/// LIFO order. Search relies on this instead of cloning the board per node.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    /// 64 squares, indexed by Square::index()
    squares: [Piece; SQUARES],
    /// Side to move
    turn: Piece,
    /// Applied and not yet retracted moves, oldest first
    history: Vec<Move>,
}

impl Board {
    /// Creates the standard starting position with Black to move.
    pub fn new() -> Self {
        Self::from_contents(&INITIAL_PIECES, Piece::Black)
    }

    /// Creates a board with no pieces and `turn` to move.
    pub fn empty(turn: Piece) -> Self {
        Self {
            squares: [Piece::Empty; SQUARES],
            turn,
            history: Vec::new(),
        }
    }

    /// Creates a board where `contents[r - 1][c - 1]` is the piece at
    /// column c, row r, and `turn` is to move. The history starts empty.
    pub fn from_contents(contents: &[[Piece; 8]; 8], turn: Piece) -> Self {
        let mut board = Self::empty(turn);
        for sq in Square::all() {
            board.squares[sq.index() as usize] =
                contents[sq.row() as usize - 1][sq.col() as usize - 1];
        }
        board
    }

    /// Resets to the standard starting position, discarding history.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Gets the piece at the given square.
    pub fn piece_at(&self, square: Square) -> Piece {
        self.squares[square.index() as usize]
    }

    /// Gets the piece at 1-based column `col` and row `row`.
    /// Panics if either coordinate is outside 1-8.
    pub fn get(&self, col: u8, row: u8) -> Piece {
        self.piece_at(Self::square(col, row))
    }

    /// Gets the piece on a square given as text such as `"e6"`.
    pub fn get_str(&self, square: &str) -> Result<Piece> {
        Ok(self.piece_at(square.parse()?))
    }

    /// Overwrites a square, optionally forcing which side moves next.
    /// Meant for building positions, not for play; history is untouched.
    pub fn set(&mut self, col: u8, row: u8, piece: Piece, next: Option<Piece>) {
        self.squares[Self::square(col, row).index() as usize] = piece;
        if let Some(next) = next {
            self.turn = next;
        }
    }

    /// Forces the side to move.
    pub fn set_turn(&mut self, turn: Piece) {
        self.turn = turn;
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Piece {
        self.turn
    }

    /// Number of moves made and not retracted.
    pub fn moves_made(&self) -> usize {
        self.history.len()
    }

    /// Applied moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The most recently applied move, if any.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Iterates over the squares holding `side`, in row-major order.
    pub fn pieces(&self, side: Piece) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&sq| self.piece_at(sq) == side)
    }

    /// Applies a move. The caller must have checked [`Board::is_legal`];
    /// only debug builds re-check it.
    ///
    /// An opposing piece on the destination is simply overwritten.
    pub fn make_move(&mut self, mv: Move) {
        debug_assert!(self.is_legal(mv), "illegal move {mv}");
        debug_assert_eq!(self.piece_at(mv.to()), mv.replaced_piece(), "stale move {mv}");
        trace!("{} plays {}", self.turn.full_name(), mv);

        self.squares[mv.to().index() as usize] = mv.moved_piece();
        self.squares[mv.from().index() as usize] = Piece::Empty;
        self.history.push(mv);
        self.turn = self.turn.opposite();
    }

    /// Undoes the most recent move, restoring both squares and the turn.
    /// Panics if no move has been made.
    pub fn retract(&mut self) {
        let mv = self.history.pop().expect("retract with no moves made");
        trace!("retract {}", mv);

        self.squares[mv.to().index() as usize] = mv.replaced_piece();
        self.squares[mv.from().index() as usize] = mv.moved_piece();
        self.turn = self.turn.opposite();
    }

    /// Returns true iff `mv` is legal for the side to move.
    ///
    /// The origin must hold the mover's piece and the destination must not.
    /// The move length must equal the number of pieces of either side on the
    /// whole line through the origin. The mover may jump its own pieces but
    /// never an opposing one; an opposing piece on the destination is captured.
    pub fn is_legal(&self, mv: Move) -> bool {
        let Ok(dir) = mv.direction() else {
            return false;
        };

        if self.piece_at(mv.from()) != self.turn || self.piece_at(mv.to()) == self.turn {
            return false;
        }

        let length = mv.length();
        if length != self.line_count(mv.from(), dir) {
            return false;
        }

        (1..length).all(|steps| match mv.from().step(dir, steps) {
            Some(sq) => {
                let piece = self.piece_at(sq);
                piece.is_empty() || piece == self.turn
            }
            None => false,
        })
    }

    /// Counts pieces of both sides on the full line through `square` in
    /// `dir`, looking both ways to the edges and including `square` itself.
    pub fn line_count(&self, square: Square, dir: Direction) -> u8 {
        let occupied = |d: Direction| {
            (1..BOARD_SIZE)
                .map_while(|steps| square.step(d, steps))
                .filter(|&sq| !self.piece_at(sq).is_empty())
                .count() as u8
        };

        let own = u8::from(!self.piece_at(square).is_empty());
        own + occupied(dir) + occupied(dir.inverse())
    }

    /// Returns the legal moves for the side to move in enumeration order.
    pub fn legal_moves(&self) -> LegalMoves<'_> {
        LegalMoves::new(self)
    }

    /// Returns true if the side to move has at least one legal move.
    pub fn has_legal_move(&self) -> bool {
        self.legal_moves().next().is_some()
    }

    /// Returns true iff either side's pieces are all connected.
    pub fn game_over(&self) -> bool {
        self.pieces_contiguous(Piece::Black) || self.pieces_contiguous(Piece::White)
    }

    /// Returns true iff every piece of `side` is reachable from every other
    /// through 8-directional adjacency. A side with no pieces counts as
    /// contiguous.
    pub fn pieces_contiguous(&self, side: Piece) -> bool {
        let Some(first) = self.pieces(side).next() else {
            return true;
        };

        let mut visited = [false; SQUARES];
        let mut stack = vec![first];
        visited[first.index() as usize] = true;
        let mut reached = 1;

        while let Some(sq) = stack.pop() {
            for dir in Direction::ALL {
                let Some(next) = sq.step(dir, 1) else {
                    continue;
                };
                let idx = next.index() as usize;
                if !visited[idx] && self.squares[idx] == side {
                    visited[idx] = true;
                    reached += 1;
                    stack.push(next);
                }
            }
        }

        reached == self.pieces(side).count()
    }

    /// Returns the winning side, if any.
    ///
    /// A single move can connect both sides at once; the side that made that
    /// move wins.
    pub fn winner(&self) -> Option<Piece> {
        let mover = self.turn.opposite();
        if self.pieces_contiguous(mover) {
            Some(mover)
        } else if self.pieces_contiguous(self.turn) {
            Some(self.turn)
        } else {
            None
        }
    }

    fn square(col: u8, row: u8) -> Square {
        match Square::at(col, row) {
            Some(sq) => sq,
            None => panic!("square ({col}, {row}) is off the board"),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Diagnostic dump: row 8 at the top, one abbreviation per square.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===")?;
        for row in (1..=BOARD_SIZE).rev() {
            write!(f, "    ")?;
            for col in 1..=BOARD_SIZE {
                write!(f, "{} ", self.get(col, row).abbrev())?;
            }
            writeln!(f)?;
        }
        writeln!(f, "Next move: {}", self.turn.full_name())?;
        write!(f, "===")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(text: &str, board: &Board) -> Move {
        Move::parse(text, board).unwrap()
    }

    #[test]
    fn test_starting_position() {
        let board = Board::new();

        assert_eq!(board.turn(), Piece::Black);
        assert_eq!(board.get(1, 1), Piece::Empty);
        assert_eq!(board.get(2, 1), Piece::Black);
        assert_eq!(board.get(7, 8), Piece::Black);
        assert_eq!(board.get(1, 2), Piece::White);
        assert_eq!(board.get(8, 7), Piece::White);
        assert_eq!(board.get(8, 8), Piece::Empty);
        assert_eq!(board.get_str("d5"), Ok(Piece::Empty));
        assert!(board.get_str("d9").is_err());
        assert_eq!(board.pieces(Piece::Black).count(), 12);
        assert_eq!(board.pieces(Piece::White).count(), 12);
        assert_eq!(board.moves_made(), 0);
    }

    #[test]
    #[should_panic(expected = "off the board")]
    fn test_get_out_of_range() {
        Board::new().get(0, 3);
    }

    #[test]
    fn test_set_forces_turn() {
        let mut board = Board::new();
        board.set(4, 4, Piece::White, Some(Piece::White));
        assert_eq!(board.get(4, 4), Piece::White);
        assert_eq!(board.turn(), Piece::White);

        board.set(4, 4, Piece::Empty, None);
        assert_eq!(board.turn(), Piece::White);
    }

    #[test]
    fn test_line_count() {
        let board = Board::new();
        let b1 = Square::at(2, 1).unwrap();
        assert_eq!(board.line_count(b1, Direction::N), 2);
        assert_eq!(board.line_count(b1, Direction::S), 2);
        assert_eq!(board.line_count(b1, Direction::E), 6);
        assert_eq!(board.line_count(b1, Direction::NW), 2);

        let d4 = Square::at(4, 4).unwrap();
        assert_eq!(board.line_count(d4, Direction::E), 2);
        assert_eq!(board.line_count(d4, Direction::NE), 0);
    }

    #[test]
    fn test_make_and_retract() {
        let mut board = Board::new();
        let before = board.clone();

        let capture = mv("c1-a3", &board);
        assert!(board.is_legal(capture));
        board.make_move(capture);

        assert_eq!(board.get(3, 1), Piece::Empty);
        assert_eq!(board.get(1, 3), Piece::Black);
        assert_eq!(board.turn(), Piece::White);
        assert_eq!(board.moves_made(), 1);
        assert_eq!(board.last_move(), Some(capture));
        assert_eq!(board.pieces(Piece::White).count(), 11);

        board.retract();
        assert_eq!(board, before);
    }

    #[test]
    #[should_panic(expected = "retract with no moves made")]
    fn test_retract_empty_history() {
        Board::new().retract();
    }

    #[test]
    fn test_vacuous_contiguity() {
        let board = Board::empty(Piece::Black);
        assert!(board.pieces_contiguous(Piece::Black));
        assert!(board.pieces_contiguous(Piece::White));
        assert!(board.game_over());
    }

    #[test]
    fn test_start_is_not_over() {
        let board = Board::new();
        assert!(!board.pieces_contiguous(Piece::Black));
        assert!(!board.pieces_contiguous(Piece::White));
        assert!(!board.game_over());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_contiguity_through_diagonals() {
        let mut board = Board::empty(Piece::Black);
        for (col, row) in [(1, 1), (2, 2), (3, 3), (4, 2), (5, 1)] {
            board.set(col, row, Piece::Black, None);
        }
        assert!(board.pieces_contiguous(Piece::Black));

        board.set(8, 8, Piece::Black, None);
        assert!(!board.pieces_contiguous(Piece::Black));
    }

    #[test]
    fn test_winner_prefers_mover() {
        let mut board = Board::empty(Piece::White);
        board.set(1, 1, Piece::Black, None);
        board.set(2, 2, Piece::Black, None);
        board.set(7, 7, Piece::White, None);
        board.set(8, 8, Piece::White, None);

        // Black just moved: both sides are connected, the mover wins.
        assert_eq!(board.winner(), Some(Piece::Black));

        board.set_turn(Piece::Black);
        assert_eq!(board.winner(), Some(Piece::White));

        board.set(5, 5, Piece::White, None);
        assert_eq!(board.winner(), Some(Piece::Black));
    }

    #[test]
    fn test_dump() {
        let dump = Board::new().to_string();
        let lines: Vec<&str> = dump.lines().collect();

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "===");
        assert_eq!(lines[1], "    - b b b b b b - ");
        assert_eq!(lines[2], "    w - - - - - - w ");
        assert_eq!(lines[8], "    - b b b b b b - ");
        assert_eq!(lines[9], "Next move: black");
        assert_eq!(lines[10], "===");
    }
}
