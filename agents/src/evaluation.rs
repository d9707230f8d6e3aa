use loa_core::{Board, Piece, Square, BOARD_SIZE};

/// Term awarded when a side's pieces cannot be packed any tighter, or all sit
/// on the four central squares. Large enough to dominate the usual fractions.
pub const PACKED_TERM: f64 = 2.0;

/// Types that can be scored from one side's point of view.
pub trait Evaluatable {
    fn evaluate_for(&self, side: Piece) -> f64;
}

impl Evaluatable for Board {
    fn evaluate_for(&self, side: Piece) -> f64 {
        evaluate(self, side)
    }
}

/// Scores a position from `side`'s perspective: that side's heuristic score
/// minus the opponent's. Positive values favor `side`.
pub fn evaluate(board: &Board, side: Piece) -> f64 {
    side_score(board, side) - side_score(board, side.opposite())
}

/// Heuristic score for one side: compactness plus centralization.
/// A side with no pieces scores zero.
pub fn side_score(board: &Board, side: Piece) -> f64 {
    match centroid(board, side) {
        Some(center) => compactness(board, side, center) + centralization(board, side),
        None => 0.0,
    }
}

/// Integer centroid of `side`'s pieces: the truncated mean column and row.
pub fn centroid(board: &Board, side: Piece) -> Option<Square> {
    let (mut cols, mut rows, mut count) = (0u32, 0u32, 0u32);
    for sq in board.pieces(side) {
        cols += u32::from(sq.col());
        rows += u32::from(sq.row());
        count += 1;
    }
    if count == 0 {
        return None;
    }
    Square::at((cols / count) as u8, (rows / count) as u8)
}

/// Reciprocal of how far the pieces are spread beyond the tightest possible
/// packing around `center`.
pub fn compactness(board: &Board, side: Piece, center: Square) -> f64 {
    let mut count = 0;
    let mut total = 0i64;
    for sq in board.pieces(side) {
        count += 1;
        total += i64::from(sq.king_distance(center));
    }
    let excess = total - i64::from(min_packed_distance(count, center));
    if excess <= 0 {
        PACKED_TERM
    } else {
        1.0 / excess as f64
    }
}

/// Smallest possible sum of king distances from `center` for `count` pieces,
/// one of which sits on the center itself.
///
/// Only a corner center is treated specially: every other center, edge
/// squares included, is given the full ring of eight neighbours. Pieces
/// beyond that ring are counted at distance two.
pub fn min_packed_distance(count: usize, center: Square) -> u32 {
    const RING: u32 = 8;

    let others = count.saturating_sub(1) as u32;
    if is_corner(center) || others <= RING {
        others
    } else {
        RING + 2 * (others - RING)
    }
}

fn is_corner(sq: Square) -> bool {
    let on_edge = |v: u8| v == 1 || v == BOARD_SIZE;
    on_edge(sq.col()) && on_edge(sq.row())
}

/// Reciprocal of the summed distance of `side`'s pieces from the middle of
/// the board.
pub fn centralization(board: &Board, side: Piece) -> f64 {
    let total: u32 = board.pieces(side).map(center_distance).sum();
    if total == 0 {
        PACKED_TERM
    } else {
        1.0 / f64::from(total)
    }
}

/// King distance from the board's midpoint (4.5, 4.5), each axis offset
/// truncated toward zero. The four central squares are at distance 0 and the
/// outer ring at 3.
pub fn center_distance(sq: Square) -> u32 {
    let axis = |v: u8| u32::from(if v <= 4 { 4 - v } else { v - 5 });
    axis(sq.col()).max(axis(sq.row()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use loa_core::positions;

    const EPSILON: f64 = 1e-12;

    fn sq(text: &str) -> Square {
        text.parse().unwrap()
    }

    #[test]
    fn test_starting_position_is_balanced() {
        let board = Board::new();

        // Both sides: distance total 42, packed minimum 14, centre sum 36.
        let expected = 1.0 / 28.0 + 1.0 / 36.0;
        assert!((side_score(&board, Piece::Black) - expected).abs() < EPSILON);
        assert!((side_score(&board, Piece::White) - expected).abs() < EPSILON);
        assert_eq!(evaluate(&board, Piece::Black), 0.0);
        assert_eq!(board.evaluate_for(Piece::White), 0.0);
    }

    #[test]
    fn test_centroid_truncates() {
        let board = Board::new();
        assert_eq!(centroid(&board, Piece::Black), Some(sq("d4")));
        assert_eq!(centroid(&board, Piece::White), Some(sq("d4")));
        assert_eq!(centroid(&Board::empty(Piece::Black), Piece::Black), None);
    }

    #[test]
    fn test_connected_block_is_maximally_compact() {
        let board = Board::from_position(positions::BLACK_CONNECTED).unwrap();
        let center = centroid(&board, Piece::Black).unwrap();
        assert_eq!(center, sq("c4"));
        assert_eq!(compactness(&board, Piece::Black, center), PACKED_TERM);
        assert!((centralization(&board, Piece::Black) - 1.0 / 11.0).abs() < EPSILON);

        let black = evaluate(&board, Piece::Black);
        assert!((black - 2.0274170274170276).abs() < EPSILON);
        assert_eq!(evaluate(&board, Piece::White), -black);
    }

    #[test]
    fn test_capture_shifts_balance() {
        let mut board = Board::new();
        let mv = loa_core::Move::parse("c1-a3", &board).unwrap();
        board.make_move(mv);

        // White lost a piece and is now slightly more compact.
        let score = evaluate(&board, Piece::Black);
        assert!((score - -0.0038480038480038503).abs() < EPSILON);
    }

    #[test]
    fn test_min_packed_distance() {
        assert_eq!(min_packed_distance(12, sq("a1")), 11);
        assert_eq!(min_packed_distance(12, sq("a4")), 14);
        assert_eq!(min_packed_distance(6, sq("d1")), 5);
        assert_eq!(min_packed_distance(7, sq("d1")), 6);
        assert_eq!(min_packed_distance(9, sq("d4")), 8);
        assert_eq!(min_packed_distance(10, sq("d4")), 10);
        assert_eq!(min_packed_distance(12, sq("d4")), 14);
        assert_eq!(min_packed_distance(1, sq("h8")), 0);
    }

    #[test]
    fn test_edge_centroid_uses_interior_ring() {
        // Two full columns on the a and b files: centroid a4, distance total 19.
        let mut board = Board::empty(Piece::Black);
        for row in 2..=7 {
            board.set(1, row, Piece::Black, None);
            board.set(2, row, Piece::Black, None);
        }
        let center = centroid(&board, Piece::Black).unwrap();
        assert_eq!(center, sq("a4"));
        assert!((compactness(&board, Piece::Black, center) - 0.2).abs() < EPSILON);
        assert!((centralization(&board, Piece::Black) - 1.0 / 30.0).abs() < EPSILON);
    }

    #[test]
    fn test_center_distance() {
        for text in ["d4", "e4", "d5", "e5"] {
            assert_eq!(center_distance(sq(text)), 0);
        }
        assert_eq!(center_distance(sq("c3")), 1);
        assert_eq!(center_distance(sq("f6")), 1);
        assert_eq!(center_distance(sq("b5")), 2);
        assert_eq!(center_distance(sq("a1")), 3);
        assert_eq!(center_distance(sq("h4")), 3);
    }

    #[test]
    fn test_degenerate_sides() {
        // A lone central piece hits both guards.
        let mut board = Board::empty(Piece::Black);
        board.set(4, 4, Piece::Black, None);
        assert_eq!(side_score(&board, Piece::Black), 2.0 * PACKED_TERM);
        assert_eq!(side_score(&board, Piece::White), 0.0);
        assert_eq!(evaluate(&board, Piece::White), -2.0 * PACKED_TERM);

        // In a corner only compactness is guarded.
        let mut board = Board::empty(Piece::Black);
        board.set(1, 1, Piece::White, None);
        let expected = PACKED_TERM + 1.0 / 3.0;
        assert!((side_score(&board, Piece::White) - expected).abs() < EPSILON);

        assert_eq!(evaluate(&Board::empty(Piece::White), Piece::Black), 0.0);
    }
}
