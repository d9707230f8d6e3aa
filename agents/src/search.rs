use crate::evaluation::Evaluatable;
use loa_core::{generate_legal_moves, Board, Move, Piece};
use log::{debug, trace};

/// Plies searched by the machine player.
pub const DEPTH: u8 = 2;
/// Score of a position where the side being scored has already connected.
pub const WIN_SCORE: f64 = f64::MAX;
/// Score of a lost position, and the starting bound every node must beat.
pub const LOSS_SCORE: f64 = -100.0;

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: f64,
    pub depth: u8,
    pub nodes: u64,
}

struct SearchInfo {
    root_depth: u8,
    nodes: u64,
}

/// Searches `board` to [`DEPTH`] plies for `side`, which must be the side to
/// move. The board is searched on a private copy and never modified.
pub fn search(board: &Board, side: Piece) -> SearchResult {
    search_to_depth(board, side, DEPTH)
}

/// Like [`search`] with an explicit depth. Depth 0 picks the move with the
/// best immediate evaluation.
pub fn search_to_depth(board: &Board, side: Piece, depth: u8) -> SearchResult {
    debug_assert_eq!(board.turn(), side, "searching for the side not to move");

    let mut scratch = board.clone();
    let mut info = SearchInfo {
        root_depth: depth,
        nodes: 0,
    };
    let (best_move, score) = find_best_move(side, &mut scratch, depth, WIN_SCORE, &mut info);

    debug!(
        "search {} depth={} nodes={} best={} score={}",
        side.abbrev().to_ascii_uppercase(),
        depth,
        info.nodes,
        best_move.map_or_else(|| "none".to_string(), |mv| mv.to_string()),
        score
    );

    SearchResult {
        best_move,
        score,
        depth,
        nodes: info.nodes,
    }
}

/// Minimax with a single cutoff.
///
/// Returns the best move for `side` and its score from `side`'s point of
/// view. Each child is searched with this node's running best as its cutoff,
/// and a node stops looking once its own best reaches the cutoff passed to
/// it. The board is returned in the state it was given.
fn find_best_move(
    side: Piece,
    board: &mut Board,
    depth: u8,
    cutoff: f64,
    info: &mut SearchInfo,
) -> (Option<Move>, f64) {
    info.nodes += 1;

    // Checked in this order, so a position where both sides are connected
    // counts as a win for `side`.
    if board.pieces_contiguous(side) {
        return (None, WIN_SCORE);
    }
    if board.pieces_contiguous(side.opposite()) {
        return (None, LOSS_SCORE);
    }
    if depth == 0 {
        return guess_best_move(side, board, info);
    }

    let moves = generate_legal_moves(board);
    let mut best_move = None;
    let mut best_score = LOSS_SCORE;

    for &mv in moves.iter() {
        board.make_move(mv);
        let (_, reply) = find_best_move(side.opposite(), board, depth - 1, best_score, info);
        board.retract();

        let score = -reply;
        if depth == info.root_depth {
            trace!("  {mv} -> {score}");
        }

        if score > best_score {
            best_score = score;
            best_move = Some(mv);
            if best_score >= cutoff {
                break;
            }
        }
    }

    (best_move, best_score)
}

/// Horizon node: scores each legal move by the evaluation after playing it.
fn guess_best_move(side: Piece, board: &mut Board, info: &mut SearchInfo) -> (Option<Move>, f64) {
    let moves = generate_legal_moves(board);
    let mut best_move = None;
    let mut best_score = LOSS_SCORE;

    for &mv in moves.iter() {
        board.make_move(mv);
        info.nodes += 1;
        let score = board.evaluate_for(side);
        board.retract();

        if info.root_depth == 0 {
            trace!("  {mv} -> {score}");
        }

        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
    }

    (best_move, best_score)
}
