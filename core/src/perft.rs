use crate::board::Board;
use crate::move_gen::generate_legal_moves;
use crate::moves::Move;

/// Perft (performance test) results at each depth.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PerftResults {
    pub nodes: u64,
    pub captures: u64,
    /// Leaves where some side's pieces are all connected
    pub wins: u64,
}

impl PerftResults {
    /// Combines results from child nodes.
    pub fn add(&mut self, other: &Self) {
        self.nodes += other.nodes;
        self.captures += other.captures;
        self.wins += other.wins;
    }
}

/// Counts the leaves of the legal-move tree to the given depth.
///
/// Moves are applied and retracted on `board`, which is left as it was found.
/// Positions where the game is already over are expanded like any other,
/// so counts reflect move generation alone.
pub fn perft(board: &mut Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_legal_moves(board);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for &mv in moves.iter() {
        board.make_move(mv);
        nodes += perft(board, depth - 1);
        board.retract();
    }

    nodes
}

/// Performs perft and reports the leaf count under each root move.
pub fn perft_divide(board: &mut Board, depth: u8) -> Vec<(Move, u64)> {
    let moves = generate_legal_moves(board);
    let mut results = Vec::with_capacity(moves.len());

    for &mv in moves.iter() {
        board.make_move(mv);
        let nodes = if depth <= 1 { 1 } else { perft(board, depth - 1) };
        board.retract();
        results.push((mv, nodes));
    }

    results
}

/// Performs perft and classifies the final move of every leaf.
pub fn perft_detailed(board: &mut Board, depth: u8) -> PerftResults {
    let mut results = PerftResults::default();

    if depth == 0 {
        results.nodes = 1;
        return results;
    }

    let moves = generate_legal_moves(board);
    for &mv in moves.iter() {
        board.make_move(mv);

        if depth == 1 {
            results.nodes += 1;
            if mv.is_capture() {
                results.captures += 1;
            }
            if board.game_over() {
                results.wins += 1;
            }
        } else {
            let child = perft_detailed(board, depth - 1);
            results.add(&child);
        }

        board.retract();
    }

    results
}
