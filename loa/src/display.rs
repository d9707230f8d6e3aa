use crossterm::{
    queue,
    style::{Color as TermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};
use loa_core::{Board, Piece, Square, BOARD_SIZE};
use std::io::{self, Write};

/// Draws `board` with coordinates, colored pieces and the last move's
/// squares highlighted.
pub fn draw_board(out: &mut impl Write, board: &Board) -> io::Result<()> {
    let last = board.last_move();
    let highlighted = |sq: Square| last.is_some_and(|mv| mv.from() == sq || mv.to() == sq);

    queue!(out, Print("  a b c d e f g h  \n"), Print(" ┌─────────────────┐\n"))?;

    for row in (1..=BOARD_SIZE).rev() {
        queue!(out, Print(format!("{row}│ ")))?;

        for col in 1..=BOARD_SIZE {
            let Some(sq) = Square::at(col, row) else {
                continue;
            };

            let background = if highlighted(sq) {
                TermColor::DarkGreen
            } else if (col + row) % 2 == 0 {
                TermColor::DarkGrey
            } else {
                TermColor::Black
            };
            queue!(out, SetBackgroundColor(background))?;

            match board.piece_at(sq) {
                Piece::Black => queue!(out, SetForegroundColor(TermColor::Magenta), Print("● "))?,
                Piece::White => queue!(out, SetForegroundColor(TermColor::White), Print("○ "))?,
                Piece::Empty => queue!(out, Print("  "))?,
            }
            queue!(out, ResetColor)?;
        }

        queue!(out, Print(format!("│{row}\n")))?;
    }

    queue!(
        out,
        Print(" └─────────────────┘\n"),
        Print("  a b c d e f g h  \n"),
        Print(format!("{} to move", board.turn())),
    )?;
    if let Some(mv) = last {
        queue!(out, Print(format!(", last move {mv}")))?;
    }
    queue!(out, Print("\n"))?;

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_board_shows_coordinates_and_turn() {
        let mut board = Board::new();
        let mv = loa_core::Move::parse("c1-a3", &board).unwrap();
        board.make_move(mv);

        let mut buf = Vec::new();
        draw_board(&mut buf, &board).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("a b c d e f g h"));
        assert!(text.contains("white to move, last move c1-a3"));
        assert_eq!(text.matches('●').count(), 12);
        assert_eq!(text.matches('○').count(), 11);
    }
}
