//! Compact position text.
//!
//! Eight `/`-separated rows from row 8 down to row 1, each eight of `b`, `w`
//! or `-`, then a space and the side to move:
//! `-bbbbbb-/w------w/w------w/w------w/w------w/w------w/w------w/-bbbbbb- b`
//!
//! Unlike the debug dump this format round-trips. Move history is not part
//! of it.

use crate::board::Board;
use crate::error::{LoaError, Result};
use crate::types::{Piece, BOARD_SIZE};
use std::str::FromStr;

impl Board {
    /// Parses position text into a board with an empty history.
    pub fn from_position(text: &str) -> Result<Self> {
        let parts: Vec<&str> = text.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(LoaError::InvalidPosition(format!(
                "expected 2 fields, got {}",
                parts.len()
            )));
        }

        let turn = match parts[1] {
            "b" => Piece::Black,
            "w" => Piece::White,
            other => {
                return Err(LoaError::InvalidPosition(format!(
                    "side to move must be 'b' or 'w', got {other:?}"
                )))
            }
        };

        let rows: Vec<&str> = parts[0].split('/').collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(LoaError::InvalidPosition(format!(
                "expected 8 rows, got {}",
                rows.len()
            )));
        }

        let mut board = Board::empty(turn);
        for (i, text_row) in rows.iter().enumerate() {
            let row = BOARD_SIZE - i as u8;
            let cells: Vec<char> = text_row.chars().collect();
            if cells.len() != BOARD_SIZE as usize {
                return Err(LoaError::InvalidPosition(format!(
                    "row {row} has {} squares",
                    cells.len()
                )));
            }
            for (c, &ch) in cells.iter().enumerate() {
                let piece = Piece::from_abbrev(ch).map_err(|_| {
                    LoaError::InvalidPosition(format!("invalid square character {ch:?}"))
                })?;
                board.set(c as u8 + 1, row, piece, None);
            }
        }

        Ok(board)
    }

    /// Serializes the grid and side to move as position text.
    pub fn to_position(&self) -> String {
        let rows: Vec<String> = (1..=BOARD_SIZE)
            .rev()
            .map(|row| {
                (1..=BOARD_SIZE)
                    .map(|col| self.get(col, row).abbrev())
                    .collect()
            })
            .collect();
        format!("{} {}", rows.join("/"), self.turn().abbrev())
    }
}

impl FromStr for Board {
    type Err = LoaError;

    fn from_str(s: &str) -> Result<Self> {
        Board::from_position(s)
    }
}

/// Named positions.
pub mod positions {
    /// The standard opening position, Black to move.
    pub const STANDARD: &str =
        "-bbbbbb-/w------w/w------w/w------w/w------w/w------w/w------w/-bbbbbb- b";
    /// Perft leaf counts for [`STANDARD`] at depths 1-3.
    pub const STANDARD_PERFT: &[(u8, u64)] = &[(1, 36), (2, 1244), (3, 44952)];

    /// All twelve black pieces already connected in a block, white untouched.
    pub const BLACK_CONNECTED: &str =
        "--------/w------w/w------w/wbbbb--w/wbbbb--w/wbbbb--w/w------w/-------- w";
}
