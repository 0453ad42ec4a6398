use std::fmt;

use super::square::Square;
use super::Board;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "    a   b   c   d   e   f   g   h")?;
        writeln!(f, "  ┌───┬───┬───┬───┬───┬───┬───┬───┐")?;

        for row in 0..8u8 {
            write!(f, "{} │", row + 1)?;
            for col in 0..8u8 {
                let disc = match self.owner(Square::new(row, col)) {
                    Some(color) => color.to_notation_char(),
                    None => '·',
                };
                write!(f, " {} │", disc)?;
            }
            writeln!(f, " {}", row + 1)?;

            if row < 7 {
                writeln!(f, "  ├───┼───┼───┼───┼───┼───┼───┼───┤")?;
            } else {
                writeln!(f, "  └───┴───┴───┴───┴───┴───┴───┴───┘")?;
            }
        }

        writeln!(f, "    a   b   c   d   e   f   g   h")?;
        let counts = self.piece_counts();
        write!(
            f,
            "Turn: {}  (black {}, white {})",
            self.turn(),
            counts.black,
            counts.white
        )
    }
}

/// Builds a board from a picture of its rows, top row first, using `B`, `W`
/// and `.`. Black is to move; call `set_turn` to change that.
#[macro_export]
macro_rules! reversi_position {
    ($($cell:tt)*) => {{
        let mut board = $crate::board::Board::new();
        // Convert all input tokens to a string and filter out whitespace characters.
        let cells: Vec<_> = stringify!($($cell)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        assert_eq!(cells.len(), 64, "Invalid number of squares. Expected 64, got {}", cells.len());
        for (i, &c) in cells.iter().enumerate() {
            let color = match c {
                'B' => $crate::board::color::Color::Black,
                'W' => $crate::board::color::Color::White,
                '.' => continue,
                _ => panic!("Invalid character in reversi position: {}", c),
            };
            let square = $crate::board::square::Square::from_index(i as u8).unwrap();
            board.put(square, color).unwrap();
        }
        board
    }};
}
