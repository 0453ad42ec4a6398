//! Compact text form of a position, in the spirit of FEN: eight `/`-separated
//! rows from the top, `B` and `W` for discs, `.` or a digit run for empty
//! cells, then a space and `b` or `w` for the side to move.
//!
//! The standard opening is `8/8/8/3WB3/3BW3/8/8/8 b`.

use std::str::FromStr;

use thiserror::Error;

use super::color::Color;
use super::error::BoardError;
use super::square::Square;
use super::Board;

#[derive(Error, Debug)]
pub enum NotationParseError {
    #[error("Wrong number of fields: expected placement and side to move")]
    WrongNumberOfFields,
    #[error("Wrong number of rows: 8 expected, {row_count:?} given")]
    InvalidRowCount { row_count: usize },
    #[error("Row has the wrong length: {invalid_row:?}")]
    InvalidRowLength { invalid_row: String },
    #[error("Invalid disc character: {invalid_character:?}")]
    InvalidDiscCharacter { invalid_character: char },
    #[error("Invalid side to move: {invalid_color:?}")]
    InvalidColor { invalid_color: String },
    #[error("Error placing disc: {board_error:?}")]
    ErrorPlacingDisc { board_error: BoardError },
}

type NotationResult<T> = Result<T, NotationParseError>;

pub const STARTING_POSITION_NOTATION: &str = "8/8/8/3WB3/3BW3/8/8/8 b";

pub fn parse_position(notation: &str) -> NotationResult<Board> {
    let fields: Vec<&str> = notation.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(NotationParseError::WrongNumberOfFields);
    }

    let mut board = Board::new();
    parse_placement(&mut board, fields[0])?;
    board.set_turn(parse_side_to_move(fields[1])?);
    Ok(board)
}

pub fn to_notation(board: &Board) -> String {
    let rows: Vec<String> = (0..8u8)
        .map(|row| {
            let mut encoded = String::new();
            let mut empty_run = 0;
            for col in 0..8u8 {
                match board.owner(Square::new(row, col)) {
                    Some(color) => {
                        if empty_run > 0 {
                            encoded.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        encoded.push(color.to_notation_char());
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                encoded.push_str(&empty_run.to_string());
            }
            encoded
        })
        .collect();

    let side = match board.turn() {
        Color::Black => 'b',
        Color::White => 'w',
    };
    format!("{} {}", rows.join("/"), side)
}

fn parse_placement(board: &mut Board, placement: &str) -> NotationResult<()> {
    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(NotationParseError::InvalidRowCount {
            row_count: rows.len(),
        });
    }

    for (row_index, row) in rows.iter().enumerate() {
        parse_row(board, row, row_index as u8)?;
    }
    Ok(())
}

fn parse_row(board: &mut Board, row: &str, row_index: u8) -> NotationResult<()> {
    let invalid_length = || NotationParseError::InvalidRowLength {
        invalid_row: row.to_string(),
    };
    let mut col = 0u8;

    for c in row.chars() {
        let color = match c {
            'B' | 'b' => Some(Color::Black),
            'W' | 'w' => Some(Color::White),
            '.' => None,
            '1'..='8' => {
                col += c.to_digit(10).unwrap_or(0) as u8;
                if col > 8 {
                    return Err(invalid_length());
                }
                continue;
            }
            _ => {
                return Err(NotationParseError::InvalidDiscCharacter {
                    invalid_character: c,
                })
            }
        };

        if col >= 8 {
            return Err(invalid_length());
        }
        if let Some(color) = color {
            board
                .put(Square::new(row_index, col), color)
                .map_err(|board_error| NotationParseError::ErrorPlacingDisc { board_error })?;
        }
        col += 1;
    }

    if col != 8 {
        return Err(invalid_length());
    }
    Ok(())
}

fn parse_side_to_move(side: &str) -> NotationResult<Color> {
    Color::from_str(side).map_err(|_| NotationParseError::InvalidColor {
        invalid_color: side.to_string(),
    })
}

// used for parsing cli args
impl FromStr for Board {
    type Err = NotationParseError;

    fn from_str(notation: &str) -> Result<Self, Self::Err> {
        parse_position(notation)
    }
}
