use thiserror::Error;

use super::square::Square;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Cannot put a disc on a square that is already occupied: {square}")]
    SquareOccupiedBoardPutError { square: Square },
    #[error("Illegal move {square}: it does not outflank any opposing disc")]
    IllegalMoveError { square: Square },
    #[error("Invalid square notation: {notation:?}")]
    InvalidSquareNotation { notation: String },
}
