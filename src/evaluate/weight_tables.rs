use crate::alpha_beta_searcher::Score;

/// Static per-cell weights, indexed `[row][col]`.
pub type WeightTable = [[Score; 8]; 8];

// Corners are worth the most; the cells diagonally next to them (X-squares)
// and orthogonally next to them (C-squares) hand the corner to the opponent.
// Both tables are symmetric under every rotation and reflection of the board.

pub const BASIS_WEIGHTS: WeightTable = [
    [100, -5, 20, 5, 5, 20, -5, 100],
    [-5, -20, 1, 1, 1, 1, -20, -5],
    [20, 1, 10, 2, 2, 10, 1, 20],
    [5, 1, 2, 0, 0, 2, 1, 5],
    [5, 1, 2, 0, 0, 2, 1, 5],
    [20, 1, 10, 2, 2, 10, 1, 20],
    [-5, -20, 1, 1, 1, 1, -20, -5],
    [100, -5, 20, 5, 5, 20, -5, 100],
];

pub const GROUP3_WEIGHTS: WeightTable = [
    [100, -20, 10, 2, 2, 10, -20, 100],
    [-20, -20, 1, 1, 1, 1, -20, -20],
    [10, 1, 10, 2, 2, 10, 1, 10],
    [2, 1, 2, 0, 0, 2, 1, 2],
    [2, 1, 2, 0, 0, 2, 1, 2],
    [10, 1, 10, 2, 2, 10, 1, 10],
    [-20, -20, 1, 1, 1, 1, -20, -20],
    [100, -20, 10, 2, 2, 10, -20, 100],
];
