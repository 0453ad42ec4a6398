//! Static-weight move ordering for improved alpha-beta pruning.

use std::cmp::Reverse;

use crate::alpha_beta_searcher::{MoveOrderer, Score};
use crate::board::square::Square;
use crate::board::Board;
use crate::evaluate::WeightTable;

/// Orders candidates by descending static weight of their target cell, so
/// corners come first and X-squares last. The sort is stable: equally
/// weighted moves keep the generator's row-major order.
#[derive(Clone, Debug)]
pub struct PositionalMoveOrderer {
    weights: WeightTable,
}

impl PositionalMoveOrderer {
    pub fn new(weights: WeightTable) -> Self {
        Self { weights }
    }

    fn weight(&self, square: Square) -> Score {
        self.weights[square.row() as usize][square.col() as usize]
    }
}

impl MoveOrderer<Board, Square> for PositionalMoveOrderer {
    #[inline]
    fn order_moves(&self, moves: &mut [Square], _state: &Board) {
        moves.sort_by_key(|&square| Reverse(self.weight(square)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::{BASIS_WEIGHTS, GROUP3_WEIGHTS};

    #[test]
    fn test_orders_by_descending_weight() {
        let orderer = PositionalMoveOrderer::new(BASIS_WEIGHTS);
        let mut moves = vec![
            Square::new(1, 1),
            Square::new(3, 3),
            Square::new(0, 2),
            Square::new(7, 7),
            Square::new(2, 2),
        ];
        orderer.order_moves(&mut moves, &Board::starting_position());

        assert_eq!(
            moves,
            vec![
                Square::new(7, 7),
                Square::new(0, 2),
                Square::new(2, 2),
                Square::new(3, 3),
                Square::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_ties_keep_generator_order() {
        let orderer = PositionalMoveOrderer::new(GROUP3_WEIGHTS);
        let mut moves = vec![
            Square::new(2, 3),
            Square::new(3, 2),
            Square::new(4, 5),
            Square::new(5, 4),
        ];
        let original = moves.clone();
        orderer.order_moves(&mut moves, &Board::starting_position());
        assert_eq!(moves, original);
    }
}
