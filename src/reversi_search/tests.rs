//! Reversi positions with hand-computed search outcomes.

use crate::alpha_beta_searcher::{SearchContext, SearchError, MAX_WIN};
use crate::board::color::Color;
use crate::board::square::Square;
use crate::board::Board;
use crate::game::benchmark::random_positions;
use crate::reversi_position;

use super::*;

/// Black owns every cell except an empty b2 and a white c3; b2 takes the
/// last disc and fills the board.
fn one_move_from_wipeout() -> Board {
    let mut board = Board::new();
    for square in Square::all() {
        if square == Square::new(1, 1) {
            continue;
        }
        let color = if square == Square::new(2, 2) {
            Color::White
        } else {
            Color::Black
        };
        board.put(square, color).unwrap();
    }
    board
}

fn corner_position() -> Board {
    reversi_position! {
        .....BW.
        ........
        ........
        ........
        ........
        ..BW....
        ........
        ........
    }
}

#[test]
fn test_opening_move_at_depth_1() {
    let config = StrategyConfig::basis().with_max_depth(1);
    let board = Board::starting_position();

    let mut context = SearchContext::new(1);
    let result = search_root(&mut context, &board, &config).unwrap();

    // every opening move scores 2 positional minus 3 material; the first wins
    assert_eq!(result.score(), -1);
    assert_eq!(result.best_move(), Some(&Square::new(2, 3)));
    assert_eq!(context.searched_position_count(), 5);
}

#[test]
fn test_ordered_opening_keeps_first_move_on_ties() {
    let config = StrategyConfig::group3().with_max_depth(1);
    assert_eq!(
        choose_move(&config, &Board::starting_position()),
        Ok(Square::new(2, 3))
    );
}

#[test]
fn test_corner_ends_scan() {
    let board = corner_position();
    assert_eq!(
        board.legal_moves().as_slice(),
        &[Square::new(0, 7), Square::new(5, 4)]
    );

    let config = StrategyConfig::basis().with_max_depth(1);
    let mut context = SearchContext::new(1);
    let result = search_root(&mut context, &board, &config).unwrap();

    assert_eq!(result.best_move(), Some(&Square::new(0, 7)));
    assert_eq!(result.score(), 120);
    assert_eq!(context.searched_position_count(), 2);
    assert_eq!(context.dominant_move_count(), 1);
}

#[test]
fn test_corner_is_taken_even_when_found_later() {
    // the corner is last in board order
    let board = reversi_position! {
        ........
        ..BW....
        ........
        ........
        ........
        ........
        ........
        .....BW.
    };
    assert_eq!(
        board.legal_moves().as_slice(),
        &[Square::new(1, 4), Square::new(7, 7)]
    );

    let config = StrategyConfig::basis().with_max_depth(1);
    assert_eq!(choose_move(&config, &board), Ok(Square::new(7, 7)));

    let ordered = config.with_move_ordering(true);
    let mut context = SearchContext::new(1);
    let result = search_root(&mut context, &board, &ordered).unwrap();
    assert_eq!(result.best_move(), Some(&Square::new(7, 7)));
    assert_eq!(context.searched_position_count(), 2);
}

#[test]
fn test_finds_wipeout() {
    let board = one_move_from_wipeout();
    assert_eq!(board.legal_moves().as_slice(), &[Square::new(1, 1)]);

    let config = StrategyConfig::basis();
    let mut context = SearchContext::new(config.max_depth());
    let result = search_root(&mut context, &board, &config).unwrap();
    assert_eq!(result.best_move(), Some(&Square::new(1, 1)));
    assert_eq!(result.score(), MAX_WIN);

    let after = board.apply_move(Square::new(1, 1)).unwrap();
    assert_eq!(evaluate_position(&config, &after), MAX_WIN);
}

#[test]
fn test_late_position_evaluation() {
    let board = reversi_position! {
        BBBBBBBB
        BBBBBBBB
        BBBBBBBB
        WBBBBBBB
        ........
        WWWWWWWW
        WWWWWWWW
        WWWWWWWW
    };
    let config = StrategyConfig::basis();
    assert_eq!(evaluate_position(&config, &board), 12);
    assert_eq!(
        evaluate_position(&config.with_material_scale(2), &board),
        18
    );
    assert_eq!(
        evaluate_position(&config.with_phase_threshold(60), &board),
        0
    );
}

#[test]
fn test_zero_depth_is_rejected_before_search() {
    let config = StrategyConfig::basis().with_max_depth(0);
    assert_eq!(
        choose_move(&config, &Board::starting_position()),
        Err(SearchError::DepthTooLow)
    );
    // a finished game would otherwise report that no move exists
    assert_eq!(
        choose_move(&config, &Board::new()),
        Err(SearchError::DepthTooLow)
    );
}

#[test]
fn test_no_move_available() {
    let config = StrategyConfig::basis();
    assert_eq!(
        choose_move(&config, &Board::new()),
        Err(SearchError::NoAvailableMoves)
    );

    let mut white_without_reply = reversi_position! {
        BW......
        ........
        ........
        ........
        ........
        ........
        ........
        ........
    };
    white_without_reply.set_turn(Color::White);
    assert!(!white_without_reply.is_terminal());
    assert_eq!(
        choose_move(&config, &white_without_reply),
        Err(SearchError::NoAvailableMoves)
    );
}

#[test]
fn test_chosen_moves_are_legal() {
    let boards = random_positions(12, 42).unwrap();
    for config in [StrategyConfig::basis(), StrategyConfig::group3()].iter() {
        for board in boards.iter() {
            let best_move = choose_move(config, board).unwrap();
            assert!(
                board.is_legal_move(best_move),
                "{} is not legal in\n{}",
                best_move,
                board
            );
        }
    }
}

#[test]
fn test_parallel_matches_sequential() {
    let boards = random_positions(8, 7).unwrap();
    let config = StrategyConfig::group3().with_max_depth(3);

    let sequential: Vec<_> = boards
        .iter()
        .map(|board| choose_move(&config, board))
        .collect();
    assert_eq!(choose_moves_parallel(&config, &boards), sequential);
}

#[test]
fn test_search_depth_comes_from_config() {
    let board = Board::starting_position();
    let config = StrategyConfig::basis().with_max_depth(1);

    let mut context = SearchContext::new(4);
    let best_move = search_best_move(&mut context, &board, &config).unwrap();
    assert_eq!(best_move, Square::new(2, 3));
    assert_eq!(context.search_depth(), 1);
    assert_eq!(context.searched_position_count(), 5);
    assert_eq!(context.last_score(), Some(-1));

    let mut context = SearchContext::new(3);
    assert_eq!(
        search_best_move(&mut context, &board, &config.with_max_depth(0)),
        Err(SearchError::DepthTooLow)
    );
}

/// True when a corner is a legal move anywhere within `plies` moves.
fn corner_within(board: &Board, plies: u8) -> bool {
    if plies == 0 {
        return false;
    }
    board.legal_moves().iter().any(|&square| {
        square.is_corner()
            || board
                .apply_move(square)
                .map_or(false, |next| corner_within(&next, plies - 1))
    })
}

#[test]
fn test_move_ordering_keeps_backed_up_score() {
    let ordered = StrategyConfig::group3();
    let unordered = ordered.with_move_ordering(false);
    let mut compared = 0;

    for board in random_positions(24, 3).unwrap().iter() {
        // a corner ends the scan early, so ordering could change the result
        if corner_within(board, ordered.max_depth()) {
            continue;
        }

        let mut context = SearchContext::new(ordered.max_depth());
        let ordered_result = search_root(&mut context, board, &ordered).unwrap();
        let unordered_result = search_root(&mut context, board, &unordered).unwrap();
        assert_eq!(ordered_result.score(), unordered_result.score(), "{}", board);
        compared += 1;
    }

    assert!(compared > 0);
}
