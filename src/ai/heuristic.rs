use tracing::debug;

use crate::game::{is_winning_move, Board, Player, COLS};

use super::strategy::Strategy;

/// Column order tried when there is nothing to win or block, centre first.
pub const PREFERRED_COLUMNS: [usize; COLS] = [3, 2, 4, 1, 5, 0, 6];

/// One-ply lookahead: take a winning column, else block the opponent's
/// winning column, else play the most central open column.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicStrategy;

impl HeuristicStrategy {
    /// First column (in index order) where `player` would win immediately.
    pub fn winning_column(board: &Board, player: Player) -> Option<usize> {
        (0..COLS).find(|&col| {
            board
                .with_chip(col, player)
                .is_some_and(|next| is_winning_move(&next, col, player))
        })
    }

    /// First open column from [`PREFERRED_COLUMNS`].
    pub fn preferred_column(board: &Board) -> Option<usize> {
        PREFERRED_COLUMNS
            .into_iter()
            .find(|&col| !board.is_column_full(col))
    }
}

impl Strategy for HeuristicStrategy {
    fn select_column(&mut self, board: &Board, me: Player) -> usize {
        if let Some(col) = Self::winning_column(board, me) {
            debug!(player = %me, column = col, "taking winning column");
            return col;
        }
        if let Some(col) = Self::winning_column(board, me.other()) {
            debug!(player = %me, column = col, "blocking opponent");
            return col;
        }
        let col = Self::preferred_column(board).unwrap_or(0);
        debug!(player = %me, column = col, "preferred column");
        col
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ROWS;

    const AI: Player = Player::Two;
    const HUMAN: Player = Player::One;

    fn board_from(moves: &[(usize, Player)]) -> Board {
        let mut board = Board::new();
        for &(col, player) in moves {
            board.place_chip(col, player).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_prefers_centre() {
        let board = Board::new();
        assert_eq!(HeuristicStrategy.select_column(&board, AI), 3);
    }

    #[test]
    fn test_preference_order_skips_full_columns() {
        let mut board = Board::new();
        for col in [3, 2, 4] {
            for i in 0..ROWS {
                // Alternate owners so no column holds a vertical threat.
                let player = if (i / 2) % 2 == 0 { AI } else { HUMAN };
                board.place_chip(col, player).unwrap();
            }
        }
        assert_eq!(HeuristicStrategy::preferred_column(&board), Some(1));
    }

    #[test]
    fn test_win_takes_priority_over_block() {
        // Human threatens column 0 vertically; AI completes the bottom row at
        // column 2 (cols 3, 4, 5 already AI).
        let board = board_from(&[
            (0, HUMAN),
            (0, HUMAN),
            (0, HUMAN),
            (3, AI),
            (4, AI),
            (5, AI),
        ]);
        let before = board;

        assert_eq!(HeuristicStrategy.select_column(&board, AI), 2);
        assert_eq!(board, before);
    }

    #[test]
    fn test_first_winning_column_in_index_order() {
        // AI wins at either column 2 or column 6.
        let board = board_from(&[(3, AI), (4, AI), (5, AI)]);
        assert_eq!(HeuristicStrategy::winning_column(&board, AI), Some(2));
    }

    #[test]
    fn test_blocks_opponent_threat() {
        let board = board_from(&[
            (0, HUMAN),
            (1, HUMAN),
            (2, HUMAN),
            (6, AI),
            (6, AI),
        ]);
        assert_eq!(HeuristicStrategy::winning_column(&board, AI), None);
        assert_eq!(HeuristicStrategy.select_column(&board, AI), 3);
    }

    #[test]
    fn test_blocks_vertical_threat() {
        let board = board_from(&[(5, HUMAN), (5, HUMAN), (5, HUMAN), (3, AI)]);
        assert_eq!(HeuristicStrategy.select_column(&board, AI), 5);
    }

    #[test]
    fn test_full_board_falls_back_to_zero() {
        let mut board = Board::new();
        for col in 0..COLS {
            for row in 0..ROWS {
                let player = if ((col / 2) + row) % 2 == 0 { HUMAN } else { AI };
                board.place_chip(col, player).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(HeuristicStrategy.select_column(&board, AI), 0);
    }

    #[test]
    fn test_lookahead_never_mutates_board() {
        let board = board_from(&[(1, HUMAN), (2, AI), (2, HUMAN), (3, AI)]);
        let before = board;
        let mut strategy = HeuristicStrategy;
        for me in [AI, HUMAN] {
            strategy.select_column(&board, me);
            assert_eq!(board, before);
        }
    }
}
