//! Four-in-a-row detection.

use tracing::instrument;

use super::board::{Board, COLS, ROWS};
use super::player::Player;

/// Chips in a line needed to win.
pub const CONNECT: usize = 4;

/// Check whether `player` has four in a row after dropping a chip into
/// `last_column`.
///
/// The vertical check only looks at `last_column`; the horizontal and
/// diagonal checks scan the whole board.
#[instrument(level = "trace", skip(board))]
pub fn is_winning_move(board: &Board, last_column: usize, player: Player) -> bool {
    check_vertical(board, last_column, player)
        || check_horizontal(board, player)
        || check_diagonal(board, player, 1)
        || check_diagonal(board, player, -1)
}

/// Run of `player` chips from the top of the column downwards
fn check_vertical(board: &Board, col: usize, player: Player) -> bool {
    let height = board.height(col);
    if height < CONNECT {
        return false;
    }

    let run = (0..height)
        .rev()
        .take_while(|&row| board.chip_at(col, row) == Some(player))
        .count();
    run >= CONNECT
}

fn check_horizontal(board: &Board, player: Player) -> bool {
    for row in 0..ROWS {
        let mut count = 0;
        for col in 0..COLS {
            if board.chip_at(col, row) == Some(player) {
                count += 1;
                if count >= CONNECT {
                    return true;
                }
            } else {
                count = 0;
            }
        }
    }
    false
}

/// Diagonal walks of `CONNECT` cells from every start. `direction` is +1 for
/// up-right (/) and -1 for up-left (\).
fn check_diagonal(board: &Board, player: Player, direction: isize) -> bool {
    for col in 0..COLS {
        for row in 0..ROWS {
            let complete = (0..CONNECT).all(|i| {
                let r = row + i;
                let c = col as isize + i as isize * direction;
                if r >= ROWS || c < 0 || c >= COLS as isize {
                    return false;
                }
                board.chip_at(c as usize, r) == Some(player)
            });
            if complete {
                return true;
            }
        }
    }
    false
}
