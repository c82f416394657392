use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use super::board::{Board, PlacementError, COLS};
use super::player::Player;
use super::win::is_winning_move;
use crate::ai::{strategy_for, Difficulty, Strategy};
use crate::error::PersistenceError;
use crate::history::{read_log, save_log, Move, MoveLog};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("column {0} is outside the board")]
    InvalidColumn(usize),

    #[error("the game has already been decided")]
    GameAlreadyDecided,
}

impl From<PlacementError> for MoveError {
    fn from(err: PlacementError) -> Self {
        match err {
            PlacementError::ColumnFull(col) => MoveError::ColumnFull(col),
            PlacementError::InvalidColumn(col) => MoveError::InvalidColumn(col),
        }
    }
}

/// Result of replaying a save file into a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Moves placed on the board.
    pub applied: usize,
    /// Lines that were malformed or named a column that was already full.
    pub skipped: usize,
}

/// Session settings, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub difficulty: Difficulty,
    /// Seat of the human player (1 or 2); the computer takes the other.
    pub human_player: u8,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            difficulty: Difficulty::Hard,
            human_player: 1,
        }
    }
}

/// One game: the board, the log of moves that built it, and whether it has
/// been won.
///
/// The board and the log always change together, so `move_log().len()`
/// equals `board().chip_count()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    log: MoveLog,
    outcome: Option<GameOutcome>,
    difficulty: Difficulty,
    human: Player,
}

impl GameSession {
    /// Empty board, human playing as player one.
    pub fn new(difficulty: Difficulty) -> Self {
        GameSession {
            board: Board::new(),
            log: MoveLog::new(),
            outcome: None,
            difficulty,
            human: Player::One,
        }
    }

    /// Session from config. An out-of-range `human_player` falls back to one;
    /// `AppConfig::validate` rejects it earlier.
    pub fn from_config(config: &SessionConfig) -> Self {
        let mut session = Self::new(config.difficulty);
        session.human = Player::from_id(config.human_player).unwrap_or(Player::One);
        session
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn move_log(&self) -> &MoveLog {
        &self.log
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn human_player(&self) -> Player {
        self.human
    }

    pub fn ai_player(&self) -> Player {
        self.human.other()
    }

    /// Winner, or draw once the board fills without one.
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.outcome {
            Some(outcome) => Some(outcome),
            None if self.board.is_full() => Some(GameOutcome::Draw),
            None => None,
        }
    }

    pub fn is_game_won(&self) -> bool {
        matches!(self.outcome, Some(GameOutcome::Winner(_)))
    }

    pub fn is_draw(&self) -> bool {
        self.outcome() == Some(GameOutcome::Draw)
    }

    /// Won or drawn; no further placements are accepted.
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    pub fn is_board_full(&self) -> bool {
        self.board.is_full()
    }

    /// Drop a chip and record it. Does not check for a win; see
    /// [`check_for_win`](Self::check_for_win) and [`play`](Self::play).
    #[instrument(skip(self))]
    pub fn place_chip(&mut self, column: usize, player: Player) -> Result<usize, MoveError> {
        if self.is_terminal() {
            warn!("placement rejected, game already decided");
            return Err(MoveError::GameAlreadyDecided);
        }

        let row = self.board.place_chip(column, player).map_err(|e| {
            warn!(error = %e, "placement rejected");
            MoveError::from(e)
        })?;
        self.log.push(Move::new(player, column));
        debug!(row, moves = self.log.len(), "chip placed");
        Ok(row)
    }

    /// Evaluate the board after `player` dropped into `last_column`. A win is
    /// recorded and stays recorded until [`reset`](Self::reset).
    #[instrument(skip(self))]
    pub fn check_for_win(&mut self, last_column: usize, player: Player) -> Result<bool, MoveError> {
        if last_column >= COLS {
            return Err(MoveError::InvalidColumn(last_column));
        }

        let won = is_winning_move(&self.board, last_column, player);
        if won && !self.is_game_won() {
            info!(winner = %player, moves = self.log.len(), "game won");
            debug!(board = %self.board, "final position");
            self.outcome = Some(GameOutcome::Winner(player));
        }
        Ok(won)
    }

    /// Place a chip and settle the game: returns the outcome if this move
    /// ended it.
    pub fn play(&mut self, column: usize, player: Player) -> Result<Option<GameOutcome>, MoveError> {
        self.place_chip(column, player)?;
        if self.check_for_win(column, player)? {
            return Ok(Some(GameOutcome::Winner(player)));
        }
        if self.is_draw() {
            info!(moves = self.log.len(), "game drawn");
            return Ok(Some(GameOutcome::Draw));
        }
        Ok(None)
    }

    /// Column the computer player would choose at the session's difficulty.
    pub fn choose_opponent_move(&self) -> usize {
        let mut strategy = strategy_for(self.difficulty);
        self.choose_opponent_move_with(&mut *strategy)
    }

    /// Column chosen by `strategy` for the computer player.
    pub fn choose_opponent_move_with<S: Strategy + ?Sized>(&self, strategy: &mut S) -> usize {
        let col = strategy.select_column(&self.board, self.ai_player());
        debug!(strategy = strategy.name(), column = col, "opponent move chosen");
        col
    }

    /// Clear the board, the log and the outcome. Difficulty and seats stay.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.log.clear();
        self.outcome = None;
        info!("session reset");
    }

    /// Write the move log to `<base>_<timestamp>.txt` and return that path.
    pub fn save(&self, base: impl AsRef<Path>) -> Result<PathBuf, PersistenceError> {
        save_log(&self.log, base.as_ref())
    }

    /// Replace the board and log with the moves stored at `path`.
    ///
    /// Moves are replayed without win checks onto a fresh board; the session
    /// is only touched once the file has been read and replayed. Malformed
    /// lines and moves into full columns are skipped and counted.
    #[instrument(skip_all)]
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<LoadReport, PersistenceError> {
        let path = path.as_ref();
        let decoded = read_log(path)?;

        let mut board = Board::new();
        let mut log = MoveLog::new();
        let mut report = LoadReport {
            applied: 0,
            skipped: decoded.skipped,
        };
        for mv in decoded.moves {
            match board.place_chip(mv.column, mv.player) {
                Ok(_) => {
                    log.push(mv);
                    report.applied += 1;
                }
                Err(e) => {
                    warn!(error = %e, "skipping move that no longer fits");
                    report.skipped += 1;
                }
            }
        }

        self.board = board;
        self.log = log;
        self.outcome = None;
        info!(
            path = %path.display(),
            applied = report.applied,
            skipped = report.skipped,
            "session loaded"
        );
        Ok(report)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}
