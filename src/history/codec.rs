//! Line-based move-log format: one `Player <p>, Column <c>` line per move.

use tracing::warn;

use super::log::{Move, MoveLog};
use crate::game::{Player, COLS};

/// Moves recovered from a saved file, plus how many lines were rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedLog {
    pub moves: Vec<Move>,
    pub skipped: usize,
}

/// Render a log in file order, every line newline-terminated.
pub fn encode(log: &MoveLog) -> String {
    let mut out = String::with_capacity(log.len() * 20);
    for mv in log {
        out.push_str(&encode_move(mv));
        out.push('\n');
    }
    out
}

pub fn encode_move(mv: &Move) -> String {
    format!("Player {}, Column {}", mv.player.id(), mv.column)
}

/// Parse a saved log. Malformed lines are skipped and counted; blank lines
/// are ignored.
pub fn decode(text: &str) -> DecodedLog {
    let mut decoded = DecodedLog::default();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        match decode_move(line) {
            Some(mv) => decoded.moves.push(mv),
            None => {
                warn!(line = index + 1, content = line, "skipping malformed move line");
                decoded.skipped += 1;
            }
        }
    }
    decoded
}

/// Parse one `Player <p>, Column <c>` line. `None` if the shape, the player
/// id, or the column is wrong.
pub fn decode_move(line: &str) -> Option<Move> {
    let mut fields = line.split(", ");
    let (player_field, column_field) = match (fields.next(), fields.next(), fields.next()) {
        (Some(p), Some(c), None) => (p, c),
        _ => return None,
    };

    let id: u8 = player_field.strip_prefix("Player ")?.parse().ok()?;
    let column: usize = column_field.strip_prefix("Column ")?.parse().ok()?;

    let player = Player::from_id(id)?;
    if column >= COLS {
        return None;
    }
    Some(Move::new(player, column))
}
