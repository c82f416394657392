use crate::game::Player;

/// A single chip placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub player: Player,
    pub column: usize,
}

impl Move {
    pub fn new(player: Player, column: usize) -> Self {
        Move { player, column }
    }
}

/// Chronological record of every successful placement in a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveLog {
    moves: Vec<Move>,
}

impl MoveLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }
}

impl<'a> IntoIterator for &'a MoveLog {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl FromIterator<Move> for MoveLog {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveLog {
            moves: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_keeps_insertion_order() {
        let mut log = MoveLog::new();
        log.push(Move::new(Player::One, 3));
        log.push(Move::new(Player::Two, 0));
        log.push(Move::new(Player::One, 3));

        let columns: Vec<usize> = log.iter().map(|m| m.column).collect();
        assert_eq!(columns, vec![3, 0, 3]);
    }

    #[test]
    fn test_clear_empties_log() {
        let mut log: MoveLog = [Move::new(Player::One, 1), Move::new(Player::Two, 2)]
            .into_iter()
            .collect();
        assert_eq!(log.len(), 2);

        log.clear();
        assert!(log.is_empty());
    }
}
