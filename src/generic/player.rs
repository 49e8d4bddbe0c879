use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The two sides of a game.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl Player {
    /// Both players in turn order; the first one opens every game.
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    pub fn letter(&self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }

    /// The opponent, who moves next after a non-final move.
    pub fn other(&self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}
